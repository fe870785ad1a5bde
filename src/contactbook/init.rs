use crate::api::{ContactApi, ContactPaths};
use crate::config::ContactConfig;
use crate::model::Scope;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct ContactContext {
    pub api: ContactApi<FileStore>,
    pub scope: Scope,
    pub config: ContactConfig,
    /// Location of the contacts document in use.
    pub data_file: PathBuf,
}

/// Per-user data directory, or `<cwd>/.contactbook` when the platform has none.
pub fn global_data_dir(cwd: &Path) -> PathBuf {
    ProjectDirs::from("com", "contactbook", "contactbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| cwd.join(".contactbook"))
}

pub fn initialize(cwd: &Path, use_global: bool) -> ContactContext {
    initialize_with(cwd, global_data_dir(cwd), use_global)
}

/// Builds the context with an explicit global directory.
pub fn initialize_with(cwd: &Path, global_dir: PathBuf, use_global: bool) -> ContactContext {
    let scope = if use_global {
        Scope::Global
    } else {
        Scope::Project
    };

    let scope_dir = match scope {
        Scope::Project => cwd.to_path_buf(),
        Scope::Global => global_dir.clone(),
    };
    let config = ContactConfig::load(&scope_dir).unwrap_or_else(|e| {
        tracing::warn!(dir = %scope_dir.display(), error = %e, "ignoring unreadable config");
        ContactConfig::default()
    });

    let store = FileStore::in_dir(&scope_dir, &config.file_name);
    let data_file = store.path().to_path_buf();
    let paths = ContactPaths {
        project: Some(cwd.to_path_buf()),
        global: global_dir,
    };
    let api = ContactApi::open(store, paths);

    ContactContext {
        api,
        scope,
        config,
        data_file,
    }
}
