use super::{DataStore, LoadOutcome};
use crate::error::{ContactError, Result};
use crate::model::ContactMap;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

/// Production storage: one JSON document at a fixed path.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store rooted in `dir`, using `file_name` for the document.
    pub fn in_dir(dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self::new(dir.as_ref().join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ContactError::Persistence)?;
            }
        }
        Ok(())
    }
}

/// Serializes the mapping with a four-space indent.
pub fn to_json(contacts: &ContactMap) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    contacts
        .serialize(&mut ser)
        .map_err(ContactError::Serialization)?;
    Ok(buf)
}

/// Parses a document. Blank input is an empty mapping.
///
/// A name that is empty after trimming makes the whole document invalid.
pub fn from_json(content: &str) -> Result<ContactMap> {
    if content.trim().is_empty() {
        return Ok(ContactMap::new());
    }
    let contacts: ContactMap =
        serde_json::from_str(content).map_err(ContactError::Serialization)?;
    if let Some(name) = contacts.keys().find(|name| name.trim().is_empty()) {
        return Err(ContactError::Serialization(serde::de::Error::custom(
            format!("blank contact name {:?}", name),
        )));
    }
    Ok(contacts)
}

impl DataStore for FileStore {
    fn load(&self) -> LoadOutcome {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no contacts file");
                return LoadOutcome::missing();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "contacts file unreadable");
                return LoadOutcome::recovered(e.to_string());
            }
        };

        match from_json(&content) {
            Ok(contacts) => {
                tracing::debug!(path = %self.path.display(), count = contacts.len(), "loaded contacts");
                LoadOutcome::loaded(contacts)
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "contacts file malformed");
                LoadOutcome::recovered(e.to_string())
            }
        }
    }

    fn save(&mut self, contacts: &ContactMap) -> Result<()> {
        self.ensure_parent()?;
        let content = to_json(contacts)?;
        fs::write(&self.path, content).map_err(ContactError::Persistence)?;
        tracing::debug!(path = %self.path.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }
}
