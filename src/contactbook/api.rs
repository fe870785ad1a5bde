//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point a user interface talks to.
//!
//! - **Dispatches** to the matching command function
//! - **Returns structured types** (`Result<CmdResult>`)
//! - Does no printing, prompting, or formatting
//!
//! `ContactApi<S: DataStore>` is generic over the storage backend:
//! - Production: `ContactApi<FileStore>`
//! - Testing: `ContactApi<InMemoryStore>`

use crate::book::ContactStore;
use crate::commands;
use crate::error::Result;
use crate::model::Scope;
use crate::store::{DataStore, LoadStatus};

/// The main API facade for contact operations.
pub struct ContactApi<S: DataStore> {
    store: ContactStore<S>,
    paths: commands::ContactPaths,
}

impl<S: DataStore> ContactApi<S> {
    pub fn new(store: ContactStore<S>, paths: commands::ContactPaths) -> Self {
        Self { store, paths }
    }

    /// Opens the backend and wraps it.
    pub fn open(backend: S, paths: commands::ContactPaths) -> Self {
        Self::new(ContactStore::open(backend), paths)
    }

    pub fn list_contacts(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        email: &str,
        address: &str,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name, phone, email, address)
    }

    pub fn find_contact(&self, name: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, name)
    }

    pub fn update_contact(
        &mut self,
        old_name: &str,
        new_name: &str,
        phone: &str,
        email: &str,
        address: &str,
    ) -> Result<commands::CmdResult> {
        let update = commands::ContactUpdate::new(old_name, new_name, phone, email, address);
        commands::update::run(&mut self.store, &update)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, name)
    }

    /// How the contacts were obtained when the store was opened.
    pub fn load_status(&self) -> &LoadStatus {
        self.store.load_status()
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn paths(&self) -> &commands::ContactPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ContactPaths, ContactUpdate, MessageLevel};
