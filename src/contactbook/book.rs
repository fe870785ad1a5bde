//! # Contact Store
//!
//! [`ContactStore`] owns the name → details mapping for the life of the
//! process. It is loaded once from a [`DataStore`] and written back in full
//! after every successful mutation.
//!
//! Each operation validates before it mutates, so a rejected call leaves
//! the mapping untouched. A failed save is returned to the caller; the
//! in-memory change is kept and will be written by the next save.
//!
//! ## Rename collisions
//!
//! [`ContactStore::update`] with a new name that already belongs to a third
//! contact replaces that contact. This is the established behavior; the
//! returned [`UpdateOutcome`] reports it so callers can warn or guard.

use crate::error::{ContactError, Result};
use crate::model::{Contact, ContactDetails, ContactMap};
use crate::store::{DataStore, LoadStatus};

/// What an update did besides replacing the details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub contact: Contact,
    /// The entry moved from `old_name` to a different key.
    pub renamed: bool,
    /// The new key already held another contact, which was replaced.
    pub overwrote: Option<ContactDetails>,
}

pub struct ContactStore<S: DataStore> {
    backend: S,
    contacts: ContactMap,
    status: LoadStatus,
}

impl<S: DataStore> ContactStore<S> {
    /// Loads the mapping from `backend`. Never fails; see [`LoadStatus`].
    pub fn open(backend: S) -> Self {
        let outcome = backend.load();
        Self {
            backend,
            contacts: outcome.contacts,
            status: outcome.status,
        }
    }

    /// Re-reads the backend, discarding the in-memory mapping.
    pub fn load(&mut self) -> &LoadStatus {
        let outcome = self.backend.load();
        self.contacts = outcome.contacts;
        self.status = outcome.status;
        &self.status
    }

    /// Writes the whole mapping to the backend.
    pub fn save(&mut self) -> Result<()> {
        self.backend.save(&self.contacts)
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn add(&mut self, name: &str, details: ContactDetails) -> Result<Contact> {
        let name = required_name(name)?;
        if self.contacts.contains_key(name) {
            return Err(ContactError::DuplicateName(name.to_string()));
        }

        self.contacts.insert(name.to_string(), details.clone());
        self.save()?;
        Ok(Contact::new(name, details))
    }

    /// Exact, case-sensitive lookup.
    pub fn search(&self, name: &str) -> Result<Contact> {
        self.contacts
            .get(name)
            .map(|details| Contact::new(name, details.clone()))
            .ok_or_else(|| ContactError::NotFound(name.to_string()))
    }

    /// Replaces all detail fields of `old_name` and optionally renames it.
    pub fn update(
        &mut self,
        old_name: &str,
        new_name: &str,
        details: ContactDetails,
    ) -> Result<UpdateOutcome> {
        let new_name = required_name(new_name)?;
        if !self.contacts.contains_key(old_name) {
            return Err(ContactError::NotFound(old_name.to_string()));
        }

        let renamed = new_name != old_name;
        if renamed {
            self.contacts.remove(old_name);
        }
        let previous = self.contacts.insert(new_name.to_string(), details.clone());
        let overwrote = if renamed { previous } else { None };
        if overwrote.is_some() {
            tracing::debug!(old = old_name, new = new_name, "rename replaced an existing contact");
        }

        self.save()?;
        Ok(UpdateOutcome {
            contact: Contact::new(new_name, details),
            renamed,
            overwrote,
        })
    }

    pub fn delete(&mut self, name: &str) -> Result<Contact> {
        let details = self
            .contacts
            .remove(name)
            .ok_or_else(|| ContactError::NotFound(name.to_string()))?;
        self.save()?;
        Ok(Contact::new(name, details))
    }

    /// A snapshot of the full mapping.
    pub fn list(&self) -> ContactMap {
        self.contacts.clone()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

fn required_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ContactError::EmptyName);
    }
    Ok(name)
}
