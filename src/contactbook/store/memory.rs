use super::{DataStore, LoadOutcome, LoadStatus};
use crate::error::{ContactError, Result};
use crate::model::ContactMap;
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: Option<ContactMap>,
    recovered: Option<String>,
    fail_saves: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose next load reports a recovered, corrupt document.
    pub fn corrupt(reason: impl Into<String>) -> Self {
        Self {
            recovered: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Make every subsequent save fail with an I/O error.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// The mapping as of the last successful save.
    pub fn saved(&self) -> Option<&ContactMap> {
        self.saved.as_ref()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> LoadOutcome {
        if let Some(reason) = &self.recovered {
            return LoadOutcome::recovered(reason.clone());
        }
        match &self.saved {
            Some(contacts) => LoadOutcome::loaded(contacts.clone()),
            None => LoadOutcome {
                contacts: ContactMap::new(),
                status: LoadStatus::Missing,
            },
        }
    }

    fn save(&mut self, contacts: &ContactMap) -> Result<()> {
        if self.fail_saves {
            return Err(ContactError::Persistence(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "store is read-only",
            )));
        }
        self.saved = Some(contacts.clone());
        self.recovered = None;
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ContactDetails;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            let mut contacts = self.store.load().contacts;
            for i in 0..count {
                contacts.insert(
                    format!("Contact {}", i + 1),
                    ContactDetails::new(
                        format!("555-000{}", i + 1),
                        format!("contact{}@example.com", i + 1),
                        format!("{} Main St", i + 1),
                    ),
                );
            }
            self.store.save(&contacts).unwrap();
            self.store.saves = 0;
            self
        }

        pub fn with_contact(mut self, name: &str, phone: &str, email: &str, address: &str) -> Self {
            let mut contacts = self.store.load().contacts;
            contacts.insert(name.to_string(), ContactDetails::new(phone, email, address));
            self.store.save(&contacts).unwrap();
            self.store.saves = 0;
            self
        }
    }
}
