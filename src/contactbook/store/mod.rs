//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between the contact store and durable
//! storage. A backend only knows how to read the whole mapping and how to
//! replace it; all contact rules live in [`crate::book`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON document on disk
//! - [`memory::InMemoryStore`]: no persistence, used by tests
//!
//! ## Storage Format
//!
//! ```text
//! {
//!     "Alice Smith": {
//!         "phone": "555-1234",
//!         "email": "alice@example.com",
//!         "address": "1 Main St"
//!     }
//! }
//! ```
//!
//! Saves always rewrite the whole document.

use crate::error::Result;
use crate::model::ContactMap;
use std::fmt;

pub mod fs;
pub mod memory;

/// How a load went. Every variant still yields a usable mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// The document existed and parsed.
    Loaded { count: usize },
    /// There was nothing to load.
    Missing,
    /// The document existed but could not be read or parsed; started empty.
    Recovered { reason: String },
}

impl LoadStatus {
    pub fn is_recovered(&self) -> bool {
        matches!(self, LoadStatus::Recovered { .. })
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadStatus::Loaded { count } => write!(f, "loaded {} contact(s)", count),
            LoadStatus::Missing => write!(f, "no contacts file yet"),
            LoadStatus::Recovered { reason } => {
                write!(f, "contacts file was unreadable, starting empty ({})", reason)
            }
        }
    }
}

/// Result of [`DataStore::load`]: the mapping plus how it was obtained.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub contacts: ContactMap,
    pub status: LoadStatus,
}

impl LoadOutcome {
    pub fn loaded(contacts: ContactMap) -> Self {
        let count = contacts.len();
        Self {
            contacts,
            status: LoadStatus::Loaded { count },
        }
    }

    pub fn missing() -> Self {
        Self {
            contacts: ContactMap::new(),
            status: LoadStatus::Missing,
        }
    }

    pub fn recovered(reason: impl Into<String>) -> Self {
        Self {
            contacts: ContactMap::new(),
            status: LoadStatus::Recovered {
                reason: reason.into(),
            },
        }
    }
}

/// Abstract interface for contact persistence.
pub trait DataStore {
    /// Read the full mapping. Never fails: unreadable data becomes an
    /// empty mapping with a [`LoadStatus::Recovered`] status.
    fn load(&self) -> LoadOutcome;

    /// Replace the persisted mapping with `contacts`.
    fn save(&mut self, contacts: &ContactMap) -> Result<()>;
}
