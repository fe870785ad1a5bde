use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The persisted mapping: contact name to its details.
///
/// A `BTreeMap` keeps listings and the written document ordered by name.
pub type ContactMap = BTreeMap<String, ContactDetails>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// Everything stored for a contact except its name, which is the map key.
///
/// Missing fields in the file load as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

impl ContactDetails {
    /// Builds details from raw user input, trimming each field.
    pub fn new(phone: impl AsRef<str>, email: impl AsRef<str>, address: impl AsRef<str>) -> Self {
        Self {
            phone: phone.as_ref().trim().to_string(),
            email: email.as_ref().trim().to_string(),
            address: address.as_ref().trim().to_string(),
        }
    }
}

/// A name paired with its details, as handed to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub details: ContactDetails,
}

impl Contact {
    pub fn new(name: impl Into<String>, details: ContactDetails) -> Self {
        Self {
            name: name.into(),
            details,
        }
    }
}

/// Returns `value`, or `placeholder` when the value is empty.
pub fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}
