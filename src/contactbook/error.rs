use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Contact '{0}' already exists")]
    DuplicateName(String),

    #[error("No contact found with name '{0}'")]
    NotFound(String),

    #[error("Persistence error: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ContactError>;
