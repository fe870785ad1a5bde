//! # Contactbook Architecture
//!
//! Contactbook is a small contact manager whose state is a single mapping
//! from contact name to phone, email and address, kept in one JSON file.
//! The library holds every rule; the binary is only a presentation layer.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation (cli/, wired by main.rs)                      │
//! │  - Parses arguments, prompts, renders the contact table     │
//! │  - Re-renders from list_contacts() after each mutation      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Wraps each store operation, builds user messages         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Contact Store (book.rs)                                    │
//! │  - Owns the mapping, enforces name rules, saves on change   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the
//! process. Diagnostics go through `tracing`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`book`]: The in-memory contact store and its invariants
//! - [`commands`]: One module per operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Contact`, `ContactDetails`, `ContactMap`, `Scope`
//! - [`config`]: Per-scope configuration
//! - [`init`]: Resolves scope directories and opens the API
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
