//! anotis - Terminal note-keeping application
//!
//! Persists short text notes as individual plain-text files and keeps an
//! in-memory index of them, with create, read, update, delete and
//! list-by-recency operations.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::AnotisError;
