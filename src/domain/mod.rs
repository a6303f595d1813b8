//! Domain layer - Business logic and domain models

pub mod note;

pub use note::{sort_by_recency, Note};
