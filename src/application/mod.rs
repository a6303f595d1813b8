//! Application layer - Use cases and orchestration

pub mod repository;

pub use repository::NoteRepository;
