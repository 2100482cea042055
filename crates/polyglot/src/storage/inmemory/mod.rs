//! In-memory backend implementation.

mod backend;

pub use backend::InMemoryBackend;
