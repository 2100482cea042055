//! Storage backend implementations and decorators.
//!
//! Backends implement `polyglot_core::backend::Backend`. The caching
//! decorator in [`cached`] wraps any of them.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): Hash-column style backend kept in memory

pub mod cached;

#[cfg(feature = "inmemory")]
pub mod inmemory;

pub use cached::{CachingBackend, ClearCache};

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryBackend;
