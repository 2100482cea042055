//! Cache container implementations.
//!
//! The default container, `HashMapCache`, lives in `polyglot_core::cache`.
//! This module provides alternatives a backend can hand out from its
//! `new_cache` hook.

mod shared;

pub use shared::SharedCache;
