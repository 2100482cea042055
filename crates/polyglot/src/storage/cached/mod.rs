//! Cached backend decorator.
//!
//! [`CachingBackend`] wraps any `Backend` with a per-instance cache keyed
//! by locale. The backend's [`WritePolicy`](polyglot_core::backend::WritePolicy)
//! selects how the cache is used:
//!
//! - **Pass-through** (default): reads are memoized after the first backend
//!   call; every write reaches the backend and leaves the cache alone
//! - **Cache-only**: writes land in the cache and reads are served from it,
//!   the backend is never consulted
//!
//! # Example
//!
//! ```ignore
//! let mut cached = CachingBackend::new(backend);
//!
//! cached.read(&locale, &options)?; // backend called
//! cached.read(&locale, &options)?; // served from cache
//!
//! cached.clear_cache();
//! cached.read(&locale, &options)?; // backend called again
//! ```

mod backend;

pub use backend::{CachingBackend, ClearCache};
