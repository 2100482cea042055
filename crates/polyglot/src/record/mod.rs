//! Record integration.
//!
//! A [`Model`] declares which attributes of a record type are translated
//! and how their backends are built. Declaring a cached attribute binds
//! lifecycle hooks (see [`LifecycleBinder`]) so that reloading or saving a
//! [`Record`] clears every cached backend attached to it.

mod error;
mod instance;
mod lifecycle;
mod model;

pub use error::{RecordError, Result};
pub use instance::Record;
pub use lifecycle::{LifecycleBinder, LifecycleEvent, LifecycleHook, LifecycleHooks};
pub use model::{AttributeOptions, BackendFactory, Model};
