//! Attribute translations backed by pluggable storage, with a per-record
//! read cache that is invalidated on the record's reload and save events.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use polyglot::record::{AttributeOptions, Model, Record};
//! use polyglot::storage::InMemoryBackend;
//! use polyglot::{Locale, Options};
//!
//! let column = InMemoryBackend::<String>::new();
//!
//! let mut model = Model::new("Post");
//! let factory = column.clone();
//! model
//!     .translates("title", move || factory.clone(), AttributeOptions::cached())
//!     .unwrap();
//!
//! let mut post = Record::new(Rc::new(model));
//! let en = Locale::from("en");
//! post.write("title", &en, Some("Hello".to_string()), &Options::new())
//!     .unwrap();
//! assert_eq!(
//!     post.read("title", &en, &Options::new()).unwrap(),
//!     Some("Hello".to_string())
//! );
//!
//! // Changes made behind the record's back show up after a reload.
//! column.insert(en.clone(), "Hi".to_string());
//! post.reload();
//! assert_eq!(
//!     post.read("title", &en, &Options::new()).unwrap(),
//!     Some("Hi".to_string())
//! );
//! ```

pub mod cache;
pub mod config;
pub mod record;
pub mod storage;

pub use polyglot_core::backend::{Backend, BackendError, Locale, Options, WritePolicy};
pub use polyglot_core::cache::{CacheContainer, HashMapCache};
