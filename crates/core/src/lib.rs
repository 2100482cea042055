//! Core types and traits for polyglot.
//!
//! This crate holds the pure, side-effect free parts of the translation
//! layer: the [`backend::Backend`] capability trait that storage strategies
//! implement, the [`cache::CacheContainer`] trait the caching decorator
//! stores values in, and the shared error types.

pub mod backend;
pub mod cache;
