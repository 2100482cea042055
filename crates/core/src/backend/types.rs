use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier selecting which translation of an attribute is accessed.
///
/// Locales are compared by value and never validated: any string is a
/// valid locale as far as the backends and the cache are concerned.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Creates a locale from any string-like tag (e.g. `"en"`, `"pt-BR"`).
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the locale tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

/// Opaque configuration bag forwarded to backends on every read and write.
///
/// The caching layer never inspects it. Backends are free to interpret
/// any key they understand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(Map<String, Value>);

impl Options {
    /// Creates an empty options bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option, returning the bag for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Gets an option by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns true if no options are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Options {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// How a cached backend treats writes, and therefore where reads come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritePolicy {
    /// Every write reaches the backend; reads are memoized after a backend call.
    #[default]
    PassThrough,
    /// Writes land in the cache only and reads are served exclusively from it.
    CacheOnly,
}

impl WritePolicy {
    /// Returns true if writes go to the cache instead of the backend.
    pub fn writes_to_cache(&self) -> bool {
        matches!(self, WritePolicy::CacheOnly)
    }
}
