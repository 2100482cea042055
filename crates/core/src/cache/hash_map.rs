use std::collections::HashMap;

use crate::backend::Locale;

use super::CacheContainer;

/// Default cache container: a plain map from locale to value.
#[derive(Debug, Clone)]
pub struct HashMapCache<V> {
    values: HashMap<Locale, V>,
}

impl<V> Default for HashMapCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashMapCache<V> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Returns the number of cached locales.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<V> FromIterator<(Locale, V)> for HashMapCache<V> {
    fn from_iter<I: IntoIterator<Item = (Locale, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<V: Clone> CacheContainer<V> for HashMapCache<V> {
    fn get(&mut self, locale: &Locale) -> Option<V> {
        self.values.get(locale).cloned()
    }

    fn set(&mut self, locale: Locale, value: V) {
        self.values.insert(locale, value);
    }
}
