//! Shared cache container.
//!
//! Every handle cloned from a [`SharedCache`] reads and writes the same
//! store. A backend returning clones of one `SharedCache` from `new_cache`
//! makes all of its caching decorators see each other's values, and clearing
//! one decorator only drops its handle, not the shared store.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use polyglot_core::backend::Locale;
use polyglot_core::cache::CacheContainer;

/// Cache container whose clones share one store.
#[derive(Debug)]
pub struct SharedCache<V> {
    store: Rc<RefCell<HashMap<Locale, V>>>,
}

impl<V> Clone for SharedCache<V> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
        }
    }
}

impl<V> Default for SharedCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> SharedCache<V> {
    /// Creates a new, empty shared store.
    pub fn new() -> Self {
        Self {
            store: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Empties the shared store for every handle.
    pub fn purge(&self) {
        self.store.borrow_mut().clear();
    }

    /// Returns the number of cached locales.
    pub fn len(&self) -> usize {
        self.store.borrow().len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.store.borrow().is_empty()
    }
}

impl<V: Clone> CacheContainer<V> for SharedCache<V> {
    fn get(&mut self, locale: &Locale) -> Option<V> {
        self.store.borrow().get(locale).cloned()
    }

    fn set(&mut self, locale: Locale, value: V) {
        self.store.borrow_mut().insert(locale, value);
    }
}
