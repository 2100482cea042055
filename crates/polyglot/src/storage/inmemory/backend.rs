use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use polyglot_core::backend::{Backend, Locale, Options, Result};

/// In-memory key-value column for testing.
///
/// Stores one value per locale in a `HashMap` behind `Rc<RefCell<_>>`.
/// Clones share the same storage, so a clone kept aside can change the
/// "database" underneath a record. Data is not persisted and will be lost
/// when the last clone is dropped.
///
/// Reads of a missing locale yield `None`; writing `None` removes the locale.
#[derive(Debug, Clone)]
pub struct InMemoryBackend<T> {
    values: Rc<RefCell<HashMap<Locale, T>>>,
}

impl<T> Default for InMemoryBackend<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryBackend<T> {
    /// Creates a new empty backend.
    pub fn new() -> Self {
        Self {
            values: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Stores `value` for `locale` directly, bypassing any decorator.
    pub fn insert(&self, locale: Locale, value: T) {
        self.values.borrow_mut().insert(locale, value);
    }

    /// Removes the value stored for `locale`.
    pub fn remove(&self, locale: &Locale) {
        self.values.borrow_mut().remove(locale);
    }

    /// Returns the number of locales with a stored value.
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    /// Returns true if no locale has a stored value.
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl<T: Clone> InMemoryBackend<T> {
    /// Returns the value stored for `locale`.
    pub fn get(&self, locale: &Locale) -> Option<T> {
        self.values.borrow().get(locale).cloned()
    }
}

impl<T: Clone + 'static> Backend for InMemoryBackend<T> {
    type Value = Option<T>;

    fn read(&mut self, locale: &Locale, _options: &Options) -> Result<Option<T>> {
        Ok(self.get(locale))
    }

    fn write(&mut self, locale: &Locale, value: Option<T>, _options: &Options) -> Result<Option<T>> {
        match &value {
            Some(v) => self.insert(locale.clone(), v.clone()),
            None => self.remove(locale),
        }
        Ok(value)
    }
}
