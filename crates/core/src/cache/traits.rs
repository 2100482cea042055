use crate::backend::{BackendError, Locale, Result};

/// Keyed store a caching decorator keeps translated values in.
///
/// The decorator only relies on keyed get and set, so any store can be
/// substituted through [`Backend::new_cache`](crate::backend::Backend::new_cache).
pub trait CacheContainer<V> {
    /// Gets the value cached for `locale`, if any.
    fn get(&mut self, locale: &Locale) -> Option<V>;

    /// Caches `value` under `locale`, replacing any previous value.
    fn set(&mut self, locale: Locale, value: V);

    /// Gets the value cached for `locale`, failing if the key is missing.
    ///
    /// Containers with their own notion of a missing key may override this.
    fn fetch(&mut self, locale: &Locale) -> Result<V> {
        self.get(locale).ok_or_else(|| BackendError::KeyNotFound {
            locale: locale.clone(),
        })
    }
}
