//! Caching decorator for translation backends.

use polyglot_core::backend::{Backend, Locale, Options, Result, WritePolicy};
use polyglot_core::cache::CacheContainer;

/// Something holding a cache that can be discarded wholesale.
///
/// Lifecycle hooks reset every cached backend of a record through this
/// trait, regardless of the backend's value type.
pub trait ClearCache {
    /// Discards every cached value. Never fails; clearing twice is a no-op.
    fn clear_cache(&mut self);
}

/// Backend decorator that memoizes reads in a per-instance cache.
///
/// The cache container is created lazily through the wrapped backend's
/// [`Backend::new_cache`] hook on first access, and dropped as a whole by
/// [`ClearCache::clear_cache`]. It is never partially cleared.
///
/// # Type Parameters
///
/// * `B` - The underlying backend implementation
pub struct CachingBackend<B: Backend> {
    backend: B,
    cache: Option<Box<dyn CacheContainer<B::Value>>>,
}

impl<B: Backend> CachingBackend<B> {
    /// Creates a new caching decorator around `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cache: None,
        }
    }

    /// Returns the wrapped backend.
    pub fn inner(&self) -> &B {
        &self.backend
    }

    /// Returns the wrapped backend mutably. Calls made through it bypass the cache.
    pub fn inner_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consumes the decorator, returning the wrapped backend.
    pub fn into_inner(self) -> B {
        self.backend
    }

    /// Returns true if a value is cached for `locale`.
    ///
    /// Does not create the cache container when it does not exist yet.
    pub fn is_cached(&mut self, locale: &Locale) -> bool {
        self.cache
            .as_mut()
            .is_some_and(|cache| cache.get(locale).is_some())
    }

    fn cache(&mut self) -> &mut Box<dyn CacheContainer<B::Value>> {
        let backend = &self.backend;
        self.cache.get_or_insert_with(|| backend.new_cache())
    }
}

impl<B: Backend> Backend for CachingBackend<B> {
    type Value = B::Value;

    fn read(&mut self, locale: &Locale, options: &Options) -> Result<Self::Value> {
        if self.backend.write_policy().writes_to_cache() {
            let value = self.cache().fetch(locale);
            if value.is_err() {
                tracing::warn!(%locale, "Cache-only read of a locale that was never written");
            }
            return value;
        }

        if let Some(value) = self.cache().get(locale) {
            tracing::trace!(%locale, "Cache hit for translation");
            return Ok(value);
        }

        tracing::trace!(%locale, "Cache miss for translation");
        let value = self.backend.read(locale, options)?;
        self.cache().set(locale.clone(), value.clone());

        Ok(value)
    }

    fn write(
        &mut self,
        locale: &Locale,
        value: Self::Value,
        options: &Options,
    ) -> Result<Self::Value> {
        if self.backend.write_policy().writes_to_cache() {
            tracing::trace!(%locale, "Translation written to cache");
            self.cache().set(locale.clone(), value.clone());
            return Ok(value);
        }

        // Pass-through writes do not warm the read cache.
        self.backend.write(locale, value, options)
    }

    fn write_policy(&self) -> WritePolicy {
        self.backend.write_policy()
    }

    fn new_cache(&self) -> Box<dyn CacheContainer<Self::Value>> {
        self.backend.new_cache()
    }
}

impl<B: Backend> ClearCache for CachingBackend<B> {
    fn clear_cache(&mut self) {
        if self.cache.take().is_some() {
            tracing::debug!("Translation cache cleared");
        }
    }
}
