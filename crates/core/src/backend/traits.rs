use std::cell::RefCell;
use std::rc::Rc;

use crate::cache::{CacheContainer, HashMapCache};

use super::{Locale, Options, Result, WritePolicy};

/// Storage strategy for one translatable attribute's values across locales.
///
/// Methods take `&mut self`: a backend instance is used from one execution
/// context at a time. Backends that need to be shared between several
/// owners can be wrapped in `Rc<RefCell<_>>`, which implements this trait.
pub trait Backend {
    /// Backend-defined value type (commonly `Option<String>`).
    type Value: Clone + 'static;

    /// Reads the value stored for `locale`.
    fn read(&mut self, locale: &Locale, options: &Options) -> Result<Self::Value>;

    /// Writes `value` for `locale`, returning the value as stored by the backend.
    fn write(&mut self, locale: &Locale, value: Self::Value, options: &Options)
        -> Result<Self::Value>;

    /// Declares whether a caching decorator should keep writes in its cache.
    fn write_policy(&self) -> WritePolicy {
        WritePolicy::PassThrough
    }

    /// Builds the container a caching decorator stores values in.
    fn new_cache(&self) -> Box<dyn CacheContainer<Self::Value>> {
        Box::new(HashMapCache::new())
    }
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    type Value = B::Value;

    fn read(&mut self, locale: &Locale, options: &Options) -> Result<Self::Value> {
        (**self).read(locale, options)
    }

    fn write(
        &mut self,
        locale: &Locale,
        value: Self::Value,
        options: &Options,
    ) -> Result<Self::Value> {
        (**self).write(locale, value, options)
    }

    fn write_policy(&self) -> WritePolicy {
        (**self).write_policy()
    }

    fn new_cache(&self) -> Box<dyn CacheContainer<Self::Value>> {
        (**self).new_cache()
    }
}

impl<B: Backend + ?Sized> Backend for &mut B {
    type Value = B::Value;

    fn read(&mut self, locale: &Locale, options: &Options) -> Result<Self::Value> {
        (**self).read(locale, options)
    }

    fn write(
        &mut self,
        locale: &Locale,
        value: Self::Value,
        options: &Options,
    ) -> Result<Self::Value> {
        (**self).write(locale, value, options)
    }

    fn write_policy(&self) -> WritePolicy {
        (**self).write_policy()
    }

    fn new_cache(&self) -> Box<dyn CacheContainer<Self::Value>> {
        (**self).new_cache()
    }
}

impl<B: Backend + ?Sized> Backend for Rc<RefCell<B>> {
    type Value = B::Value;

    fn read(&mut self, locale: &Locale, options: &Options) -> Result<Self::Value> {
        self.borrow_mut().read(locale, options)
    }

    fn write(
        &mut self,
        locale: &Locale,
        value: Self::Value,
        options: &Options,
    ) -> Result<Self::Value> {
        self.borrow_mut().write(locale, value, options)
    }

    fn write_policy(&self) -> WritePolicy {
        self.borrow().write_policy()
    }

    fn new_cache(&self) -> Box<dyn CacheContainer<Self::Value>> {
        self.borrow().new_cache()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Echoes the locale back and counts reads.
    #[derive(Default)]
    struct EchoBackend {
        reads: usize,
    }

    impl Backend for EchoBackend {
        type Value = String;

        fn read(&mut self, locale: &Locale, _options: &Options) -> Result<String> {
            self.reads += 1;
            Ok(locale.to_string())
        }

        fn write(&mut self, _locale: &Locale, value: String, _options: &Options) -> Result<String> {
            Ok(value.to_uppercase())
        }
    }

    #[test]
    fn test_default_capabilities() {
        let backend = EchoBackend::default();
        assert_eq!(backend.write_policy(), WritePolicy::PassThrough);

        let mut cache = backend.new_cache();
        assert_eq!(cache.get(&Locale::from("en")), None);
    }

    #[test]
    fn test_boxed_backend_delegates() {
        let mut backend: Box<dyn Backend<Value = String>> = Box::new(EchoBackend::default());
        let options = Options::new();

        assert_eq!(backend.read(&Locale::from("fr"), &options).unwrap(), "fr");
        assert_eq!(
            backend
                .write(&Locale::from("fr"), "foo".to_string(), &options)
                .unwrap(),
            "FOO"
        );
    }

    #[test]
    fn test_shared_backend_sees_every_caller() {
        let shared = Rc::new(RefCell::new(EchoBackend::default()));
        let mut first = Rc::clone(&shared);
        let mut second = Rc::clone(&shared);
        let options = Options::new();

        first.read(&Locale::from("en"), &options).unwrap();
        second.read(&Locale::from("de"), &options).unwrap();

        assert_eq!(shared.borrow().reads, 2);
    }

    fn read_through<B: Backend>(mut backend: B, locale: &str) -> Result<B::Value> {
        backend.read(&Locale::from(locale), &Options::new())
    }

    #[test]
    fn test_borrowed_backend_delegates() {
        let mut backend = EchoBackend::default();

        assert_eq!(read_through(&mut backend, "en").unwrap(), "en");
        assert_eq!(backend.reads, 1);
    }
}
