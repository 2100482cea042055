//! Record instances.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::rc::Rc;

use uuid::Uuid;

use polyglot_core::backend::{Locale, Options};

use crate::storage::ClearCache;

use super::model::AttributeBackend;
use super::{LifecycleEvent, Model, RecordError, Result};

/// One instance of a [`Model`].
///
/// Each instance owns its attribute backends, and therefore its caches.
/// Two records of the same model never share cache state.
pub struct Record<V: Clone + 'static> {
    id: Uuid,
    model: Rc<Model<V>>,
    backends: BTreeMap<String, AttributeBackend<V>>,
}

impl<V: Clone + 'static> Record<V> {
    /// Creates a new record of `model` with a random ID.
    pub fn new(model: Rc<Model<V>>) -> Self {
        Self::with_id(model, Uuid::new_v4())
    }

    /// Creates a new record of `model` with a specific ID (useful for testing).
    pub fn with_id(model: Rc<Model<V>>, id: Uuid) -> Self {
        Self {
            id,
            model,
            backends: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn model(&self) -> &Model<V> {
        &self.model
    }

    /// Reads the translation of `attribute` for `locale`.
    pub fn read(&mut self, attribute: &str, locale: &Locale, options: &Options) -> Result<V> {
        let backend = self.backend_mut(attribute)?;
        Ok(backend.as_backend_mut().read(locale, options)?)
    }

    /// Writes the translation of `attribute` for `locale`.
    pub fn write(
        &mut self,
        attribute: &str,
        locale: &Locale,
        value: V,
        options: &Options,
    ) -> Result<V> {
        let backend = self.backend_mut(attribute)?;
        Ok(backend.as_backend_mut().write(locale, value, options)?)
    }

    /// Runs the hooks registered after a reload.
    pub fn reload(&mut self) {
        self.dispatch(LifecycleEvent::Reload);
    }

    /// Runs the hooks registered after a save.
    pub fn save(&mut self) {
        self.dispatch(LifecycleEvent::Save);
    }

    /// Returns every cached backend attached to this record.
    ///
    /// Attributes that have not been accessed yet have no backend, and
    /// therefore nothing to clear.
    pub fn cached_backends_mut(&mut self) -> impl Iterator<Item = &mut dyn ClearCache> + '_ {
        self.backends.values_mut().filter_map(|backend| match backend {
            AttributeBackend::Cached(cached) => Some(cached as &mut dyn ClearCache),
            AttributeBackend::Plain(_) => None,
        })
    }

    fn dispatch(&mut self, event: LifecycleEvent) {
        let model = Rc::clone(&self.model);
        tracing::debug!(
            record_id = %self.id,
            model = %model.name(),
            %event,
            "Dispatching lifecycle event"
        );

        for hook in model.hooks().for_event(event) {
            hook(self);
        }
    }

    fn backend_mut(&mut self, attribute: &str) -> Result<&mut AttributeBackend<V>> {
        match self.backends.entry(attribute.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let definition =
                    self.model
                        .attribute(attribute)
                        .ok_or_else(|| RecordError::UnknownAttribute {
                            model: self.model.name().to_string(),
                            attribute: attribute.to_string(),
                        })?;
                Ok(entry.insert(definition.build()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use polyglot_core::backend::{Backend, BackendError, Result as BackendResult};

    use crate::config::Config;
    use crate::record::AttributeOptions;

    // Backend returning a fixed value and counting reads
    struct CountingBackend {
        value: &'static str,
        reads: Rc<Cell<usize>>,
    }

    impl Backend for CountingBackend {
        type Value = String;

        fn read(&mut self, _locale: &Locale, _options: &Options) -> BackendResult<String> {
            self.reads.set(self.reads.get() + 1);
            Ok(self.value.to_string())
        }

        fn write(
            &mut self,
            _locale: &Locale,
            value: String,
            _options: &Options,
        ) -> BackendResult<String> {
            Ok(value)
        }
    }

    // Backend whose every call fails
    struct BrokenBackend;

    impl Backend for BrokenBackend {
        type Value = String;

        fn read(&mut self, _locale: &Locale, _options: &Options) -> BackendResult<String> {
            Err(BackendError::ReadFailed("table is gone".to_string()))
        }

        fn write(
            &mut self,
            _locale: &Locale,
            _value: String,
            _options: &Options,
        ) -> BackendResult<String> {
            Err(BackendError::WriteFailed("table is gone".to_string()))
        }
    }

    fn counting_model(reads: &Rc<Cell<usize>>, options: AttributeOptions) -> Rc<Model<String>> {
        let reads = Rc::clone(reads);
        let mut model = Model::with_config("Post", Config { cache: true });
        model
            .translates(
                "title",
                move || CountingBackend {
                    value: "foo",
                    reads: Rc::clone(&reads),
                },
                options,
            )
            .unwrap();
        Rc::new(model)
    }

    #[test]
    fn test_unknown_attribute() {
        let reads = Rc::new(Cell::new(0));
        let mut record = Record::new(counting_model(&reads, AttributeOptions::cached()));

        let err = record
            .read("subtitle", &Locale::from("en"), &Options::new())
            .unwrap_err();

        assert_eq!(
            err,
            RecordError::UnknownAttribute {
                model: "Post".to_string(),
                attribute: "subtitle".to_string(),
            }
        );
    }

    #[test]
    fn test_cached_attribute_reads_backend_once() {
        let reads = Rc::new(Cell::new(0));
        let mut record = Record::new(counting_model(&reads, AttributeOptions::cached()));
        let en = Locale::from("en");

        assert_eq!(record.read("title", &en, &Options::new()).unwrap(), "foo");
        assert_eq!(record.read("title", &en, &Options::new()).unwrap(), "foo");

        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn test_uncached_attribute_reads_backend_every_time() {
        let reads = Rc::new(Cell::new(0));
        let mut record = Record::new(counting_model(&reads, AttributeOptions::uncached()));
        let en = Locale::from("en");

        record.read("title", &en, &Options::new()).unwrap();
        record.read("title", &en, &Options::new()).unwrap();

        assert_eq!(reads.get(), 2);
        assert_eq!(record.cached_backends_mut().count(), 0);
    }

    #[test]
    fn test_reload_and_save_clear_cache() {
        let reads = Rc::new(Cell::new(0));
        let mut record = Record::new(counting_model(&reads, AttributeOptions::cached()));
        let en = Locale::from("en");

        record.read("title", &en, &Options::new()).unwrap();
        record.reload();
        record.read("title", &en, &Options::new()).unwrap();
        assert_eq!(reads.get(), 2);

        record.save();
        record.read("title", &en, &Options::new()).unwrap();
        assert_eq!(reads.get(), 3);
    }

    #[test]
    fn test_lifecycle_before_first_access_is_a_no_op() {
        let reads = Rc::new(Cell::new(0));
        let mut record = Record::new(counting_model(&reads, AttributeOptions::cached()));

        record.reload();
        record.save();

        assert_eq!(record.cached_backends_mut().count(), 0);
        assert_eq!(reads.get(), 0);
    }

    #[test]
    fn test_records_do_not_share_caches() {
        let reads = Rc::new(Cell::new(0));
        let model = counting_model(&reads, AttributeOptions::cached());
        let mut first = Record::new(Rc::clone(&model));
        let mut second = Record::new(model);
        let en = Locale::from("en");

        first.read("title", &en, &Options::new()).unwrap();
        second.read("title", &en, &Options::new()).unwrap();
        assert_eq!(reads.get(), 2);

        // Reloading one record leaves the other's cache warm
        first.reload();
        second.read("title", &en, &Options::new()).unwrap();
        assert_eq!(reads.get(), 2);
    }

    #[test]
    fn test_backend_errors_pass_through() {
        let mut model = Model::with_config("Post", Config { cache: true });
        model
            .translates("title", || BrokenBackend, AttributeOptions::cached())
            .unwrap();
        let mut record = Record::new(Rc::new(model));
        let en = Locale::from("en");

        let read_err = record.read("title", &en, &Options::new()).unwrap_err();
        let write_err = record
            .write("title", &en, "foo".to_string(), &Options::new())
            .unwrap_err();

        assert_eq!(
            read_err,
            RecordError::Backend(BackendError::ReadFailed("table is gone".to_string()))
        );
        assert_eq!(
            write_err,
            RecordError::Backend(BackendError::WriteFailed("table is gone".to_string()))
        );
    }

    #[test]
    fn test_with_id() {
        let reads = Rc::new(Cell::new(0));
        let id = Uuid::new_v4();
        let record = Record::with_id(counting_model(&reads, AttributeOptions::cached()), id);

        assert_eq!(record.id(), id);
        assert_eq!(record.model().name(), "Post");
    }
}
