//! Record type declarations.

use std::fmt;
use std::rc::Rc;

use polyglot_core::backend::Backend;

use crate::config::Config;
use crate::storage::CachingBackend;

use super::{LifecycleBinder, LifecycleHooks, RecordError, Result};

/// Builds a fresh backend instance for one record's attribute.
pub type BackendFactory<V> = Rc<dyn Fn() -> Box<dyn Backend<Value = V>>>;

/// Per-attribute declaration options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeOptions {
    /// Wrap the attribute's backend in a cache. `None` uses [`Config::cache`].
    pub cache: Option<bool>,
}

impl AttributeOptions {
    /// Options for an attribute that is always cached.
    pub fn cached() -> Self {
        Self { cache: Some(true) }
    }

    /// Options for an attribute that is never cached.
    pub fn uncached() -> Self {
        Self { cache: Some(false) }
    }
}

pub(crate) struct AttributeDefinition<V: Clone + 'static> {
    name: String,
    factory: BackendFactory<V>,
    cached: bool,
}

impl<V: Clone + 'static> AttributeDefinition<V> {
    /// Builds the backend an instance uses for this attribute.
    pub(crate) fn build(&self) -> AttributeBackend<V> {
        let backend = (self.factory)();
        if self.cached {
            AttributeBackend::Cached(CachingBackend::new(backend))
        } else {
            AttributeBackend::Plain(backend)
        }
    }
}

/// Backend attached to one attribute of one record instance.
pub(crate) enum AttributeBackend<V: Clone + 'static> {
    Plain(Box<dyn Backend<Value = V>>),
    Cached(CachingBackend<Box<dyn Backend<Value = V>>>),
}

impl<V: Clone + 'static> AttributeBackend<V> {
    pub(crate) fn as_backend_mut(&mut self) -> &mut dyn Backend<Value = V> {
        match self {
            AttributeBackend::Plain(backend) => backend,
            AttributeBackend::Cached(backend) => backend,
        }
    }
}

/// A record type with translated attributes.
///
/// Attributes must be declared before instances are created: records share
/// their model through an `Rc` and never mutate it.
pub struct Model<V: Clone + 'static> {
    name: String,
    config: Config,
    attributes: Vec<AttributeDefinition<V>>,
    hooks: LifecycleHooks<V>,
}

impl<V: Clone + 'static> Model<V> {
    /// Creates a model configured from the environment.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, Config::default())
    }

    /// Creates a model with an explicit configuration.
    pub fn with_config(name: impl Into<String>, config: Config) -> Self {
        Self {
            name: name.into(),
            config,
            attributes: Vec::new(),
            hooks: LifecycleHooks::new(),
        }
    }

    /// Declares a translated attribute backed by backends from `factory`.
    ///
    /// Every record instance calls `factory` once, the first time it accesses
    /// the attribute. When the attribute is cached, its backend is wrapped in
    /// a [`CachingBackend`] and cache clearing hooks are bound to the model's
    /// reload and save events.
    pub fn translates<F, B>(
        &mut self,
        attribute: &str,
        factory: F,
        options: AttributeOptions,
    ) -> Result<&mut Self>
    where
        F: Fn() -> B + 'static,
        B: Backend<Value = V> + 'static,
    {
        if self.attribute(attribute).is_some() {
            return Err(RecordError::DuplicateAttribute {
                model: self.name.clone(),
                attribute: attribute.to_string(),
            });
        }

        let cached = options.cache.unwrap_or(self.config.cache);
        let factory: BackendFactory<V> =
            Rc::new(move || Box::new(factory()) as Box<dyn Backend<Value = V>>);

        self.attributes.push(AttributeDefinition {
            name: attribute.to_string(),
            factory,
            cached,
        });

        if cached {
            LifecycleBinder::bind(&mut self.hooks);
        }

        tracing::debug!(model = %self.name, attribute, cached, "Translated attribute declared");
        Ok(self)
    }

    /// Returns the model name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the names of the translated attributes, in declaration order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.name.as_str())
    }

    /// Returns true if `attribute` is declared and cached.
    pub fn is_cached(&self, attribute: &str) -> bool {
        self.attribute(attribute).is_some_and(|a| a.cached)
    }

    /// Returns the lifecycle hooks registered on this model.
    pub fn hooks(&self) -> &LifecycleHooks<V> {
        &self.hooks
    }

    /// Returns the lifecycle hooks for registering additional callbacks.
    pub fn hooks_mut(&mut self) -> &mut LifecycleHooks<V> {
        &mut self.hooks
    }

    pub(crate) fn attribute(&self, name: &str) -> Option<&AttributeDefinition<V>> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

impl<V: Clone + 'static> fmt::Debug for Model<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("attributes", &self.attribute_names().collect::<Vec<_>>())
            .field("hooks", &self.hooks.len())
            .finish()
    }
}
