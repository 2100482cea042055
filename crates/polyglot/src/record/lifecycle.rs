//! Lifecycle hooks and the cache invalidation binder.

use std::fmt;
use std::rc::Rc;

use super::Record;

/// Record lifecycle events that hooks can run after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// The record was reloaded from storage.
    Reload,
    /// The record was persisted.
    Save,
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleEvent::Reload => f.write_str("reload"),
            LifecycleEvent::Save => f.write_str("save"),
        }
    }
}

/// Callback run on a record instance after a lifecycle event.
pub type LifecycleHook<V> = Rc<dyn Fn(&mut Record<V>)>;

/// Ordered list of hooks registered on a record type.
///
/// Registration is additive: hooks are never replaced or removed, and all
/// hooks for an event run in registration order.
pub struct LifecycleHooks<V: Clone + 'static> {
    hooks: Vec<(LifecycleEvent, LifecycleHook<V>)>,
}

impl<V: Clone + 'static> Default for LifecycleHooks<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + 'static> LifecycleHooks<V> {
    /// Creates an empty hook list.
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Registers `hook` to run after `event`.
    pub fn register(&mut self, event: LifecycleEvent, hook: LifecycleHook<V>) {
        self.hooks.push((event, hook));
    }

    /// Returns the hooks registered for `event`, in registration order.
    pub fn for_event(&self, event: LifecycleEvent) -> impl Iterator<Item = &LifecycleHook<V>> {
        self.hooks
            .iter()
            .filter(move |(registered, _)| *registered == event)
            .map(|(_, hook)| hook)
    }

    /// Returns the total number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns true if no hooks are registered.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

/// Wires cache invalidation into a record type's lifecycle.
///
/// Each binding registers one hook after [`LifecycleEvent::Reload`] and one
/// after [`LifecycleEvent::Save`]. Every hook clears the caches of all
/// cached backends on the record, not only the attribute that caused the
/// binding.
pub struct LifecycleBinder;

impl LifecycleBinder {
    /// Events after which caches are cleared.
    pub const EVENTS: [LifecycleEvent; 2] = [LifecycleEvent::Reload, LifecycleEvent::Save];

    /// Registers the cache clearing hooks on `hooks`.
    pub fn bind<V: Clone + 'static>(hooks: &mut LifecycleHooks<V>) {
        for event in Self::EVENTS {
            hooks.register(event, Rc::new(clear_all_caches::<V>));
        }
    }
}

fn clear_all_caches<V: Clone + 'static>(record: &mut Record<V>) {
    for backend in record.cached_backends_mut() {
        backend.clear_cache();
    }
}
