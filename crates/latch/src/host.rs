//! Caller-owned factory registry and declarative auto-initialization.

use std::collections::{HashMap, HashSet};

use latch_dom::Document;

use crate::camel::camelize;
use crate::factory::Factory;
use crate::settings::Settings;

/// Errors that can occur when registering a factory.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Factory name {0:?} camelizes to an empty identifier")]
    InvalidName(String),
}

/// A registry mapping camelized factory names to factories.
///
/// This is the explicit stand-in for a shared host namespace: callers own
/// the registry and pass it wherever factories need to be reachable, rather
/// than factories attaching themselves to a global object.
#[derive(Debug, Default)]
pub struct HostRegistry {
    factories: HashMap<String, Factory>,
}

impl HostRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under the camelized form of `name`.
    ///
    /// Hyphenated and camelCase spellings of one name share a slot. An
    /// occupied slot is overwritten, last write wins, with a diagnostic. A
    /// name that camelizes to nothing is rejected and no state changes.
    pub fn register(&mut self, name: &str, factory: Factory) -> Result<(), RegistryError> {
        let slot = camelize(name);
        if slot.is_empty() {
            return Err(RegistryError::InvalidName(name.to_string()));
        }
        if self.factories.contains_key(&slot) {
            tracing::warn!(name = %slot, "factory already registered, replacing");
        }
        self.factories.insert(slot, factory);
        Ok(())
    }

    /// Look up a factory by any spelling that camelizes to its slot.
    pub fn factory(&self, name: &str) -> Option<&Factory> {
        self.factories.get(&camelize(name))
    }

    /// Mutable lookup, for initializing a registered factory directly.
    pub fn factory_mut(&mut self, name: &str) -> Option<&mut Factory> {
        self.factories.get_mut(&camelize(name))
    }

    /// Number of registered factories.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether no factories are registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Scan the document for `data-init` markers and initialize the named
    /// factories.
    ///
    /// Each distinct marker literal is processed once, in document order:
    /// its camelized form names a factory slot, and a registered factory is
    /// initialized over exactly the elements carrying that literal, with
    /// empty options. Markers naming no registered factory are skipped.
    /// Returns the number of init calls performed.
    pub fn auto_init(&mut self, doc: &Document) -> usize {
        let mut processed: HashSet<String> = HashSet::new();
        let mut calls = 0;
        let options = Settings::new();

        for marked in doc.with_attr("data-init") {
            let marker = doc.get(marked).attr("data-init").unwrap_or("").to_string();
            if !processed.insert(marker.clone()) {
                continue;
            }
            let Some(factory) = self.factories.get_mut(&camelize(&marker)) else {
                tracing::debug!(marker = %marker, "auto-init marker names no registered factory");
                continue;
            };
            let elements = doc.by_attr("data-init", &marker);
            factory.init(doc, &elements, &options);
            calls += 1;
        }

        calls
    }
}
