//! Component factories and their instance registries.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use latch_dom::{Document, ElementId};

use crate::camel::camelize;
use crate::instance::ComponentInstance;
use crate::settings::Settings;

/// Shared handle to a constructed instance.
///
/// The factory's registry and the caller alias the same instance, so
/// settings mutated through one handle are visible through the other.
/// Everything here is single-threaded by contract, hence `Rc`/`RefCell`.
pub type SharedInstance = Rc<RefCell<ComponentInstance>>;

/// Component-specific construction logic, run against each instance after
/// the core build has populated it.
///
/// Implementors carry whatever inherent methods their component needs; the
/// factory only requires the mount hook.
pub trait Behavior {
    /// Construction hook, invoked once per initialized element.
    fn mount(&self, instance: &mut ComponentInstance, doc: &Document, options: &Settings);
}

/// What an initialization call produced.
///
/// Exactly one element initialized returns the instance directly; any other
/// count returns the full sequence. Callers that destructure a single
/// result rely on this asymmetry.
#[derive(Debug, Clone)]
pub enum InitOutcome {
    One(SharedInstance),
    Many(Vec<SharedInstance>),
}

impl InitOutcome {
    /// Number of instances initialized.
    pub fn len(&self) -> usize {
        match self {
            InitOutcome::One(_) => 1,
            InitOutcome::Many(instances) => instances.len(),
        }
    }

    /// Whether nothing was initialized.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The single instance, if exactly one was initialized.
    pub fn one(self) -> Option<SharedInstance> {
        match self {
            InitOutcome::One(instance) => Some(instance),
            InitOutcome::Many(_) => None,
        }
    }

    /// All initialized instances as an ordered sequence.
    pub fn into_vec(self) -> Vec<SharedInstance> {
        match self {
            InitOutcome::One(instance) => vec![instance],
            InitOutcome::Many(instances) => instances,
        }
    }
}

/// A named-behavior component factory with its own instance registry.
///
/// Registry keys are the camelized source-element id, or a per-factory
/// counter rendered as a decimal string for elements without one. Entries
/// are never removed.
pub struct Factory {
    behavior: Box<dyn Behavior>,
    defaults: Settings,
    instances: HashMap<String, SharedInstance>,
    next_key: u64,
}

impl Factory {
    /// Wrap a behavior and its default settings into a factory.
    pub fn new(behavior: Box<dyn Behavior>, defaults: Settings) -> Self {
        Self {
            behavior,
            defaults,
            instances: HashMap::new(),
            next_key: 0,
        }
    }

    /// Initialize the factory over a selection of elements.
    ///
    /// For each element, in order: run the core instance build, run the
    /// behavior's mount hook against the populated instance, derive the
    /// registry key, and store the shared handle.
    pub fn init(
        &mut self,
        doc: &Document,
        elements: &[ElementId],
        options: &Settings,
    ) -> InitOutcome {
        let mut mounted = Vec::with_capacity(elements.len());
        for &element in elements {
            let mut instance = ComponentInstance::build(doc, element, options, &self.defaults);
            self.behavior.mount(&mut instance, doc, options);

            let key = if instance.identity.is_empty() {
                let key = self.next_key.to_string();
                self.next_key += 1;
                key
            } else {
                camelize(&instance.identity)
            };

            let shared: SharedInstance = Rc::new(RefCell::new(instance));
            self.instances.insert(key, Rc::clone(&shared));
            mounted.push(shared);
        }

        if mounted.len() == 1 {
            InitOutcome::One(mounted.remove(0))
        } else {
            InitOutcome::Many(mounted)
        }
    }

    /// Snapshot of the registry: key to shared instance.
    pub fn instances(&self) -> &HashMap<String, SharedInstance> {
        &self.instances
    }

    /// Look up a previously initialized instance by registry key.
    pub fn instance(&self, key: &str) -> Option<SharedInstance> {
        self.instances.get(key).cloned()
    }

    /// The defaults this factory was created with.
    pub fn defaults(&self) -> &Settings {
        &self.defaults
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("defaults", &self.defaults)
            .field("instances", &self.instances.len())
            .field("next_key", &self.next_key)
            .finish()
    }
}
