//! Data-attribute driven component factories.
//!
//! This crate turns a plain behavior into a reusable component factory bound
//! to elements of a [`latch_dom::Document`]. Initializing a factory over a
//! selection of elements builds one instance per element: settings merged
//! from factory defaults, the element's `data-*` attributes, and per-call
//! options; references discovered from elements whose `href` or `data-bind`
//! points back at the source element's id; and a role index grouping those
//! references by their `data-role` attribute.
//!
//! Factories live in a caller-owned [`HostRegistry`], which can also scan a
//! document for declarative `data-init` markers and initialize the named
//! factories automatically.

pub mod camel;
pub mod dataset;
pub mod factory;
pub mod host;
pub mod instance;
pub mod settings;
pub mod value;

pub use camel::camelize;
pub use dataset::collect_dataset;
pub use factory::{Behavior, Factory, InitOutcome, SharedInstance};
pub use host::{HostRegistry, RegistryError};
pub use instance::ComponentInstance;
pub use settings::Settings;
pub use value::{typify, SettingValue};
