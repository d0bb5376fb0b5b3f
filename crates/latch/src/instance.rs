//! Component instance construction.

use std::collections::HashMap;

use latch_dom::{Document, ElementId};

use crate::dataset::collect_dataset;
use crate::settings::Settings;

/// A fully-populated component instance for one source element.
///
/// Built once at initialization time and not re-derived afterwards; callers
/// are free to mutate `settings` on the shared handle they get back.
#[derive(Debug, Clone)]
pub struct ComponentInstance {
    /// The element this instance was built for.
    pub source: ElementId,

    /// The source element's `id` attribute, verbatim, or empty. Registry
    /// keys are derived separately (camelized or counter-based); the two
    /// must not be conflated.
    pub identity: String,

    /// Merged settings: defaults, then the element's dataset, then options.
    pub settings: Settings,

    /// Elements whose `href` or `data-bind` equals `"#" + identity`, in
    /// document order, deduplicated. Empty when `identity` is empty.
    pub references: Vec<ElementId>,

    /// References grouped by their literal `data-role` value. Every element
    /// here also appears in `references`; references without `data-role`
    /// are simply absent.
    pub roles: HashMap<String, Vec<ElementId>>,
}

impl ComponentInstance {
    /// Build an instance for `source`, layering `defaults`, the element's
    /// dataset, and `options`, then discovering references and roles.
    pub fn build(
        doc: &Document,
        source: ElementId,
        options: &Settings,
        defaults: &Settings,
    ) -> Self {
        let identity = doc.get(source).attr("id").unwrap_or("").to_string();

        let mut settings = defaults.clone();
        settings.overlay(&collect_dataset(doc, source));
        settings.overlay(options);

        let references = if identity.is_empty() {
            Vec::new()
        } else {
            let target = format!("#{identity}");
            doc.select(|el| {
                el.attr("href") == Some(target.as_str())
                    || el.attr("data-bind") == Some(target.as_str())
            })
        };

        let mut roles: HashMap<String, Vec<ElementId>> = HashMap::new();
        for &reference in &references {
            if let Some(role) = doc.get(reference).attr("data-role") {
                roles.entry(role.to_string()).or_default().push(reference);
            }
        }

        Self {
            source,
            identity,
            settings,
            references,
            roles,
        }
    }

    /// References carrying the given role, in document order.
    pub fn role(&self, name: &str) -> &[ElementId] {
        self.roles.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}
