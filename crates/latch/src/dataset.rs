//! Data-attribute collection.

use latch_dom::{Document, ElementId};

use crate::camel::camelize;
use crate::settings::Settings;
use crate::value::typify;

const DATA_PREFIX: &str = "data-";

/// Collect an element's `data-*` attributes into a settings map.
///
/// Each attribute name has the `data-` prefix stripped and the remainder
/// camelized; each value is typified. Reads only the given element.
pub fn collect_dataset(doc: &Document, element: ElementId) -> Settings {
    let mut settings = Settings::new();
    for (name, value) in doc.get(element).attrs() {
        if let Some(key) = name.strip_prefix(DATA_PREFIX) {
            settings.insert(camelize(key), typify(value));
        }
    }
    settings
}
