//! Detached element values.

/// A detached element: a tag name plus insertion-ordered attributes.
///
/// Built up with the [`attr`](Element::attr) builder and then moved into a
/// [`Document`](crate::Document), which hands back an id handle for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
}

impl Element {
    /// Create an element with the given tag name and no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
        }
    }

    /// Set an attribute, replacing any existing attribute of the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name.into(), value.into());
        self
    }

    pub(crate) fn set_attr(&mut self, name: String, value: String) {
        if let Some(slot) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    pub(crate) fn tag(&self) -> &str {
        &self.tag
    }

    pub(crate) fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}
