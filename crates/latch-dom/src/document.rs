//! Document arena and attribute queries.

use crate::element::Element;

/// Handle to an element inside a [`Document`].
///
/// Elements are never removed, so a handle stays valid for the lifetime of
/// the document that issued it. Using a handle with a different document
/// indexes an arbitrary element or panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) usize);

/// A flat, append-only collection of elements.
///
/// Queries return handles in document order (the order elements were
/// appended), which is the order callers observe from every downstream
/// operation built on top of this crate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    elements: Vec<Element>,
}

/// Borrowed view of one element in a document.
#[derive(Debug, Clone, Copy)]
pub struct ElementRef<'a> {
    id: ElementId,
    element: &'a Element,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element, returning its handle.
    pub fn append(&mut self, element: Element) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(element);
        id
    }

    /// Number of elements in the document.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Resolve a handle to a borrowed element view.
    pub fn get(&self, id: ElementId) -> ElementRef<'_> {
        ElementRef {
            id,
            element: &self.elements[id.0],
        }
    }

    /// Iterate over every element in document order.
    pub fn iter(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.elements
            .iter()
            .enumerate()
            .map(|(i, element)| ElementRef {
                id: ElementId(i),
                element,
            })
    }

    /// Handles of every element matching the predicate, in document order.
    pub fn select<F>(&self, mut predicate: F) -> Vec<ElementId>
    where
        F: FnMut(ElementRef<'_>) -> bool,
    {
        self.iter()
            .filter(|el| predicate(*el))
            .map(|el| el.id())
            .collect()
    }

    /// Handles of every element whose attribute `name` equals `value` exactly.
    pub fn by_attr(&self, name: &str, value: &str) -> Vec<ElementId> {
        self.select(|el| el.attr(name) == Some(value))
    }

    /// Handles of every element carrying attribute `name`, whatever its value.
    pub fn with_attr(&self, name: &str) -> Vec<ElementId> {
        self.select(|el| el.has_attr(name))
    }

    /// Handle of the first element whose `id` attribute equals `id`.
    pub fn by_id(&self, id: &str) -> Option<ElementId> {
        self.iter().find(|el| el.attr("id") == Some(id)).map(|el| el.id())
    }
}

impl<'a> ElementRef<'a> {
    /// The handle this view was resolved from.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The element's tag name.
    pub fn tag(&self) -> &'a str {
        self.element.tag()
    }

    /// The value of attribute `name`, if present.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.attribute(name)
    }

    /// Whether attribute `name` is present, including with an empty value.
    pub fn has_attr(&self, name: &str) -> bool {
        self.element.attribute(name).is_some()
    }

    /// Iterate over `(name, value)` attribute pairs in insertion order.
    pub fn attrs(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.element.attributes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.append(Element::new("div").attr("id", "tabs"));
        doc.append(Element::new("a").attr("href", "#tabs").attr("data-role", "tab"));
        doc.append(Element::new("a").attr("data-bind", "#tabs"));
        doc.append(Element::new("span"));
        doc
    }

    #[test]
    fn append_issues_sequential_handles() {
        let mut doc = Document::new();
        let first = doc.append(Element::new("div"));
        let second = doc.append(Element::new("span"));

        assert_ne!(first, second);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get(first).tag(), "div");
        assert_eq!(doc.get(second).tag(), "span");
    }

    #[test]
    fn by_attr_matches_exact_values_in_document_order() {
        let doc = sample();
        let hrefs = doc.by_attr("href", "#tabs");

        assert_eq!(hrefs.len(), 1);
        assert_eq!(doc.get(hrefs[0]).tag(), "a");

        // No normalization: a different value is a miss.
        assert!(doc.by_attr("href", "tabs").is_empty());
    }

    #[test]
    fn with_attr_finds_presence_regardless_of_value() {
        let mut doc = sample();
        doc.append(Element::new("button").attr("data-bind", ""));

        let bound = doc.with_attr("data-bind");
        assert_eq!(bound.len(), 2);
    }

    #[test]
    fn select_preserves_document_order() {
        let doc = sample();
        let anchors = doc.select(|el| el.tag() == "a");

        assert_eq!(anchors.len(), 2);
        assert!(anchors[0] < anchors[1]);
    }

    #[test]
    fn by_id_returns_first_match() {
        let mut doc = sample();
        doc.append(Element::new("div").attr("id", "tabs"));

        let found = doc.by_id("tabs").unwrap();
        assert_eq!(found, ElementId(0));
        assert_eq!(doc.by_id("missing"), None);
    }
}
