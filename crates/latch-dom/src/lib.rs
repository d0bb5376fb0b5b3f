//! Minimal DOM-like host for attribute-driven component libraries.
//!
//! This crate stands in for a full DOM implementation: an arena-style
//! [`Document`] of [`Element`]s with ordered attributes, document-order
//! queries, and a small fragment parser for declaring documents as markup.
//! It knows nothing about settings, factories, or initialization markers;
//! those conventions live in the `latch` crate.

pub mod document;
pub mod element;
pub mod markup;

pub use document::{Document, ElementId, ElementRef};
pub use element::Element;
pub use markup::{parse_fragment, MarkupError};
