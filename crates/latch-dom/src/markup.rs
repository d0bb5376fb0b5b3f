//! Markup fragment parsing.
//!
//! Parses a flat markup string like `<div id="tabs"><a href="#tabs">One</a>`
//! into a [`Document`]. Only open tags matter to this crate's consumers, so
//! close tags, comments, doctypes, and text content are skipped and nesting
//! is not modeled.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::Document;
use crate::element::Element;

static TAG_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9-]*").expect("Invalid tag name regex"));

static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Match: name="value", name='value', or a bare name (empty value)
    Regex::new(r#"([a-zA-Z_][a-zA-Z0-9_.:-]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'))?"#)
        .expect("Invalid attribute regex")
});

/// Errors that can occur when parsing a markup fragment.
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("Unclosed tag starting at byte {0}")]
    UnclosedTag(usize),
}

/// Parse a markup fragment into a document.
///
/// Every open tag becomes one element, in source order. A `<` with no
/// matching `>` is an error; anything between tags is ignored.
pub fn parse_fragment(markup: &str) -> Result<Document, MarkupError> {
    let mut doc = Document::new();
    let mut pos = 0;

    while let Some(open) = markup[pos..].find('<') {
        let start = pos + open;
        let Some(close) = markup[start..].find('>') else {
            return Err(MarkupError::UnclosedTag(start));
        };
        let inner = markup[start + 1..start + close].trim();
        pos = start + close + 1;

        // Close tags, comments, doctypes, and processing instructions
        // contribute no elements.
        if inner.is_empty() || inner.starts_with(['/', '!', '?']) {
            continue;
        }
        let Some(tag) = TAG_NAME_RE.find(inner) else {
            continue;
        };

        let mut element = Element::new(tag.as_str());
        let attrs_src = inner[tag.end()..].trim().trim_end_matches('/');
        for caps in ATTR_RE.captures_iter(attrs_src) {
            let name = caps.get(1).unwrap().as_str().to_string();
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map(|m| m.as_str())
                .unwrap_or("")
                .to_string();
            element.set_attr(name, value);
        }
        doc.append(element);
    }

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_flat_elements_in_source_order() {
        let doc = parse_fragment(
            r##"<div id="tabs" data-active="0"></div>
                <a href="#tabs" data-role="tab">One</a>
                <a data-bind="#tabs" data-role="panel"></a>"##,
        )
        .unwrap();

        assert_eq!(doc.len(), 3);
        let first = doc.iter().next().unwrap();
        assert_eq!(first.tag(), "div");
        assert_eq!(first.attr("id"), Some("tabs"));
        assert_eq!(first.attr("data-active"), Some("0"));
    }

    #[test]
    fn parses_single_quoted_and_bare_attributes() {
        let doc = parse_fragment(r"<input type='checkbox' disabled>").unwrap();

        let input = doc.iter().next().unwrap();
        assert_eq!(input.attr("type"), Some("checkbox"));
        assert_eq!(input.attr("disabled"), Some(""));
        assert!(input.has_attr("disabled"));
    }

    #[test]
    fn handles_self_closing_tags() {
        let doc = parse_fragment(r#"<br/><img src="x.png" />"#).unwrap();

        assert_eq!(doc.len(), 2);
        let img = doc.iter().nth(1).unwrap();
        assert_eq!(img.tag(), "img");
        assert_eq!(img.attr("src"), Some("x.png"));
    }

    #[test]
    fn skips_close_tags_comments_and_text() {
        let doc = parse_fragment(
            "<!-- comment --><ul><li>one</li><li>two</li></ul> trailing text",
        )
        .unwrap();

        let tags: Vec<&str> = doc.iter().map(|el| el.tag()).collect();
        assert_eq!(tags, vec!["ul", "li", "li"]);
    }

    #[test]
    fn errors_on_unclosed_tag() {
        let result = parse_fragment(r#"<div id="tabs""#);

        assert!(matches!(result, Err(MarkupError::UnclosedTag(0))));
    }

    #[test]
    fn empty_fragment_is_an_empty_document() {
        let doc = parse_fragment("").unwrap();

        assert!(doc.is_empty());
    }
}
