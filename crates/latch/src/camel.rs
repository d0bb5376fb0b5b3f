//! Attribute-name camelization.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_]+").expect("Invalid separator regex"));

static NON_ALNUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("Invalid strip regex"));

static SPACE_CHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" (.)").expect("Invalid capitalize regex"));

/// Convert a hyphen/underscore separated string into a camelCase identifier.
///
/// Runs of `-` and `_` become word boundaries, anything that is not
/// alphanumeric or whitespace is stripped, and the character after each
/// boundary is upper-cased. Case elsewhere is preserved, so `"some-plugin"`
/// and `"somePlugin"` camelize to the same token. Idempotent on its own
/// output; the empty string maps to the empty string.
pub fn camelize(input: &str) -> String {
    let spaced = SEPARATOR_RE.replace_all(input, " ");
    let cleaned = NON_ALNUM_RE.replace_all(&spaced, "");
    let capitalized = SPACE_CHAR_RE.replace_all(&cleaned, |caps: &Captures<'_>| {
        caps[1].to_uppercase()
    });
    capitalized.replace(' ', "")
}
