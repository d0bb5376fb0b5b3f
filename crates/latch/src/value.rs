//! Typed setting values and string coercion.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static INT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("Invalid integer regex"));

static FLOAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d*\.\d+$").expect("Invalid float regex"));

/// A setting value coerced from an attribute string or supplied directly.
///
/// Serializes as the plain scalar (no variant tag), so a settings snapshot
/// exports as ordinary JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl SettingValue {
    /// The integer payload, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The float payload, if this is a `Float`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            SettingValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The boolean payload, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The string payload, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for SettingValue {
    fn from(n: i64) -> Self {
        SettingValue::Int(n)
    }
}

impl From<f64> for SettingValue {
    fn from(f: f64) -> Self {
        SettingValue::Float(f)
    }
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        SettingValue::Bool(b)
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        SettingValue::Str(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        SettingValue::Str(s)
    }
}

/// Classify and convert an attribute string, first match wins:
///
/// 1. one or more digits → [`SettingValue::Int`] (the empty string is NOT
///    an integer),
/// 2. optional digits, a decimal point, required digits →
///    [`SettingValue::Float`],
/// 3. the literals `true`/`false` → [`SettingValue::Bool`],
/// 4. anything else, including the empty string → [`SettingValue::Str`],
///    verbatim.
///
/// A digit run too large for `i64` falls through to `Str`. Total; never
/// fails.
pub fn typify(input: &str) -> SettingValue {
    if INT_RE.is_match(input) {
        if let Ok(n) = input.parse::<i64>() {
            return SettingValue::Int(n);
        }
        return SettingValue::Str(input.to_string());
    }
    if FLOAT_RE.is_match(input) {
        if let Ok(f) = input.parse::<f64>() {
            return SettingValue::Float(f);
        }
    }
    match input {
        "true" => SettingValue::Bool(true),
        "false" => SettingValue::Bool(false),
        _ => SettingValue::Str(input.to_string()),
    }
}
