//! Layered settings maps.

use std::collections::HashMap;

use serde::Serialize;

use crate::value::SettingValue;

/// An unordered mapping from setting keys to typed values.
///
/// Instance settings are layered lowest to highest precedence: factory
/// defaults, then the source element's `data-*` attributes, then per-call
/// options. Later layers overwrite earlier keys via [`overlay`](Settings::overlay);
/// values keep whatever type their originating layer produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Settings(HashMap<String, SettingValue>);

impl Settings {
    /// Create an empty settings map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any existing value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<SettingValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.0.get(key)
    }

    /// Whether the key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy every entry of a higher-precedence layer over this one.
    pub fn overlay(&mut self, layer: &Settings) {
        for (key, value) in &layer.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Iterate over `(key, value)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Settings
where
    K: Into<String>,
    V: Into<SettingValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn overlay_overwrites_existing_keys() {
        let mut settings: Settings = [("foo", "bar"), ("keep", "me")].into_iter().collect();
        let layer: Settings = [("foo", "baz")].into_iter().collect();

        settings.overlay(&layer);

        assert_eq!(settings.get("foo"), Some(&SettingValue::from("baz")));
        assert_eq!(settings.get("keep"), Some(&SettingValue::from("me")));
        assert_eq!(settings.len(), 2);
    }

    #[test]
    fn overlay_keeps_the_layers_value_type() {
        let mut settings: Settings = [("count", "3")].into_iter().collect();
        let layer: Settings = [("count", 5i64)].into_iter().collect();

        settings.overlay(&layer);

        assert_eq!(settings.get("count"), Some(&SettingValue::Int(5)));
    }

    #[test]
    fn unset_keys_fall_through() {
        let mut settings: Settings = [("foo", "bar")].into_iter().collect();
        settings.overlay(&Settings::new());

        assert_eq!(settings.get("foo"), Some(&SettingValue::from("bar")));
    }

    #[test]
    fn exports_as_plain_json_object() {
        let mut settings = Settings::new();
        settings.insert("speed", 300i64);
        settings.insert("active", true);

        let json: serde_json::Value = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["speed"], 300);
        assert_eq!(json["active"], true);
    }
}
