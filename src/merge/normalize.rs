//! Mapping normalization
//!
//! The merge routine compares values structurally: anything map-shaped is
//! first rebuilt as a canonical string-keyed mapping so that mappings decoded
//! from different formats (JSON objects always have string keys, YAML
//! mappings may key on booleans, numbers, or null) merge uniformly.

use serde_yaml::{Mapping, Value};

use super::options::MergeOptions;

/// Returns the canonical string-keyed view of `value` if it is map-shaped,
/// `None` otherwise.
///
/// The input is never mutated; keys are rendered through the configured
/// normalizer and values are cloned into a fresh mapping. Two distinct keys
/// that normalize to the same string collapse last-write-wins, in the input
/// mapping's iteration order.
pub(crate) fn as_mapping(value: &Value, options: &MergeOptions) -> Option<Mapping> {
    let Value::Mapping(map) = value else {
        return None;
    };

    let mut canonical = Mapping::with_capacity(map.len());
    for (key, val) in map {
        canonical.insert(Value::String(options.key_string(key)), val.clone());
    }
    Some(canonical)
}

/// Natural string spelling of a mapping key.
///
/// Scalars render as their YAML spellings (`null`, `true`, `1.5`); compound
/// keys fall back to their serialized YAML form.
pub fn default_key_string(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn test_non_mappings_are_not_map_shaped() {
        let options = MergeOptions::new();
        assert_eq!(as_mapping(&Value::Null, &options), None);
        assert_eq!(as_mapping(&value("[1, 2]"), &options), None);
        assert_eq!(as_mapping(&value("plain"), &options), None);
        assert_eq!(as_mapping(&value("3.5"), &options), None);
    }

    #[test]
    fn test_string_keyed_mapping_passes_through() {
        let options = MergeOptions::new();
        let input = value(r#"{"host": "localhost", "port": 22}"#);
        let canonical = as_mapping(&input, &options).unwrap();
        assert_eq!(Value::Mapping(canonical), input);
    }

    #[test]
    fn test_foreign_keys_are_stringified() {
        let options = MergeOptions::new();
        let input = value("true: 1\n7: 2\nnull: 3\n");
        let canonical = as_mapping(&input, &options).unwrap();
        let expected: Mapping =
            serde_yaml::from_str(r#"{"true": 1, "7": 2, "null": 3}"#).unwrap();
        assert_eq!(canonical, expected);
    }

    #[test]
    fn test_input_is_left_intact() {
        let options = MergeOptions::new();
        let input = value("false: here\n");
        let before = input.clone();
        as_mapping(&input, &options).unwrap();
        assert_eq!(input, before);
    }

    #[test]
    fn test_colliding_keys_resolve_last_write_wins() {
        let options = MergeOptions::new();
        // Bool(true) and the string "true" normalize to the same key; the
        // later entry wins.
        let input = value("true: first\n\"true\": second\n");
        let canonical = as_mapping(&input, &options).unwrap();
        assert_eq!(canonical.len(), 1);
        assert_eq!(
            canonical.get("true"),
            Some(&Value::String("second".into()))
        );
    }

    #[test]
    fn test_normalizer_applies_to_every_key() {
        fn prefixed(key: &Value) -> String {
            format!("k_{}", default_key_string(key))
        }

        let options = MergeOptions::new().with_key_normalizer(prefixed);
        let input = value("name: a\n2: b\n");
        let canonical = as_mapping(&input, &options).unwrap();
        assert!(canonical.get("k_name").is_some());
        assert!(canonical.get("k_2").is_some());
    }

    #[test]
    fn test_default_key_spellings() {
        assert_eq!(default_key_string(&Value::String("x".into())), "x");
        assert_eq!(default_key_string(&Value::Bool(false)), "false");
        assert_eq!(default_key_string(&value("12")), "12");
        assert_eq!(default_key_string(&value("1.5")), "1.5");
        assert_eq!(default_key_string(&Value::Null), "null");
    }
}
