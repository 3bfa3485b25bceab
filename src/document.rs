//! Input acquisition and output rendering
//!
//! The merge engine only ever sees in-memory trees; this module is the
//! boundary where text formats come in and go out. Input files are decoded
//! by extension (JSON, TOML, or YAML) into the common node model.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::merge::default_key_string;

/// Document decode/encode errors.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Format error: {0}")]
    FormatError(String),

    #[error("Render error: {0}")]
    RenderError(String),
}

/// Load a document, decoding by file extension.
pub fn load(path: &Path) -> Result<Value, DocumentError> {
    let contents =
        fs::read_to_string(path).map_err(|e| DocumentError::IoError(e.to_string()))?;

    match extension(path) {
        "json" => {
            let parsed: serde_json::Value = serde_json::from_str(&contents)
                .map_err(|e| DocumentError::ParseError(format!("invalid JSON: {}", e)))?;
            Ok(json_to_node(parsed))
        }
        "toml" => {
            let parsed: toml::Value = toml::from_str(&contents)
                .map_err(|e| DocumentError::ParseError(format!("invalid TOML: {}", e)))?;
            Ok(toml_to_node(parsed))
        }
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .map_err(|e| DocumentError::ParseError(format!("invalid YAML: {}", e))),
        other => Err(DocumentError::FormatError(format!(
            "unrecognized extension '{}' (expected json, toml, yaml, or yml)",
            other
        ))),
    }
}

/// File extension used for format dispatch.
pub fn extension(path: &Path) -> &str {
    path.extension().and_then(|e| e.to_str()).unwrap_or("")
}

/// Render a tree as pretty-printed JSON.
///
/// Non-string mapping keys are stringified with
/// [`default_key_string`](crate::merge::default_key_string); floats JSON
/// cannot represent degrade to null.
pub fn to_json_string(value: &Value) -> Result<String, DocumentError> {
    serde_json::to_string_pretty(&node_to_json(value))
        .map_err(|e| DocumentError::RenderError(e.to_string()))
}

/// Render a tree as YAML.
pub fn to_yaml_string(value: &Value) -> Result<String, DocumentError> {
    serde_yaml::to_string(value).map_err(|e| DocumentError::RenderError(e.to_string()))
}

/// Convert a decoded JSON tree into the node model.
fn json_to_node(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else {
                n.as_f64()
                    .map(|f| Value::Number(f.into()))
                    .unwrap_or(Value::Null)
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => {
            Value::Sequence(arr.into_iter().map(json_to_node).collect())
        }
        serde_json::Value::Object(map) => {
            let mut mapping = Mapping::with_capacity(map.len());
            for (k, v) in map {
                mapping.insert(Value::String(k), json_to_node(v));
            }
            Value::Mapping(mapping)
        }
    }
}

/// Convert a decoded TOML tree into the node model.
fn toml_to_node(toml: toml::Value) -> Value {
    match toml {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => Value::Number(f.into()),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            Value::Sequence(arr.into_iter().map(toml_to_node).collect())
        }
        toml::Value::Table(table) => {
            let mut mapping = Mapping::with_capacity(table.len());
            for (k, v) in table {
                mapping.insert(Value::String(k), toml_to_node(v));
            }
            Value::Mapping(mapping)
        }
    }
}

/// Convert a node tree into a JSON value for display.
fn node_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                serde_json::Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                serde_json::Value::Number(u.into())
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null)
            }
        }
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Sequence(seq) => {
            serde_json::Value::Array(seq.iter().map(node_to_json).collect())
        }
        Value::Mapping(map) => {
            let mut object = serde_json::Map::with_capacity(map.len());
            for (k, v) in map {
                object.insert(default_key_string(k), node_to_json(v));
            }
            serde_json::Value::Object(object)
        }
        Value::Tagged(tagged) => node_to_json(&tagged.value),
    }
}
