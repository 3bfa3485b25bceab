//! mapmerge - deep-merge for layered configuration documents
//!
//! This crate implements the merge primitive behind settings-overlay code:
//! callers hand it a base tree and an override tree and get back a combined
//! tree where override values win, except that nested mappings merge
//! recursively and, optionally, sequences concatenate.
//!
//! Trees are [`serde_yaml::Value`]s, so mappings may carry non-string keys
//! (booleans, numbers, null); the merge normalizes those to canonical string
//! keys on the way through.

pub mod document;
pub mod merge;

pub use merge::{
    default_key_string, merge, merge_layers, merge_value, merge_with, KeyNormalizer, MergeError,
    MergeOptions, DEFAULT_MAX_DEPTH,
};
pub use serde_yaml::{Mapping, Value};
