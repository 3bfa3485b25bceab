//! Recursive merge routine
//!
//! Conflict policy: the source value wins, except when both sides are
//! map-shaped (recurse) or, in append mode, both sides are sequences
//! (concatenate). The destination is mutated in place; the source is only
//! read.

use serde_yaml::{Mapping, Value};

use super::normalize::as_mapping;
use super::options::MergeOptions;

/// Merge failures.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MergeError {
    /// Nested mapping merges exceeded the depth limit.
    #[error("mappings nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// Merge `src` into `dst` with default options.
///
/// See [`merge_with`] for the full contract.
pub fn merge(dst: &mut Mapping, src: &Mapping) -> Result<(), MergeError> {
    merge_with(dst, src, &MergeOptions::default())
}

/// Merge `src` into `dst`, resolving key conflicts by preferring `src`, or
/// by recursively descending if both values are map-shaped.
///
/// `dst` is mutated in place. On a [`MergeError::TooDeep`] failure the merge
/// aborts immediately and `dst` keeps whatever was merged before the deep
/// branch was reached; the operation is not transactional. `src` is never
/// mutated, and merged content is cloned from it, so the result shares no
/// structure with `src`.
///
/// Depth counts nested mapping merges only; sequences nested inside
/// sequences are not bounded by the limit.
///
/// ```
/// use mapmerge::{merge_with, Mapping, MergeOptions};
///
/// let mut base: Mapping =
///     serde_yaml::from_str(r#"{"server": {"host": "localhost", "port": 8080}}"#).unwrap();
/// let overlay: Mapping =
///     serde_yaml::from_str(r#"{"server": {"port": 9090}}"#).unwrap();
///
/// merge_with(&mut base, &overlay, &MergeOptions::new()).unwrap();
///
/// let expected: Mapping =
///     serde_yaml::from_str(r#"{"server": {"host": "localhost", "port": 9090}}"#).unwrap();
/// assert_eq!(base, expected);
/// ```
pub fn merge_with(
    dst: &mut Mapping,
    src: &Mapping,
    options: &MergeOptions,
) -> Result<(), MergeError> {
    merge_at(dst, src, 0, options)
}

/// Value-level merge: if both sides are map-shaped their mappings are
/// merged, otherwise `overlay` wins outright.
pub fn merge_value(
    base: Value,
    overlay: &Value,
    options: &MergeOptions,
) -> Result<Value, MergeError> {
    match (as_mapping(&base, options), as_mapping(overlay, options)) {
        (Some(mut dst), Some(src)) => {
            merge_at(&mut dst, &src, 0, options)?;
            Ok(Value::Mapping(dst))
        }
        _ => Ok(overlay.clone()),
    }
}

/// Merge config layers in order: the first layer is the base, later layers
/// take precedence.
pub fn merge_layers(layers: Vec<Value>, options: &MergeOptions) -> Result<Value, MergeError> {
    let mut merged = Value::Null;
    for layer in &layers {
        merged = merge_value(merged, layer, options)?;
    }
    Ok(merged)
}

fn merge_at(
    dst: &mut Mapping,
    src: &Mapping,
    depth: usize,
    options: &MergeOptions,
) -> Result<(), MergeError> {
    let limit = options.depth_limit();
    if depth > limit {
        return Err(MergeError::TooDeep { limit });
    }

    for (key, src_val) in src {
        let resolved = match dst.get(key) {
            Some(dst_val) => resolve_conflict(dst_val, src_val, depth, options)?,
            None => src_val.clone(),
        };
        dst.insert(key.clone(), resolved);
    }
    Ok(())
}

fn resolve_conflict(
    dst_val: &Value,
    src_val: &Value,
    depth: usize,
    options: &MergeOptions,
) -> Result<Value, MergeError> {
    if let (Some(mut dst_map), Some(src_map)) =
        (as_mapping(dst_val, options), as_mapping(src_val, options))
    {
        merge_at(&mut dst_map, &src_map, depth + 1, options)?;
        return Ok(Value::Mapping(dst_map));
    }

    if options.append_sequences() {
        if let (Value::Sequence(dst_seq), Value::Sequence(src_seq)) = (dst_val, src_val) {
            let mut appended = dst_seq.clone();
            appended.extend(src_seq.iter().cloned());
            return Ok(Value::Sequence(appended));
        }
    }

    Ok(src_val.clone())
}
