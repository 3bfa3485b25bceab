//! Merge configuration
//!
//! Options are fixed for the duration of one merge invocation and carry no
//! state across calls.

use serde_yaml::Value;

use super::normalize::default_key_string;

/// Depth limit applied when no explicit `max_depth` is configured.
///
/// Inputs are not required to be acyclic, so an implicit ceiling keeps a
/// runaway structure from exhausting the stack.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Converts a mapping key into its canonical string form.
///
/// Receives every key of a mapping being normalized, string keys included.
pub type KeyNormalizer = fn(&Value) -> String;

/// Options for a single merge invocation.
///
/// Constructed with [`MergeOptions::new`] and refined with the `with_*`
/// methods; each option is independent of the others.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeOptions {
    max_depth: Option<usize>,
    append_sequences: bool,
    key_normalizer: Option<KeyNormalizer>,
}

impl MergeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with [`MergeError::TooDeep`](super::MergeError::TooDeep) once
    /// nested mapping merges exceed `limit` levels.
    ///
    /// Depth 0 is the top-level call; each recursive mapping merge adds one.
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Concatenate sequences under a shared key (destination elements first)
    /// instead of letting the source sequence replace the destination's.
    pub fn with_append_sequences(mut self) -> Self {
        self.append_sequences = true;
        self
    }

    /// Use `normalizer` to render mapping keys when building the canonical
    /// string-keyed view of a map-shaped value.
    pub fn with_key_normalizer(mut self, normalizer: KeyNormalizer) -> Self {
        self.key_normalizer = Some(normalizer);
        self
    }

    pub fn append_sequences(&self) -> bool {
        self.append_sequences
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Effective recursion ceiling: the configured limit, else
    /// [`DEFAULT_MAX_DEPTH`].
    pub(crate) fn depth_limit(&self) -> usize {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }

    /// String form of `key` under the configured normalizer.
    pub(crate) fn key_string(&self, key: &Value) -> String {
        match self.key_normalizer {
            Some(normalizer) => normalizer(key),
            None => default_key_string(key),
        }
    }
}
