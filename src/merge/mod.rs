//! Deep-merge engine
//!
//! Resolves key conflicts by preferring the source value, recursing when
//! both sides are map-shaped, and optionally concatenating sequences.

mod deep;
mod normalize;
mod options;

pub use deep::{merge, merge_layers, merge_value, merge_with, MergeError};
pub use normalize::default_key_string;
pub use options::{KeyNormalizer, MergeOptions, DEFAULT_MAX_DEPTH};
