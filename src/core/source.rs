//! Embedding sources to be clustered

use serde::{Deserialize, Serialize};

/// A single embedding vector with a caller-assigned key.
///
/// All vectors in one clustering call must share the same
/// dimensionality; mismatches propagate from the distance function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
	/// Unique identifier for this source
	pub key: String,
	/// Embedding vector
	pub vec: Vec<f32>,
}

impl Source {
	pub fn new(key: impl Into<String>, vec: Vec<f32>) -> Self {
		Self { key: key.into(), vec }
	}
}
