//! Distance primitives for embedding vectors

/// Cosine similarity between two vectors.
///
/// Returns 0.0 when either vector has zero norm instead of dividing
/// by zero, so degenerate embeddings never poison the matrix.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
	let mut dot = 0.0f32;
	let mut norm_a = 0.0f32;
	let mut norm_b = 0.0f32;

	for (x, y) in a.iter().zip(b.iter()) {
		dot += x * y;
		norm_a += x * x;
		norm_b += y * y;
	}

	if norm_a == 0.0 || norm_b == 0.0 {
		return 0.0;
	}

	dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Default engine distance: 1 - cosine similarity
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
	1.0 - cosine_similarity(a, b)
}

/// Euclidean distance, for callers whose vectors are not normalized
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> f32 {
	a.iter()
		.zip(b.iter())
		.map(|(x, y)| (x - y) * (x - y))
		.sum::<f32>()
		.sqrt()
}
