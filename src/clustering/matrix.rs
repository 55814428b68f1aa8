//! Pairwise distance matrix construction

use rayon::prelude::*;

use crate::clustering::DistanceFn;
use crate::core::Source;

/// Symmetric N×N distance matrix with a zero diagonal.
///
/// Built once per clustering call and discarded afterwards. Memory is
/// O(n²), the dominant scaling constraint; very large inputs should be
/// pre-bucketed by the caller.
pub struct DistanceMatrix {
	n: usize,
	values: Vec<f32>,
}

impl DistanceMatrix {
	/// Compute the upper triangle (n(n-1)/2 distance calls) in
	/// parallel and mirror it to the lower triangle.
	pub fn build(sources: &[Source], distance: &DistanceFn) -> Self {
		let n = sources.len();

		let upper: Vec<Vec<f32>> = (0..n)
			.into_par_iter()
			.map(|i| {
				((i + 1)..n)
					.map(|j| distance(&sources[i].vec, &sources[j].vec))
					.collect()
			})
			.collect();

		let mut values = vec![0.0f32; n * n];
		for (i, row) in upper.iter().enumerate() {
			for (offset, &d) in row.iter().enumerate() {
				let j = i + 1 + offset;
				values[i * n + j] = d;
				values[j * n + i] = d;
			}
		}

		Self { n, values }
	}

	#[inline]
	pub fn get(&self, i: usize, j: usize) -> f32 {
		self.values[i * self.n + j]
	}

	pub fn len(&self) -> usize {
		self.n
	}

	pub fn is_empty(&self) -> bool {
		self.n == 0
	}
}
