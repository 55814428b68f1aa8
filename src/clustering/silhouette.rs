//! Silhouette scoring for candidate clusterings

use crate::clustering::matrix::DistanceMatrix;

/// Mean silhouette coefficient over all points.
///
/// For point i in cluster c: a(i) is the mean distance to the other
/// members of c (0 for singleton clusters, and that zero stays in the
/// final mean), b(i) is the minimum mean distance to any other
/// non-empty cluster, s(i) = (b - a) / max(a, b).
///
/// Degenerate points score 0: when max(a, b) is zero (all distances
/// identical at zero) and when no other non-empty cluster exists.
/// Used only as a relative ranking signal by the K search.
pub fn mean_silhouette(
	matrix: &DistanceMatrix,
	assignments: &[usize],
	cluster_count: usize,
) -> f32 {
	let n = assignments.len();
	if n == 0 {
		return 0.0;
	}

	let mut members: Vec<Vec<usize>> = vec![Vec::new(); cluster_count];
	for (i, &cluster) in assignments.iter().enumerate() {
		members[cluster].push(i);
	}

	let mut total = 0.0f32;

	for i in 0..n {
		let own = &members[assignments[i]];

		let a = if own.len() <= 1 {
			0.0
		} else {
			let sum: f32 = own
				.iter()
				.filter(|&&j| j != i)
				.map(|&j| matrix.get(i, j))
				.sum();
			sum / (own.len() - 1) as f32
		};

		let mut b = f32::INFINITY;
		for (cluster, other_members) in members.iter().enumerate() {
			if cluster == assignments[i] || other_members.is_empty() {
				continue;
			}
			let mean: f32 = other_members
				.iter()
				.map(|&j| matrix.get(i, j))
				.sum::<f32>() / other_members.len() as f32;
			if mean < b {
				b = mean;
			}
		}

		let denominator = a.max(b);
		if b.is_finite() && denominator > 0.0 {
			total += (b - a) / denominator;
		}
		// else: s(i) = 0, contributes nothing but stays in the count
	}

	total / n as f32
}
