//! Partitioning Around Medoids (PAM) iteration

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::clustering::matrix::DistanceMatrix;

/// Assignments and medoids produced by one PAM run.
///
/// `medoids` holds min(requested K, n) indices into the source slice;
/// `assignments[i]` is the position in `medoids` that source i belongs
/// to.
pub struct PamOutcome {
	pub assignments: Vec<usize>,
	pub medoids: Vec<usize>,
}

/// Run the assign/update loop until no medoid changes or
/// `max_iterations` passes have completed.
pub fn run(
	matrix: &DistanceMatrix,
	k: usize,
	max_iterations: usize,
	rng: &mut StdRng,
) -> PamOutcome {
	let n = matrix.len();
	let mut medoids = initial_medoids(n, k, rng);
	let mut assignments = vec![0usize; n];

	for _ in 0..max_iterations {
		assign(matrix, &medoids, &mut assignments);
		if !update(matrix, &mut medoids, &assignments) {
			break;
		}
	}

	PamOutcome { assignments, medoids }
}

/// Shuffle the full index list and take the first min(k, n) entries.
///
/// When k exceeds n the effective medoid set is silently shorter;
/// result assembly pads the output back up to k clusters.
fn initial_medoids(n: usize, k: usize, rng: &mut StdRng) -> Vec<usize> {
	let mut indices: Vec<usize> = (0..n).collect();
	indices.shuffle(rng);
	indices.truncate(k.min(n));
	indices
}

/// Assign every source to its nearest medoid.
///
/// Strict `<` comparison: the earlier medoid wins ties, which keeps
/// output reproducible under a fixed seed.
fn assign(matrix: &DistanceMatrix, medoids: &[usize], assignments: &mut [usize]) {
	for i in 0..matrix.len() {
		let mut best = 0usize;
		let mut best_distance = f32::INFINITY;

		for (cluster, &medoid) in medoids.iter().enumerate() {
			let d = matrix.get(i, medoid);
			if d < best_distance {
				best_distance = d;
				best = cluster;
			}
		}

		assignments[i] = best;
	}
}

/// Re-pick each cluster's medoid as the member minimizing the sum of
/// distances to all other members. Returns true if any medoid moved.
///
/// Empty clusters are skipped and keep their previous medoid.
fn update(matrix: &DistanceMatrix, medoids: &mut [usize], assignments: &[usize]) -> bool {
	let mut changed = false;

	for cluster in 0..medoids.len() {
		let members: Vec<usize> = assignments
			.iter()
			.enumerate()
			.filter(|(_, &a)| a == cluster)
			.map(|(i, _)| i)
			.collect();

		if members.is_empty() {
			continue;
		}

		let mut best = medoids[cluster];
		let mut best_cost = f32::INFINITY;

		for &candidate in &members {
			let cost: f32 = members
				.iter()
				.filter(|&&other| other != candidate)
				.map(|&other| matrix.get(candidate, other))
				.sum();

			// Strict < keeps the earliest minimal member
			if cost < best_cost {
				best_cost = cost;
				best = candidate;
			}
		}

		if best != medoids[cluster] {
			medoids[cluster] = best;
			changed = true;
		}
	}

	changed
}
