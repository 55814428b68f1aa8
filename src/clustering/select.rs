//! Cluster-count resolution, including silhouette-guided Auto-K

use rand::rngs::StdRng;

use crate::clustering::matrix::DistanceMatrix;
use crate::clustering::{pam, silhouette, ClusterConfig};
use crate::config::{
	ABBREVIATED_MAX_ITERATIONS, AUTO_K_FIXED, AUTO_K_MEDIUM_N, AUTO_K_SEARCH_DIVISOR,
	AUTO_K_SEARCH_MIN, AUTO_K_SMALL_N,
};
use crate::ui;

/// Resolve the cluster count before the main PAM run.
///
/// An explicit `clusters_ct` wins unless `auto_optimize_k` is set, in
/// which case the count is derived from n: small inputs get n/2
/// (minimum 2), medium inputs a fixed count, and large inputs a
/// silhouette search over abbreviated PAM runs.
pub fn resolve_cluster_count(
	n: usize,
	config: &ClusterConfig,
	matrix: &DistanceMatrix,
	rng: &mut StdRng,
) -> usize {
	if !config.auto_optimize_k {
		if let Some(k) = config.clusters_ct {
			return k;
		}
	}

	if n < AUTO_K_SMALL_N {
		return 2.max(n / 2);
	}
	if n <= AUTO_K_MEDIUM_N {
		return AUTO_K_FIXED;
	}

	search_cluster_count(n, matrix, rng)
}

/// Silhouette search over candidate K in [AUTO_K_SEARCH_MIN, n/50].
///
/// Each candidate gets an abbreviated PAM run; strictly greater mean
/// silhouette wins, so the first-found best K is kept on ties. When
/// n/50 falls below the lower bound the range is empty and the
/// seeded default of AUTO_K_SEARCH_MIN is returned unchanged.
fn search_cluster_count(n: usize, matrix: &DistanceMatrix, rng: &mut StdRng) -> usize {
	let mut best_k = AUTO_K_SEARCH_MIN;
	let mut best_silhouette = f32::NEG_INFINITY;

	let upper = n / AUTO_K_SEARCH_DIVISOR;
	for k in AUTO_K_SEARCH_MIN..=upper {
		let outcome = pam::run(matrix, k, ABBREVIATED_MAX_ITERATIONS, rng);
		let score =
			silhouette::mean_silhouette(matrix, &outcome.assignments, outcome.medoids.len());

		ui::debug(&format!("Auto-K candidate k={}: silhouette {:.4}", k, score));

		if score > best_silhouette {
			best_silhouette = score;
			best_k = k;
		}
	}

	ui::debug(&format!(
		"Auto-K selected k={} (silhouette {:.4})",
		best_k, best_silhouette
	));

	best_k
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use rand::SeedableRng;

	use super::*;
	use crate::clustering::distance::cosine_distance;
	use crate::clustering::DistanceFn;
	use crate::core::Source;

	fn config_with(clusters_ct: Option<usize>, auto: bool) -> ClusterConfig {
		ClusterConfig {
			clusters_ct,
			auto_optimize_k: auto,
			..ClusterConfig::default()
		}
	}

	fn empty_matrix() -> DistanceMatrix {
		let distance: DistanceFn = Arc::new(cosine_distance);
		DistanceMatrix::build(&[], &distance)
	}

	fn sources(n: usize) -> Vec<Source> {
		(0..n)
			.map(|i| {
				let angle = i as f32 * 0.1;
				Source::new(format!("s{}", i), vec![angle.cos(), angle.sin()])
			})
			.collect()
	}

	#[test]
	fn explicit_count_wins() {
		let matrix = empty_matrix();
		let mut rng = StdRng::seed_from_u64(1);
		let k = resolve_cluster_count(500, &config_with(Some(7), false), &matrix, &mut rng);
		assert_eq!(k, 7);
	}

	#[test]
	fn small_inputs_get_half_n_with_floor_of_two() {
		let matrix = empty_matrix();
		let mut rng = StdRng::seed_from_u64(1);
		let config = config_with(None, false);

		assert_eq!(resolve_cluster_count(3, &config, &matrix, &mut rng), 2);
		assert_eq!(resolve_cluster_count(10, &config, &matrix, &mut rng), 5);
		assert_eq!(resolve_cluster_count(19, &config, &matrix, &mut rng), 9);
	}

	#[test]
	fn medium_inputs_get_fixed_count() {
		let matrix = empty_matrix();
		let mut rng = StdRng::seed_from_u64(1);
		let config = config_with(None, false);

		assert_eq!(resolve_cluster_count(20, &config, &matrix, &mut rng), 20);
		assert_eq!(resolve_cluster_count(100, &config, &matrix, &mut rng), 20);
	}

	#[test]
	fn empty_search_range_returns_seeded_default() {
		// n = 101..1249 gives n/50 < 25, so the search loop never runs
		let srcs = sources(120);
		let distance: DistanceFn = Arc::new(cosine_distance);
		let matrix = DistanceMatrix::build(&srcs, &distance);
		let mut rng = StdRng::seed_from_u64(1);

		let k = resolve_cluster_count(120, &config_with(None, false), &matrix, &mut rng);
		assert_eq!(k, AUTO_K_SEARCH_MIN, "degenerate range must return 25");
	}

	#[test]
	fn auto_optimize_overrides_explicit_count() {
		let matrix = empty_matrix();
		let mut rng = StdRng::seed_from_u64(1);
		let k = resolve_cluster_count(10, &config_with(Some(7), true), &matrix, &mut rng);
		assert_eq!(k, 5, "auto_optimize_k must take the heuristic path");
	}
}
