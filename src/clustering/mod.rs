//! K-medoids (PAM) clustering engine
//!
//! Pure computation: each call builds its own distance matrix, runs
//! the assign/update loop, and assembles the output clusters. No state
//! survives between calls.

pub mod distance;
pub mod matrix;
pub mod pam;
pub mod select;
pub mod silhouette;

use std::sync::Arc;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::DEFAULT_MAX_ITERATIONS;
use crate::core::{Cluster, Source};
use crate::ui;

use matrix::DistanceMatrix;
use pam::PamOutcome;

/// Pluggable distance function; smaller means more similar.
///
/// Metric properties (e.g. triangle inequality) are not required or
/// validated. The engine only compares the returned scalars.
pub type DistanceFn = Arc<dyn Fn(&[f32], &[f32]) -> f32 + Send + Sync>;

/// Engine configuration for one clustering call
#[derive(Clone)]
pub struct ClusterConfig {
	/// Explicit cluster count; may exceed n (output is padded)
	pub clusters_ct: Option<usize>,
	/// Upper bound on assign/update passes
	pub max_iterations: usize,
	/// Derive K from the input instead of clusters_ct
	pub auto_optimize_k: bool,
	/// Distance function, defaults to 1 - cosine similarity
	pub distance_fn: Option<DistanceFn>,
	/// RNG seed for the medoid shuffle; None draws from the OS
	pub seed: Option<u64>,
}

impl Default for ClusterConfig {
	fn default() -> Self {
		Self {
			clusters_ct: None,
			max_iterations: DEFAULT_MAX_ITERATIONS,
			auto_optimize_k: false,
			distance_fn: None,
			seed: None,
		}
	}
}

/// Partition sources into K clusters around medoids.
///
/// Returns exactly K clusters (resolved per the config), padding with
/// empty entries when K exceeds the number of sources. An empty input
/// returns an empty list without touching the distance function.
pub fn cluster_sources(sources: &[Source], config: &ClusterConfig) -> Result<Vec<Cluster>> {
	validate(sources, config)?;

	if sources.is_empty() {
		return Ok(Vec::new());
	}

	let distance = config
		.distance_fn
		.clone()
		.unwrap_or_else(|| Arc::new(distance::cosine_distance) as DistanceFn);

	ui::debug(&format!(
		"Building {n}x{n} distance matrix ({} distance calls)",
		sources.len() * (sources.len() - 1) / 2,
		n = sources.len()
	));
	let matrix = DistanceMatrix::build(sources, &distance);

	let mut rng = match config.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	};

	let k = select::resolve_cluster_count(sources.len(), config, &matrix, &mut rng);
	ui::debug(&format!("Clustering {} sources into {} clusters", sources.len(), k));

	let outcome = pam::run(&matrix, k, config.max_iterations, &mut rng);

	Ok(assemble(sources, &outcome, k))
}

fn validate(sources: &[Source], config: &ClusterConfig) -> Result<()> {
	if config.max_iterations == 0 {
		anyhow::bail!("max_iterations must be at least 1");
	}
	if config.clusters_ct == Some(0) {
		anyhow::bail!("clusters_ct must be at least 1");
	}

	let mut seen = std::collections::HashSet::with_capacity(sources.len());
	for source in sources {
		if !seen.insert(source.key.as_str()) {
			anyhow::bail!("duplicate source key: {}", source.key);
		}
	}

	Ok(())
}

/// Build the output list: always exactly k entries, members in
/// original input order, centers resolved from the medoid set.
///
/// The effective medoid set can be shorter than k (when k > n); the
/// extra entries stay empty with no center. This padding is a
/// documented contract, not an accident.
fn assemble(sources: &[Source], outcome: &PamOutcome, k: usize) -> Vec<Cluster> {
	let mut clusters: Vec<Cluster> = (0..k)
		.map(|id| Cluster {
			key: format!("cluster-{}", id),
			center_source_key: None,
			members: Vec::new(),
			number_of_members: 0,
		})
		.collect();

	for (i, &cluster) in outcome.assignments.iter().enumerate() {
		clusters[cluster].members.push(sources[i].key.clone());
	}

	for (id, cluster) in clusters.iter_mut().enumerate() {
		cluster.number_of_members = cluster.members.len();
		if !cluster.members.is_empty() {
			if let Some(&medoid) = outcome.medoids.get(id) {
				cluster.center_source_key = Some(sources[medoid].key.clone());
			}
		}
	}

	clusters
}
