//! Cluster data structures for k-medoids clustering

use serde::{Deserialize, Serialize};

/// A single cluster of similar sources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
	/// Cluster key ("cluster-0", "cluster-1", ...)
	pub key: String,
	/// Key of the medoid source, None for empty/padded clusters
	pub center_source_key: Option<String>,
	/// Member source keys in original input order
	pub members: Vec<String>,
	/// Always equals members.len()
	pub number_of_members: usize,
}

/// Complete clustering result for one input set
#[derive(Debug, Serialize, Deserialize)]
pub struct ClusterReport {
	/// Corral version that created this
	pub version: String,
	/// When clustering was performed
	pub timestamp: String,
	/// Parameters used
	pub params: ClusterParams,
	/// All clusters, including empty padding entries
	pub clusters: Vec<Cluster>,
	/// Total sources clustered
	pub total_sources: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterParams {
	pub clusters_ct: Option<usize>,
	pub max_iterations: usize,
	pub auto_optimize_k: bool,
	pub seed: Option<u64>,
}

impl ClusterReport {
	/// Clusters that actually hold members (excludes padding)
	pub fn populated_count(&self) -> usize {
		self.clusters.iter().filter(|c| c.number_of_members > 0).count()
	}
}
