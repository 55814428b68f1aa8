//! Cluster command - group embedding vectors around medoids

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use colored::*;

use crate::cli::Metric;
use crate::clustering::{cluster_sources, distance, ClusterConfig, DistanceFn};
use crate::core::{ClusterParams, ClusterReport};
use crate::storage;
use crate::ui;

pub struct ClusterArgs<'a> {
	pub input: &'a Path,
	pub clusters: Option<usize>,
	pub auto_k: bool,
	pub max_iterations: usize,
	pub seed: Option<u64>,
	pub metric: Metric,
	pub preview_count: usize,
	pub export: Option<&'a Path>,
	pub save: Option<&'a Path>,
}

pub fn run(args: ClusterArgs) -> Result<()> {
	let start = Instant::now();

	let sources = storage::load_sources(args.input)?;
	if sources.is_empty() {
		ui::warn("No sources to cluster");
		return Ok(());
	}

	ui::info(&format!("Loaded {} sources", sources.len()));
	if let Some(first) = sources.first() {
		ui::debug(&format!("Embedding dimension: {}D", first.vec.len()));
	}

	let distance_fn: Option<DistanceFn> = match args.metric {
		Metric::Cosine => None,
		Metric::Euclidean => Some(Arc::new(distance::euclidean_distance)),
	};

	let config = ClusterConfig {
		clusters_ct: args.clusters,
		max_iterations: args.max_iterations,
		auto_optimize_k: args.auto_k,
		distance_fn,
		seed: args.seed,
	};

	let clusters = cluster_sources(&sources, &config)?;

	let report = ClusterReport {
		version: env!("CARGO_PKG_VERSION").to_string(),
		timestamp: chrono::Utc::now().to_rfc3339(),
		params: ClusterParams {
			clusters_ct: args.clusters,
			max_iterations: args.max_iterations,
			auto_optimize_k: args.auto_k,
			seed: args.seed,
		},
		clusters,
		total_sources: sources.len(),
	};

	log_summary(&report);

	if let Some(save_path) = args.save {
		storage::save_report(save_path, &report)?;
	}

	if let Some(export_path) = args.export {
		return storage::export_json(&report, export_path);
	}

	print_report(&report, args.preview_count);
	eprintln!(
		"\n{}",
		format!("Completed in {:.1}s", start.elapsed().as_secs_f32()).dimmed()
	);

	Ok(())
}

fn log_summary(report: &ClusterReport) {
	let populated = report.populated_count();
	ui::debug(&format!(
		"{} clusters ({} populated, {} empty)",
		report.clusters.len(),
		populated,
		report.clusters.len() - populated
	));

	if populated > 0 {
		let sizes: Vec<usize> = report
			.clusters
			.iter()
			.filter(|c| c.number_of_members > 0)
			.map(|c| c.number_of_members)
			.collect();
		let avg = sizes.iter().sum::<usize>() as f32 / sizes.len() as f32;
		ui::debug(&format!(
			"Cluster sizes: min={}, max={}, avg={:.1}",
			sizes.iter().min().unwrap_or(&0),
			sizes.iter().max().unwrap_or(&0),
			avg
		));
	}
}

/// Print clusters with a member preview, empty padding entries last.
pub fn print_report(report: &ClusterReport, preview_count: usize) {
	ui::success(&format!(
		"{} clusters, {} sources",
		report.clusters.len(),
		report.total_sources
	));

	for cluster in &report.clusters {
		if cluster.number_of_members == 0 {
			continue;
		}

		eprintln!(
			"\n{} {} ({} members)",
			"Cluster".bright_white(),
			cluster.key.bright_cyan(),
			cluster.number_of_members
		);

		if let Some(center) = &cluster.center_source_key {
			eprintln!("  {}: {}", "Center".dimmed(), center.bright_white());
		}

		for (i, member) in cluster.members.iter().take(preview_count).enumerate() {
			eprintln!("  {} {}", format!("[{}]", i + 1).dimmed(), member);
		}

		if cluster.number_of_members > preview_count {
			eprintln!(
				"  {}",
				format!("... and {} more", cluster.number_of_members - preview_count).dimmed()
			);
		}
	}

	let empty = report.clusters.len() - report.populated_count();
	if empty > 0 {
		eprintln!(
			"\n{}",
			format!("{} empty clusters (requested K exceeds sources)", empty).bright_yellow()
		);
	}
}
