//! Reading source files and persisting cluster reports
//!
//! Sources come in as JSON (or MessagePack, by extension); saved
//! reports are MessagePack, exports are pretty-printed JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::REPORT_EXT;
use crate::core::{ClusterReport, Source};
use crate::ui;

/// Load sources from a JSON or MessagePack file.
pub fn load_sources(path: &Path) -> Result<Vec<Source>> {
	let bytes = fs::read(path)
		.with_context(|| format!("Failed to read sources from {}", path.display()))?;

	let sources: Vec<Source> = if is_msgpack(path) {
		rmp_serde::from_slice(&bytes)
			.with_context(|| format!("Invalid MessagePack sources in {}", path.display()))?
	} else {
		serde_json::from_slice(&bytes)
			.with_context(|| format!("Invalid JSON sources in {}", path.display()))?
	};

	ui::debug(&format!("Loaded {} sources from {}", sources.len(), path.display()));
	Ok(sources)
}

/// Save a cluster report as MessagePack.
pub fn save_report(path: &Path, report: &ClusterReport) -> Result<()> {
	if let Some(parent) = path.parent() {
		if !parent.as_os_str().is_empty() {
			fs::create_dir_all(parent)?;
		}
	}

	let bytes = rmp_serde::to_vec(report).context("Failed to serialize report")?;
	fs::write(path, bytes)
		.with_context(|| format!("Failed to write report to {}", path.display()))?;

	ui::success(&format!("Saved report to {}", path.display()));
	Ok(())
}

/// Load a previously saved MessagePack report.
pub fn load_report(path: &Path) -> Result<ClusterReport> {
	let bytes = fs::read(path)
		.with_context(|| format!("Failed to read report from {}", path.display()))?;

	rmp_serde::from_slice(&bytes)
		.with_context(|| format!("Invalid report file {}", path.display()))
}

/// Export a report as pretty JSON; "-" or an empty path writes to stdout.
pub fn export_json(report: &ClusterReport, export_path: &Path) -> Result<()> {
	let json = serde_json::to_string_pretty(report)?;

	if export_path.to_str() == Some("-") || export_path.as_os_str().is_empty() {
		println!("{}", json);
	} else {
		fs::write(export_path, json)
			.with_context(|| format!("Failed to write export to {}", export_path.display()))?;
		ui::success(&format!("Exported to {}", export_path.display()));
	}

	Ok(())
}

fn is_msgpack(path: &Path) -> bool {
	path.extension().and_then(|s| s.to_str()) == Some(REPORT_EXT)
}
