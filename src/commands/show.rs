//! Show command - print a saved cluster report

use std::path::Path;

use anyhow::Result;
use colored::*;

use crate::commands::cluster::print_report;
use crate::storage;
use crate::ui;

pub fn run(input: &Path, preview_count: usize) -> Result<()> {
	let report = storage::load_report(input)?;

	ui::debug(&format!(
		"Report v{} from {}",
		report.version, report.timestamp
	));

	print_report(&report, preview_count);
	eprintln!(
		"\n{}",
		format!("Clustered at: {}", report.timestamp).dimmed()
	);

	Ok(())
}
