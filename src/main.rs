//! Corral - K-medoids clustering for embedding vectors
//!
//! A command-line tool that partitions embedding vectors into K
//! groups using PAM, with silhouette-based automatic K selection.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;

use corral::cli::{Cli, Command};
use corral::commands;
use corral::commands::cluster::ClusterArgs;
use corral::ui;

fn main() -> Result<()> {
	let cli = Cli::parse();

	ui::Log::set_verbose(cli.verbose);

	match cli.command {
		Command::Cluster {
			input,
			clusters,
			auto_k,
			max_iterations,
			seed,
			metric,
			preview_count,
			export,
			save,
		} => {
			print_header();
			commands::cluster::run(ClusterArgs {
				input: &input,
				clusters,
				auto_k,
				max_iterations,
				seed,
				metric,
				preview_count,
				export: export.as_deref(),
				save: save.as_deref(),
			})
		}
		Command::Show { input, preview_count } => {
			print_header();
			commands::show::run(&input, preview_count)
		}
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
					sub_cmd.print_help()?;
				} else {
					eprintln!("Unknown subcommand: {}", sub);
					cmd.print_help()?;
				}
			} else {
				cmd.print_help()?;
			}
			Ok(())
		}
	}
}

fn print_header() {
	println!();
	println!(
		"{}",
		format!("─── Corral v{} ───", env!("CARGO_PKG_VERSION"))
			.bright_blue()
			.bold()
	);
}
