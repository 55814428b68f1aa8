use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{DEFAULT_MAX_ITERATIONS, DEFAULT_PREVIEW_COUNT};

/// Distance metric for pairwise comparisons
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Metric {
	/// 1 - cosine similarity (for normalized embeddings)
	#[default]
	Cosine,
	/// Euclidean distance (for raw coordinate vectors)
	Euclidean,
}

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.usage(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "corral",
	author,
	version,
	about = "K-medoids clustering for embedding vectors",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {corral} {cluster} {cluster_args}   {cluster_desc}
  {corral} {cluster} {auto_args}        {auto_desc}
  {corral} {show}    {show_args}     {show_desc}",
		title = "Examples:".bright_blue().bold(),
		corral = "corral".bright_blue(),
		cluster = "cluster".yellow(),
		cluster_args = "-i vectors.json -k 8 --seed 42",
		cluster_desc = "Cluster into 8 groups".dimmed(),
		auto_args = "-i vectors.json --auto-k",
		auto_desc = "Pick K automatically".dimmed(),
		show = "show".yellow(),
		show_args = "-i clusters.msgpack",
		show_desc = "Print a saved report".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Cluster embedding vectors from a sources file
	Cluster {
		/// Sources file (JSON array of {key, vec}, or MessagePack)
		#[arg(short = 'i', long = "input")]
		input: PathBuf,

		/// Number of clusters (omit with --auto-k to derive from input)
		#[arg(short = 'k', long = "clusters")]
		clusters: Option<usize>,

		/// Derive the cluster count automatically
		#[arg(long = "auto-k")]
		auto_k: bool,

		/// Maximum assign/update passes
		#[arg(long = "max-iter", default_value_t = DEFAULT_MAX_ITERATIONS)]
		max_iterations: usize,

		/// RNG seed for reproducible medoid initialization
		#[arg(long = "seed")]
		seed: Option<u64>,

		/// Distance metric
		#[arg(short = 'm', long = "metric", default_value = "cosine")]
		metric: Metric,

		/// Members to show per cluster
		#[arg(long = "preview", default_value_t = DEFAULT_PREVIEW_COUNT)]
		preview_count: usize,

		/// Export results as JSON ("-" for stdout)
		#[arg(short = 'e', long = "export", value_name = "PATH")]
		export: Option<PathBuf>,

		/// Save a MessagePack report
		#[arg(short = 's', long = "save", value_name = "PATH")]
		save: Option<PathBuf>,
	},

	/// Print a previously saved cluster report
	Show {
		/// Report file written by 'corral cluster --save'
		#[arg(short = 'i', long = "input")]
		input: PathBuf,

		/// Members to show per cluster
		#[arg(long = "preview", default_value_t = DEFAULT_PREVIEW_COUNT)]
		preview_count: usize,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
