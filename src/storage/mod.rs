//! Source loading and cluster report persistence

pub mod report;

pub use report::{export_json, load_report, load_sources, save_report};
