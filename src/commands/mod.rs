//! # Command Implementations
//!
//! Each submodule handles one CLI command (cluster, show).

pub mod cluster;
pub mod show;
