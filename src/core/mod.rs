//! Core domain types

pub mod cluster;
pub mod source;

pub use cluster::{Cluster, ClusterParams, ClusterReport};
pub use source::Source;
