//! # Corral Library
//!
//! K-medoids (PAM) clustering for embedding vectors.
//! Provides distance-matrix construction, iterative medoid refinement,
//! and silhouette-based automatic cluster-count selection.

pub mod cli;
pub mod clustering;
pub mod commands;
pub mod config;
pub mod core;
pub mod storage;
pub mod ui;

pub use clustering::{cluster_sources, ClusterConfig, DistanceFn};
pub use core::{Cluster, Source};
