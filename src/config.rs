//! Application configuration and constants

// === PAM Loop ===
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
pub const ABBREVIATED_MAX_ITERATIONS: usize = 10;

// === Auto-K Selection ===
/// Below this many sources, K = max(2, n / 2)
pub const AUTO_K_SMALL_N: usize = 20;
/// Up to this many sources, K is fixed (no silhouette search)
pub const AUTO_K_MEDIUM_N: usize = 100;
pub const AUTO_K_FIXED: usize = 20;
/// Silhouette search runs over [AUTO_K_SEARCH_MIN, n / AUTO_K_SEARCH_DIVISOR]
pub const AUTO_K_SEARCH_MIN: usize = 25;
pub const AUTO_K_SEARCH_DIVISOR: usize = 50;

// === Storage ===
pub const REPORT_EXT: &str = "msgpack";

// === Display Defaults ===
pub const DEFAULT_PREVIEW_COUNT: usize = 5;
