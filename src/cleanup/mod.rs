//! Cleanup orchestration.
//!
//! This module provides:
//! - The rename pass followed by the link pass
//! - Run statistics

pub mod pipeline;
pub mod state;

pub use pipeline::run_cleanup;
pub use state::CleanupStats;
