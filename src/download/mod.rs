//! Download module for community clips.
//!
//! This module provides:
//! - Clip listing with pagination and deduplication
//! - Single clip downloading with cache and on-disk checks
//! - Per-community and per-run results
//! - The run orchestrator

pub mod clip;
pub mod listing;
pub mod run;
pub mod state;

pub use clip::{ClipDownloader, ClipOutcome, SkipReason};
pub use listing::list_clips;
pub use run::{worker_count, Orchestrator};
pub use state::{AbortReason, CommunityReport, RunReport};
