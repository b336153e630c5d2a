//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - The per-run reporter and listing spinners
//! - Statistics reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use console::{print_banner, print_config_summary, print_error, print_info, print_warning};
pub use progress::{create_listing_spinner, Reporter};
pub use stats::{print_community_stats, print_run_stats};
