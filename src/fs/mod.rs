//! Filesystem module.
//!
//! Provides:
//! - Filename sanitization and clip naming
//! - Per-community directory layout

pub mod naming;
pub mod paths;

pub use naming::{clip_filename, escape_output_template, sanitize_filename};
pub use paths::{community_folder, ensure_dir, CommunityPaths};
