//! Media module.
//!
//! Provides:
//! - Clip identity parsing
//! - The external media engine (yt-dlp) interface

pub mod clip;
pub mod engine;

pub use clip::Clip;
pub use engine::{ClipMetadata, MediaEngine, YtDlp};
