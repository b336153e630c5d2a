//! Download cache module.
//!
//! Provides the per-community, append-only record of clip ids that have
//! already been claimed for download.

pub mod store;

pub use store::DownloadCache;
