//! Configuration validation and input parsing.

use std::fmt;

use regex::Regex;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Largest page accepted by the `video.get` method.
pub const MAX_PAGE_SIZE: u32 = 200;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_page_size(config.options.page_size)?;

    if config.options.concurrent_downloads == 0 {
        return Err(Error::ConfigValidation {
            field: "concurrent_downloads".to_string(),
            message: "Must be at least 1".to_string(),
        });
    }

    if config.media.program.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "program".to_string(),
            message: "Media engine program cannot be empty".to_string(),
        });
    }

    if config.api.version.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "version".to_string(),
            message: "API version cannot be empty".to_string(),
        });
    }

    url::Url::parse(&config.api.base_url).map_err(|e| Error::ConfigValidation {
        field: "base_url".to_string(),
        message: format!("'{}' is not a valid URL: {}", config.api.base_url, e),
    })?;

    Ok(())
}

/// Validate the listing page size.
pub fn validate_page_size(page_size: u32) -> Result<()> {
    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(Error::ConfigValidation {
            field: "page_size".to_string(),
            message: format!(
                "Page size must be between 1 and {} (got {})",
                MAX_PAGE_SIZE, page_size
            ),
        });
    }
    Ok(())
}

/// Identifier extracted from a community reference, ready for `groups.getById`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupHandle {
    /// Numeric group id (always positive).
    Id(u64),
    /// Short name, e.g. `apiclub`.
    ScreenName(String),
}

impl fmt::Display for GroupHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupHandle::Id(id) => write!(f, "{}", id),
            GroupHandle::ScreenName(name) => write!(f, "{}", name),
        }
    }
}

/// Extract a group handle from a community URL or bare handle.
///
/// Accepts `https://vk.com/apiclub`, `vk.com/club123`, `public123`, `-123`,
/// `123` and section links carrying an owner marker such as `videos-123`.
pub fn parse_group_reference(reference: &str) -> Result<GroupHandle> {
    let reference = reference.trim();
    let tail = reference_tail(reference)
        .ok_or_else(|| Error::InvalidGroupReference(reference.to_string()))?;

    let prefixed = Regex::new(r"^(?:club|public|event)(\d+)$").unwrap();
    let numeric = Regex::new(r"^-?(\d+)$").unwrap();
    let owner_marker = Regex::new(r"^[a-z]+-(\d+)(?:_\d+)?$").unwrap();
    let screen_name = Regex::new(r"^[A-Za-z0-9_.]+$").unwrap();

    for pattern in [&prefixed, &numeric, &owner_marker] {
        if let Some(captures) = pattern.captures(tail) {
            let id = captures[1]
                .parse::<u64>()
                .map_err(|_| Error::InvalidGroupReference(reference.to_string()))?;
            if id == 0 {
                return Err(Error::InvalidGroupReference(reference.to_string()));
            }
            return Ok(GroupHandle::Id(id));
        }
    }

    if screen_name.is_match(tail) {
        return Ok(GroupHandle::ScreenName(tail.to_string()));
    }

    Err(Error::InvalidGroupReference(reference.to_string()))
}

/// Last non-empty path segment of a URL, or the whole string for bare handles.
fn reference_tail(reference: &str) -> Option<&str> {
    // Query and fragment never carry the handle
    let without_query = reference
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    let tail = without_query
        .rsplit('/')
        .find(|segment| !segment.is_empty())?;

    // A bare host such as "vk.com" or "https://" has no handle
    if tail.ends_with(':') || (without_query.contains('/') && is_host_only(without_query, tail)) {
        return None;
    }

    Some(tail)
}

fn is_host_only(path: &str, tail: &str) -> bool {
    let after_scheme = path.split_once("://").map(|(_, rest)| rest).unwrap_or(path);
    after_scheme.trim_end_matches('/') == tail
}
