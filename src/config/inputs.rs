//! Plain-text input lists: tokens, community links and proxies.

use std::path::Path;

use regex::Regex;

use crate::error::{Error, Result};

/// Read a one-value-per-line file, trimming whitespace and dropping blank lines.
pub async fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::MissingInput(path.display().to_string())
        } else {
            Error::Io(e)
        }
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Convert an `ip:port:username:password` line into an HTTP proxy URL.
pub fn parse_proxy_line(line: &str) -> Result<String> {
    let line = line.trim();
    let pattern = Regex::new(r"^(\d+\.\d+\.\d+\.\d+):(\d+):(\w+):(\w+)$").unwrap();

    let captures = pattern
        .captures(line)
        .ok_or_else(|| Error::InvalidProxy(line.to_string()))?;

    Ok(format!(
        "http://{}:{}@{}:{}",
        &captures[3], &captures[4], &captures[1], &captures[2]
    ))
}

/// Read a proxy list, excluding malformed lines with a warning.
pub async fn read_proxies(path: &Path) -> Result<Vec<String>> {
    let lines = read_lines(path).await?;
    let mut proxies = Vec::with_capacity(lines.len());

    for line in &lines {
        match parse_proxy_line(line) {
            Ok(proxy) => proxies.push(proxy),
            Err(e) => tracing::warn!("{}", e),
        }
    }

    tracing::debug!("Loaded {} of {} proxies", proxies.len(), lines.len());
    Ok(proxies)
}
