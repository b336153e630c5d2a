//! External media engine (yt-dlp) invocation.

use std::path::Path;
use std::process::{Output, Stdio};

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::MediaConfig;
use crate::error::{Error, Result};
use crate::fs::escape_output_template;

/// Title used when the engine reports none.
const FALLBACK_TITLE: &str = "untitled";

/// Stderr lines kept in a failure message.
const STDERR_TAIL_LINES: usize = 20;

/// Metadata-only view of a clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipMetadata {
    pub title: String,
}

/// Resolves player URLs to media and fetches them.
#[async_trait]
pub trait MediaEngine: Send + Sync {
    /// Fetch the displayed title without downloading any media.
    async fn probe(&self, url: &str, proxy: Option<&str>) -> Result<ClipMetadata>;

    /// Download and mux the clip into exactly `output`.
    async fn download(&self, url: &str, output: &Path, proxy: Option<&str>) -> Result<()>;
}

/// Interface for the [yt-dlp](https://github.com/yt-dlp/yt-dlp) program.
#[derive(Debug, Clone)]
pub struct YtDlp {
    program: String,
    format: String,
    check_certificates: bool,
}

impl YtDlp {
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            program: config.program.clone(),
            format: config.format.clone(),
            check_certificates: config.check_certificates,
        }
    }

    /// Verify the binary is reachable and return its version string.
    pub async fn version(&self) -> Result<String> {
        let output = self.run(&["--version".to_string()]).await?;
        if !output.status.success() {
            return Err(Error::Engine(format!(
                "{} --version exited with status: {}",
                self.program, output.status
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Options shared by every invocation.
    fn common_args(&self, proxy: Option<&str>) -> Vec<String> {
        let mut args = vec!["--no-warnings".to_string()];
        if !self.check_certificates {
            args.push("--no-check-certificates".to_string());
        }
        if let Some(proxy) = proxy {
            args.push("--proxy".to_string());
            args.push(proxy.to_string());
        }
        args
    }

    fn probe_args(&self, url: &str, proxy: Option<&str>) -> Vec<String> {
        let mut args = self.common_args(proxy);
        args.extend(["--skip-download", "--dump-json", "--"].map(String::from));
        args.push(url.to_string());
        args
    }

    fn download_args(&self, url: &str, output: &Path, proxy: Option<&str>) -> Vec<String> {
        let mut args = self.common_args(proxy);
        args.extend(
            [
                "--quiet",
                "--no-progress",
                "-f",
                self.format.as_str(),
                "--merge-output-format",
                "mp4",
                "-o",
            ]
            .map(String::from),
        );
        args.push(escape_output_template(&output.to_string_lossy()));
        args.push("--".to_string());
        args.push(url.to_string());
        args
    }

    async fn run(&self, args: &[String]) -> Result<Output> {
        tracing::debug!("Executing {} {:?}", self.program, args);

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::EngineNotFound(self.program.clone())
                } else {
                    Error::Engine(format!("Failed to run {}: {}", self.program, e))
                }
            })?;

        tracing::debug!(
            "{} exited with {} ({} bytes stdout, {} bytes stderr)",
            self.program,
            output.status,
            output.stdout.len(),
            output.stderr.len()
        );

        Ok(output)
    }
}

/// Turn a failed invocation into an error carrying the end of stderr.
fn failure(program: &str, output: &Output) -> Error {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().collect();
    let tail = lines[lines.len().saturating_sub(STDERR_TAIL_LINES)..].join("\n");

    Error::Engine(format!(
        "{} exited with status: {}\n{}",
        program,
        output.status,
        tail.trim()
    ))
}

/// Extract the title from yt-dlp's `--dump-json` output.
pub fn parse_metadata(stdout: &[u8]) -> Result<ClipMetadata> {
    let text = String::from_utf8_lossy(stdout);
    // Playlists print one object per line; the first entry is the clip
    let first = text
        .lines()
        .find(|line| !line.trim().is_empty())
        .ok_or_else(|| Error::Engine("Engine returned no metadata".into()))?;

    let json: serde_json::Value = serde_json::from_str(first)?;
    let title = json
        .get("title")
        .and_then(|t| t.as_str())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(FALLBACK_TITLE)
        .to_string();

    Ok(ClipMetadata { title })
}

#[async_trait]
impl MediaEngine for YtDlp {
    async fn probe(&self, url: &str, proxy: Option<&str>) -> Result<ClipMetadata> {
        let output = self.run(&self.probe_args(url, proxy)).await?;
        if !output.status.success() {
            return Err(failure(&self.program, &output));
        }
        parse_metadata(&output.stdout)
    }

    async fn download(&self, url: &str, output: &Path, proxy: Option<&str>) -> Result<()> {
        let result = self.run(&self.download_args(url, output, proxy)).await?;
        if !result.status.success() {
            return Err(failure(&self.program, &result));
        }
        Ok(())
    }
}
