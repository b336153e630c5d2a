//! Progress display and the per-run reporter.

use std::path::Path;

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::download::{ClipOutcome, SkipReason};
use crate::output::console::{format_line, Level};

/// Create a spinner counting clips found while listing a community.
pub fn create_listing_spinner(title: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.yellow} Listing clips of {prefix}: {pos}")
            .unwrap(),
    );
    spinner.set_prefix(title.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}

/// Console output context shared by every component of a run.
///
/// Event lines are routed through the same [`MultiProgress`] as the listing
/// spinners so concurrent communities do not garble each other's output.
#[derive(Debug, Clone)]
pub struct Reporter {
    multi: MultiProgress,
    show_downloads: bool,
    show_skipped: bool,
    silent: bool,
}

impl Reporter {
    pub fn new(show_downloads: bool, show_skipped: bool) -> Self {
        Self {
            multi: MultiProgress::new(),
            show_downloads,
            show_skipped,
            silent: false,
        }
    }

    /// Reporter that draws nothing.
    pub fn hidden() -> Self {
        Self {
            multi: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
            show_downloads: false,
            show_skipped: false,
            silent: true,
        }
    }

    fn line(&self, level: Level, message: &str) {
        if self.silent {
            return;
        }
        let line = format_line(level, message);

        // Not attached to a terminal: indicatif draws nothing, print directly
        if self.multi.is_hidden() {
            match level {
                Level::Error | Level::Warning => eprintln!("{}", line),
                _ => println!("{}", line),
            }
            return;
        }

        if self.multi.println(&line).is_err() {
            eprintln!("{}", line);
        }
    }

    pub fn info(&self, message: &str) {
        self.line(Level::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.line(Level::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.line(Level::Error, message);
    }

    /// Add a listing spinner for a community to the shared display.
    pub fn listing_spinner(&self, title: &str) -> ProgressBar {
        if self.multi.is_hidden() {
            return ProgressBar::hidden();
        }
        self.multi.add(create_listing_spinner(title))
    }

    /// Report the result of one clip.
    pub fn clip_outcome(&self, url: &str, outcome: &ClipOutcome) {
        match outcome {
            ClipOutcome::Downloaded(path) => {
                if self.show_downloads {
                    self.line(Level::Success, &format!("Downloaded: {}", display(path)));
                }
            }
            ClipOutcome::Skipped(SkipReason::Cached) => {
                if self.show_skipped {
                    self.line(Level::Skip, &format!("Already in cache: {}", url));
                }
            }
            ClipOutcome::Skipped(SkipReason::FileExists(path)) => {
                if self.show_skipped {
                    self.line(Level::Skip, &format!("Already downloaded: {}", display(path)));
                }
            }
            ClipOutcome::Failed(reason) => {
                self.line(Level::Error, &format!("Download failed for {}:\n{}", url, reason));
            }
        }
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
