//! Per-community and per-run results.

use crate::api::Community;
use crate::download::clip::{ClipOutcome, SkipReason};

/// Result of processing one community reference.
#[derive(Debug, Default)]
pub struct CommunityReport {
    /// Reference as it appeared in the input list.
    pub reference: String,

    /// Resolved community, absent when resolution failed.
    pub community: Option<Community>,

    /// Error that stopped this community before its downloads, if any.
    pub error: Option<String>,

    /// One outcome per listed clip.
    pub outcomes: Vec<ClipOutcome>,
}

impl CommunityReport {
    /// Report for a community that could not be processed.
    pub fn failed(reference: &str, error: String) -> Self {
        Self {
            reference: reference.to_string(),
            error: Some(error),
            ..Default::default()
        }
    }

    /// Display name: the community title when known, else the reference.
    pub fn name(&self) -> &str {
        self.community
            .as_ref()
            .map(|c| c.title.as_str())
            .unwrap_or(&self.reference)
    }

    pub fn downloaded_count(&self) -> u64 {
        self.count(|o| matches!(o, ClipOutcome::Downloaded(_)))
    }

    pub fn cached_count(&self) -> u64 {
        self.count(|o| matches!(o, ClipOutcome::Skipped(SkipReason::Cached)))
    }

    pub fn existing_count(&self) -> u64 {
        self.count(|o| matches!(o, ClipOutcome::Skipped(SkipReason::FileExists(_))))
    }

    pub fn failed_count(&self) -> u64 {
        self.count(|o| matches!(o, ClipOutcome::Failed(_)))
    }

    fn count(&self, predicate: impl Fn(&ClipOutcome) -> bool) -> u64 {
        self.outcomes.iter().filter(|o| predicate(o)).count() as u64
    }
}

/// Why a run stopped before processing any community.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    NoValidTokens,
    NoCommunities,
}

/// Aggregated result of a whole run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub valid_tokens: usize,
    pub workers: usize,
    pub aborted: Option<AbortReason>,
    pub communities: Vec<CommunityReport>,
}

impl RunReport {
    pub fn aborted(reason: AbortReason, valid_tokens: usize) -> Self {
        Self {
            valid_tokens,
            aborted: Some(reason),
            ..Default::default()
        }
    }

    pub fn downloaded_count(&self) -> u64 {
        self.communities.iter().map(|c| c.downloaded_count()).sum()
    }

    pub fn skipped_count(&self) -> u64 {
        self.communities
            .iter()
            .map(|c| c.cached_count() + c.existing_count())
            .sum()
    }

    pub fn failed_count(&self) -> u64 {
        self.communities.iter().map(|c| c.failed_count()).sum()
    }

    pub fn communities_failed(&self) -> u64 {
        self.communities.iter().filter(|c| c.error.is_some()).count() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_counts() {
        let report = CommunityReport {
            reference: "apiclub".to_string(),
            community: Some(Community {
                id: -1,
                title: "VK API".to_string(),
            }),
            error: None,
            outcomes: vec![
                ClipOutcome::Downloaded(PathBuf::from("a_1.mp4")),
                ClipOutcome::Skipped(SkipReason::Cached),
                ClipOutcome::Skipped(SkipReason::FileExists(PathBuf::from("b_2.mp4"))),
                ClipOutcome::Failed("boom".to_string()),
                ClipOutcome::Downloaded(PathBuf::from("c_3.mp4")),
            ],
        };

        assert_eq!(report.name(), "VK API");
        assert_eq!(report.downloaded_count(), 2);
        assert_eq!(report.cached_count(), 1);
        assert_eq!(report.existing_count(), 1);
        assert_eq!(report.failed_count(), 1);

        let run = RunReport {
            valid_tokens: 1,
            workers: 1,
            aborted: None,
            communities: vec![report, CommunityReport::failed("bad", "nope".into())],
        };
        assert_eq!(run.downloaded_count(), 2);
        assert_eq!(run.skipped_count(), 2);
        assert_eq!(run.failed_count(), 1);
        assert_eq!(run.communities_failed(), 1);
    }
}
