//! Statistics reporting.

use console::style;

use crate::download::{AbortReason, CommunityReport, RunReport};

/// Print statistics for a single community.
pub fn print_community_stats(report: &CommunityReport) {
    println!();
    println!(
        "{}",
        style(format!("Statistics for {}:", report.name())).bold()
    );

    if let Some(error) = &report.error {
        println!("  Failed:     {}", style(error).red());
        return;
    }

    println!("  Clips:      {}", report.outcomes.len());
    println!("  Downloaded: {}", report.downloaded_count());
    println!("  Cached:     {} (skipped)", report.cached_count());
    println!("  On disk:    {} (skipped)", report.existing_count());
    if report.failed_count() > 0 {
        println!("  Failed:     {}", style(report.failed_count()).red());
    }
}

/// Print statistics across all communities of a run.
pub fn print_run_stats(report: &RunReport) {
    if let Some(reason) = report.aborted {
        let message = match reason {
            AbortReason::NoValidTokens => "no valid tokens",
            AbortReason::NoCommunities => "no community links",
        };
        println!();
        println!("{} {}", style("Nothing to do:").yellow().bold(), message);
        return;
    }

    for community in &report.communities {
        print_community_stats(community);
    }

    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Global Statistics:").bold());
    println!("  Valid tokens:        {}", report.valid_tokens);
    println!("  Workers:             {}", report.workers);
    println!("  Communities:         {}", report.communities.len());
    if report.communities_failed() > 0 {
        println!(
            "  Communities failed:  {}",
            style(report.communities_failed()).red()
        );
    }
    println!("  Downloaded:          {}", style(report.downloaded_count()).green());
    println!("  Skipped:             {}", style(report.skipped_count()).yellow());
    if report.failed_count() > 0 {
        println!("  Failed:              {}", style(report.failed_count()).red());
    }
    println!("{}", style("═".repeat(50)).dim());
}
