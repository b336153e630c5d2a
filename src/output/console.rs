//! Console output utilities.

use console::{style, StyledObject};

/// Severity prefix of a console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Skip,
    Warning,
    Error,
}

impl Level {
    fn prefix(self) -> StyledObject<&'static str> {
        match self {
            Level::Info => style("INFO").cyan().bold(),
            Level::Success => style("OK").green().bold(),
            Level::Skip => style("SKIP").dim(),
            Level::Warning => style("WARN").yellow().bold(),
            Level::Error => style("ERROR").red().bold(),
        }
    }
}

/// Format a message with its coloured level prefix.
pub fn format_line(level: Level, message: &str) -> String {
    format!("{} {}", level.prefix(), message)
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{}", format_line(Level::Info, message));
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{}", format_line(Level::Warning, message));
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{}", format_line(Level::Error, message));
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     VK Clips Downloader                               ║
║     Bulk download of community clips via yt-dlp      ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(
    tokens: usize,
    communities: usize,
    proxies: usize,
    download_dir: &str,
    cache_dir: &str,
) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Tokens:      {}", tokens);
    println!("  Communities: {}", communities);
    println!("  Proxies:     {}", proxies);
    println!("  Directory:   {}", download_dir);
    println!("  Cache:       {}", cache_dir);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_keeps_message() {
        let line = format_line(Level::Warning, "proxy rejected");
        assert!(line.contains("WARN"));
        assert!(line.ends_with("proxy rejected"));
    }
}
