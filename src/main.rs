//! VK Clips Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use vk_clips_downloader::{
    api::VkClientFactory,
    cli::Args,
    config::{read_lines, read_proxies, validate_config, Config},
    download::Orchestrator,
    error::{exit_codes, Error, Result},
    media::YtDlp,
    output::{
        print_banner, print_config_summary, print_error, print_info, print_run_stats,
        print_warning, Reporter,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingInput(_)
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Authentication(_) | Error::Api { .. } | Error::UnexpectedResponse(_) => {
                    ExitCode::from(exit_codes::API_ERROR as u8)
                }
                Error::Engine(_) | Error::EngineNotFound(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            args.config.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    args.merge_into_config(&mut config);
    validate_config(&config)?;

    // Read input lists
    let tokens = read_lines(&config.input.tokens_file).await?;
    let groups = read_lines(&config.input.groups_file).await?;
    let proxies = match &config.input.proxies_file {
        Some(path) => read_proxies(path).await?,
        None => Vec::new(),
    };

    print_config_summary(
        tokens.len(),
        groups.len(),
        proxies.len(),
        &config.options.download_directory.display().to_string(),
        &config.options.cache_directory.display().to_string(),
    );

    // Fail early when the media engine is missing
    let engine = YtDlp::new(&config.media);
    let version = engine.version().await?;
    print_info(&format!("Using {} {}", config.media.program, version));

    let reporter = Reporter::new(
        config.options.show_downloads,
        config.options.show_skipped_downloads,
    );
    let factory = VkClientFactory::new(config.api.clone());
    let orchestrator = Orchestrator::new(factory, engine, config, proxies, reporter);

    let report = orchestrator.run(&tokens, &groups).await;
    print_run_stats(&report);

    Ok(())
}
