//! Notion Export Cleaner - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use notion_export_cleaner::{
    cleanup::run_cleanup,
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_cleanup_stats, print_config_summary, print_error, print_info,
        print_warning,
    },
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Walk(_) | Error::Rename { .. } => {
                    ExitCode::from(exit_codes::RENAME_ERROR as u8)
                }
                Error::ReadHtml { .. } | Error::WriteHtml { .. } => {
                    ExitCode::from(exit_codes::LINK_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        tracing::debug!("No configuration file at {}", config_path.display());
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    if config.export.root_directory.is_none() {
        print_warning("No export root given");
        print_info("Pass the unzipped export folder as an argument or set [export].root_directory");
    }

    validate_config(&config)?;

    print_config_summary(
        &config.root_directory()?.display().to_string(),
        config.options.link_resolution,
        config.options.dry_run,
    );

    let stats = run_cleanup(&config)?;
    print_cleanup_stats(&stats);

    Ok(())
}
