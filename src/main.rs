//! seo-lens main entry point
//!
//! This is the command-line interface for the seo-lens page auditor.

use clap::Parser;
use seo_lens::config::load_config_or_default;
use seo_lens::{write_report, Coordinator, ReportFormat};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// seo-lens: a single-page SEO auditor
///
/// Fetches each URL (respecting robots.txt), extracts SEO metadata, technical
/// signals, readability and heading structure, queries PageSpeed Insights for
/// Core Web Vitals and writes one report per page.
#[derive(Parser, Debug)]
#[command(name = "seo-lens")]
#[command(version)]
#[command(about = "A single-page SEO auditor", long_about = None)]
struct Cli {
    /// Pages to analyze, in order
    #[arg(value_name = "URL", required = true)]
    urls: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory reports are written into
    #[arg(long, value_name = "DIR")]
    output_dir: Option<String>,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

    /// Print each result record as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Skip writing report files
    #[arg(long)]
    no_report: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match load_config_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if let Some(output_dir) = cli.output_dir {
        config.report.output_dir = output_dir;
    }
    if let Some(format) = cli.format {
        config.report.format = format;
    }

    let report_config = config.report.clone();
    let mut coordinator = Coordinator::new(config)?;

    let mut analyzed = 0;
    for url in &cli.urls {
        let result = match coordinator.analyze_url(url).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Skipping {}: {}", url, e);
                continue;
            }
        };

        if cli.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        if !cli.no_report {
            match write_report(&result, &report_config, analyzed) {
                Ok(path) => tracing::info!("Report for {} saved to {}", url, path.display()),
                Err(e) => {
                    tracing::error!("Failed to write report for {}: {}", url, e);
                    eprintln!("seo-lens: could not write report for {}: {}", url, e);
                }
            }
        }

        analyzed += 1;
    }

    tracing::info!(
        "Analyzed {} of {} pages ({} distinct bodies)",
        analyzed,
        cli.urls.len(),
        coordinator.analyzer().fingerprints().len()
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("seo_lens=info,warn"),
            1 => EnvFilter::new("seo_lens=debug,info"),
            2 => EnvFilter::new("seo_lens=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}
