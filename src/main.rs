//! Pubtrawl main entry point
//!
//! This is the command-line interface for the Pubtrawl publications crawler.

use anyhow::{bail, Context};
use clap::Parser;
use pubtrawl::config::{load_config_with_hash, validate, Config};
use pubtrawl::crawler::crawl;
use pubtrawl::output::{print_report, CsvExporter, Exporter};
use pubtrawl::url::build_search_url;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

/// Pubtrawl: a keyword-driven publications crawler
///
/// Pubtrawl searches a research portal's publications listing, walks every
/// result page, and writes each publication with its authors to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "pubtrawl")]
#[command(version)]
#[command(about = "A keyword-driven publications crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Search query to run (prompted for when omitted)
    #[arg(short, long, value_name = "QUERY")]
    search: Option<String>,

    /// Path of the CSV file to write
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Override the page ceiling from the configuration
    #[arg(long, value_name = "N")]
    max_pages: Option<u32>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load_effective_config(&cli)?;

    let query = match &cli.search {
        Some(query) => query.trim().to_string(),
        None => prompt_for_query().context("Failed to read the search query")?,
    };
    if query.is_empty() {
        bail!("Search query cannot be empty");
    }

    if cli.dry_run {
        return handle_dry_run(&config, &query);
    }

    handle_crawl(&config, &query).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pubtrawl=info,warn"),
            1 => EnvFilter::new("pubtrawl=debug,info"),
            2 => EnvFilter::new("pubtrawl=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file (or defaults) and applies CLI overrides
fn load_effective_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(output) = &cli.output {
        config.output.csv_path = output.to_string_lossy().into_owned();
    }
    if let Some(max_pages) = cli.max_pages {
        config.crawler.max_pages = max_pages;
    }

    // Overrides go through the same checks as the file
    validate(&config).context("Invalid configuration")?;

    Ok(config)
}

/// Asks for a search query on stdin
fn prompt_for_query() -> std::io::Result<String> {
    print!("Please enter a search query you want to perform: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &Config, query: &str) -> anyhow::Result<()> {
    let start_url = build_search_url(&config.site.base_url, &config.site.publications_path, query)
        .context("Failed to build the listing URL")?;

    println!("=== Pubtrawl Dry Run ===\n");

    println!("Search:");
    println!("  Query: {}", query);
    println!("  Start URL: {}", start_url);
    println!("  Article URL base: {}", config.site.publications_base());

    println!("\nCrawler Configuration:");
    println!("  Max pages: {}", config.crawler.max_pages);
    println!("  Discovery delay: {}ms", config.crawler.discovery_delay_ms);
    println!("  Pre-click delay: {}ms", config.crawler.pre_click_delay_ms);
    println!("  Settle delay: {}ms", config.crawler.settle_delay_ms);
    println!(
        "  Fetch retries: {} ({}ms apart)",
        config.crawler.fetch_retries, config.crawler.retry_delay_ms
    );
    match config.crawler.crawl_timeout() {
        Some(timeout) => println!("  Crawl timeout: {}s", timeout.as_secs()),
        None => println!("  Crawl timeout: none"),
    }

    println!("\nSelectors:");
    println!("  Entry: {}", config.selectors.entry);
    println!("  Title: {}", config.selectors.title);
    println!("  Author: {}", config.selectors.author);
    println!("  Date: {}", config.selectors.date);
    println!("  Next: {}", config.selectors.next);

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);

    println!("\n✓ Configuration is valid");

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config, query: &str) -> anyhow::Result<()> {
    let cancel = CancellationToken::new();
    spawn_interrupt_handler(cancel.clone());

    tracing::info!("Starting crawl for '{}'", query);

    let report = crawl(config, query, cancel).await.context("Crawl failed")?;

    let csv_path = Path::new(&config.output.csv_path);
    CsvExporter::new(csv_path)
        .export(&report.snapshot)
        .with_context(|| format!("Failed to write results to {}", csv_path.display()))?;

    tracing::info!("Crawl finished: {}", report.outcome.reason);
    print_report(&report, csv_path);

    Ok(())
}

/// Cancels the crawl on Ctrl-C so the partial results are still written
fn spawn_interrupt_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::warn!("Interrupt received, stopping after the current step");
                cancel.cancel();
            }
            Err(e) => tracing::error!("Failed to listen for Ctrl-C: {}", e),
        }
    });
}
