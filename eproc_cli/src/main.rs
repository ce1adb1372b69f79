mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eproc_lib::{CrawlerConfig, PortalCrawler};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "eproc")]
#[command(about = "Fetch lawsuits from the TJRS eproc portal with a client certificate")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// PKCS#12 client certificate (overrides EPROC_CERT_PATH)
    #[arg(long, global = true)]
    cert: Option<PathBuf>,

    /// Portal base URL (overrides EPROC_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Pause between lawsuits in milliseconds (overrides EPROC_PAUSE_MS)
    #[arg(long, global = true)]
    pause_ms: Option<u64>,

    /// Abort on the first failing lawsuit instead of skipping it
    #[arg(long, global = true)]
    fail_fast: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a lawsuit by its case number
    Lawsuit(commands::lawsuit::LawsuitArgs),
    /// Fetch a lawsuit by its page URL
    Page(commands::page::PageArgs),
    /// Crawl every lawsuit of a party by CPF/CNPJ
    Entity(commands::entity::EntityArgs),
    /// Classify a document as CPF or CNPJ (offline)
    Classify(commands::classify::ClassifyArgs),
}

/// Environment configuration with command-line flags taking precedence.
fn load_config(cli: &Cli) -> Result<CrawlerConfig> {
    let overrides = [
        ("EPROC_CERT_PATH", cli.cert.as_ref().map(|p| p.display().to_string())),
        ("EPROC_BASE_URL", cli.base_url.clone()),
        ("EPROC_PAUSE_MS", cli.pause_ms.map(|ms| ms.to_string())),
        ("EPROC_SKIP_ON_ERROR", cli.fail_fast.then(|| "false".to_string())),
    ];
    let config = CrawlerConfig::from_lookup(|key| {
        overrides
            .iter()
            .find(|(name, _)| *name == key)
            .and_then(|(_, value)| value.clone())
            .or_else(|| std::env::var(key).ok())
    })?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("eproc=info".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    if let Commands::Classify(args) = &cli.command {
        return commands::classify::run(args, &format);
    }

    let crawler = PortalCrawler::from_config(&load_config(&cli)?)?;

    match &cli.command {
        Commands::Lawsuit(args) => commands::lawsuit::run(args, &crawler, &format).await?,
        Commands::Page(args) => commands::page::run(args, &crawler, &format).await?,
        Commands::Entity(args) => commands::entity::run(args, &crawler, &format).await?,
        Commands::Classify(_) => {}
    }

    Ok(())
}
