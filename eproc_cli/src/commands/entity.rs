use std::ops::ControlFlow;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use eproc_lib::PortalCrawler;
use indicatif::{ProgressBar, ProgressStyle};

use crate::output::{format_lawsuit_line, print_json, print_lawsuits, OutputFormat};

#[derive(Args)]
pub struct EntityArgs {
    /// CPF or CNPJ of the party
    pub tax_id: String,

    /// Only list the lawsuit URLs, without fetching them
    #[arg(long)]
    pub urls_only: bool,

    /// Print each lawsuit as soon as it is fetched
    #[arg(long)]
    pub stream: bool,

    /// Stop after this many lawsuits
    #[arg(long)]
    pub limit: Option<usize>,
}

pub async fn run(args: &EntityArgs, crawler: &PortalCrawler, format: &OutputFormat) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} [{elapsed_precise}] {msg}").unwrap());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_message(format!("searching lawsuits of {}...", args.tax_id));

    let urls = crawler.fetch_entity_lawsuit_urls(&args.tax_id).await?;
    let urls = match args.limit {
        Some(limit) => &urls[..limit.min(urls.len())],
        None => &urls[..],
    };

    if args.urls_only {
        pb.finish_and_clear();
        match format {
            OutputFormat::Json => print_json(&urls.iter().map(|u| u.as_str()).collect::<Vec<_>>()),
            _ => urls.iter().for_each(|u| println!("{}", u)),
        }
        return Ok(());
    }

    let total = urls.len();
    let mut records = Vec::new();
    let mut fetched = 0usize;
    pb.set_message(format!("fetching 1/{} lawsuit(s)...", total));
    let summary = crawler
        .crawl_urls(urls, |record| {
            fetched += 1;
            pb.set_message(format!("fetched {}/{} lawsuit(s)...", fetched, total));
            if args.stream {
                pb.suspend(|| println!("{}", format_lawsuit_line(&record, format)));
            } else {
                records.push(record);
            }
            ControlFlow::Continue(())
        })
        .await?;
    pb.finish_and_clear();

    if !args.stream {
        print_lawsuits(&records, format)?;
    }

    eprintln!(
        "{} lawsuit(s) fetched, {} skipped",
        summary.delivered, summary.skipped
    );
    Ok(())
}
