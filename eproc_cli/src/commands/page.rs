use anyhow::Result;
use clap::Args;
use eproc_lib::PortalCrawler;

use crate::output::{print_events, print_lawsuits, OutputFormat};

#[derive(Args)]
pub struct PageArgs {
    /// Lawsuit page URL, absolute or relative to the portal's eproc/ directory
    pub url: String,

    /// Print the event history instead of the summary
    #[arg(long)]
    pub events: bool,
}

pub async fn run(args: &PageArgs, crawler: &PortalCrawler, format: &OutputFormat) -> Result<()> {
    let record = crawler.fetch_direct_lawsuit(&args.url).await?;
    if args.events {
        print_events(&[record], format)
    } else {
        print_lawsuits(&[record], format)
    }
}
