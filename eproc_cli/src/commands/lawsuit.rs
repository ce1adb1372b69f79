use anyhow::Result;
use clap::Args;
use eproc_lib::PortalCrawler;

use crate::output::{print_events, print_lawsuits, OutputFormat};

#[derive(Args)]
pub struct LawsuitArgs {
    /// Case number, with or without separators (e.g. 5001234-56.2023.8.21.0001)
    pub number: String,

    /// Print the event history instead of the summary
    #[arg(long)]
    pub events: bool,
}

pub async fn run(args: &LawsuitArgs, crawler: &PortalCrawler, format: &OutputFormat) -> Result<()> {
    let record = crawler.fetch_lawsuit(&args.number).await?;
    if args.events {
        print_events(&[record], format)
    } else {
        print_lawsuits(&[record], format)
    }
}
