mod output;

use std::ops::Range;

use anyhow::bail;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use pagerange_core::Settings;
use pagerange_utils::pagination::{
    PaginationOptions, compute_range, page_nav, page_window, parse_one_based_page,
};

use output::{RangeReport, format_range};

const USAGE: &str = "pagerange <TOTAL_COUNT> [PAGE]";

/// Print the page numbers and gap markers a pager should show.
#[derive(Debug, Parser)]
#[command(name = "pagerange", version, about)]
struct Args {
    /// Total number of items being paginated.
    total_count: usize,

    /// Current page, starting at 1.
    page: Option<String>,

    /// Items per page (defaults to PAGERANGE_PAGE_SIZE or 10).
    #[arg(long)]
    page_size: Option<usize>,

    /// Pages shown on each side of the current page (defaults to PAGERANGE_SIBLING_COUNT or 1).
    #[arg(long)]
    siblings: Option<usize>,

    /// Print a JSON report instead of plain text.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Load the .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let settings = Settings::from_env()?;

    let Some(current_page) = parse_one_based_page(args.page.as_deref()) else {
        bail!("Usage: `{USAGE}` (page starts at 1)");
    };

    let options = PaginationOptions {
        total_count: args.total_count,
        page_size: args.page_size.unwrap_or(settings.page_size),
        sibling_count: args.siblings.unwrap_or(settings.sibling_count),
        current_page,
    };
    debug!(?options, "resolved pagination options");

    let range = compute_range(&options)?;
    let total = options.total_page_count();

    check_requested_page(current_page, total)?;

    info!(total_pages = total, markers = range.len(), "pagination range ready");

    if args.json {
        let report = RangeReport {
            total_pages: total,
            current_page,
            range: &range,
            nav: page_nav(current_page, total),
            items: item_range(options.total_count, options.page_size, current_page),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_range(&range, current_page));
    }

    Ok(())
}

/// Reject pages past the end; an empty list only accepts page 1.
fn check_requested_page(current_page: usize, total: usize) -> anyhow::Result<()> {
    if total == 0 {
        if current_page > 1 {
            bail!("Page {current_page} does not exist. There are no items to paginate.");
        }
        return Ok(());
    }

    if current_page > total {
        bail!("Page {current_page} does not exist. Available pages: 1-{total}.");
    }

    Ok(())
}

/// Zero-based item indices shown on the current page.
fn item_range(total_count: usize, page_size: usize, current_page: usize) -> Range<usize> {
    let (start, end) = page_window(total_count, page_size, current_page);
    start..end
}
