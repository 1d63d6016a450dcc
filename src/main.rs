use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use url::Url;

use catalog_harvester::{dedupe, harvest, sink, CatalogSelectors, HttpSource, ScraperError};

const DEFAULT_CATALOG_URL: &str = "https://www.magpiehq.com/developer-challenge/smartphones";

/// CLI arguments; every field has a default so a bare run harvests the catalog
#[derive(Parser, Debug)]
#[command(name = "catalog-harvester")]
#[command(about = "Harvest a paginated product catalog into JSON", long_about = None)]
struct Args {
    /// Catalog URL (first page, without a page parameter)
    #[arg(short, long, default_value = DEFAULT_CATALOG_URL)]
    url: String,

    /// Output file for the JSON snapshot
    #[arg(short, long, default_value = "output.json")]
    output: PathBuf,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "30")]
    timeout: u64,

    /// Custom user agent (none is sent by default)
    #[arg(long)]
    user_agent: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    let log_level = if args.verbose {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    log::info!("🚀 Catalog Harvester v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = Url::parse(&args.url) {
        return Err(ScraperError::InvalidUrl(format!("{}: {}", args.url, e)).into());
    }

    let selectors = CatalogSelectors::default();
    selectors.validate()?;

    let source = HttpSource::new(args.timeout, args.user_agent.as_deref())
        .context("building HTTP client")?;

    let variants = harvest(&source, &args.url, &selectors)
        .await
        .with_context(|| format!("harvesting {}", args.url))?;
    let found = variants.len();

    let unique = dedupe(variants);
    log::info!("🔍 {} variant(s) found, {} unique", found, unique.len());

    sink::write_json(&args.output, &unique)
        .with_context(|| format!("writing {}", args.output.display()))?;

    log::info!("✅ Harvested {} product variant(s)", unique.len());
    Ok(())
}
