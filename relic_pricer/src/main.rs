//! Relic Pricer - Warframe relic reward price checker
//!
//! Scan a relic reward screenshot or search an item by name and print the
//! current market prices.

use clap::{Parser, Subcommand, ValueEnum};
use relic_pricer::extraction::{mime_type_for_path, DEMO_API_KEY};
use relic_pricer::formatters::{format_progress_line, format_results_json, format_results_table};
use relic_pricer::item_index::DEFAULT_SUGGESTION_LIMIT;
use relic_pricer::{
    scan_image, search_price, CatalogCache, Extractor, FileStore, GeminiExtractor, ItemIndex,
    MarketClient, MarketConfig, MarketError, OcrSpaceExtractor, Platform, PriceResult, Result,
};
use std::path::PathBuf;
use std::time::Duration;

/// Warframe relic reward price checker
#[derive(Parser, Debug)]
#[command(name = "relic_pricer")]
#[command(version, about, long_about = None)]
struct Args {
    /// Market API base URL (a CORS proxy prefix also works)
    #[arg(long, env = "WFM_BASE_URL", default_value = relic_pricer::config::DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Platform to price items on
    #[arg(short, long, default_value = "pc", value_parser = parse_platform, global = true)]
    platform: Platform,

    /// Language header sent to the market API
    #[arg(long, default_value = relic_pricer::config::DEFAULT_LANGUAGE, global = true)]
    language: String,

    /// Path to the item catalog cache file
    #[arg(long, default_value_t = default_cache_path(), global = true)]
    cache_file: String,

    /// Per-request timeout in seconds (0 disables the timeout)
    #[arg(long, default_value_t = relic_pricer::config::DEFAULT_TIMEOUT_SECS, global = true)]
    timeout_secs: u64,

    /// Maximum number of items priced at once (default: all at once)
    #[arg(long, global = true)]
    max_concurrency: Option<usize>,

    /// Print results as JSON
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read item names from a relic reward screenshot and price them
    Scan {
        /// Screenshot file (png, jpg, webp, gif, bmp)
        image: PathBuf,

        /// Image-to-text service
        #[arg(long, value_enum, default_value_t = OcrProvider::OcrSpace)]
        ocr_provider: OcrProvider,

        /// OCR.space API key (falls back to the public demo key)
        #[arg(long, env = "OCR_SPACE_API_KEY", hide_env_values = true)]
        ocr_space_key: Option<String>,

        /// Gemini API key (required for the gemini provider)
        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
        gemini_key: Option<String>,

        /// Override the OCR endpoint URL
        #[arg(long)]
        ocr_url: Option<String>,
    },
    /// Price a single item by name
    Price {
        /// Item name, e.g. "Vasto Prime Barrel"
        name: String,
    },
    /// Suggest item names matching a partial query
    Search {
        query: String,

        #[arg(long, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
        limit: usize,
    },
    /// Show the cached item catalog
    Catalog {
        /// Fetch a fresh catalog regardless of cache age
        #[arg(long, default_value_t = false)]
        refresh: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OcrProvider {
    OcrSpace,
    Gemini,
}

/// Parse a platform name (pc, ps4, xbox, switch, mobile)
fn parse_platform(s: &str) -> std::result::Result<Platform, String> {
    s.parse()
}

/// Returns the default cache path: ~/.cache/relic_pricer/market_items.json
fn default_cache_path() -> String {
    FileStore::default_path().to_string_lossy().to_string()
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = MarketConfig {
        base_url: args.base_url.clone(),
        language: args.language.clone(),
        timeout: (args.timeout_secs > 0).then(|| Duration::from_secs(args.timeout_secs)),
        max_concurrency: args.max_concurrency,
        ..MarketConfig::default()
    };
    let client = MarketClient::new(&config)?;
    let cache = CatalogCache::with_file(client.clone(), &args.cache_file);

    log::info!("Platform: {}", args.platform);
    log::debug!("Catalog cache: {}", args.cache_file);

    match args.command {
        Command::Scan {
            image,
            ocr_provider,
            ocr_space_key,
            gemini_key,
            ocr_url,
        } => {
            let extractor = build_extractor(ocr_provider, ocr_space_key, gemini_key, ocr_url)?;
            let mime_type = mime_type_for_path(&image)?;
            let bytes = std::fs::read(&image)?;
            let index = ItemIndex::new(cache.get().await);

            let report = scan_image(
                extractor.as_ref(),
                &index,
                &client,
                args.platform,
                &bytes,
                mime_type,
                |result| log::info!("{}", format_progress_line(result)),
            )
            .await?;

            for name in &report.unresolved {
                log::info!("Skipping unrecognised name: {}", name);
            }
            print_results(&report.results, args.json)?;
        }
        Command::Price { name } => {
            let index = ItemIndex::new(cache.get().await);
            let result = search_price(&index, &client, args.platform, &name).await?;
            print_results(&[result], args.json)?;
        }
        Command::Search { query, limit } => {
            let index = ItemIndex::new(cache.get().await);
            let suggestions = index.suggest(&query, limit);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else if suggestions.is_empty() {
                println!("No items match \"{}\"", query);
            } else {
                for suggestion in suggestions {
                    println!("{}", suggestion);
                }
            }
        }
        Command::Catalog { refresh } => {
            let items = if refresh {
                cache.refresh().await?
            } else {
                cache.get().await
            };
            println!("{} items in catalog", items.len());
            if let Some(age) = cache.snapshot_age_millis() {
                println!("Cache age: {} minute(s)", age / 60_000);
            }
        }
    }

    Ok(())
}

fn build_extractor(
    provider: OcrProvider,
    ocr_space_key: Option<String>,
    gemini_key: Option<String>,
    ocr_url: Option<String>,
) -> Result<Box<dyn Extractor>> {
    match provider {
        OcrProvider::OcrSpace => {
            let key = ocr_space_key.unwrap_or_else(|| {
                log::warn!(
                    "OCR_SPACE_API_KEY not set. Falling back to the OCR.Space demo key with limited throughput."
                );
                DEMO_API_KEY.to_string()
            });
            Ok(match ocr_url {
                Some(url) => Box::new(OcrSpaceExtractor::with_url(key, url)),
                None => Box::new(OcrSpaceExtractor::new(key)),
            })
        }
        OcrProvider::Gemini => {
            let key = gemini_key.ok_or_else(|| {
                MarketError::Config("GEMINI_API_KEY is required for the gemini provider".to_string())
            })?;
            Ok(match ocr_url {
                Some(url) => Box::new(GeminiExtractor::with_base_url(key, url)),
                None => Box::new(GeminiExtractor::new(key)),
            })
        }
    }
}

fn print_results(results: &[PriceResult], json: bool) -> Result<()> {
    if json {
        println!("{}", format_results_json(results)?);
    } else {
        print!("{}", format_results_table(results));
    }
    Ok(())
}
