use anyhow::Context;
use clap::Parser;
use feed_cache::utils::error::ErrorSeverity;
use feed_cache::utils::{logger, validation::Validate};
use feed_cache::{
    CachePolicy, CliConfig, ConfigProvider, FeedEngine, FileConfig, FileSystemFeedStore,
    LocalFeedLoader, RemoteFeedLoader,
};
use std::time::Duration;
use url::Url;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting feed-cache CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match &cli.config {
        Some(path) => {
            let config = FileConfig::from_file(path)
                .with_context(|| format!("failed to load config file {}", path))?;
            run(&config).await
        }
        None => run(&cli).await,
    }
}

async fn run<C: ConfigProvider + Validate>(config: &C) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let url = Url::parse(config.feed_url()).context("feed URL is not a valid URL")?;
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds()))
        .build()
        .context("failed to build HTTP client")?;

    let remote = RemoteFeedLoader::with_client(client, url);
    let store = FileSystemFeedStore::new(config.cache_path());
    let cache =
        LocalFeedLoader::with_policy(store, CachePolicy::new(config.max_cache_age_days()));
    let engine = FeedEngine::new(remote, cache);

    match engine.run().await {
        Ok(items) => {
            tracing::info!("✅ Feed loaded successfully ({} items)", items.len());
            for item in &items {
                println!("{}  {}", item.id, item.url);
            }
            println!("✅ Loaded {} feed items", items.len());
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Feed loading failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }

            Ok(())
        }
    }
}
