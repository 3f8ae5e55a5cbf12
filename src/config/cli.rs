use crate::cache::CachePolicy;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "feed-cache")]
#[command(about = "Load a remote feed and keep a local cache of it")]
pub struct CliConfig {
    /// Feed endpoint to load from. Can be omitted when --config is given.
    #[arg(long, required_unless_present = "config")]
    pub feed_url: Option<String>,

    #[arg(long, default_value = "./cache/feed.json")]
    pub cache_path: String,

    /// Cached feeds older than this are treated as empty.
    #[arg(long, default_value_t = CachePolicy::DEFAULT_MAX_AGE_DAYS)]
    pub max_cache_age_days: i64,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    /// Read configuration from a TOML file instead of flags.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn feed_url(&self) -> &str {
        self.feed_url.as_deref().unwrap_or("")
    }

    fn cache_path(&self) -> &str {
        &self.cache_path
    }

    fn max_cache_age_days(&self) -> i64 {
        self.max_cache_age_days
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("feed_url", ConfigProvider::feed_url(self))?;
        validation::validate_path("cache_path", &self.cache_path)?;
        validation::validate_range("max_cache_age_days", self.max_cache_age_days, 1, 365)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config =
            CliConfig::parse_from(["feed-cache", "--feed-url", "https://example.com/feed"]);

        assert_eq!(
            ConfigProvider::feed_url(&config),
            "https://example.com/feed"
        );
        assert_eq!(config.cache_path, "./cache/feed.json");
        assert_eq!(config.max_cache_age_days, 7);
        assert_eq!(config.timeout_seconds, 30);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_feed_url_can_be_omitted_with_config_file() {
        let config = CliConfig::parse_from(["feed-cache", "--config", "feed.toml"]);
        assert_eq!(config.config.as_deref(), Some("feed.toml"));
        assert!(config.feed_url.is_none());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config =
            CliConfig::parse_from(["feed-cache", "--feed-url", "ftp://example.com/feed"]);
        assert!(config.validate().is_err());

        config.feed_url = Some("https://example.com/feed".to_string());
        config.max_cache_age_days = 0;
        assert!(config.validate().is_err());
    }
}
