use crate::cache::CachePolicy;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FeedError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub source: SourceConfig,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub path: String,
    pub max_age_days: Option<i64>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| FeedError::InvalidConfigValue {
            field: "config".to_string(),
            value: "<toml>".to_string(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values. Unset
    /// variables are left as-is so validation can surface them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl ConfigProvider for FileConfig {
    fn feed_url(&self) -> &str {
        &self.source.endpoint
    }

    fn cache_path(&self) -> &str {
        &self.cache.path
    }

    fn max_cache_age_days(&self) -> i64 {
        self.cache
            .max_age_days
            .unwrap_or(CachePolicy::DEFAULT_MAX_AGE_DAYS)
    }

    fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(30)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.endpoint", &self.source.endpoint)?;
        validation::validate_path("cache.path", &self.cache.path)?;
        validation::validate_range("cache.max_age_days", self.max_cache_age_days(), 1, 365)?;
        validation::validate_range("source.timeout_seconds", self.timeout_seconds(), 1, 300)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_config() {
        let toml_content = r#"
[source]
endpoint = "https://api.example.com/feed"
timeout_seconds = 10

[cache]
path = "./cache/feed.json"
max_age_days = 3
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.feed_url(), "https://api.example.com/feed");
        assert_eq!(config.cache_path(), "./cache/feed.json");
        assert_eq!(config.max_cache_age_days(), 3);
        assert_eq!(config.timeout_seconds(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_optionals_fall_back_to_defaults() {
        let toml_content = r#"
[source]
endpoint = "https://api.example.com/feed"

[cache]
path = "./cache/feed.json"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.max_cache_age_days(), 7);
        assert_eq!(config.timeout_seconds(), 30);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FEED_TEST_ENDPOINT", "https://feeds.test.com/v1");

        let toml_content = r#"
[source]
endpoint = "${FEED_TEST_ENDPOINT}"

[cache]
path = "./cache/feed.json"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.feed_url(), "https://feeds.test.com/v1");

        std::env::remove_var("FEED_TEST_ENDPOINT");
    }

    #[test]
    fn test_validation_rejects_invalid_endpoint() {
        let toml_content = r#"
[source]
endpoint = "invalid-url"

[cache]
path = "./cache/feed.json"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[source]
endpoint = "https://api.example.com/feed"

[cache]
path = "./cache/feed.json"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = FileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.feed_url(), "https://api.example.com/feed");
    }

    #[test]
    fn test_malformed_toml_is_a_config_error() {
        let err = FileConfig::from_toml_str("not toml at all [").unwrap_err();
        assert!(matches!(err, FeedError::InvalidConfigValue { .. }));
    }
}
