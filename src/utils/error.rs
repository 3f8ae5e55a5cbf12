use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Feed request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid feed data: {message}")]
    InvalidData { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },
}

pub type Result<T> = std::result::Result<T, FeedError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Io,
    Config,
}

impl FeedError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FeedError::ApiError(_) => ErrorCategory::Network,
            FeedError::IoError(_) => ErrorCategory::Io,
            FeedError::SerializationError(_) | FeedError::InvalidData { .. } => ErrorCategory::Data,
            FeedError::InvalidConfigValue { .. } | FeedError::MissingConfig { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Network failures are usually transient and worth a retry.
            FeedError::ApiError(_) => ErrorSeverity::Medium,
            FeedError::InvalidData { .. } | FeedError::SerializationError(_) => ErrorSeverity::High,
            FeedError::IoError(_) => ErrorSeverity::Critical,
            FeedError::InvalidConfigValue { .. } | FeedError::MissingConfig { .. } => {
                ErrorSeverity::High
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FeedError::ApiError(_) => "Could not reach the feed endpoint".to_string(),
            FeedError::InvalidData { .. } => {
                "The feed endpoint returned data in an unexpected format".to_string()
            }
            FeedError::SerializationError(_) => "The cached feed could not be decoded".to_string(),
            FeedError::IoError(_) => "Reading or writing the local cache failed".to_string(),
            FeedError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            FeedError::MissingConfig { field } => {
                format!("Configuration value '{}' is required but missing", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and the feed URL, then retry",
            ErrorCategory::Data => {
                "Verify the endpoint serves the expected feed JSON, or clear the local cache"
            }
            ErrorCategory::Io => "Check that the cache path exists and is writable",
            ErrorCategory::Config => "Fix the configuration value and run again",
        }
    }
}
