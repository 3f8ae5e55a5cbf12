use chrono::{DateTime, Duration, Utc};

/// Staleness rule for the local cache: a cached feed is valid while it is
/// strictly younger than the maximum age. A feed exactly `max_age_days` old is
/// already stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    max_age_days: i64,
}

impl CachePolicy {
    pub const DEFAULT_MAX_AGE_DAYS: i64 = 7;

    pub fn new(max_age_days: i64) -> Self {
        Self { max_age_days }
    }

    pub fn max_age_days(&self) -> i64 {
        self.max_age_days
    }

    pub fn validate(&self, timestamp: DateTime<Utc>, against: DateTime<Utc>) -> bool {
        match timestamp.checked_add_signed(Duration::days(self.max_age_days)) {
            Some(expiry) => against < expiry,
            None => false,
        }
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_AGE_DAYS)
    }
}
