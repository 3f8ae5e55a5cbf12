use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// A single item of the feed as the rest of the application sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Url,
}

/// Persistence-boundary mirror of [`FeedItem`]. Stores serialize this type so
/// the domain model stays free of wire concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalFeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Url,
}

impl From<FeedItem> for LocalFeedItem {
    fn from(item: FeedItem) -> Self {
        Self {
            id: item.id,
            description: item.description,
            location: item.location,
            url: item.url,
        }
    }
}

impl From<LocalFeedItem> for FeedItem {
    fn from(item: LocalFeedItem) -> Self {
        Self {
            id: item.id,
            description: item.description,
            location: item.location,
            url: item.url,
        }
    }
}

/// What a store hands back on retrieval: the cached items plus the moment they
/// were inserted, which staleness validation runs against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedFeed {
    pub items: Vec<LocalFeedItem>,
    pub timestamp: DateTime<Utc>,
}
