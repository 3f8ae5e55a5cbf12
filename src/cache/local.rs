use crate::cache::policy::CachePolicy;
use crate::domain::model::{FeedItem, LocalFeedItem};
use crate::domain::ports::{FeedLoader, FeedStore};
use crate::utils::error::Result;
use chrono::Utc;

/// Feed cache use cases on top of a [`FeedStore`]: delete-then-insert saves,
/// staleness-aware loads, and explicit cache validation.
pub struct LocalFeedLoader<S: FeedStore> {
    store: S,
    policy: CachePolicy,
}

impl<S: FeedStore> LocalFeedLoader<S> {
    pub fn new(store: S) -> Self {
        Self::with_policy(store, CachePolicy::default())
    }

    pub fn with_policy(store: S, policy: CachePolicy) -> Self {
        Self { store, policy }
    }

    /// Replaces the cached feed. The old cache is deleted first; if the delete
    /// fails nothing is inserted.
    pub async fn save(&self, items: Vec<FeedItem>) -> Result<()> {
        self.store.delete_cached_feed().await?;

        let local_items: Vec<LocalFeedItem> = items.into_iter().map(LocalFeedItem::from).collect();
        tracing::debug!("Caching {} feed items", local_items.len());
        self.store.insert(local_items, Utc::now()).await
    }

    /// Loads the cached feed. An empty or stale cache yields an empty feed;
    /// loading never mutates the cache.
    pub async fn load(&self) -> Result<Vec<FeedItem>> {
        match self.store.retrieve().await? {
            None => Ok(Vec::new()),
            Some(cached) if self.policy.validate(cached.timestamp, Utc::now()) => {
                Ok(cached.items.into_iter().map(FeedItem::from).collect())
            }
            Some(cached) => {
                tracing::debug!("Ignoring stale cache from {}", cached.timestamp);
                Ok(Vec::new())
            }
        }
    }

    /// Deletes the cached feed when it is stale or unreadable. A fresh or
    /// empty cache is left untouched.
    pub async fn validate_cache(&self) -> Result<()> {
        match self.store.retrieve().await {
            Err(e) => {
                tracing::warn!("Cache is unreadable, deleting it: {}", e);
                self.store.delete_cached_feed().await
            }
            Ok(Some(cached)) if !self.policy.validate(cached.timestamp, Utc::now()) => {
                tracing::debug!("Deleting stale cache from {}", cached.timestamp);
                self.store.delete_cached_feed().await
            }
            Ok(_) => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl<S: FeedStore> FeedLoader for LocalFeedLoader<S> {
    async fn load(&self) -> Result<Vec<FeedItem>> {
        LocalFeedLoader::load(self).await
    }
}
