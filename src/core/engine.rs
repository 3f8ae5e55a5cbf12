use crate::cache::LocalFeedLoader;
use crate::domain::model::FeedItem;
use crate::domain::ports::{FeedLoader, FeedStore};
use crate::utils::error::Result;

/// Orchestrates the two loaders: remote first, refreshing the local cache on
/// success, falling back to the cache when the remote feed is unavailable.
pub struct FeedEngine<R: FeedLoader, S: FeedStore> {
    remote: R,
    cache: LocalFeedLoader<S>,
}

impl<R: FeedLoader, S: FeedStore> FeedEngine<R, S> {
    pub fn new(remote: R, cache: LocalFeedLoader<S>) -> Self {
        Self { remote, cache }
    }

    pub async fn run(&self) -> Result<Vec<FeedItem>> {
        tracing::info!("Loading remote feed...");

        match self.remote.load().await {
            Ok(items) => {
                tracing::info!("Loaded {} items from the remote feed", items.len());

                // A failed cache refresh should not fail the run; the items
                // are already in hand.
                if let Err(e) = self.cache.save(items.clone()).await {
                    tracing::warn!("Could not refresh the local cache: {}", e);
                } else {
                    tracing::debug!("Local cache refreshed");
                }

                Ok(items)
            }
            Err(e) => {
                tracing::warn!("Remote feed unavailable, falling back to cache: {}", e);

                if let Err(e) = self.cache.validate_cache().await {
                    tracing::warn!("Cache validation failed: {}", e);
                }

                let items = self.cache.load().await?;
                tracing::info!("Loaded {} items from the local cache", items.len());
                Ok(items)
            }
        }
    }
}
