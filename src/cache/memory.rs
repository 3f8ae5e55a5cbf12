use crate::domain::model::{CachedFeed, LocalFeedItem};
use crate::domain::ports::FeedStore;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

/// [`FeedStore`] that keeps the cache in memory. Handy for tests and for
/// running the engine without touching the filesystem.
#[derive(Clone, Default)]
pub struct InMemoryFeedStore {
    cached: Arc<Mutex<Option<CachedFeed>>>,
}

impl InMemoryFeedStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl FeedStore for InMemoryFeedStore {
    async fn delete_cached_feed(&self) -> Result<()> {
        *self.cached.lock().await = None;
        Ok(())
    }

    async fn insert(&self, items: Vec<LocalFeedItem>, timestamp: DateTime<Utc>) -> Result<()> {
        *self.cached.lock().await = Some(CachedFeed { items, timestamp });
        Ok(())
    }

    async fn retrieve(&self) -> Result<Option<CachedFeed>> {
        Ok(self.cached.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_starts_empty_and_remembers_inserts() {
        let store = InMemoryFeedStore::new();
        assert!(store.retrieve().await.unwrap().is_none());

        let items = vec![LocalFeedItem {
            id: Uuid::new_v4(),
            description: Some("a description".to_string()),
            location: None,
            url: Url::parse("https://images.example.com/a.png").unwrap(),
        }];
        store.insert(items.clone(), Utc::now()).await.unwrap();

        let cached = store.retrieve().await.unwrap().unwrap();
        assert_eq!(cached.items, items);

        store.delete_cached_feed().await.unwrap();
        assert!(store.retrieve().await.unwrap().is_none());
    }
}
