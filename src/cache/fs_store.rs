use crate::domain::model::{CachedFeed, LocalFeedItem};
use crate::domain::ports::FeedStore;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// [`FeedStore`] backed by a single JSON file. A missing file is an empty
/// cache; deleting is idempotent.
#[derive(Debug, Clone)]
pub struct FileSystemFeedStore {
    path: PathBuf,
}

impl FileSystemFeedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl FeedStore for FileSystemFeedStore {
    async fn delete_cached_feed(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn insert(&self, items: Vec<LocalFeedItem>, timestamp: DateTime<Utc>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let cached = CachedFeed { items, timestamp };
        let data = serde_json::to_vec_pretty(&cached)?;
        fs::write(&self.path, data)?;
        Ok(())
    }

    async fn retrieve(&self) -> Result<Option<CachedFeed>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let cached = serde_json::from_slice(&data)?;
        Ok(Some(cached))
    }
}
