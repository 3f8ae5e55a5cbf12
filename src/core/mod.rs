pub mod engine;

pub use crate::domain::model::{CachedFeed, FeedItem, LocalFeedItem};
pub use crate::domain::ports::{ConfigProvider, FeedLoader, FeedStore};
pub use crate::utils::error::Result;
pub use engine::FeedEngine;
