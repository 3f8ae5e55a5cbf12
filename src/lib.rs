pub mod cache;
pub mod config;
pub mod core;
pub mod domain;
pub mod remote;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::FileConfig;

pub use cache::{CachePolicy, FileSystemFeedStore, InMemoryFeedStore, LocalFeedLoader};
pub use crate::core::FeedEngine;
pub use domain::model::{CachedFeed, FeedItem, LocalFeedItem};
pub use domain::ports::{ConfigProvider, FeedLoader, FeedStore};
pub use remote::RemoteFeedLoader;
pub use utils::error::{FeedError, Result};
