use crate::domain::model::FeedItem;
use crate::domain::ports::FeedLoader;
use crate::utils::error::{FeedError, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;
use uuid::Uuid;

/// Wire shape served by the feed endpoint. Kept private so the rest of the
/// crate only ever sees [`FeedItem`].
#[derive(Debug, Deserialize)]
struct RemoteFeed {
    items: Vec<RemoteFeedItem>,
}

#[derive(Debug, Deserialize)]
struct RemoteFeedItem {
    image_id: Uuid,
    #[serde(default)]
    image_desc: Option<String>,
    #[serde(default)]
    image_loc: Option<String>,
    image_url: Url,
}

impl From<RemoteFeedItem> for FeedItem {
    fn from(item: RemoteFeedItem) -> Self {
        Self {
            id: item.image_id,
            description: item.image_desc,
            location: item.image_loc,
            url: item.image_url,
        }
    }
}

pub struct RemoteFeedLoader {
    client: Client,
    url: Url,
}

impl RemoteFeedLoader {
    pub fn new(url: Url) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }
}

#[async_trait::async_trait]
impl FeedLoader for RemoteFeedLoader {
    async fn load(&self) -> Result<Vec<FeedItem>> {
        tracing::debug!("Requesting feed from: {}", self.url);
        let response = self.client.get(self.url.clone()).send().await?;

        tracing::debug!("Feed response status: {}", response.status());

        // The contract is exactly 200. Any other status, including other 2xx,
        // means the endpoint is not serving the feed we expect.
        if response.status() != StatusCode::OK {
            return Err(FeedError::InvalidData {
                message: format!("unexpected status code {}", response.status()),
            });
        }

        let body = response.bytes().await?;
        let feed: RemoteFeed =
            serde_json::from_slice(&body).map_err(|e| FeedError::InvalidData {
                message: format!("malformed feed payload: {}", e),
            })?;

        Ok(feed.items.into_iter().map(FeedItem::from).collect())
    }
}
