use itertools::Itertools;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};

use crate::types::{SearchResponse, VideoListResponse, VideoRecord};
use crate::yt::VideoDiscovery;

/// YouTube Data API v3 client. Discovery is two round trips per channel:
/// a search for candidate video ids ordered by publish date, then one
/// detail call per id.
pub struct YouTubeApi {
    client: ClientWithMiddleware,
    api_key: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum YouTubeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest_middleware::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("malformed response body: {0}")]
    Malformed(#[from] reqwest::Error),
    #[error("video '{0}' missing from detail response")]
    MissingVideo(String),
}

impl YouTubeApi {
    const API_BASE_URL: &'static str = "https://www.googleapis.com/youtube/v3";
    const MAX_RETRIES: u32 = 3;

    pub fn new(api_key: impl Into<String>) -> Self {
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(Self::MAX_RETRIES);
        let client = reqwest_middleware::ClientBuilder::new(reqwest::Client::new())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Self {
            client,
            api_key: api_key.into(),
            base_url: Self::API_BASE_URL.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn search_channel(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> Result<Vec<String>, YouTubeError> {
        let max_results = max_results.to_string();
        let resp = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("key", self.api_key.as_str()),
                ("channelId", channel_id),
                ("part", "snippet,id"),
                ("order", "date"),
                ("maxResults", max_results.as_str()),
            ])
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(YouTubeError::Api { status, message });
        }

        let search = resp.json::<SearchResponse>().await?;

        // search results mix channels and playlists in with videos
        Ok(search
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect())
    }

    async fn video_details(&self, video_id: &str) -> Result<VideoRecord, YouTubeError> {
        let resp = self
            .client
            .get(format!("{}/videos", self.base_url))
            .query(&[
                ("key", self.api_key.as_str()),
                ("id", video_id),
                ("part", "snippet,contentDetails,statistics"),
            ])
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(YouTubeError::Api { status, message });
        }

        let listing = resp.json::<VideoListResponse>().await?;
        let item = listing
            .items
            .into_iter()
            .next()
            .ok_or_else(|| YouTubeError::MissingVideo(video_id.to_string()))?;

        Ok(item.into())
    }
}

impl VideoDiscovery for YouTubeApi {
    type Error = YouTubeError;

    #[tracing::instrument(skip(self))]
    async fn recent_videos(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> Result<Vec<VideoRecord>, YouTubeError> {
        let video_ids = self.search_channel(channel_id, max_results).await?;
        tracing::debug!(count = video_ids.len(), "Found candidate videos");

        let mut records = Vec::with_capacity(video_ids.len());
        for video_id in &video_ids {
            let record = self.video_details(video_id).await.inspect_err(
                |e| tracing::error!(error = %e, video_id, "Failed to fetch video details"),
            )?;
            records.push(record);
        }

        // callers rely on newest-first regardless of detail fetch order
        let records = records
            .into_iter()
            .sorted_by(|a, b| b.published_at.cmp(&a.published_at))
            .take(max_results as usize)
            .collect();

        Ok(records)
    }
}
