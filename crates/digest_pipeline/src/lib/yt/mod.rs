pub mod discovery;
pub mod transcript;

use std::{fmt::Debug, future::Future};

use crate::types::VideoRecord;

/// Finds a channel's recent uploads and enriches each with full metadata.
pub trait VideoDiscovery {
    type Error: Debug;

    fn recent_videos(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> impl Future<Output = Result<Vec<VideoRecord>, Self::Error>> + Send;
}

/// Retrieves the caption transcript for a single video.
///
/// The error type is fixed: disabled captions, private videos, and transport
/// failures are indistinguishable to callers. Only the logged cause differs.
pub trait TranscriptFetcher {
    fn fetch_transcript(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<String, TranscriptUnavailable>> + Send;
}

#[derive(Debug, thiserror::Error)]
#[error("no transcript available for video '{video_id}': {cause}")]
pub struct TranscriptUnavailable {
    pub video_id: String,
    pub cause: String,
}
