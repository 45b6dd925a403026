use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::yt::{TranscriptFetcher, TranscriptUnavailable};

/// Transcript client over the platform's caption tracks.
#[derive(Clone)]
pub struct CaptionClient {
    api: YouTubeTranscriptApi,
}

impl CaptionClient {
    const LANGUAGES: [&'static str; 1] = ["en"];

    pub fn new() -> anyhow::Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)?;
        Ok(Self { api })
    }
}

impl TranscriptFetcher for CaptionClient {
    #[tracing::instrument(skip(self))]
    async fn fetch_transcript(&self, video_id: &str) -> Result<String, TranscriptUnavailable> {
        let fetched = self
            .api
            .fetch_transcript(video_id, &Self::LANGUAGES, false)
            .await
            .map_err(|e| TranscriptUnavailable {
                video_id: video_id.to_string(),
                cause: e.to_string(),
            })?;

        let transcript = fetched
            .snippets
            .iter()
            .map(|snippet| snippet.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(transcript)
    }
}
