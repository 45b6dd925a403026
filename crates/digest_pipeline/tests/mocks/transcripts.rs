use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use digest_pipeline::yt::{TranscriptFetcher, TranscriptUnavailable};

#[derive(Clone)]
pub struct MockTranscripts {
    pub transcript: String,
    missing: HashSet<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockTranscripts {
    pub fn new(transcript: &str) -> Self {
        Self {
            transcript: transcript.to_string(),
            missing: HashSet::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Marks a video as having no transcript available.
    pub fn missing_for(mut self, video_id: &str) -> Self {
        self.missing.insert(video_id.to_string());
        self
    }
}

impl TranscriptFetcher for MockTranscripts {
    async fn fetch_transcript(&self, video_id: &str) -> Result<String, TranscriptUnavailable> {
        self.calls.lock().unwrap().push(video_id.to_string());

        if self.missing.contains(video_id) {
            return Err(TranscriptUnavailable {
                video_id: video_id.to_string(),
                cause: "Subtitles are disabled for this video".to_string(),
            });
        }

        Ok(self.transcript.clone())
    }
}
