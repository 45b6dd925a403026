use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use digest_pipeline::types::VideoRecord;
use digest_pipeline::yt::VideoDiscovery;

#[derive(Clone, Default)]
pub struct MockDiscovery {
    videos: HashMap<String, Vec<VideoRecord>>,
    fail_channels: HashMap<String, String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel(mut self, channel_id: &str, videos: Vec<VideoRecord>) -> Self {
        self.videos.insert(channel_id.to_string(), videos);
        self
    }

    pub fn failing_for(mut self, channel_id: &str, msg: &str) -> Self {
        self.fail_channels
            .insert(channel_id.to_string(), msg.to_string());
        self
    }
}

impl VideoDiscovery for MockDiscovery {
    type Error = anyhow::Error;

    async fn recent_videos(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> anyhow::Result<Vec<VideoRecord>> {
        self.calls.lock().unwrap().push(channel_id.to_string());

        if let Some(msg) = self.fail_channels.get(channel_id) {
            return Err(anyhow::anyhow!("{}", msg));
        }

        let videos = self.videos.get(channel_id).cloned().unwrap_or_default();
        Ok(videos
            .into_iter()
            .take(max_results as usize)
            .collect())
    }
}
