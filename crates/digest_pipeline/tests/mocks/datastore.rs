use std::sync::{Arc, Mutex};

use digest_datastore::{DataStore, ProcessedVideo};

#[derive(Clone, Default)]
pub struct MockDataStore {
    pub inserted: Arc<Mutex<Vec<ProcessedVideo>>>,
    pub fail_with: Option<String>,
}

impl MockDataStore {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl DataStore for MockDataStore {
    async fn insert_video(&self, video: &ProcessedVideo) -> anyhow::Result<()> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.inserted.lock().unwrap().push(video.clone());
        Ok(())
    }
}
