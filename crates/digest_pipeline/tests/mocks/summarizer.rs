use std::sync::{Arc, Mutex};

use digest_pipeline::{Summarizer, SummaryResponse};

#[derive(Clone)]
pub struct MockSummarizer {
    pub summary: String,
    pub token_count: usize,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockSummarizer {
    pub fn new(summary: &str, token_count: usize) -> Self {
        Self {
            summary: summary.to_string(),
            token_count,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            summary: String::new(),
            token_count: 0,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl Summarizer for MockSummarizer {
    type Error = anyhow::Error;

    async fn summarize(&self, transcript: &str) -> Result<SummaryResponse, Self::Error> {
        self.calls.lock().unwrap().push(transcript.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(SummaryResponse {
            summary: self.summary.clone(),
            token_count: self.token_count,
        })
    }
}
