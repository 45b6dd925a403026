//! Append-only fallback log for rows that failed to persist. Rows land
//! here instead of being lost; replay is a manual operation.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use digest_datastore::ProcessedVideo;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FALLBACK_LOG_PATH: &str = "failed_inserts.ndjson";

/// One failed row as a newline-delimited JSON record. Structured enough to
/// parse back, readable enough to audit with a pager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedInsertEntry {
    pub failed_at: DateTime<Utc>,
    pub error: String,
    pub video: ProcessedVideo,
}

/// Sole writer to the fallback file. Each append is a single whole-line
/// write, so entries cannot interleave.
#[derive(Debug)]
pub struct FallbackLog {
    path: PathBuf,
}

impl FallbackLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, video: &ProcessedVideo, error: &str) -> anyhow::Result<()> {
        let entry = FailedInsertEntry {
            failed_at: Utc::now(),
            error: error.to_string(),
            video: video.clone(),
        };

        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| {
                format!("Failed to open fallback log at {}", self.path.display())
            })?;
        file.write_all(line.as_bytes())
            .context("Failed to append fallback entry")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appended_entries_are_one_json_line_each() {
        let dir = tempfile::tempdir().unwrap();
        let log = FallbackLog::new(dir.path().join("failed.ndjson"));

        let mut video = ProcessedVideo::default();
        video.video_id = "v1".to_string();
        log.append(&video, "connection refused").unwrap();

        video.video_id = "v2".to_string();
        log.append(&video, "constraint violation").unwrap();

        let raw = std::fs::read_to_string(log.path()).unwrap();
        let entries: Vec<FailedInsertEntry> = raw
            .lines()
            .map(|line| serde_json::from_str(line).expect("parseable entry"))
            .collect();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].video.video_id, "v1");
        assert_eq!(entries[0].error, "connection refused");
        assert_eq!(entries[1].video.video_id, "v2");
    }
}
