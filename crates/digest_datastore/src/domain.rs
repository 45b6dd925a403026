use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One fully processed video, shaped 1:1 after the wide `youtube` table.
///
/// The table is deliberately denormalized: channel fields are repeated on
/// every row and the transcript/analysis live next to the metadata. Rows are
/// written once per discovered video and never updated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessedVideo {
    pub video_id: String,
    pub published_at: DateTime<Utc>,
    pub channel_id: String,
    pub title: String,
    pub description: String,
    /// Thumbnail set exactly as the platform returned it.
    pub thumbnails: serde_json::Value,
    pub channel_title: String,
    pub tags: Vec<String>,
    pub category_id: String,
    /// Raw ISO-8601 duration, e.g. `PT1H2M3S`.
    pub duration: String,
    pub aspect_ratio: Option<f64>,
    pub definition: String,
    /// Whether the platform reports captions for this video.
    pub caption: bool,
    // Statistics counts are optional: the platform omits them on some
    // videos, and an omitted count must never read as zero.
    pub view_count: Option<i64>,
    pub like_count: Option<i64>,
    pub dislike_count: Option<i64>,
    pub favorite_count: Option<i64>,
    pub comment_count: Option<i64>,
    pub transcript: String,
    /// LLM summary of the transcript; `None` when summarization failed.
    pub analysis: Option<String>,
    /// True iff an analysis was produced for this row.
    pub is_processed: bool,
    /// Tokenizer count of the full summarization request payload.
    pub token_count: Option<i64>,
    /// Running count of summarization calls within the channel's batch at
    /// the time this row was assembled. Reset per channel, never per video.
    pub api_calls: i32,
    /// Wall-clock time of the most recent summarization attempt.
    pub last_api_call: Option<DateTime<Utc>>,
    /// Copy of the raw transcript kept for reprocessing without a refetch.
    pub transcript_cache: String,
}
