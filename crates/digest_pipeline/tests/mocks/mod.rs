pub mod datastore;
pub mod discovery;
pub mod summarizer;
pub mod transcripts;

use chrono::{TimeZone, Utc};
use digest_pipeline::types::VideoRecord;

/// Minimal realistic metadata for one discovered video.
pub fn video(video_id: &str, channel_id: &str) -> VideoRecord {
    VideoRecord {
        video_id: video_id.to_string(),
        published_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        channel_id: channel_id.to_string(),
        title: format!("Video {video_id}"),
        description: "A test video".to_string(),
        thumbnails: serde_json::json!({
            "default": { "url": "https://i.ytimg.com/vi/test/default.jpg" }
        }),
        channel_title: "Test Channel".to_string(),
        tags: vec!["test".to_string()],
        category_id: "28".to_string(),
        duration: "PT10M".to_string(),
        aspect_ratio: None,
        definition: "hd".to_string(),
        caption: true,
        view_count: Some(100),
        like_count: Some(10),
        dislike_count: None,
        favorite_count: Some(0),
        comment_count: Some(3),
    }
}
