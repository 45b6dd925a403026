//! # YouTube Data API models
//!
//! Serde models for the two Data API v3 endpoints the pipeline consumes
//! (`search` and `videos`), plus [`VideoRecord`], the typed record the rest
//! of the pipeline works with. The API returns statistics counts as JSON
//! strings and omits them on some videos; omitted or unparseable counts map
//! to `None`, never to zero.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Deserialize;

static ISO8601_DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^P(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$").unwrap()
});

/// Response of `GET /search?channelId=...&order=date`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
}

/// Search results mix videos with channels and playlists; only video
/// results carry a `videoId`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    #[serde(default)]
    pub video_id: Option<String>,
}

/// Response of `GET /videos?id=...&part=snippet,contentDetails,statistics`.
#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub id: String,
    pub snippet: Snippet,
    pub content_details: ContentDetails,
    #[serde(default)]
    pub statistics: Statistics,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub published_at: DateTime<Utc>,
    pub channel_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnails: serde_json::Value,
    pub channel_title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetails {
    pub duration: String,
    #[serde(default)]
    pub definition: String,
    /// The API reports caption availability as the string "true"/"false".
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub aspect_ratio: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(default)]
    pub view_count: Option<String>,
    #[serde(default)]
    pub like_count: Option<String>,
    #[serde(default)]
    pub dislike_count: Option<String>,
    #[serde(default)]
    pub favorite_count: Option<String>,
    #[serde(default)]
    pub comment_count: Option<String>,
}

/// Full metadata for one discovered video. Immutable once fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoRecord {
    pub video_id: String,
    pub published_at: DateTime<Utc>,
    pub channel_id: String,
    pub title: String,
    pub description: String,
    pub thumbnails: serde_json::Value,
    pub channel_title: String,
    pub tags: Vec<String>,
    pub category_id: String,
    /// Raw ISO-8601 duration string, e.g. `PT1H2M3S`.
    pub duration: String,
    pub aspect_ratio: Option<f64>,
    pub definition: String,
    pub caption: bool,
    pub view_count: Option<i64>,
    pub like_count: Option<i64>,
    pub dislike_count: Option<i64>,
    pub favorite_count: Option<i64>,
    pub comment_count: Option<i64>,
}

impl VideoRecord {
    /// Duration in whole seconds, when the ISO-8601 string is parseable.
    pub fn duration_seconds(&self) -> Option<u64> {
        parse_iso8601_duration(&self.duration)
    }
}

impl From<VideoItem> for VideoRecord {
    fn from(
        VideoItem {
            id,
            snippet,
            content_details,
            statistics,
        }: VideoItem,
    ) -> Self {
        VideoRecord {
            video_id: id,
            published_at: snippet.published_at,
            channel_id: snippet.channel_id,
            title: snippet.title,
            description: snippet.description,
            thumbnails: snippet.thumbnails,
            channel_title: snippet.channel_title,
            tags: snippet.tags,
            category_id: snippet.category_id,
            duration: content_details.duration,
            aspect_ratio: content_details.aspect_ratio,
            definition: content_details.definition,
            caption: content_details.caption == "true",
            view_count: parse_count(statistics.view_count),
            like_count: parse_count(statistics.like_count),
            dislike_count: parse_count(statistics.dislike_count),
            favorite_count: parse_count(statistics.favorite_count),
            comment_count: parse_count(statistics.comment_count),
        }
    }
}

fn parse_count(raw: Option<String>) -> Option<i64> {
    raw.and_then(|v| v.parse().ok())
}

fn parse_iso8601_duration(duration: &str) -> Option<u64> {
    let caps = ISO8601_DURATION_RE.captures(duration)?;
    // "P" or "PT" with no components matches the pattern but is not a duration
    if caps.iter().skip(1).all(|c| c.is_none()) {
        return None;
    }

    let component = |i: usize| caps.get(i).map_or(Some(0), |m| m.as_str().parse().ok());
    let days: u64 = component(1)?;
    let hours: u64 = component(2)?;
    let minutes: u64 = component(3)?;
    let seconds: u64 = component(4)?;

    Some(days * 86_400 + hours * 3_600 + minutes * 60 + seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIDEO_ITEM_JSON: &str = r#"
    {
        "id": "dQw4w9WgXcQ",
        "snippet": {
            "publishedAt": "2024-03-01T12:30:00Z",
            "channelId": "UCabc",
            "title": "A video",
            "description": "About things",
            "thumbnails": {
                "default": {
                    "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg",
                    "width": 120,
                    "height": 90
                }
            },
            "channelTitle": "Some Channel",
            "tags": ["news", "ai"],
            "categoryId": "28"
        },
        "contentDetails": {
            "duration": "PT15M33S",
            "definition": "hd",
            "caption": "true"
        },
        "statistics": {
            "viewCount": "1024",
            "favoriteCount": "0",
            "commentCount": "not-a-number"
        }
    }
    "#;

    #[test]
    fn test_video_item_converts_to_record() {
        let item: VideoItem = serde_json::from_str(VIDEO_ITEM_JSON).expect("valid video item");
        let record = VideoRecord::from(item);

        assert_eq!(record.video_id, "dQw4w9WgXcQ");
        assert_eq!(record.channel_id, "UCabc");
        assert_eq!(record.channel_title, "Some Channel");
        assert_eq!(record.tags, vec!["news".to_string(), "ai".to_string()]);
        assert_eq!(record.duration, "PT15M33S");
        assert!(record.caption);
        assert_eq!(record.view_count, Some(1024));
        assert_eq!(record.favorite_count, Some(0));
    }

    #[test]
    fn test_omitted_counts_are_absent_not_zero() {
        let item: VideoItem = serde_json::from_str(VIDEO_ITEM_JSON).expect("valid video item");
        let record = VideoRecord::from(item);

        assert_eq!(record.like_count, None);
        assert_eq!(record.dislike_count, None);
        assert_eq!(record.aspect_ratio, None);
        // present but unparseable still maps to None
        assert_eq!(record.comment_count, None);
    }

    #[test]
    fn test_caption_flag_defaults_to_false() {
        let json = VIDEO_ITEM_JSON.replace("\"caption\": \"true\"", "\"caption\": \"false\"");
        let item: VideoItem = serde_json::from_str(&json).expect("valid video item");
        assert!(!VideoRecord::from(item).caption);
    }

    #[test]
    fn test_search_items_may_lack_a_video_id() {
        let json = r#"
        {
            "items": [
                { "id": { "kind": "youtube#video", "videoId": "v1" } },
                { "id": { "kind": "youtube#channel", "channelId": "UCxyz" } }
            ]
        }
        "#;
        let resp: SearchResponse = serde_json::from_str(json).expect("valid search response");

        assert_eq!(resp.items.len(), 2);
        assert_eq!(resp.items[0].id.video_id.as_deref(), Some("v1"));
        assert_eq!(resp.items[1].id.video_id, None);
    }

    #[test]
    fn test_parses_iso8601_durations() {
        assert_eq!(parse_iso8601_duration("PT45S"), Some(45));
        assert_eq!(parse_iso8601_duration("PT15M33S"), Some(933));
        assert_eq!(parse_iso8601_duration("PT1H2M3S"), Some(3723));
        assert_eq!(parse_iso8601_duration("P1DT2H"), Some(93_600));
        assert_eq!(parse_iso8601_duration("PT0S"), Some(0));
    }

    #[test]
    fn test_rejects_malformed_durations() {
        assert_eq!(parse_iso8601_duration(""), None);
        assert_eq!(parse_iso8601_duration("P"), None);
        assert_eq!(parse_iso8601_duration("PT"), None);
        assert_eq!(parse_iso8601_duration("12:34"), None);
        assert_eq!(parse_iso8601_duration("PT1X"), None);
    }
}
