mod builder;

pub use builder::ChannelProcessorBuilder;

use chrono::{DateTime, Utc};
use digest_datastore::{DataStore, ProcessedVideo};

use crate::{
    config::Channel,
    fallback::FallbackLog,
    llm::summarizer::{SummaryResponse, Summarizer},
    types::VideoRecord,
    yt::{TranscriptFetcher, VideoDiscovery},
};

// The core youtube channel ingestion processor
#[derive(Debug)]
pub struct ChannelProcessor<D, V, T, S>
where
    D: DataStore + Send + Sync + 'static,
    V: VideoDiscovery + Send + Sync + 'static,
    T: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    store: D,
    discovery: V,
    transcripts: T,
    summarizer: S,
    channels: Vec<Channel>,
    max_results: u32,
    fallback: FallbackLog,
}

/// Per-run accounting totals, returned by [`ChannelProcessor::run`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub channels_processed: usize,
    pub channels_failed: usize,
    pub videos_discovered: usize,
    pub videos_skipped_no_transcript: usize,
    pub videos_persisted: usize,
    pub fallback_entries: usize,
    pub tokens_spent: usize,
}

impl<D, V, T, S> ChannelProcessor<D, V, T, S>
where
    D: DataStore + Send + Sync + 'static,
    V: VideoDiscovery + Send + Sync + 'static,
    T: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    /// Processes every enabled channel once, sequentially. Failures are
    /// isolated per channel and per video; the only fatal condition is an
    /// empty enabled-channel list.
    #[tracing::instrument(skip(self))]
    pub async fn run(self) -> anyhow::Result<RunReport> {
        let enabled = self
            .channels
            .iter()
            .filter(|ch| ch.enabled)
            .collect::<Vec<_>>();
        if enabled.is_empty() {
            anyhow::bail!("no enabled channels configured");
        }

        let mut report = RunReport::default();

        for channel in enabled {
            self.process_channel(channel, &mut report).await;
        }

        tracing::info!(
            channels_processed = report.channels_processed,
            channels_failed = report.channels_failed,
            videos_discovered = report.videos_discovered,
            videos_skipped_no_transcript = report.videos_skipped_no_transcript,
            videos_persisted = report.videos_persisted,
            fallback_entries = report.fallback_entries,
            tokens_spent = report.tokens_spent,
            "Run complete"
        );

        Ok(report)
    }

    #[tracing::instrument(skip_all, fields(channel_id = %channel.id, channel = %channel.name))]
    async fn process_channel(&self, channel: &Channel, report: &mut RunReport) {
        let videos = match self
            .discovery
            .recent_videos(&channel.id, self.max_results)
            .await
        {
            Ok(videos) => videos,
            Err(e) => {
                // a failed channel never takes the batch down with it
                tracing::error!(error = ?e, "Failed to discover videos, skipping channel");
                report.channels_failed += 1;
                return;
            }
        };

        tracing::info!(count = videos.len(), "Processing videos");
        report.videos_discovered += videos.len();

        // channel-scoped accounting, reset for every channel
        let mut api_calls: i32 = 0;
        let mut last_api_call: Option<DateTime<Utc>> = None;

        for video in videos {
            self.process_video(video, &mut api_calls, &mut last_api_call, report)
                .await;
        }

        report.channels_processed += 1;
        tracing::info!(api_calls, "Channel complete");
    }

    #[tracing::instrument(skip_all, fields(video_id = %video.video_id))]
    async fn process_video(
        &self,
        video: VideoRecord,
        api_calls: &mut i32,
        last_api_call: &mut Option<DateTime<Utc>>,
        report: &mut RunReport,
    ) {
        let video_id = video.video_id.clone();
        tracing::debug!(
            title = %video.title,
            duration_secs = video.duration_seconds(),
            "Processing video"
        );

        let transcript = match self.transcripts.fetch_transcript(&video_id).await {
            Ok(transcript) => transcript,
            Err(e) => {
                // no transcript means no summarization call and no row
                tracing::warn!(error = %e, "Skipping video without transcript");
                report.videos_skipped_no_transcript += 1;
                return;
            }
        };

        // counted per attempt, before the outcome is known
        *api_calls += 1;
        *last_api_call = Some(Utc::now());

        let summary = match self.summarizer.summarize(&transcript).await {
            Ok(resp) => {
                report.tokens_spent += resp.token_count;
                Some(resp)
            }
            Err(e) => {
                // persist the partial row anyway, analysis stays empty
                tracing::error!(error = ?e, "Failed to summarize transcript");
                None
            }
        };

        let row = build_row(video, transcript, summary, *api_calls, *last_api_call);

        match self.store.insert_video(&row).await {
            Ok(()) => report.videos_persisted += 1,
            Err(e) => {
                tracing::error!(error = ?e, "Failed to insert video, writing fallback entry");
                match self.fallback.append(&row, &format!("{e:#}")) {
                    Ok(()) => report.fallback_entries += 1,
                    Err(log_err) => {
                        tracing::error!(error = ?log_err, "Failed to write fallback entry, row lost");
                    }
                }
            }
        }
    }
}

fn build_row(
    video: VideoRecord,
    transcript: String,
    summary: Option<SummaryResponse>,
    api_calls: i32,
    last_api_call: Option<DateTime<Utc>>,
) -> ProcessedVideo {
    let (analysis, token_count) = match summary {
        Some(resp) => (Some(resp.summary), Some(resp.token_count as i64)),
        None => (None, None),
    };

    ProcessedVideo {
        video_id: video.video_id,
        published_at: video.published_at,
        channel_id: video.channel_id,
        title: video.title,
        description: video.description,
        thumbnails: video.thumbnails,
        channel_title: video.channel_title,
        tags: video.tags,
        category_id: video.category_id,
        duration: video.duration,
        aspect_ratio: video.aspect_ratio,
        definition: video.definition,
        caption: video.caption,
        view_count: video.view_count,
        like_count: video.like_count,
        dislike_count: video.dislike_count,
        favorite_count: video.favorite_count,
        comment_count: video.comment_count,
        transcript_cache: transcript.clone(),
        transcript,
        is_processed: analysis.is_some(),
        analysis,
        token_count,
        api_calls,
        last_api_call,
    }
}
