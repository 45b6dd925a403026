use anyhow::Context;
use sqlx::{migrate::Migrator, postgres::PgPoolOptions, PgPool};

use crate::{datastore::DataStore, ProcessedVideo};

static MIGRATOR: Migrator = sqlx::migrate!();

#[derive(Debug, Clone)]
pub struct PgDataStore {
    pub pool: PgPool,
}

impl PgDataStore {
    /// Establish connection to database and create the youtube table
    /// if not exists
    pub async fn init(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .inspect_err(
                |e| tracing::error!(error = ?e, "Failed to establish connection to database"),
            )
            .context("Failed to connect to postgres database")?;

        MIGRATOR
            .run(&pool)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to run database migrations"))
            .context("Failed to run database migrations")?;

        Ok(PgDataStore { pool })
    }
}

impl DataStore for PgDataStore {
    async fn insert_video(&self, video: &ProcessedVideo) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO youtube (
                video_id, published_at, channel_id, title, description,
                thumbnails, channel_title, tags, category_id, duration,
                aspect_ratio, definition, caption, view_count, like_count,
                dislike_count, favorite_count, comment_count, transcript,
                analysis, is_processed, token_count, api_calls,
                last_api_call, transcript_cache
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25
            )
            "#,
        )
        .bind(&video.video_id)
        .bind(video.published_at)
        .bind(&video.channel_id)
        .bind(&video.title)
        .bind(&video.description)
        .bind(video.thumbnails.to_string())
        .bind(&video.channel_title)
        .bind(serde_json::json!(video.tags).to_string())
        .bind(&video.category_id)
        .bind(&video.duration)
        .bind(video.aspect_ratio)
        .bind(&video.definition)
        .bind(video.caption)
        .bind(video.view_count)
        .bind(video.like_count)
        .bind(video.dislike_count)
        .bind(video.favorite_count)
        .bind(video.comment_count)
        .bind(&video.transcript)
        .bind(&video.analysis)
        .bind(video.is_processed)
        .bind(video.token_count)
        .bind(video.api_calls)
        .bind(video.last_api_call)
        .bind(&video.transcript_cache)
        .execute(&self.pool)
        .await
        .inspect_err(|err| {
            tracing::error!(
                error = ?err,
                video_id = %video.video_id,
                "Failed to insert video"
            )
        })
        .context("Failed to insert video")?;

        Ok(())
    }
}
