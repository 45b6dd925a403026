use std::future::Future;

pub mod postgres;

use crate::ProcessedVideo;

/// Persistence seam for the ingestion pipeline.
///
/// One row per video, one insert per row. Callers own the fallback handling
/// for failed inserts; implementations only report the failure.
pub trait DataStore {
    fn insert_video(
        &self,
        video: &ProcessedVideo,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

impl<T: DataStore + Send + Sync> DataStore for &T {
    async fn insert_video(&self, video: &ProcessedVideo) -> anyhow::Result<()> {
        (**self).insert_video(video).await
    }
}
