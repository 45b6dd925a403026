use std::path::PathBuf;

use digest_datastore::DataStore;

use crate::{
    config::Channel,
    fallback::{FallbackLog, DEFAULT_FALLBACK_LOG_PATH},
    llm::summarizer::Summarizer,
    yt::{TranscriptFetcher, VideoDiscovery},
    ChannelProcessor,
};

pub struct ChannelProcessorBuilder<D = (), V = (), T = (), S = ()> {
    store: D,
    discovery: V,
    transcripts: T,
    summarizer: S,
    channels: Vec<Channel>,
    max_results: u32,
    fallback_log_path: PathBuf,
}

impl ChannelProcessorBuilder {
    pub fn new() -> Self {
        Self {
            store: (),
            discovery: (),
            transcripts: (),
            summarizer: (),
            channels: Vec::new(),
            max_results: 20,
            fallback_log_path: PathBuf::from(DEFAULT_FALLBACK_LOG_PATH),
        }
    }
}

impl Default for ChannelProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, V, T, S> ChannelProcessorBuilder<D, V, T, S> {
    pub fn store<D2: DataStore + Send + Sync + 'static>(
        self,
        store: D2,
    ) -> ChannelProcessorBuilder<D2, V, T, S> {
        ChannelProcessorBuilder {
            store,
            discovery: self.discovery,
            transcripts: self.transcripts,
            summarizer: self.summarizer,
            channels: self.channels,
            max_results: self.max_results,
            fallback_log_path: self.fallback_log_path,
        }
    }

    pub fn discovery<V2: VideoDiscovery + Send + Sync + 'static>(
        self,
        discovery: V2,
    ) -> ChannelProcessorBuilder<D, V2, T, S> {
        ChannelProcessorBuilder {
            store: self.store,
            discovery,
            transcripts: self.transcripts,
            summarizer: self.summarizer,
            channels: self.channels,
            max_results: self.max_results,
            fallback_log_path: self.fallback_log_path,
        }
    }

    pub fn transcripts<T2: TranscriptFetcher + Send + Sync + 'static>(
        self,
        transcripts: T2,
    ) -> ChannelProcessorBuilder<D, V, T2, S> {
        ChannelProcessorBuilder {
            store: self.store,
            discovery: self.discovery,
            transcripts,
            summarizer: self.summarizer,
            channels: self.channels,
            max_results: self.max_results,
            fallback_log_path: self.fallback_log_path,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> ChannelProcessorBuilder<D, V, T, S2> {
        ChannelProcessorBuilder {
            store: self.store,
            discovery: self.discovery,
            transcripts: self.transcripts,
            summarizer,
            channels: self.channels,
            max_results: self.max_results,
            fallback_log_path: self.fallback_log_path,
        }
    }

    pub fn channels(mut self, channels: Vec<Channel>) -> Self {
        self.channels = channels;
        self
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn fallback_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.fallback_log_path = path.into();
        self
    }
}

impl<D, V, T, S> ChannelProcessorBuilder<D, V, T, S>
where
    D: DataStore + Send + Sync + 'static,
    V: VideoDiscovery + Send + Sync + 'static,
    T: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub fn build(self) -> ChannelProcessor<D, V, T, S> {
        ChannelProcessor {
            store: self.store,
            discovery: self.discovery,
            transcripts: self.transcripts,
            summarizer: self.summarizer,
            channels: self.channels,
            max_results: self.max_results,
            fallback: FallbackLog::new(self.fallback_log_path),
        }
    }
}
