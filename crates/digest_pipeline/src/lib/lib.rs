pub mod config;
mod fallback;
mod llm;
mod processor;
pub mod tracing;
pub mod types;
pub mod yt;

pub use config::{Channel, ChannelRegistry, Config, ConfigError, DEFAULT_CONFIG_PATH};
pub use fallback::{FailedInsertEntry, FallbackLog, DEFAULT_FALLBACK_LOG_PATH};
pub use llm::openai;
pub use llm::summarizer::{Summarizer, SummaryResponse};
pub use processor::{ChannelProcessor, ChannelProcessorBuilder, RunReport};
