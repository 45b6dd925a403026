use std::path::PathBuf;

use clap::Parser;
use digest_datastore::PgDataStore;
use digest_pipeline::{
    openai::{OpenAIClient, PromptConfig},
    tracing::init_tracing_subscriber,
    yt::{discovery::YouTubeApi, transcript::CaptionClient},
    ChannelProcessorBuilder, Config, DEFAULT_CONFIG_PATH, DEFAULT_FALLBACK_LOG_PATH,
};

#[derive(Parser)]
#[command(name = "tube-digest", about = "YouTube channel transcript digest pipeline")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, env = "DIGEST_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Fallback log for rows that failed to insert
    #[arg(long, env = "FALLBACK_LOG_PATH", default_value = DEFAULT_FALLBACK_LOG_PATH)]
    fallback_log: PathBuf,

    /// Database connection URL, overrides the one built from the config
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// YouTube Data API key
    #[arg(long, env = "YOUTUBE_API_KEY")]
    youtube_key: String,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY")]
    openai_key: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let config = Config::load(&cli.config)?;

    let channels = config
        .enabled_channels()
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();
    if channels.is_empty() {
        anyhow::bail!("no enabled channels in {}", cli.config.display());
    }

    let database_url = cli
        .database_url
        .unwrap_or_else(|| config.database.url());

    let store = PgDataStore::init(&database_url).await?;
    let discovery = YouTubeApi::new(&cli.youtube_key);
    let transcripts = CaptionClient::new()?;
    let summarizer = OpenAIClient::new(&cli.openai_key, PromptConfig::from(config.openai.clone()))?;

    tracing::info!(
        channels = channels.len(),
        max_results = config.youtube.max_results,
        "Running pipeline once..."
    );

    let processor = ChannelProcessorBuilder::new()
        .store(store)
        .discovery(discovery)
        .transcripts(transcripts)
        .summarizer(summarizer)
        .channels(channels)
        .max_results(config.youtube.max_results)
        .fallback_log(&cli.fallback_log)
        .build();

    processor.run().await?;

    Ok(())
}
