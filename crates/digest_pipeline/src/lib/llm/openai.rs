use another_tiktoken_rs::{cl100k_base, get_bpe_from_model, CoreBPE};
use reqwest::Client;
use serde::Deserialize;

use crate::config::{OpenAISettings, TRANSCRIPT_PLACEHOLDER};
use crate::llm::summarizer::{SummaryResponse, Summarizer};

/// Chat-completion client configured with the active prompt set. The
/// tokenizer is resolved once per client from the configured model.
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: String,
    prompts: PromptConfig,
    tokenizer: CoreBPE,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAIError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("tokenizer error: {0}")]
    Tokenizer(String),
}

/// Prompt configuration snapshot taken from the `openai` config section.
#[derive(Debug, Clone)]
pub struct PromptConfig {
    pub model: String,
    pub temperature: f64,
    pub system_prompt: String,
    pub user_prompt_template: String,
}

impl From<OpenAISettings> for PromptConfig {
    fn from(settings: OpenAISettings) -> Self {
        PromptConfig {
            model: settings.model,
            temperature: settings.temperature,
            system_prompt: settings.system_prompt,
            user_prompt_template: settings.user_prompt_template,
        }
    }
}

impl OpenAIClient {
    pub fn new(api_key: impl Into<String>, prompts: PromptConfig) -> Result<Self, OpenAIError> {
        let tokenizer = get_bpe_from_model(&prompts.model)
            .or_else(|_| cl100k_base())
            .map_err(|e| OpenAIError::Tokenizer(e.to_string()))?;

        Ok(Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".into(),
            prompts,
            tokenizer,
        })
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Substitutes the transcript into the user prompt template exactly
    /// once, by value. A transcript containing the literal placeholder text
    /// must never be substituted into again.
    fn render_user_prompt(&self, transcript: &str) -> String {
        self.prompts
            .user_prompt_template
            .replacen(TRANSCRIPT_PLACEHOLDER, transcript, 1)
    }

    fn count_request_tokens(&self, user_content: &str) -> usize {
        let system = self
            .tokenizer
            .encode_with_special_tokens(&self.prompts.system_prompt)
            .len();
        let user = self.tokenizer.encode_with_special_tokens(user_content).len();
        system + user
    }

    pub async fn send_completion_request(
        &self,
        user_content: impl Into<String>,
    ) -> Result<CompletionResponse, OpenAIError> {
        let body = serde_json::json!({
            "model": self.prompts.model,
            "temperature": self.prompts.temperature,
            "messages": [
                {
                    "role": "system",
                    "content": self.prompts.system_prompt
                },
                {
                    "role": "user",
                    "content": user_content.into()
                }
            ]
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OpenAIError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: CompletionMessage,
    pub finish_reason: String,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
}

impl Summarizer for OpenAIClient {
    type Error = OpenAIError;

    #[tracing::instrument(skip_all)]
    async fn summarize(&self, transcript: &str) -> Result<SummaryResponse, Self::Error> {
        let user_content = self.render_user_prompt(transcript);
        // counted before the call so a failed request still has a cost figure in the logs
        let token_count = self.count_request_tokens(&user_content);
        tracing::debug!(token_count, "Sending summarization request");

        let response = self
            .send_completion_request(user_content)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize transcript"))?;

        let summary = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .map(|content| content.trim().to_string())
            .ok_or_else(|| OpenAIError::Api {
                status: 0,
                message: "No content in response".into(),
            })?;

        Ok(SummaryResponse {
            summary,
            token_count,
        })
    }
}
