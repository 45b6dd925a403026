use std::{fmt::Debug, future::Future};

/// Produces a natural-language summary of a transcript plus the token
/// count of the request that produced it.
pub trait Summarizer {
    type Error: Debug;

    fn summarize(
        &self,
        transcript: &str,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResponse {
    pub summary: String,
    /// Tokenizer count of the full request payload (system message plus
    /// rendered user message), not of the completion. Cost accounting only.
    pub token_count: usize,
}
