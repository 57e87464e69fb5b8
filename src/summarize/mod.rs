pub mod gemini;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Configuration for turning raw article text into a spoken script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    pub model: String,
    /// Upper bound for the script length, in words.
    pub max_words: u32,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            max_words: 500,
        }
    }
}

/// Trait for LLM-based summarization engines.
#[allow(async_fn_in_trait)]
pub trait SummaryEngine: Send + Sync {
    /// Condense `articles` into a spoken-word news brief script.
    async fn summarize(&self, articles: &str, config: &SummaryConfig) -> Result<String, AppError>;

    /// Get the provider name for display.
    fn provider_name(&self) -> &str;
}

/// Build the system prompt that shapes the script for a TTS narrator.
pub fn build_summary_prompt(config: &SummaryConfig) -> String {
    format!(
        "You are an expert news editor and podcast scriptwriter. \
         Your goal is to take raw news text and convert it into a concise, engaging, \
         and spoken-word friendly \"News Brief\" script.\n\
         - Do not use markdown formatting like bold or headers in the output, as it will be read by a TTS engine.\n\
         - Use natural transitions between topics.\n\
         - Keep it under 3 minutes of reading time (approx {} words maximum).\n\
         - Start with \"Here is your personalized audio summary for today.\"\n\
         - End with \"That's all for now. Safe travels.\"",
        config.max_words
    )
}
