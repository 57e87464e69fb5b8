use serde_json::json;

use super::{build_summary_prompt, SummaryConfig, SummaryEngine};
use crate::error::AppError;

/// Gemini summarization engine.
pub struct GeminiSummaryEngine {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiSummaryEngine {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        let base_url = base_url
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".to_string());
        Self {
            api_key,
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

impl SummaryEngine for GeminiSummaryEngine {
    async fn summarize(&self, articles: &str, config: &SummaryConfig) -> Result<String, AppError> {
        let body = json!({
            "systemInstruction": {
                "parts": [{ "text": build_summary_prompt(config) }]
            },
            "contents": [{
                "parts": [{ "text": articles }]
            }]
        });

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, config.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Summarization(format!("Gemini request failed: {e}")))?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|e| AppError::Summarization(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(AppError::Summarization(format!(
                "Gemini API error ({status}): {body_text}"
            )));
        }

        let json: serde_json::Value = serde_json::from_str(&body_text)
            .map_err(|e| AppError::Summarization(format!("Failed to parse Gemini response: {e}")))?;

        let script = json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Summarization("No script returned from the model".into()))?;

        Ok(script)
    }

    fn provider_name(&self) -> &str {
        "Gemini"
    }
}
