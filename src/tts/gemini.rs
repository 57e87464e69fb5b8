use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use serde_json::json;

use super::{sample_rate_from_mime, SpeechAudio, SpeechEngine, SynthesisConfig, DEFAULT_SAMPLE_RATE};
use crate::error::AppError;

/// Gemini native TTS engine.
///
/// The model answers with raw 16-bit PCM (base64 in `inlineData`), not a
/// playable container; the audio module turns it into WAV afterwards.
pub struct GeminiSpeechEngine {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

impl GeminiSpeechEngine {
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

    fn next_request_id() -> u64 {
        NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed)
    }

    fn response_request_id(headers: &reqwest::header::HeaderMap) -> String {
        const CANDIDATES: [&str; 4] = ["x-request-id", "request-id", "x-correlation-id", "trace-id"];
        for key in CANDIDATES {
            if let Some(value) = headers.get(key).and_then(|v| v.to_str().ok()) {
                if !value.trim().is_empty() {
                    return value.to_string();
                }
            }
        }
        "n/a".to_string()
    }
}

impl SpeechEngine for GeminiSpeechEngine {
    async fn synthesize(&self, text: &str, config: &SynthesisConfig) -> Result<SpeechAudio, AppError> {
        let body = json!({
            "contents": [{
                "parts": [{ "text": text }]
            }],
            "generationConfig": {
                "responseModalities": ["AUDIO"],
                "speechConfig": {
                    "voiceConfig": {
                        "prebuiltVoiceConfig": { "voiceName": config.voice.as_str() }
                    }
                }
            }
        });

        let started = Instant::now();
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
            .map_err(|e| AppError::Synthesis(format!("Gemini request failed: {e}")))?;

        let status = response.status();
        let upstream_request_id = Self::response_request_id(response.headers());
        let body_text = response
            .text()
            .await
            .map_err(|e| AppError::Synthesis(format!("Failed to read response: {e}")))?;
        let latency_ms = started.elapsed().as_millis();
        let local_request_id = Self::next_request_id();
        eprintln!(
            "[tts-http] provider=gemini request_id={} upstream_request_id={} status={} latency_ms={}",
            local_request_id, upstream_request_id, status, latency_ms
        );

        if !status.is_success() {
            return Err(AppError::Synthesis(format!(
                "Gemini API error ({status}): {body_text}"
            )));
        }

        let json: serde_json::Value = serde_json::from_str(&body_text)
            .map_err(|e| AppError::Synthesis(format!("Failed to parse Gemini response: {e}")))?;

        let inline = &json["candidates"][0]["content"]["parts"][0]["inlineData"];
        let data = inline["data"]
            .as_str()
            .filter(|d| !d.is_empty())
            .ok_or_else(|| AppError::Synthesis("No audio data returned from the model".into()))?
            .to_string();

        // The declared mime carries the real rate, e.g. audio/L16;codec=pcm;rate=24000
        let sample_rate = inline["mimeType"]
            .as_str()
            .and_then(sample_rate_from_mime)
            .unwrap_or(DEFAULT_SAMPLE_RATE);

        Ok(SpeechAudio { data, sample_rate })
    }

    fn provider_name(&self) -> &str {
        "Gemini TTS"
    }
}
