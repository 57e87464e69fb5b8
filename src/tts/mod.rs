pub mod gemini;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Sample rate assumed when the provider response does not declare one.
/// Gemini native TTS emits mono 16-bit PCM at 24 kHz.
pub const DEFAULT_SAMPLE_RATE: u32 = 24000;

/// Prebuilt narrator voices offered by the speech model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoiceName {
    Puck,
    Charon,
    Kore,
    Fenrir,
    Zephyr,
}

impl VoiceName {
    pub const ALL: [VoiceName; 5] = [
        VoiceName::Puck,
        VoiceName::Charon,
        VoiceName::Kore,
        VoiceName::Fenrir,
        VoiceName::Zephyr,
    ];

    /// The identifier the provider expects in `voiceName`.
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceName::Puck => "Puck",
            VoiceName::Charon => "Charon",
            VoiceName::Kore => "Kore",
            VoiceName::Fenrir => "Fenrir",
            VoiceName::Zephyr => "Zephyr",
        }
    }
}

impl Default for VoiceName {
    fn default() -> Self {
        VoiceName::Kore
    }
}

/// Configuration for speech synthesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    pub voice: VoiceName,
    pub model: String,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            voice: VoiceName::default(),
            model: "gemini-2.5-flash-preview-tts".to_string(),
        }
    }
}

/// Raw audio payload returned by a speech provider: base64-encoded mono
/// 16-bit little-endian PCM, plus the rate it was sampled at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechAudio {
    pub data: String,
    pub sample_rate: u32,
}

/// Trait for cloud TTS engines that synthesize a complete script.
#[allow(async_fn_in_trait)]
pub trait SpeechEngine: Send + Sync {
    /// Synthesize `text` into a raw PCM payload.
    async fn synthesize(&self, text: &str, config: &SynthesisConfig) -> Result<SpeechAudio, AppError>;

    /// Get the provider name for display.
    fn provider_name(&self) -> &str;
}

/// Pull the sample rate out of a PCM mime type such as
/// `audio/L16;codec=pcm;rate=24000`.
pub fn sample_rate_from_mime(mime: &str) -> Option<u32> {
    mime.split(';')
        .find_map(|part| part.trim().strip_prefix("rate="))
        .and_then(|rate| rate.parse().ok())
}
