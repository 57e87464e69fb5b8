use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Local;

use crate::audio::{pcm, wav};
use crate::error::AppError;
use crate::summarize::{SummaryConfig, SummaryEngine};
use crate::tts::{SpeechEngine, SynthesisConfig};

/// MIME type for the encoded audio handed to playback and download sinks.
pub const WAV_MIME: &str = "audio/wav";

const MIN_TIMEOUT_SECS: u64 = 5;
const MAX_TIMEOUT_SECS: u64 = 180;

/// Options for one generate-brief run.
#[derive(Debug, Clone)]
pub struct BriefOptions {
    pub summary: SummaryConfig,
    pub synthesis: SynthesisConfig,
    /// Per-call timeout for the cloud requests, clamped into [5, 180] s.
    pub cloud_timeout_secs: u64,
}

impl Default for BriefOptions {
    fn default() -> Self {
        Self {
            summary: SummaryConfig::default(),
            synthesis: SynthesisConfig::default(),
            cloud_timeout_secs: 45,
        }
    }
}

/// Result of one generate-brief run.
#[derive(Debug, Clone)]
pub struct Brief {
    /// The spoken-word script the summarizer produced.
    pub script: String,
    /// WAV-encoded audio, ready for an `audio/wav` playback or download sink.
    pub wav: Vec<u8>,
    pub sample_rate: u32,
    pub duration_secs: f32,
}

/// Generate a narrated audio brief from pasted article text.
///
/// Runs the whole action: summarize the articles into a script, synthesize
/// speech, decode the provider's raw PCM at its declared rate, and encode a
/// playable WAV. Any failure aborts the action as a whole; callers surface
/// the error as a single message and nothing partial is returned.
pub async fn generate_brief<S, T>(
    summarizer: &S,
    speech: &T,
    articles: &str,
    options: &BriefOptions,
) -> Result<Brief, AppError>
where
    S: SummaryEngine,
    T: SpeechEngine,
{
    let articles = articles.trim();
    if articles.is_empty() {
        return Err(AppError::Summarization("No article text provided".into()));
    }

    let timeout = Duration::from_secs(
        options
            .cloud_timeout_secs
            .clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS),
    );

    crate::app_log!(
        "[brief] summarizing {} chars via {}",
        articles.len(),
        summarizer.provider_name()
    );
    let script = tokio::time::timeout(timeout, summarizer.summarize(articles, &options.summary))
        .await
        .map_err(|_| {
            AppError::Summarization("Summarization timeout. Check internet and try again.".into())
        })??;

    crate::app_log!(
        "[brief] synthesizing {} chars via {}",
        script.len(),
        speech.provider_name()
    );
    let audio = tokio::time::timeout(timeout, speech.synthesize(&script, &options.synthesis))
        .await
        .map_err(|_| {
            AppError::Synthesis("Speech synthesis timeout. Check internet and try again.".into())
        })??;

    let buffer = pcm::decode_base64_pcm(&audio.data, audio.sample_rate)?;
    let duration_secs = buffer.duration_secs();
    let wav = wav::encode_wav(&buffer);
    crate::app_log!(
        "[brief] encoded {} bytes of WAV ({:.1}s at {} Hz)",
        wav.len(),
        duration_secs,
        buffer.sample_rate
    );

    Ok(Brief {
        script,
        wav,
        sample_rate: buffer.sample_rate,
        duration_secs,
    })
}

/// Persist a brief's WAV under `dir`, named by local timestamp.
pub fn save_wav(dir: &Path, wav: &[u8]) -> Result<PathBuf, AppError> {
    fs::create_dir_all(dir)?;
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("brief_{timestamp}.wav"));
    fs::write(&path, wav)?;
    Ok(path)
}
