//! Briefly backend: summarize pasted articles into a spoken-word script,
//! synthesize it with a cloud TTS provider, and repackage the provider's raw
//! PCM answer as a playable WAV blob.

pub mod audio;
pub mod brief;
pub mod error;
pub mod keys;
pub mod logger;
pub mod summarize;
pub mod tts;

pub use audio::pcm::{decode_base64_pcm, DecodeError};
pub use audio::wav::encode_wav;
pub use audio::AudioBuffer;
pub use brief::{generate_brief, save_wav, Brief, BriefOptions, WAV_MIME};
pub use error::AppError;
