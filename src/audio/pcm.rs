use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::audio::AudioBuffer;

/// Failures while turning a TTS payload into an audio buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("audio payload is not valid base64: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    #[error("decoded {0} bytes; 16-bit PCM needs an even byte count")]
    MalformedLength(usize),
}

/// Decode a base64 payload of raw 16-bit signed little-endian PCM into a
/// normalized audio buffer.
///
/// The payload is mono by contract with the TTS provider — this is not a
/// general multi-channel PCM reader, and a provider-side format change must
/// be handled here rather than papered over. `sample_rate` is likewise the
/// provider's declared rate; nothing in the raw bytes can confirm it.
///
/// Samples map as `s / 32768.0`, so -32768 lands exactly on -1.0 while 32767
/// lands just under 1.0. That asymmetry is intrinsic to signed 16-bit PCM.
pub fn decode_base64_pcm(data: &str, sample_rate: u32) -> Result<AudioBuffer, DecodeError> {
    let bytes = STANDARD.decode(data)?;
    if bytes.len() % 2 != 0 {
        return Err(DecodeError::MalformedLength(bytes.len()));
    }

    let mut samples = Vec::with_capacity(bytes.len() / 2);
    for pair in bytes.chunks_exact(2) {
        let s = i16::from_le_bytes([pair[0], pair[1]]);
        samples.push(f32::from(s) / 32768.0);
    }

    Ok(AudioBuffer::mono(samples, sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b64(bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }

    #[test]
    fn test_decode_known_vector() {
        // int16 LE: -32768, 32767
        let payload = b64(&[0x00, 0x80, 0xFF, 0x7F]);
        let buf = decode_base64_pcm(&payload, 24000).unwrap();
        assert_eq!(buf.sample_rate, 24000);
        assert_eq!(buf.channel_count(), 1);
        assert_eq!(buf.frame_count(), 2);
        assert_eq!(buf.channels[0][0], -1.0);
        assert_eq!(buf.channels[0][1], 32767.0 / 32768.0);
    }

    #[test]
    fn test_decode_zero_and_midscale() {
        // int16 LE: 16384, 0
        let payload = b64(&[0x00, 0x40, 0x00, 0x00]);
        let buf = decode_base64_pcm(&payload, 24000).unwrap();
        assert_eq!(buf.channels[0], vec![0.5, 0.0]);
    }

    #[test]
    fn test_decode_empty_payload() {
        let buf = decode_base64_pcm("", 24000).unwrap();
        assert_eq!(buf.frame_count(), 0);
    }

    #[test]
    fn test_decode_rejects_odd_byte_count() {
        let payload = b64(&[0x01, 0x02, 0x03]);
        let err = decode_base64_pcm(&payload, 24000).unwrap_err();
        assert_eq!(err, DecodeError::MalformedLength(3));
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let err = decode_base64_pcm("!!!", 24000).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidEncoding(_)));
    }
}
