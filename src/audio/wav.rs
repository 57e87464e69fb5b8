use crate::audio::AudioBuffer;

/// Encode a normalized audio buffer into a WAV container (PCM, 16-bit,
/// little-endian), channels interleaved frame-major.
///
/// Total function: a zero-frame or zero-channel buffer still yields a valid
/// 44-byte header with an empty data chunk.
pub fn encode_wav(buffer: &AudioBuffer) -> Vec<u8> {
    let num_channels = buffer.channel_count() as u16;
    let bits_per_sample: u16 = 16;
    let sample_rate = buffer.sample_rate;
    let byte_rate = sample_rate * u32::from(num_channels) * u32::from(bits_per_sample) / 8;
    let block_align = num_channels * bits_per_sample / 8;
    let frame_count = buffer.frame_count();
    let data_size = (frame_count * usize::from(num_channels) * 2) as u32;
    let file_size = 36 + data_size;

    let mut buf = Vec::with_capacity(44 + data_size as usize);

    // RIFF header
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&file_size.to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    // fmt sub-chunk
    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes()); // sub-chunk size
    buf.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    buf.extend_from_slice(&num_channels.to_le_bytes());
    buf.extend_from_slice(&sample_rate.to_le_bytes());
    buf.extend_from_slice(&byte_rate.to_le_bytes());
    buf.extend_from_slice(&block_align.to_le_bytes());
    buf.extend_from_slice(&bits_per_sample.to_le_bytes());

    // data sub-chunk
    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_size.to_le_bytes());
    for frame in 0..frame_count {
        for channel in &buffer.channels {
            let s = quantize(channel[frame]);
            buf.extend_from_slice(&s.to_le_bytes());
        }
    }

    buf
}

/// Clamp to [-1.0, 1.0] and scale back to the signed 16-bit range.
///
/// The scale mirrors the decoder's `s / 32768.0`, with full-scale positive
/// saturating at 32767 (the `as` cast both truncates toward zero and
/// saturates), so a decode/encode round trip reproduces the original sample
/// words. NaN quantizes to silence rather than to an arbitrary value.
fn quantize(sample: f32) -> i16 {
    if sample.is_nan() {
        return 0;
    }
    (sample.clamp(-1.0, 1.0) * 32768.0) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn le_u32(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    fn le_u16(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes(bytes[offset..offset + 2].try_into().unwrap())
    }

    #[test]
    fn test_header_layout() {
        let buf = AudioBuffer::new(vec![vec![0.0; 3], vec![0.0; 3]], 44100);
        let wav = encode_wav(&buf);

        assert_eq!(wav.len(), 44 + 3 * 2 * 2);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(le_u32(&wav, 4), wav.len() as u32 - 8);
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(le_u32(&wav, 16), 16);
        assert_eq!(le_u16(&wav, 20), 1); // PCM
        assert_eq!(le_u16(&wav, 22), 2); // channels
        assert_eq!(le_u32(&wav, 24), 44100);
        assert_eq!(le_u32(&wav, 28), 44100 * 2 * 2); // byte rate
        assert_eq!(le_u16(&wav, 32), 4); // block align
        assert_eq!(le_u16(&wav, 34), 16); // bits per sample
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(le_u32(&wav, 40), 3 * 2 * 2);
    }

    #[test]
    fn test_zero_frame_buffer() {
        let wav = encode_wav(&AudioBuffer::mono(Vec::new(), 24000));
        assert_eq!(wav.len(), 44);
        assert_eq!(le_u32(&wav, 4), 36);
        assert_eq!(le_u32(&wav, 40), 0);
    }

    #[test]
    fn test_zero_channel_buffer() {
        let wav = encode_wav(&AudioBuffer::new(Vec::new(), 24000));
        assert_eq!(wav.len(), 44);
        assert_eq!(le_u16(&wav, 22), 0);
        assert_eq!(le_u32(&wav, 40), 0);
    }

    #[test]
    fn test_clamping_before_scale() {
        let buf = AudioBuffer::mono(vec![2.0, -2.0, 0.0], 24000);
        let wav = encode_wav(&buf);
        let data: Vec<i16> = wav[44..]
            .chunks_exact(2)
            .map(|p| i16::from_le_bytes([p[0], p[1]]))
            .collect();
        assert_eq!(data, vec![32767, -32768, 0]);
    }

    #[test]
    fn test_nan_and_infinity_guards() {
        let buf = AudioBuffer::mono(vec![f32::NAN, f32::INFINITY, f32::NEG_INFINITY], 24000);
        let wav = encode_wav(&buf);
        let data: Vec<i16> = wav[44..]
            .chunks_exact(2)
            .map(|p| i16::from_le_bytes([p[0], p[1]]))
            .collect();
        assert_eq!(data, vec![0, 32767, -32768]);
    }

    #[test]
    fn test_full_scale_round_trip() {
        // -32768 decodes to -1.0 and must come back as -32768; 32767 decodes
        // just shy of 1.0 and must come back as 32767.
        let buf = AudioBuffer::mono(vec![-1.0, 32767.0 / 32768.0], 24000);
        let wav = encode_wav(&buf);
        assert_eq!(&wav[44..], &[0x00, 0x80, 0xFF, 0x7F]);
    }

    #[test]
    fn test_stereo_interleaving() {
        let left = vec![0.25, 0.5];
        let right = vec![-0.25, -0.5];
        let wav = encode_wav(&AudioBuffer::new(vec![left, right], 24000));
        let data: Vec<i16> = wav[44..]
            .chunks_exact(2)
            .map(|p| i16::from_le_bytes([p[0], p[1]]))
            .collect();
        // L0 R0 L1 R1
        assert_eq!(data, vec![8192, -8192, 16384, -16384]);
    }
}
