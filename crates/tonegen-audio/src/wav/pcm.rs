//! PCM byte conversion, extraction, and hashing.

/// Converts signed 16-bit samples to their PCM byte representation.
///
/// Each sample is dumped least-significant byte first. The order is forced
/// through [`i16::to_le_bytes`] rather than inherited from the host, so the
/// payload is identical on big-endian targets.
pub fn pcm16_to_bytes(samples: &[i16]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        pcm.extend_from_slice(&sample.to_le_bytes());
    }

    pcm
}

/// Extracts the PCM payload from an encoded WAV buffer.
///
/// Walks the chunk list after the RIFF header until it finds the `data`
/// chunk. Used for comparing files by their audio content only.
///
/// # Returns
/// The payload slice, or `None` if the buffer is not a well-formed WAV file.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 44 {
        return None;
    }

    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        if chunk_id == b"data" {
            let data_start = pos + 8;
            let data_end = data_start.checked_add(chunk_size)?;
            if data_end <= wav_data.len() {
                return Some(&wav_data[data_start..data_end]);
            }
            return None;
        }

        pos += 8 + chunk_size;
        // Chunks are word-aligned
        if chunk_size % 2 != 0 {
            pos += 1;
        }
    }

    None
}

/// Computes the BLAKE3 hash of a WAV file's PCM payload.
///
/// # Returns
/// Hex digest of the payload, or `None` if the buffer is not a well-formed
/// WAV file.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
