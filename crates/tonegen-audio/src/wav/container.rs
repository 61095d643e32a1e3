//! In-memory container assembly.

use std::io::{self, Write};

use crate::error::{AudioError, AudioResult};

use super::format::WavFormat;
use super::pcm::pcm16_to_bytes;
use super::writer::{write_wav, write_wav_to_vec};

/// A WAV file under construction: format parameters plus a raw PCM payload.
///
/// The container is configured with a sample rate, given its payload once,
/// and serialized on demand. [`serialize`](WavContainer::serialize)
/// recomputes every derived header field from the current configuration and
/// payload, so repeated calls with unchanged state produce byte-identical
/// output.
#[derive(Debug, Clone)]
pub struct WavContainer {
    format: WavFormat,
    payload: Vec<u8>,
}

impl WavContainer {
    /// Creates an empty mono 16-bit container.
    ///
    /// # Errors
    /// Returns [`AudioError::InvalidSampleRate`] if `sample_rate` is zero.
    pub fn new(sample_rate: u32) -> AudioResult<Self> {
        if sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate { rate: sample_rate });
        }

        Ok(Self {
            format: WavFormat::mono(sample_rate),
            payload: Vec::new(),
        })
    }

    /// Assigns the raw PCM payload.
    ///
    /// # Errors
    /// Returns [`AudioError::MisalignedPayload`] if the length is not a whole
    /// number of sample frames (a multiple of 2 for mono 16-bit). Accepting
    /// such a payload would make the header's data size disagree with the
    /// sample count.
    pub fn set_payload(&mut self, payload: Vec<u8>) -> AudioResult<()> {
        let frame = self.format.block_align() as usize;
        if payload.len() % frame != 0 {
            return Err(AudioError::MisalignedPayload {
                len: payload.len(),
                frame,
            });
        }

        self.payload = payload;
        Ok(())
    }

    /// Assigns the payload from typed samples.
    ///
    /// The byte conversion is forced little-endian; alignment holds by
    /// construction, so this cannot fail.
    pub fn set_samples(&mut self, samples: &[i16]) {
        self.payload = pcm16_to_bytes(samples);
    }

    /// The configured sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.format.sample_rate
    }

    /// The raw PCM payload.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Duration in seconds implied by the payload and sample rate.
    pub fn duration_seconds(&self) -> f64 {
        let frame = self.format.block_align() as usize;
        (self.payload.len() / frame) as f64 / self.format.sample_rate as f64
    }

    /// BLAKE3 hex digest of the PCM payload.
    ///
    /// Hashes the audio content only, not the header.
    pub fn pcm_hash(&self) -> String {
        blake3::hash(&self.payload).to_hex().to_string()
    }

    /// Serializes the complete file to a byte vector.
    ///
    /// Deterministic and side-effect free.
    pub fn serialize(&self) -> Vec<u8> {
        write_wav_to_vec(&self.format, &self.payload)
    }

    /// Writes the complete file to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_wav(writer, &self.format, &self.payload)
    }
}
