//! WAV format parameters.

/// Format parameters for uncompressed integer PCM.
///
/// Only the primary fields are stored. Everything the header derives from
/// them (byte rate, block align) is recomputed at serialization time, so the
/// derived values can never drift out of sync with the configuration.
#[derive(Debug, Clone, Copy)]
pub struct WavFormat {
    /// Number of channels (1 = mono).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono 16-bit format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Bytes per sample for a single channel.
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Block align: bytes per complete sample frame across all channels.
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Byte rate: bytes of PCM data per second of audio.
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}
