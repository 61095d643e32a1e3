//! Deterministic WAV container encoder.
//!
//! This module assembles 16-bit integer PCM WAV files with a fixed 44-byte
//! header and no metadata chunks, so output for a given payload is always
//! byte-identical. The four-character chunk tags are written in natural
//! reading order and every numeric field is written little-endian, with no
//! dependence on the host's byte order.

mod container;
mod format;
mod pcm;
mod writer;


// Re-export public API
pub use container::WavContainer;
pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data, pcm16_to_bytes};
pub use writer::{write_wav, write_wav_to_vec};
