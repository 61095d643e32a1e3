//! Tonegen Audio Core
//!
//! This crate turns a frequency specification into a standard WAV file. It has
//! two independent halves, composed only by the caller:
//!
//! - **Waveform synthesis** ([`synth`]) - sine tones at a constant frequency or
//!   with a linear frequency sweep, produced directly as full-scale signed
//!   16-bit PCM samples.
//! - **Container encoding** ([`wav`]) - assembly of the 44-byte RIFF/WAVE
//!   header plus PCM payload into a byte buffer any standard decoder accepts.
//!
//! The two halves share nothing but the sample rate, which the caller passes
//! to both; the encoder treats the payload as opaque bytes.
//!
//! # Determinism
//!
//! All output is deterministic. The same parameters produce byte-identical
//! WAV data across runs and across host architectures: every numeric header
//! field is written explicitly little-endian, and sample bytes are dumped
//! least-significant byte first regardless of host byte order. The BLAKE3
//! hash of the PCM payload ([`WavContainer::pcm_hash`]) can be used to
//! compare outputs by audio content alone.
//!
//! # Example
//!
//! ```ignore
//! use tonegen_audio::{synth, WavContainer};
//!
//! let sample_rate = 44100;
//! let samples = synth::sine(sample_rate, 261.6256, 88_200)?;
//!
//! let mut container = WavContainer::new(sample_rate)?;
//! container.set_samples(&samples);
//! std::fs::write("middle_c.wav", container.serialize())?;
//! ```
//!
//! # Crate Structure
//!
//! - [`synth`] - sine and sweep generators
//! - [`wav`] - WAV format parameters, header writer, container assembly
//! - [`error`] - error types shared by both halves

pub mod error;
pub mod synth;
pub mod wav;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use wav::{WavContainer, WavFormat};
