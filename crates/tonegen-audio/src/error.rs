//! Error types for the audio core.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during synthesis or container encoding.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate} Hz")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Payload length is not a whole number of sample frames.
    #[error("payload length {len} is not a multiple of the {frame}-byte sample frame")]
    MisalignedPayload {
        /// Payload length in bytes.
        len: usize,
        /// Sample frame size in bytes.
        frame: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
