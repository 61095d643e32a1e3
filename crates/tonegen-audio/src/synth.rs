//! Sine wave synthesis.
//!
//! Generators produce full-scale signed 16-bit samples directly, either at a
//! constant frequency or with a linear frequency sweep. Both are pure
//! functions of their parameters: the sample rate is passed explicitly and no
//! state survives a call, so results are deterministic and trivially
//! testable.
//!
//! Frequencies at or above the Nyquist rate (half the sample rate) are
//! accepted; the output aliases, which is the documented behavior rather
//! than an error.

use std::f64::consts::PI;

use crate::error::{AudioError, AudioResult};

const TWO_PI: f64 = 2.0 * PI;

/// Linear frequency ramp between two endpoints.
#[derive(Debug, Clone, Copy)]
pub struct FrequencySweep {
    /// Starting frequency in Hz.
    pub start_freq: f64,
    /// Ending frequency in Hz.
    pub end_freq: f64,
}

impl FrequencySweep {
    /// Creates a new frequency sweep.
    pub fn new(start_freq: f64, end_freq: f64) -> Self {
        Self {
            start_freq,
            end_freq,
        }
    }

    /// Instantaneous frequency at progress `t` (0.0 to 1.0).
    pub fn at(&self, t: f64) -> f64 {
        self.start_freq + (self.end_freq - self.start_freq) * t
    }
}

/// Accumulates oscillator phase from per-sample instantaneous frequency.
#[derive(Debug)]
struct PhaseAccumulator {
    phase: f64,
    sample_rate: f64,
}

impl PhaseAccumulator {
    fn new(sample_rate: f64) -> Self {
        Self {
            phase: 0.0,
            sample_rate,
        }
    }

    /// Returns the current phase, then advances by one sample at `freq`.
    ///
    /// The advance per sample is `2pi * freq / sample_rate`; the running
    /// phase wraps at 2pi to keep precision over long buffers.
    fn advance(&mut self, freq: f64) -> f64 {
        let phase = self.phase;
        self.phase += TWO_PI * freq / self.sample_rate;
        if self.phase >= TWO_PI {
            self.phase -= TWO_PI;
        }
        phase
    }
}

/// Generates a constant-frequency sine tone.
///
/// # Arguments
/// * `sample_rate` - Sample rate in Hz
/// * `frequency` - Tone frequency in Hz
/// * `num_samples` - Number of samples to generate (0 yields an empty buffer)
///
/// # Errors
/// Returns an error for a zero sample rate or a non-positive or non-finite
/// frequency; inputs are never silently clamped.
pub fn sine(sample_rate: u32, frequency: f64, num_samples: usize) -> AudioResult<Vec<i16>> {
    validate_sample_rate(sample_rate)?;
    validate_frequency(frequency)?;

    let mut phase_acc = PhaseAccumulator::new(sample_rate as f64);
    let mut output = Vec::with_capacity(num_samples);

    for _ in 0..num_samples {
        let phase = phase_acc.advance(frequency);
        output.push(scale_sample(phase.sin()));
    }

    Ok(output)
}

/// Generates a tone whose frequency ramps linearly from `start_freq` to
/// `end_freq` over the buffer.
///
/// The instantaneous frequency at sample `i` is the sweep evaluated at
/// `i / num_samples`, and phase is accumulated sample by sample, so the pitch
/// heard at the end of the buffer is `end_freq` and the waveform stays
/// continuous at any sweep rate.
///
/// # Errors
/// Returns an error for a zero sample rate or a non-positive or non-finite
/// endpoint frequency.
pub fn sweep(
    sample_rate: u32,
    start_freq: f64,
    end_freq: f64,
    num_samples: usize,
) -> AudioResult<Vec<i16>> {
    validate_sample_rate(sample_rate)?;
    validate_frequency(start_freq)?;
    validate_frequency(end_freq)?;

    let sweep = FrequencySweep::new(start_freq, end_freq);
    let mut phase_acc = PhaseAccumulator::new(sample_rate as f64);
    let mut output = Vec::with_capacity(num_samples);

    for i in 0..num_samples {
        let freq = sweep.at(i as f64 / num_samples as f64);
        let phase = phase_acc.advance(freq);
        output.push(scale_sample(phase.sin()));
    }

    Ok(output)
}

/// Converts a duration in seconds to a whole sample count.
///
/// # Errors
/// Returns [`AudioError::InvalidSampleRate`] for a zero sample rate and
/// [`AudioError::InvalidDuration`] for a negative or non-finite duration.
pub fn duration_to_samples(sample_rate: u32, seconds: f64) -> AudioResult<usize> {
    validate_sample_rate(sample_rate)?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(AudioError::InvalidDuration { duration: seconds });
    }

    Ok((seconds * sample_rate as f64).round() as usize)
}

/// Maps a unit-amplitude sample onto the full signed 16-bit range.
///
/// `(1 - s) * 32768` spans `[0, 65536]` for `s` in `[-1, 1]`; recentering by
/// 32768 yields `[-32768, 32768]`, and the saturating cast pins the lone
/// out-of-range extreme (+32768, at `s = -1`) to `i16::MAX`.
fn scale_sample(s: f64) -> i16 {
    ((1.0 - s) * 32768.0 - 32768.0) as i16
}

fn validate_sample_rate(sample_rate: u32) -> AudioResult<()> {
    if sample_rate == 0 {
        return Err(AudioError::InvalidSampleRate { rate: sample_rate });
    }
    Ok(())
}

fn validate_frequency(freq: f64) -> AudioResult<()> {
    if !freq.is_finite() || freq <= 0.0 {
        return Err(AudioError::InvalidFrequency { freq });
    }
    Ok(())
}
