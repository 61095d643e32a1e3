//! Tone command implementation
//!
//! Generates a constant-frequency sine tone and writes it as a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use tonegen_audio::{synth, WavContainer};

/// Run the tone command
///
/// # Arguments
/// * `output` - Output WAV file path
/// * `sample_rate` - Sample rate in Hz
/// * `frequency` - Tone frequency in Hz
/// * `duration` - Duration in seconds
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(output: &str, sample_rate: u32, frequency: f64, duration: f64) -> Result<ExitCode> {
    println!(
        "{} {} Hz sine, {}s at {} Hz",
        "Generating:".cyan().bold(),
        frequency,
        duration,
        sample_rate
    );

    let num_samples = synth::duration_to_samples(sample_rate, duration)?;
    let samples = synth::sine(sample_rate, frequency, num_samples)?;

    let mut container = WavContainer::new(sample_rate)?;
    container.set_samples(&samples);

    // One whole-buffer write; a failure leaves no partial output to recover
    fs::write(output, container.serialize())
        .with_context(|| format!("Failed to write output file: {}", output))?;

    super::report::print_written(output, &container);

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_run_writes_valid_wav() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let path = path.to_str().unwrap();

        run(path, 22050, 440.0, 0.1).expect("command should succeed");

        let data = fs::read(path).unwrap();
        assert_eq!(&data[0..4], b"RIFF");
        assert_eq!(data.len(), 44 + 2205 * 2);
    }

    #[test]
    fn test_run_rejects_negative_duration() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tone.wav");

        let result = run(path.to_str().unwrap(), 22050, 440.0, -1.0);
        assert!(result.is_err());
        // Validation failed before synthesis, so nothing was written
        assert!(!path.exists());
    }

    #[test]
    fn test_run_rejects_zero_frequency() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tone.wav");

        assert!(run(path.to_str().unwrap(), 22050, 0.0, 0.1).is_err());
        assert!(!path.exists());
    }
}
