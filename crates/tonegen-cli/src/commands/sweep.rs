//! Sweep command implementation
//!
//! Generates a sine tone with a linear frequency sweep and writes it as a
//! WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use tonegen_audio::{synth, WavContainer};

/// Run the sweep command
///
/// # Arguments
/// * `output` - Output WAV file path
/// * `sample_rate` - Sample rate in Hz
/// * `start` - Starting frequency in Hz
/// * `end` - Ending frequency in Hz
/// * `duration` - Duration in seconds
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    output: &str,
    sample_rate: u32,
    start: f64,
    end: f64,
    duration: f64,
) -> Result<ExitCode> {
    println!(
        "{} {} Hz -> {} Hz sweep, {}s at {} Hz",
        "Generating:".cyan().bold(),
        start,
        end,
        duration,
        sample_rate
    );

    let num_samples = synth::duration_to_samples(sample_rate, duration)?;
    let samples = synth::sweep(sample_rate, start, end, num_samples)?;

    let mut container = WavContainer::new(sample_rate)?;
    container.set_samples(&samples);

    // One whole-buffer write; a failure leaves no partial output to recover
    fs::write(output, container.serialize())
        .with_context(|| format!("Failed to write output file: {}", output))?;

    super::report::print_written(output, &container);

    Ok(ExitCode::SUCCESS)
}
