//! Tonegen CLI - sine tone and frequency sweep WAV generator
//!
//! This binary synthesizes sine waveforms (constant frequency or a linear
//! sweep) and writes them as standard 16-bit mono PCM WAV files.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use tonegen_cli::commands;

/// Tonegen - Sine Tone WAV Generator
#[derive(Parser)]
#[command(name = "tonegen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a constant-frequency sine tone
    Tone {
        /// Output WAV file path
        #[arg(short, long)]
        output: String,

        /// Tone frequency in Hz
        #[arg(short, long)]
        frequency: f64,

        /// Duration in seconds
        #[arg(short, long)]
        duration: f64,

        /// Sample rate in Hz
        #[arg(short, long, default_value_t = 44100)]
        sample_rate: u32,
    },

    /// Generate a sine tone with a linear frequency sweep
    Sweep {
        /// Output WAV file path
        #[arg(short, long)]
        output: String,

        /// Starting frequency in Hz
        #[arg(long)]
        start: f64,

        /// Ending frequency in Hz
        #[arg(long)]
        end: f64,

        /// Duration in seconds
        #[arg(short, long)]
        duration: f64,

        /// Sample rate in Hz
        #[arg(short, long, default_value_t = 44100)]
        sample_rate: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tone {
            output,
            frequency,
            duration,
            sample_rate,
        } => commands::tone::run(&output, sample_rate, frequency, duration),
        Commands::Sweep {
            output,
            start,
            end,
            duration,
            sample_rate,
        } => commands::sweep::run(&output, sample_rate, start, end, duration),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
