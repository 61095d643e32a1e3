//! Shared confirmation output for the generation commands.

use colored::Colorize;

use tonegen_audio::WavContainer;

/// Prints the post-write confirmation for a generated file.
pub(crate) fn print_written(output: &str, container: &WavContainer) {
    println!(
        "{} {} ({:.3}s, {} samples at {} Hz)",
        "Wrote:".green().bold(),
        output,
        container.duration_seconds(),
        container.payload().len() / 2,
        container.sample_rate(),
    );
    println!(
        "{} {}",
        "PCM hash:".dimmed(),
        container.pcm_hash().dimmed()
    );
}
