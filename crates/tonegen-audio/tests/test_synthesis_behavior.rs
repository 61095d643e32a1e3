//! Waveform behavior tests: amplitude, periodicity, and sweep trajectory.

use tonegen_audio::synth;

/// Counts rising zero crossings in a sample window.
///
/// Each crossing corresponds to one waveform period, so the count over a
/// window approximates the mean frequency times the window duration.
fn rising_crossings(samples: &[i16]) -> usize {
    samples
        .windows(2)
        .filter(|pair| pair[0] < 0 && pair[1] >= 0)
        .count()
}

#[test]
fn test_sine_frequency_from_crossings() {
    // 1 second of 440 Hz: expect ~440 rising crossings
    let samples = synth::sine(44100, 440.0, 44_100).unwrap();
    let crossings = rising_crossings(&samples);

    assert!(
        (435..=445).contains(&crossings),
        "expected ~440 crossings, got {}",
        crossings
    );
}

#[test]
fn test_sine_periodicity() {
    // 490 Hz at 44100 Hz has an exact 90-sample period
    let samples = synth::sine(44100, 490.0, 2000).unwrap();

    for i in 0..(2000 - 90) {
        let diff = (samples[i] as i32 - samples[i + 90] as i32).abs();
        assert!(diff <= 2, "sample {} differs from its period twin by {}", i, diff);
    }
}

#[test]
fn test_amplitude_spans_full_scale() {
    let samples = synth::sine(44100, 440.0, 44_100).unwrap();
    let max = samples.iter().copied().max().unwrap();
    let min = samples.iter().copied().min().unwrap();

    assert!(max > 32_000);
    assert!(min < -32_000);
}

#[test]
fn test_sweep_reaches_end_frequency() {
    // 1 second sweep 440 -> 880 Hz. Mean frequency over the final tenth of
    // the buffer is ~858 Hz, so ~86 rising crossings; an implementation that
    // only reaches the midpoint frequency by the end would show ~65.
    let samples = synth::sweep(44100, 440.0, 880.0, 44_100).unwrap();
    let tail = &samples[39_690..];
    let crossings = rising_crossings(tail);

    assert!(
        (80..=92).contains(&crossings),
        "expected ~86 crossings near the end of the sweep, got {}",
        crossings
    );
}

#[test]
fn test_sweep_starts_at_start_frequency() {
    // Mean frequency over the first tenth is ~462 Hz
    let samples = synth::sweep(44100, 440.0, 880.0, 44_100).unwrap();
    let head = &samples[..4410];
    let crossings = rising_crossings(head);

    assert!(
        (41..=52).contains(&crossings),
        "expected ~46 crossings at the start of the sweep, got {}",
        crossings
    );
}

#[test]
fn test_sweep_mean_frequency() {
    // Over the whole buffer the linear sweep averages (440 + 880) / 2 Hz
    let samples = synth::sweep(44100, 440.0, 880.0, 44_100).unwrap();
    let crossings = rising_crossings(&samples);

    assert!(
        (652..=668).contains(&crossings),
        "expected ~660 crossings over the full sweep, got {}",
        crossings
    );
}

#[test]
fn test_downward_sweep() {
    let samples = synth::sweep(44100, 880.0, 440.0, 44_100).unwrap();
    let tail = &samples[39_690..];
    let crossings = rising_crossings(tail);

    // Mean frequency over the final tenth is ~462 Hz
    assert!(
        (41..=52).contains(&crossings),
        "expected ~46 crossings near the end of the downward sweep, got {}",
        crossings
    );
}
