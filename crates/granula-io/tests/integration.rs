//! Integration tests for granula-io WAV I/O with the spray effect.

use granula_core::Effect;
use granula_io::{StereoSamples, WavSpec, read_wav_stereo, write_wav_stereo};
use granula_spray::SprayEffect;
use tempfile::NamedTempFile;

// ---------------------------------------------------------------------------
// WAV roundtrip tests
// ---------------------------------------------------------------------------

fn sine_wave(sample_rate: u32, freq_hz: f32, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| (2.0 * std::f32::consts::PI * freq_hz * i as f32 / sample_rate as f32).sin())
        .collect()
}

fn roundtrip(spec: WavSpec, tolerance: f32) {
    let left = sine_wave(spec.sample_rate, 440.0, spec.sample_rate as usize / 10);
    let right = sine_wave(spec.sample_rate, 660.0, spec.sample_rate as usize / 10);
    let samples = StereoSamples::new(left, right);

    let file = NamedTempFile::new().unwrap();
    write_wav_stereo(file.path(), &samples, spec).unwrap();

    let (loaded, loaded_spec) = read_wav_stereo(file.path()).unwrap();
    assert_eq!(loaded_spec.sample_rate, spec.sample_rate);
    assert_eq!(loaded_spec.channels, 2);
    assert_eq!(loaded_spec.bits_per_sample, spec.bits_per_sample);
    assert_eq!(loaded.len(), samples.len());

    for (a, b) in samples
        .to_interleaved()
        .iter()
        .zip(loaded.to_interleaved().iter())
    {
        assert!(
            (a - b).abs() < tolerance,
            "sample mismatch: {a} vs {b} (diff={})",
            (a - b).abs()
        );
    }
}

#[test]
fn wav_roundtrip_f32_48000() {
    roundtrip(WavSpec::default(), 1e-6);
}

#[test]
fn wav_roundtrip_i16_44100() {
    roundtrip(
        WavSpec {
            channels: 2,
            sample_rate: 44100,
            bits_per_sample: 16,
        },
        1.0 / 16384.0,
    );
}

#[test]
fn wav_roundtrip_i24_96000() {
    roundtrip(
        WavSpec {
            channels: 2,
            sample_rate: 96000,
            bits_per_sample: 24,
        },
        1e-5,
    );
}

#[test]
fn wav_empty_file() {
    let file = NamedTempFile::new().unwrap();
    write_wav_stereo(file.path(), &StereoSamples::default(), WavSpec::default()).unwrap();
    let (loaded, _) = read_wav_stereo(file.path()).unwrap();
    assert!(loaded.is_empty());
}

// ---------------------------------------------------------------------------
// File -> spray -> file
// ---------------------------------------------------------------------------

#[test]
fn spray_render_through_files() {
    let sr = 48000;
    let input = StereoSamples::from_mono(sine_wave(sr, 220.0, sr as usize));
    let input_file = NamedTempFile::new().unwrap();
    write_wav_stereo(input_file.path(), &input, WavSpec::default()).unwrap();

    let (mut samples, spec) = read_wav_stereo(input_file.path()).unwrap();
    let mut spray = SprayEffect::new(spec.sample_rate as f32).with_seed(3);
    spray.set_spray(1.0);
    spray.set_mix(1.0);
    for (left, right) in samples
        .left
        .chunks_mut(512)
        .zip(samples.right.chunks_mut(512))
    {
        spray.process_block_stereo(left, right);
    }
    assert!(spray.stats().spawned > 0);

    let output_file = NamedTempFile::new().unwrap();
    write_wav_stereo(output_file.path(), &samples, spec).unwrap();
    let (rendered, _) = read_wav_stereo(output_file.path()).unwrap();

    assert_eq!(rendered.len(), input.len());
    assert!(rendered.left.iter().all(|s| s.is_finite()));
    assert_ne!(rendered, input, "grains should change the signal");
}

#[test]
fn spray_default_is_transparent() {
    let input = StereoSamples::from_mono(sine_wave(48000, 330.0, 4800));
    let mut samples = input.clone();
    let mut spray = SprayEffect::new(48000.0);
    spray.process_block_stereo(&mut samples.left, &mut samples.right);
    assert_eq!(samples, input);
}
