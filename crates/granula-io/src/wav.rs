//! WAV file reading and writing.

use crate::{Error, Result, StereoSamples};
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// WAV file specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Bit depth per sample: 16 or 24 for integer PCM, 32 for float.
    pub bits_per_sample: u16,
}

impl Default for WavSpec {
    fn default() -> Self {
        Self {
            channels: 2,
            sample_rate: 48000,
            bits_per_sample: 32,
        }
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}

impl From<WavSpec> for hound::WavSpec {
    fn from(spec: WavSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: if spec.bits_per_sample == 32 {
                SampleFormat::Float
            } else {
                SampleFormat::Int
            },
        }
    }
}

/// Full-scale value for a signed integer sample of `bits` bits.
fn int_scale(bits: u16) -> f32 {
    (1u64 << (bits.clamp(1, 32) - 1)) as f32
}

/// Read a WAV file and return stereo samples along with the spec.
///
/// Mono files are duplicated to both channels. Files with more than two
/// channels keep the first two. Integer samples are scaled to `[-1, 1)`.
///
/// # Example
/// ```ignore
/// let (samples, spec) = read_wav_stereo("input.wav")?;
/// println!("Loaded {} frames at {} Hz", samples.len(), spec.sample_rate);
/// ```
pub fn read_wav_stereo<P: AsRef<Path>>(path: P) -> Result<(StereoSamples, WavSpec)> {
    let path = path.as_ref();
    let reader = WavReader::open(path)?;
    let hound_spec = reader.spec();
    let spec = WavSpec::from(hound_spec);
    let channels = usize::from(spec.channels);
    if channels == 0 {
        return Err(Error::UnsupportedFormat("zero channels".into()));
    }

    let all_samples: Vec<f32> = match hound_spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = int_scale(spec.bits_per_sample);
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    let stereo = match channels {
        1 => StereoSamples::from_mono(all_samples),
        2 => StereoSamples::from_interleaved(&all_samples),
        _ => {
            let (left, right) = all_samples
                .chunks_exact(channels)
                .map(|frame| (frame[0], frame[1]))
                .unzip();
            StereoSamples::new(left, right)
        }
    };

    tracing::debug!(
        path = %path.display(),
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        bits = spec.bits_per_sample,
        frames = stereo.len(),
        "read wav"
    );
    Ok((stereo, spec))
}

/// Write stereo samples to a WAV file.
///
/// The channel count in `spec` is ignored; the file is always stereo.
/// Integer formats clamp to full scale. Only 16-bit and 24-bit integer
/// and 32-bit float are written.
///
/// # Example
/// ```ignore
/// let samples = StereoSamples::new(vec![0.0; 48000], vec![0.0; 48000]);
/// write_wav_stereo("output.wav", &samples, WavSpec::default())?;
/// ```
pub fn write_wav_stereo<P: AsRef<Path>>(
    path: P,
    samples: &StereoSamples,
    spec: WavSpec,
) -> Result<()> {
    if !matches!(spec.bits_per_sample, 16 | 24 | 32) {
        return Err(Error::UnsupportedFormat(format!(
            "{}-bit output (expected 16, 24 or 32)",
            spec.bits_per_sample
        )));
    }
    let path = path.as_ref();
    let stereo_spec = WavSpec {
        channels: 2,
        ..spec
    };
    let mut writer = WavWriter::create(path, hound::WavSpec::from(stereo_spec))?;

    if spec.bits_per_sample == 32 {
        for (&l, &r) in samples.left.iter().zip(&samples.right) {
            writer.write_sample(l)?;
            writer.write_sample(r)?;
        }
    } else {
        let max_val = int_scale(spec.bits_per_sample);
        let quantize = |s: f32| (s * max_val).clamp(-max_val, max_val - 1.0) as i32;
        for (&l, &r) in samples.left.iter().zip(&samples.right) {
            writer.write_sample(quantize(l))?;
            writer.write_sample(quantize(r))?;
        }
    }

    writer.finalize()?;
    tracing::debug!(
        path = %path.display(),
        bits = spec.bits_per_sample,
        frames = samples.len(),
        "wrote wav"
    );
    Ok(())
}
