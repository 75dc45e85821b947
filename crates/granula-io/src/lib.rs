//! Audio file I/O for granula.
//!
//! - **WAV file I/O**: [`read_wav_stereo`] and [`write_wav_stereo`]
//! - **Stereo buffers**: [`StereoSamples`], the interchange type for whole files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use granula_core::Effect;
//! use granula_io::{read_wav_stereo, write_wav_stereo};
//! use granula_spray::SprayEffect;
//!
//! let (mut samples, spec) = read_wav_stereo("input.wav")?;
//!
//! let mut spray = SprayEffect::new(spec.sample_rate as f32);
//! spray.set_spray(0.7);
//! spray.process_block_stereo(&mut samples.left, &mut samples.right);
//!
//! write_wav_stereo("output.wav", &samples, spec)?;
//! # Ok::<(), granula_io::Error>(())
//! ```

mod stereo;
mod wav;

pub use stereo::StereoSamples;
pub use wav::{WavSpec, read_wav_stereo, write_wav_stereo};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested sample format is not supported.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
