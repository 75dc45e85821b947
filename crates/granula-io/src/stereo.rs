//! Stereo audio buffer for whole-file processing.

/// A pair of equal-length channel buffers.
///
/// # Example
///
/// ```rust
/// use granula_io::StereoSamples;
///
/// let samples = StereoSamples::from_interleaved(&[0.5, -0.25, 1.0, 0.0]);
/// assert_eq!(samples.len(), 2);
/// assert_eq!(samples.peak(), 1.0);
/// assert_eq!(samples.to_interleaved(), vec![0.5, -0.25, 1.0, 0.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StereoSamples {
    /// Left channel samples.
    pub left: Vec<f32>,
    /// Right channel samples.
    pub right: Vec<f32>,
}

impl StereoSamples {
    /// Create new stereo samples from left and right channels.
    pub fn new(left: Vec<f32>, right: Vec<f32>) -> Self {
        debug_assert_eq!(left.len(), right.len(), "Channels must have same length");
        Self { left, right }
    }

    /// Create stereo samples from mono by duplicating to both channels.
    pub fn from_mono(mono: Vec<f32>) -> Self {
        Self {
            left: mono.clone(),
            right: mono,
        }
    }

    /// Create from interleaved format (L, R, L, R, ...). A trailing odd
    /// sample is dropped.
    pub fn from_interleaved(interleaved: &[f32]) -> Self {
        let (left, right) = interleaved
            .chunks_exact(2)
            .map(|frame| (frame[0], frame[1]))
            .unzip();
        Self { left, right }
    }

    /// Convert to interleaved format (L, R, L, R, ...).
    pub fn to_interleaved(&self) -> Vec<f32> {
        self.left
            .iter()
            .zip(&self.right)
            .flat_map(|(&l, &r)| [l, r])
            .collect()
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Check if the buffers are empty.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Append `frames` frames of silence.
    pub fn pad(&mut self, frames: usize) {
        self.left.resize(self.left.len() + frames, 0.0);
        self.right.resize(self.right.len() + frames, 0.0);
    }

    /// Length in seconds at `sample_rate`.
    pub fn duration_secs(&self, sample_rate: u32) -> f64 {
        if sample_rate == 0 {
            return 0.0;
        }
        self.len() as f64 / f64::from(sample_rate)
    }

    /// Largest absolute sample across both channels.
    pub fn peak(&self) -> f32 {
        self.left
            .iter()
            .chain(&self.right)
            .fold(0.0f32, |peak, s| peak.max(s.abs()))
    }

    /// Root-mean-square level across both channels.
    pub fn rms(&self) -> f32 {
        let count = self.left.len() + self.right.len();
        if count == 0 {
            return 0.0;
        }
        let sum: f64 = self
            .left
            .iter()
            .chain(&self.right)
            .map(|&s| f64::from(s) * f64::from(s))
            .sum();
        (sum / count as f64).sqrt() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mono() {
        let mono = vec![1.0, 2.0, 3.0];
        let stereo = StereoSamples::from_mono(mono.clone());
        assert_eq!(stereo.left, mono);
        assert_eq!(stereo.right, mono);
    }

    #[test]
    fn test_interleaved_odd_tail() {
        let stereo = StereoSamples::from_interleaved(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(stereo.left, vec![1.0, 3.0]);
        assert_eq!(stereo.right, vec![2.0, 4.0]);
    }

    #[test]
    fn test_pad_and_duration() {
        let mut stereo = StereoSamples::new(vec![0.1; 24000], vec![0.1; 24000]);
        stereo.pad(24000);
        assert_eq!(stereo.len(), 48000);
        assert_eq!(stereo.duration_secs(48000), 1.0);
        assert_eq!(stereo.duration_secs(0), 0.0);
        assert_eq!(stereo.left[47999], 0.0);
    }

    #[test]
    fn test_levels() {
        let stereo = StereoSamples::new(vec![0.5, -0.5], vec![0.5, -1.0]);
        assert_eq!(stereo.peak(), 1.0);
        let expected = ((0.25 + 0.25 + 0.25 + 1.0) / 4.0f32).sqrt();
        assert!((stereo.rms() - expected).abs() < 1e-6);
        assert_eq!(StereoSamples::default().rms(), 0.0);
        assert_eq!(StereoSamples::default().peak(), 0.0);
    }
}
