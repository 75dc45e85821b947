//! Borrowed view of the shared loop buffer.

/// Read-only snapshot of the loop for one block.
///
/// `buffer` is interleaved stereo (`L, R, L, R, ...`). The loop recorder owns
/// the memory and may change its contents or length between blocks, so the
/// frame count is derived from the slice on every call instead of cached.
///
/// `length` and `start` are carried along with the playback `position` but
/// the grain engine only places grains relative to `position`.
///
/// # Example
///
/// ```rust
/// use granula_spray::LoopView;
///
/// let samples = [0.1, -0.1, 0.2, -0.2, 0.3, -0.3];
/// let view = LoopView::new(&samples, 0.5, 1.0, 0.0);
/// assert_eq!(view.frame_count(), 3);
/// assert_eq!(view.frame(0.5), Some((0.2, -0.2)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LoopView<'a> {
    buffer: &'a [f32],
    position: f32,
    length: f32,
    start: f32,
}

impl<'a> LoopView<'a> {
    /// Wrap an interleaved stereo buffer and its normalized playback state.
    pub fn new(buffer: &'a [f32], position: f32, length: f32, start: f32) -> Self {
        Self {
            buffer,
            position,
            length,
            start,
        }
    }

    /// The raw interleaved samples.
    #[inline]
    pub fn buffer(&self) -> &'a [f32] {
        self.buffer
    }

    /// Normalized playback position of the loop.
    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Normalized loop length.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Normalized loop start.
    #[inline]
    pub fn start(&self) -> f32 {
        self.start
    }

    /// Number of whole stereo frames in the buffer.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.buffer.len() / 2
    }

    /// Whether the view holds at least one full frame.
    #[inline]
    pub fn has_frames(&self) -> bool {
        self.frame_count() > 0
    }

    /// Nearest-frame read at normalized position `read_pos`.
    ///
    /// Returns `None` when the computed interleaved index would touch the
    /// last sample slot or beyond; the caller treats that as silence.
    #[inline]
    pub fn frame(&self, read_pos: f32) -> Option<(f32, f32)> {
        let len = self.buffer.len();
        if len < 2 || read_pos.is_nan() || read_pos < 0.0 {
            return None;
        }
        let frame = (read_pos * self.frame_count() as f32) as usize;
        let idx = frame.checked_mul(2)?;
        if idx < len - 1 {
            Some((self.buffer[idx], self.buffer[idx + 1]))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_count_ignores_odd_tail() {
        let samples = [0.0f32; 7];
        let view = LoopView::new(&samples, 0.0, 1.0, 0.0);
        assert_eq!(view.frame_count(), 3);
    }

    #[test]
    fn test_frame_nearest_lower() {
        let samples = [1.0, 2.0, 3.0, 4.0];
        let view = LoopView::new(&samples, 0.0, 1.0, 0.0);
        assert_eq!(view.frame(0.0), Some((1.0, 2.0)));
        assert_eq!(view.frame(0.49), Some((1.0, 2.0)));
        assert_eq!(view.frame(0.5), Some((3.0, 4.0)));
        assert_eq!(view.frame(0.999), Some((3.0, 4.0)));
    }

    #[test]
    fn test_frame_guard_at_end() {
        let samples = [1.0, 2.0, 3.0, 4.0];
        let view = LoopView::new(&samples, 0.0, 1.0, 0.0);
        assert_eq!(view.frame(1.0), None);
        assert_eq!(view.frame(f32::NAN), None);
        assert_eq!(view.frame(-0.1), None);
    }

    #[test]
    fn test_odd_length_last_frame_guarded() {
        // Five samples: two whole frames plus a dangling left sample.
        let samples = [1.0, 2.0, 3.0, 4.0, 5.0];
        let view = LoopView::new(&samples, 0.0, 1.0, 0.0);
        assert_eq!(view.frame(0.75), Some((3.0, 4.0)));
    }

    #[test]
    fn test_empty_view() {
        let view = LoopView::new(&[], 0.3, 1.0, 0.0);
        assert!(!view.has_frames());
        assert_eq!(view.frame(0.0), None);
        assert_eq!(view.position(), 0.3);
    }
}
