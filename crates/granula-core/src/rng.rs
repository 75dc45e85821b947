//! Randomness sources for grain placement and pitch selection.
//!
//! The engine never owns a global generator. It asks an injected
//! [`RandomSource`] for uniform draws, so tests can seed it or script the
//! exact sequence of values.
//!
//! - [`Xorshift32`] is the default: tiny state, no allocation, `no_std`.
//! - `RandAdapter` (feature `rand`) plugs in any `rand::RngCore`.
//!
//! # Example
//!
//! ```rust
//! use granula_core::{RandomSource, Xorshift32};
//!
//! let mut a = Xorshift32::new(42);
//! let mut b = Xorshift32::new(42);
//! for _ in 0..16 {
//!     let x = a.next_unit();
//!     assert!((0.0..1.0).contains(&x));
//!     assert_eq!(x, b.next_unit());
//! }
//! ```

/// Scale for turning the top 24 bits of a `u32` into `[0, 1)`.
const UNIT_SCALE: f32 = 1.0 / 16_777_216.0;

#[inline]
fn unit_from_bits(bits: u32) -> f32 {
    // 24 bits fit the f32 mantissa exactly, so the result is never 1.0.
    (bits >> 8) as f32 * UNIT_SCALE
}

/// A source of uniform random draws.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f32;

    /// Next uniform value in `[-1, 1)`.
    #[inline]
    fn bipolar(&mut self) -> f32 {
        self.next_unit() * 2.0 - 1.0
    }

    /// Next uniform value in `[lo, hi)`.
    #[inline]
    fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_unit()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }
}

/// Xorshift32 generator (13/17/5 shift triple).
///
/// A zero state would lock the generator at zero, so zero seeds are
/// replaced with [`Xorshift32::DEFAULT_SEED`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift32 {
    state: u32,
    seed: u32,
}

impl Xorshift32 {
    /// Seed used by [`Default`] and in place of zero.
    pub const DEFAULT_SEED: u32 = 0x1234_5678;

    /// Create a generator from a seed.
    pub const fn new(seed: u32) -> Self {
        let seed = if seed == 0 { Self::DEFAULT_SEED } else { seed };
        Self { state: seed, seed }
    }

    /// The seed this generator started from (after zero substitution).
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Restart the sequence from a new seed.
    pub fn reseed(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    /// Restart the sequence from the original seed.
    pub fn rewind(&mut self) {
        self.state = self.seed;
    }

    /// Next raw 32-bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl RandomSource for Xorshift32 {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        unit_from_bits(self.next_u32())
    }
}

/// Adapts any [`rand::RngCore`] into a [`RandomSource`].
///
/// ```rust
/// # #[cfg(feature = "rand")] {
/// use granula_core::{RandAdapter, RandomSource};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut source = RandAdapter::new(SmallRng::seed_from_u64(7));
/// assert!((0.0..1.0).contains(&source.next_unit()));
/// # }
/// ```
#[cfg(feature = "rand")]
#[derive(Debug, Clone)]
pub struct RandAdapter<R> {
    rng: R,
}

#[cfg(feature = "rand")]
impl<R: rand::RngCore> RandAdapter<R> {
    /// Wrap a generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Unwrap the inner generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

#[cfg(feature = "rand")]
impl<R: rand::RngCore> RandomSource for RandAdapter<R> {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        unit_from_bits(self.rng.next_u32())
    }
}
