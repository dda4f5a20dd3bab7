//! xorshift64* random number generator
//!
//! Fast, deterministic PRNG used to sample lottery numbers.
//!
//! # Determinism
//!
//! Same seed → same sequence → same draw. This is what makes a
//! [`DrawRecord`](crate::record::DrawRecord) replayable.

use serde::{Deserialize, Serialize};

use super::source::RandomSource;

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use lucky_dip_core_rs::{RandomSource, RngManager};
///
/// let mut rng = RngManager::new(12345);
/// let ball = rng.next_int(1, 60); // [1, 60]
/// assert!((1..=60).contains(&ball));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit, never zero)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is mapped to 1 (xorshift cannot leave the zero state).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create an RNG seeded from a fresh v4 UUID
    ///
    /// This is the ambient, non-reproducible source used when no seed is
    /// configured. Returns the generator together with the seed it used so
    /// callers can still record it.
    pub fn from_entropy() -> (Self, u64) {
        let (hi, lo) = uuid::Uuid::new_v4().as_u64_pair();
        let seed = hi ^ lo.rotate_left(32);
        (Self::new(seed), seed)
    }

    /// Generate next random u64 value
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Get current RNG state (for replay)
    pub fn get_state(&self) -> u64 {
        self.state
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// # Example
    /// ```
    /// use lucky_dip_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let u = rng.next_f64();
    /// assert!(u >= 0.0 && u < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Top 53 bits scaled by 2^-53
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }
}

impl RandomSource for RngManager {
    /// Uniform integer in `[low, high]` as `low + floor(u × span)`.
    ///
    /// Any `low <= high` is accepted, including the full `i64` range.
    ///
    /// # Panics
    /// Panics if low > high
    fn next_int(&mut self, low: i64, high: i64) -> i64 {
        assert!(low <= high, "low must not exceed high");
        // i128 so the span of the full i64 range does not overflow
        let width = i128::from(high) - i128::from(low);
        let offset = (self.next_f64() * (width + 1) as f64).floor() as i128;
        // u < 1.0 keeps offset <= width, but clamp against rounding at huge spans
        (i128::from(low) + offset.min(width)) as i64
    }
}
