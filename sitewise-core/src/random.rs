//! Injectable randomness for cosmetic data.
//!
//! Scoring formulas never draw random numbers. Only the generators that
//! produce demo data (nearby businesses, traffic series, support programme
//! picks) take a [`RandomSource`], so tests can substitute a fixed sequence
//! and production callers can choose a seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::location::LocationProfile;

/// Source of uniformly distributed floats in `[0, 1)`.
///
/// Only [`RandomSource::next_f64`] is required; the range helpers derive
/// from it the same way every generator in this workspace expects.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform value in `[low, high)`.
    fn range_f64(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_f64() * (high - low)
    }

    /// Uniform integer in `[low, high)`; returns `low` when the range is empty.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the product is non-negative and below the u32 span"
    )]
    fn range_u32(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        let span = f64::from(high - low);
        let offset = (self.next_f64() * span).floor() as u32;
        low + offset.min(high - low - 1)
    }

    /// Returns `true` when the next draw exceeds `threshold`.
    fn exceeds(&mut self, threshold: f64) -> bool {
        self.next_f64() > threshold
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// ChaCha-backed [`RandomSource`] with a reproducible seed.
///
/// # Examples
/// ```
/// use sitewise_core::{RandomSource, SeededRandom};
///
/// let mut a = SeededRandom::from_seed(7);
/// let mut b = SeededRandom::from_seed(7);
/// assert_eq!(a.next_f64(), b.next_f64());
/// ```
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    /// Seed from an explicit value.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed from the location's grid cell, so nearby lookups agree.
    #[must_use]
    pub fn for_location(location: &LocationProfile) -> Self {
        Self::from_seed(location.seed_region())
    }

    /// Seed from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Shuffle a slice in place with the Fisher-Yates algorithm.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], random: &mut R) {
    for i in (1..items.len()).rev() {
        let upper = u32::try_from(i + 1).unwrap_or(u32::MAX);
        let j = usize::try_from(random.range_u32(0, upper)).unwrap_or(0);
        items.swap(i, j.min(i));
    }
}
