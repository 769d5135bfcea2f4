//! # Sequence Generator
//!
//! A seeded linear-congruential generator with a fixed seed and a rolling
//! state.
//!
//! ## Determinism Guarantee
//!
//! The recurrence is evaluated with `u32` wrapping arithmetic:
//!
//! ```text
//! state' = (1664525 * state + 1013904223) mod 2^32
//! ```
//!
//! Given the same seed, the sequence is identical on every platform.
//!
//! ## Sharing
//!
//! The rolling state lives in a [`Cell`], so draws only need `&self` and any
//! number of [`RandomValue`]s may keep a shared reference to their producer.
//! The generator is `Send` but not `Sync`: keep one generator per thread, or
//! wrap it in a lock. Hash-based queries depend on the seed alone, so a clone
//! on another thread answers them identically.

use std::cell::Cell;

use bytemuck::{Pod, Zeroable};
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::value::RandomValue;

/// LCG multiplier (Numerical Recipes).
pub const LCG_MULTIPLIER: u32 = 1_664_525;

/// LCG increment (Numerical Recipes).
pub const LCG_INCREMENT: u32 = 1_013_904_223;

/// `2^32` as a float, the modulus of the recurrence.
const LCG_MODULUS: f64 = 4_294_967_296.0;

/// Immutable copy of a generator's configuration at one point in time.
///
/// Snapshots exist for provenance only. They are never used to re-seed.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct GeneratorSnapshot {
    /// The generator's fixed seed.
    pub seed: u32,
    /// The rolling state at capture time.
    pub rolling_state: u32,
}

impl GeneratorSnapshot {
    /// Views the snapshot as raw bytes (native endianness).
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Reads a snapshot back from bytes produced by [`Self::as_bytes`].
    ///
    /// Returns `None` if `bytes` is not exactly 8 bytes long.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        bytemuck::try_pod_read_unaligned(bytes).ok()
    }
}

/// Seeded pseudo-random generator.
///
/// Owns a fixed `seed` and a `rolling_state` initialized to it. Only
/// [`Generator::next_value`] (and the raw draws built on it) advance the
/// rolling state; Perlin and fBm queries are pure functions of the seed.
///
/// # Example
///
/// ```rust
/// use seedfield_core::Generator;
///
/// let generator = Generator::new(42);
/// let first = generator.next_value();
/// assert!((0.0..1.0).contains(&first.get()));
///
/// // Pure queries never advance the sequence.
/// let before = generator.capture();
/// let _ = generator.perlin_2d(3.5, 7.25);
/// assert_eq!(before, generator.capture());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    /// Fixed for the generator's lifetime.
    seed: u32,
    /// Advanced by every sequential draw.
    rolling_state: Cell<u32>,
}

impl Generator {
    /// Creates a generator whose rolling state starts at `seed`.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        tracing::debug!("Generator created with seed {}", seed);
        Self {
            seed,
            rolling_state: Cell::new(seed),
        }
    }

    /// Returns the fixed seed.
    #[inline]
    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns the current rolling state.
    #[inline]
    #[must_use]
    pub fn rolling_state(&self) -> u32 {
        self.rolling_state.get()
    }

    /// Advances the recurrence once and returns the new raw state.
    #[inline]
    pub fn next_state(&self) -> u32 {
        let next = self
            .rolling_state
            .get()
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.rolling_state.set(next);
        next
    }

    /// Draws the next fraction in `[0, 1)`.
    ///
    /// The returned value carries a snapshot taken after the state advanced.
    pub fn next_value(&self) -> RandomValue<'_> {
        let state = self.next_state();
        RandomValue::new(self, f64::from(state) / LCG_MODULUS)
    }

    /// Captures `{seed, rolling_state}` without mutating anything.
    #[inline]
    #[must_use]
    pub fn capture(&self) -> GeneratorSnapshot {
        GeneratorSnapshot {
            seed: self.seed,
            rolling_state: self.rolling_state.get(),
        }
    }
}

impl RngCore for Generator {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_state()
    }

    /// Low word first, then high word.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_state());
        let high = u64::from(self.next_state());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_state().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Generator {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    /// `a^n * start + c * (a^(n-1) + ... + 1) mod 2^32`.
    fn closed_form(start: u32, n: u32) -> u32 {
        let mut a_pow = 1u32;
        let mut geometric = 0u32;
        for _ in 0..n {
            geometric = geometric.wrapping_add(a_pow);
            a_pow = a_pow.wrapping_mul(LCG_MULTIPLIER);
        }
        a_pow
            .wrapping_mul(start)
            .wrapping_add(LCG_INCREMENT.wrapping_mul(geometric))
    }

    #[test]
    fn test_known_sequence() {
        let generator = Generator::new(42);
        assert_eq!(generator.next_state(), 1_083_814_273);
        assert_eq!(generator.next_state(), 378_494_188);
        assert_eq!(generator.next_state(), 2_479_403_867);
    }

    #[test]
    fn test_first_value_seed_zero() {
        let generator = Generator::new(0);
        let value = generator.next_value();
        assert_eq!(value.get(), 1_013_904_223.0 / 4_294_967_296.0);
        assert_eq!(value.get(), 0.236_067_972_844_466_57);
    }

    #[test]
    fn test_matches_closed_form() {
        for seed in [0u32, 1, 42, 0xDEAD_BEEF, u32::MAX] {
            let generator = Generator::new(seed);
            for n in 1..=64 {
                generator.next_value();
                assert_eq!(
                    generator.rolling_state(),
                    closed_form(seed, n),
                    "State diverged from recurrence after {n} draws (seed {seed})"
                );
            }
        }
    }

    #[test]
    fn test_values_in_unit_interval() {
        let generator = Generator::new(7);
        for _ in 0..10_000 {
            let value = generator.next_value().get();
            assert!((0.0..1.0).contains(&value), "Value {value} out of [0, 1)");
        }
    }

    #[test]
    fn test_capture_does_not_mutate() {
        let generator = Generator::new(99);
        generator.next_value();
        let a = generator.capture();
        let b = generator.capture();
        assert_eq!(a, b);
        assert_eq!(a.seed, 99);
        assert_eq!(a.rolling_state, generator.rolling_state());
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let generator = Generator::new(5);
        let snapshot = generator.capture();
        generator.next_value();
        assert_eq!(snapshot.rolling_state, 5, "Snapshot must not alias live state");
        assert_ne!(generator.rolling_state(), 5);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Generator::new(11);
        let clone = original.clone();
        original.next_value();
        assert_eq!(clone.rolling_state(), 11);
        assert_eq!(clone.next_state(), Generator::new(11).next_state());
    }

    #[test]
    fn test_snapshot_bytes_roundtrip() {
        let generator = Generator::new(0x0102_0304);
        generator.next_value();
        let snapshot = generator.capture();
        let restored = GeneratorSnapshot::from_bytes(snapshot.as_bytes());
        assert_eq!(restored, Some(snapshot));
        assert_eq!(GeneratorSnapshot::from_bytes(&[0u8; 3]), None);
    }

    #[test]
    fn test_rng_core_follows_sequence() {
        let mut rng = Generator::new(42);
        assert_eq!(rng.next_u32(), 1_083_814_273);

        let mut rng = Generator::new(42);
        let expected = (u64::from(378_494_188u32) << 32) | u64::from(1_083_814_273u32);
        assert_eq!(rng.next_u64(), expected);
    }

    #[test]
    fn test_fill_bytes_partial_chunk() {
        let mut rng = Generator::new(42);
        let mut bytes = [0u8; 6];
        rng.fill_bytes(&mut bytes);

        let reference = Generator::new(42);
        let first = reference.next_state().to_le_bytes();
        let second = reference.next_state().to_le_bytes();
        assert_eq!(&bytes[..4], &first);
        assert_eq!(&bytes[4..], &second[..2]);
    }

    #[test]
    fn test_seedable_from_le_bytes() {
        let rng = Generator::from_seed(42u32.to_le_bytes());
        assert_eq!(rng.seed(), 42);
        assert_eq!(rng.rolling_state(), 42);
    }

    #[test]
    fn test_drives_rand_distributions() {
        let mut rng = Generator::new(3);
        for _ in 0..1000 {
            let roll: u32 = rng.gen_range(1..=6);
            assert!((1..=6).contains(&roll));
        }
    }
}
