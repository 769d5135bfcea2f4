//! # Lattice Hash
//!
//! Maps an integer lattice point plus a seed to an 8-bit lattice index.
//!
//! Each coordinate goes through a Murmur3 block mix (offset by its axis so
//! `(a, b)` and `(b, a)` land on different indices), and the accumulator
//! gets the Murmur3 avalanche finalizer. Everything is `u32` wraparound, so
//! the output is bit-identical on every target.

use crate::error::{CoreError, CoreResult};

/// Per-axis offset added to each coordinate before mixing.
const AXIS_STRIDE: u32 = 374_761_393;

const BLOCK_C1: u32 = 0xcc9e_2d51;
const BLOCK_C2: u32 = 0x1b87_3593;
const ROUND_ADD: u32 = 0xe654_6b64;
const FMIX_C1: u32 = 0x85eb_ca6b;
const FMIX_C2: u32 = 0xc2b2_ae35;

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn mix(seed: u32, coords: &[i64]) -> u8 {
    let mut h = seed;

    for (axis, &coord) in coords.iter().enumerate() {
        // Truncation to the low 32 bits is reduction mod 2^32.
        let mut k = (coord as u32).wrapping_add((axis as u32).wrapping_mul(AXIS_STRIDE));
        k = k.wrapping_mul(BLOCK_C1);
        k = k.rotate_left(15);
        k = k.wrapping_mul(BLOCK_C2);

        h ^= k;
        h = h.rotate_left(13);
        h = h.wrapping_mul(5).wrapping_add(ROUND_ADD);
    }

    h ^= (coords.len() as u32).wrapping_mul(4);

    h ^= h >> 16;
    h = h.wrapping_mul(FMIX_C1);
    h ^= h >> 13;
    h = h.wrapping_mul(FMIX_C2);
    h ^= h >> 16;

    (h & 0xFF) as u8
}

/// Hashes a 1D lattice point.
#[inline]
#[must_use]
pub fn hash_1d(seed: u32, x: i64) -> u8 {
    mix(seed, &[x])
}

/// Hashes a 2D lattice point.
#[inline]
#[must_use]
pub fn hash_2d(seed: u32, x: i64, y: i64) -> u8 {
    mix(seed, &[x, y])
}

/// Hashes a 3D lattice point.
#[inline]
#[must_use]
pub fn hash_3d(seed: u32, x: i64, y: i64, z: i64) -> u8 {
    mix(seed, &[x, y, z])
}

/// Hashes a lattice point of runtime arity.
///
/// # Errors
///
/// Returns [`CoreError::InvalidDimension`] unless `coords` has 1, 2 or 3
/// elements.
pub fn hash_slice(seed: u32, coords: &[i64]) -> CoreResult<u8> {
    match coords.len() {
        1..=3 => Ok(mix(seed, coords)),
        n => Err(CoreError::InvalidDimension(n)),
    }
}
