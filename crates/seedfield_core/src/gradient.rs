//! # Gradient Selection
//!
//! Turns a lattice index into a pseudo-random direction and returns its dot
//! product with the offset from the lattice corner. No tables are
//! materialized; the direction is picked from the low bits of the index.

use crate::error::{CoreError, CoreResult};

/// 1D gradient: `+x` when bit 0 is clear, `-x` otherwise.
#[inline]
#[must_use]
pub fn grad_1d(hash: u8, x: f64) -> f64 {
    if hash & 1 == 0 {
        x
    } else {
        -x
    }
}

/// 2D gradient over the eight compass directions.
#[inline]
#[must_use]
pub fn grad_2d(hash: u8, x: f64, y: f64) -> f64 {
    match hash & 7 {
        0 => x + y,
        1 => -x + y,
        2 => x - y,
        3 => -x - y,
        4 => x,
        5 => -x,
        6 => y,
        _ => -y,
    }
}

/// 3D gradient: Perlin's twelve cube-edge directions (plus the four
/// repeats that pad the table to sixteen).
#[inline]
#[must_use]
pub fn grad_3d(hash: u8, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}

/// Gradient for an offset vector of runtime arity.
///
/// # Errors
///
/// Returns [`CoreError::InvalidDimension`] unless `offsets` has 1, 2 or 3
/// elements.
pub fn grad_slice(hash: u8, offsets: &[f64]) -> CoreResult<f64> {
    match *offsets {
        [x] => Ok(grad_1d(hash, x)),
        [x, y] => Ok(grad_2d(hash, x, y)),
        [x, y, z] => Ok(grad_3d(hash, x, y, z)),
        _ => Err(CoreError::InvalidDimension(offsets.len())),
    }
}
