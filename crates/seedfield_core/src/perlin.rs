//! # Perlin Kernel
//!
//! Gradient noise on the integer lattice, 1D to 3D.
//!
//! For every axis the sample point sits between corner `floor(x)` and
//! `floor(x) + 1`. Each of the `2^n` surrounding corners contributes
//! `grad(hash(seed, corner), point - corner)`; the contributions are
//! collapsed with linear interpolation along x, then y, then z, weighted by
//! the quintic fade of the fractional offsets. The raw result (roughly
//! `[-1, 1]`) is mapped to `[0, 1]` with `(v + 1) / 2`.
//!
//! The free functions take the seed directly and return the normalized
//! `f64`; [`Generator`] wraps them into [`RandomValue`]s.

use crate::field::NoiseField;
use crate::generator::Generator;
use crate::gradient::{grad_1d, grad_2d, grad_3d};
use crate::hash::{hash_1d, hash_2d, hash_3d};
use crate::value::RandomValue;

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`.
#[inline]
#[must_use]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation `a + t(b - a)`.
#[inline]
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// One axis of the lattice cell containing a coordinate.
#[derive(Clone, Copy, Debug)]
struct Axis {
    /// Integer index of the lower corner.
    lo: i64,
    /// Integer index of the upper corner.
    hi: i64,
    /// Offset from the lower corner.
    d_lo: f64,
    /// Offset from the upper corner (negative inside the cell).
    d_hi: f64,
    /// Faded interpolation weight.
    weight: f64,
}

impl Axis {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn new(x: f64) -> Self {
        let lo = x.floor();
        let hi = lo + 1.0;
        let d_lo = x - lo;
        Self {
            lo: lo as i64,
            hi: hi as i64,
            d_lo,
            d_hi: x - hi,
            weight: fade(d_lo),
        }
    }
}

#[inline]
fn normalize(value: f64) -> f64 {
    (value + 1.0) / 2.0
}

/// 1D Perlin noise in `[0, 1]`.
#[must_use]
pub fn sample_1d(seed: u32, x: f64) -> f64 {
    let ax = Axis::new(x);

    let n0 = grad_1d(hash_1d(seed, ax.lo), ax.d_lo);
    let n1 = grad_1d(hash_1d(seed, ax.hi), ax.d_hi);

    normalize(lerp(n0, n1, ax.weight))
}

/// 2D Perlin noise in `[0, 1]`.
#[must_use]
pub fn sample_2d(seed: u32, x: f64, y: f64) -> f64 {
    let ax = Axis::new(x);
    let ay = Axis::new(y);

    let n00 = grad_2d(hash_2d(seed, ax.lo, ay.lo), ax.d_lo, ay.d_lo);
    let n10 = grad_2d(hash_2d(seed, ax.hi, ay.lo), ax.d_hi, ay.d_lo);
    let n01 = grad_2d(hash_2d(seed, ax.lo, ay.hi), ax.d_lo, ay.d_hi);
    let n11 = grad_2d(hash_2d(seed, ax.hi, ay.hi), ax.d_hi, ay.d_hi);

    let ix0 = lerp(n00, n10, ax.weight);
    let ix1 = lerp(n01, n11, ax.weight);

    normalize(lerp(ix0, ix1, ay.weight))
}

/// 3D Perlin noise in `[0, 1]`.
#[must_use]
pub fn sample_3d(seed: u32, x: f64, y: f64, z: f64) -> f64 {
    let ax = Axis::new(x);
    let ay = Axis::new(y);
    let az = Axis::new(z);

    let corner = |cx: i64, cy: i64, cz: i64, dx: f64, dy: f64, dz: f64| {
        grad_3d(hash_3d(seed, cx, cy, cz), dx, dy, dz)
    };

    let n000 = corner(ax.lo, ay.lo, az.lo, ax.d_lo, ay.d_lo, az.d_lo);
    let n100 = corner(ax.hi, ay.lo, az.lo, ax.d_hi, ay.d_lo, az.d_lo);
    let n010 = corner(ax.lo, ay.hi, az.lo, ax.d_lo, ay.d_hi, az.d_lo);
    let n110 = corner(ax.hi, ay.hi, az.lo, ax.d_hi, ay.d_hi, az.d_lo);
    let n001 = corner(ax.lo, ay.lo, az.hi, ax.d_lo, ay.d_lo, az.d_hi);
    let n101 = corner(ax.hi, ay.lo, az.hi, ax.d_hi, ay.d_lo, az.d_hi);
    let n011 = corner(ax.lo, ay.hi, az.hi, ax.d_lo, ay.d_hi, az.d_hi);
    let n111 = corner(ax.hi, ay.hi, az.hi, ax.d_hi, ay.d_hi, az.d_hi);

    let ix00 = lerp(n000, n100, ax.weight);
    let ix01 = lerp(n001, n101, ax.weight);
    let ix10 = lerp(n010, n110, ax.weight);
    let ix11 = lerp(n011, n111, ax.weight);

    let iy0 = lerp(ix00, ix10, ay.weight);
    let iy1 = lerp(ix01, ix11, ay.weight);

    normalize(lerp(iy0, iy1, az.weight))
}

impl Generator {
    /// 1D Perlin noise in `[0, 1]`. Does not advance the sequence.
    pub fn perlin_1d(&self, x: f64) -> RandomValue<'_> {
        RandomValue::new(self, sample_1d(self.seed(), x))
    }

    /// 2D Perlin noise in `[0, 1]`. Does not advance the sequence.
    pub fn perlin_2d(&self, x: f64, y: f64) -> RandomValue<'_> {
        RandomValue::new(self, sample_2d(self.seed(), x, y))
    }

    /// 3D Perlin noise in `[0, 1]`. Does not advance the sequence.
    pub fn perlin_3d(&self, x: f64, y: f64, z: f64) -> RandomValue<'_> {
        RandomValue::new(self, sample_3d(self.seed(), x, y, z))
    }

    /// Borrows this generator as a plain Perlin [`NoiseField`].
    #[inline]
    #[must_use]
    pub fn perlin(&self) -> Perlin<'_> {
        Perlin { generator: self }
    }
}

/// Plain Perlin noise as a [`NoiseField`] in 1, 2 or 3 dimensions.
#[derive(Clone, Copy, Debug)]
pub struct Perlin<'g> {
    generator: &'g Generator,
}

impl<'g> NoiseField<'g, 1> for Perlin<'g> {
    fn generator(&self) -> &'g Generator {
        self.generator
    }

    fn sample(&self, [x]: [f64; 1]) -> RandomValue<'g> {
        self.generator.perlin_1d(x)
    }
}

impl<'g> NoiseField<'g, 2> for Perlin<'g> {
    fn generator(&self) -> &'g Generator {
        self.generator
    }

    fn sample(&self, [x, y]: [f64; 2]) -> RandomValue<'g> {
        self.generator.perlin_2d(x, y)
    }
}

impl<'g> NoiseField<'g, 3> for Perlin<'g> {
    fn generator(&self) -> &'g Generator {
        self.generator
    }

    fn sample(&self, [x, y, z]: [f64; 3]) -> RandomValue<'g> {
        self.generator.perlin_3d(x, y, z)
    }
}
