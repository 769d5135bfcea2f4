//! # Noise Field Seam
//!
//! The contract every seeded noise algorithm satisfies, so grid builders can
//! stay generic over Perlin, fBm, simplex or anything else.

use crate::generator::Generator;
use crate::value::RandomValue;

/// A seeded, deterministic scalar field over `N`-dimensional coordinates.
///
/// # Purity
///
/// `sample` must be a pure function of the generator's seed, the field's own
/// parameters and `coords`. Sampling the same point twice gives bit-identical
/// values, whatever was sampled in between. Each implementation documents
/// the bounded range of its output.
pub trait NoiseField<'g, const N: usize> {
    /// The generator this field is bound to.
    fn generator(&self) -> &'g Generator;

    /// Samples the field at `coords`.
    fn sample(&self, coords: [f64; N]) -> RandomValue<'g>;
}
