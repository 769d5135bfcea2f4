//! # Simplex Noise
//!
//! Skewed-lattice noise behind the same [`NoiseField`] seam as Perlin.
//!
//! ## Seeding
//!
//! The permutation table is shuffled with draws from a [`Generator`]'s
//! sequence (255 draws per table), so building a sampler advances the
//! generator's rolling state. Sampling afterwards is pure.
//!
//! ## Range
//!
//! The raw sum is scaled to roughly `[-1, 1]` (70 in 2D, 32 in 3D), then
//! mapped to `[0, 1]` with `(v + 1) / 2` and clamped.

use seedfield_core::{Generator, NoiseField, RandomValue};

/// Skewing factor for the 2D grid: `(sqrt(3) - 1) / 2`.
const F2: f64 = 0.366_025_403_784_438_6;
/// Unskewing factor for the 2D grid: `(3 - sqrt(3)) / 6`.
const G2: f64 = 0.211_324_865_405_187_1;
/// Skewing factor for the 3D grid.
const F3: f64 = 1.0 / 3.0;
/// Unskewing factor for the 3D grid.
const G3: f64 = 1.0 / 6.0;

/// Midpoints of the cube edges. 2D uses the x/y components.
const GRADIENTS: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// 256-entry permutation, doubled so `perm[i + perm[j]]` never wraps.
#[derive(Clone, Debug)]
struct PermutationTable {
    perm: [u8; 512],
}

impl PermutationTable {
    /// Shuffles `0..=255` with the generator's sequence.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn from_generator(generator: &Generator) -> Self {
        let mut source = [0u8; 256];
        for (slot, value) in source.iter_mut().zip(0..=255u8) {
            *slot = value;
        }

        for i in 0..255usize {
            let remaining = (256 - i) as f64;
            // next_value is in [0, 1), so the pick stays within i..=255.
            let pick = i + (generator.next_value().get() * remaining) as usize;
            source.swap(i, pick);
        }

        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(&source);
        perm[256..].copy_from_slice(&source);

        tracing::trace!(
            "Simplex permutation built from seed {} (state now {})",
            generator.seed(),
            generator.rolling_state()
        );

        Self { perm }
    }

    #[inline]
    fn get(&self, index: usize) -> usize {
        usize::from(self.perm[index & 511])
    }

    #[inline]
    fn gradient(&self, index: usize) -> &'static [f64; 3] {
        &GRADIENTS[self.get(index) % 12]
    }
}

/// Lattice coordinate reduced to a table index.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn wrap(cell: f64) -> usize {
    ((cell as i64) & 255) as usize
}

#[inline]
fn normalize(raw: f64) -> f64 {
    ((raw + 1.0) / 2.0).clamp(0.0, 1.0)
}

/// 2D simplex noise bound to a generator.
///
/// # Example
///
/// ```rust
/// use seedfield_core::Generator;
/// use seedfield_procedural::Simplex2D;
///
/// let generator = Generator::new(42);
/// let simplex = Simplex2D::new(&generator);
/// let value = simplex.noise(12.5, -3.25);
/// assert!((0.0..=1.0).contains(&value.get()));
/// ```
#[derive(Clone, Debug)]
pub struct Simplex2D<'g> {
    generator: &'g Generator,
    table: PermutationTable,
}

impl<'g> Simplex2D<'g> {
    /// Builds the sampler, drawing its permutation from `generator`.
    #[must_use]
    pub fn new(generator: &'g Generator) -> Self {
        Self {
            generator,
            table: PermutationTable::from_generator(generator),
        }
    }

    /// Samples the field at `(x, y)`; the value is in `[0, 1]`.
    #[must_use]
    pub fn noise(&self, x: f64, y: f64) -> RandomValue<'g> {
        RandomValue::new(self.generator, normalize(self.raw(x, y)))
    }

    fn raw(&self, x: f64, y: f64) -> f64 {
        // Skew input space to find the simplex cell
        let skew = (x + y) * F2;
        let i = (x + skew).floor();
        let j = (y + skew).floor();

        // Unskew back to the cell origin
        let unskew = (i + j) * G2;
        let x0 = x - (i - unskew);
        let y0 = y - (j - unskew);

        // Upper or lower triangle
        let (i1, j1): (u8, u8) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - f64::from(i1) + G2;
        let y1 = y0 - f64::from(j1) + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = wrap(i);
        let jj = wrap(j);

        let g0 = self.table.gradient(ii + self.table.get(jj));
        let g1 = self
            .table
            .gradient(ii + usize::from(i1) + self.table.get(jj + usize::from(j1)));
        let g2 = self.table.gradient(ii + 1 + self.table.get(jj + 1));

        let n0 = contribution_2d(g0, x0, y0);
        let n1 = contribution_2d(g1, x1, y1);
        let n2 = contribution_2d(g2, x2, y2);

        70.0 * (n0 + n1 + n2)
    }
}

#[inline]
fn contribution_2d(grad: &[f64; 3], x: f64, y: f64) -> f64 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        0.0
    } else {
        let t2 = t * t;
        t2 * t2 * (grad[0] * x + grad[1] * y)
    }
}

impl<'g> NoiseField<'g, 2> for Simplex2D<'g> {
    fn generator(&self) -> &'g Generator {
        self.generator
    }

    fn sample(&self, [x, y]: [f64; 2]) -> RandomValue<'g> {
        self.noise(x, y)
    }
}

/// 3D simplex noise bound to a generator.
#[derive(Clone, Debug)]
pub struct Simplex3D<'g> {
    generator: &'g Generator,
    table: PermutationTable,
}

impl<'g> Simplex3D<'g> {
    /// Builds the sampler, drawing its permutation from `generator`.
    #[must_use]
    pub fn new(generator: &'g Generator) -> Self {
        Self {
            generator,
            table: PermutationTable::from_generator(generator),
        }
    }

    /// Samples the field at `(x, y, z)`; the value is in `[0, 1]`.
    #[must_use]
    pub fn noise(&self, x: f64, y: f64, z: f64) -> RandomValue<'g> {
        RandomValue::new(self.generator, normalize(self.raw(x, y, z)))
    }

    #[allow(clippy::many_single_char_names, clippy::similar_names)]
    fn raw(&self, x: f64, y: f64, z: f64) -> f64 {
        let skew = (x + y + z) * F3;
        let i = (x + skew).floor();
        let j = (y + skew).floor();
        let k = (z + skew).floor();

        let unskew = (i + j + k) * G3;
        let x0 = x - (i - unskew);
        let y0 = y - (j - unskew);
        let z0 = z - (k - unskew);

        // Which of the six tetrahedra holds the point
        let ((i1, j1, k1), (i2, j2, k2)): ((u8, u8, u8), (u8, u8, u8)) = if x0 >= y0 {
            if y0 >= z0 {
                ((1, 0, 0), (1, 1, 0))
            } else if x0 >= z0 {
                ((1, 0, 0), (1, 0, 1))
            } else {
                ((0, 0, 1), (1, 0, 1))
            }
        } else if y0 < z0 {
            ((0, 0, 1), (0, 1, 1))
        } else if x0 < z0 {
            ((0, 1, 0), (0, 1, 1))
        } else {
            ((0, 1, 0), (1, 1, 0))
        };

        let x1 = x0 - f64::from(i1) + G3;
        let y1 = y0 - f64::from(j1) + G3;
        let z1 = z0 - f64::from(k1) + G3;
        let x2 = x0 - f64::from(i2) + 2.0 * G3;
        let y2 = y0 - f64::from(j2) + 2.0 * G3;
        let z2 = z0 - f64::from(k2) + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        let ii = wrap(i);
        let jj = wrap(j);
        let kk = wrap(k);
        let t = &self.table;
        let corner = |di: u8, dj: u8, dk: u8| {
            let pz = t.get(kk + usize::from(dk));
            let py = t.get(jj + usize::from(dj) + pz);
            t.gradient(ii + usize::from(di) + py)
        };

        let g0 = corner(0, 0, 0);
        let g1 = corner(i1, j1, k1);
        let g2 = corner(i2, j2, k2);
        let g3 = corner(1, 1, 1);

        let n0 = contribution_3d(g0, x0, y0, z0);
        let n1 = contribution_3d(g1, x1, y1, z1);
        let n2 = contribution_3d(g2, x2, y2, z2);
        let n3 = contribution_3d(g3, x3, y3, z3);

        32.0 * (n0 + n1 + n2 + n3)
    }
}

#[inline]
fn contribution_3d(grad: &[f64; 3], x: f64, y: f64, z: f64) -> f64 {
    let t = 0.6 - x * x - y * y - z * z;
    if t < 0.0 {
        0.0
    } else {
        let t2 = t * t;
        t2 * t2 * (grad[0] * x + grad[1] * y + grad[2] * z)
    }
}

impl<'g> NoiseField<'g, 3> for Simplex3D<'g> {
    fn generator(&self) -> &'g Generator {
        self.generator
    }

    fn sample(&self, [x, y, z]: [f64; 3]) -> RandomValue<'g> {
        self.noise(x, y, z)
    }
}
