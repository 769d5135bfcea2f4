//! # Noise Maps
//!
//! Coherent-noise grids sampled from any [`NoiseField`] at integer
//! coordinates. Cell `(x, y, z)` holds `field.sample([x, y, z])`.
//!
//! Perlin maps use fBm with the given options, so the options' frequency
//! sets the feature size in cells. Simplex maps build their own sampler,
//! which advances the generator by 255 draws; every other constructor
//! leaves it untouched.

use seedfield_core::{FbmOptions, Generator, NoiseField, RandomValue};

use crate::grid::{Grid1D, Grid2D, Grid3D};
use crate::simplex::{Simplex2D, Simplex3D};

/// Grid index as a sample coordinate.
#[inline]
#[allow(clippy::cast_precision_loss)]
fn coord(index: usize) -> f64 {
    index as f64
}

/// A run of noise samples.
#[derive(Clone, Debug)]
pub struct NoiseMap1D<'g> {
    grid: Grid1D<RandomValue<'g>>,
}

impl<'g> NoiseMap1D<'g> {
    /// Samples `field` at `0..length`.
    #[must_use]
    pub fn from_field<F>(field: &F, length: usize) -> Self
    where
        F: NoiseField<'g, 1>,
    {
        tracing::debug!(
            "Building 1D noise map: {} cells, seed {}",
            length,
            field.generator().seed()
        );
        Self {
            grid: Grid1D::from_fn(length, |i| field.sample([coord(i)])),
        }
    }

    /// fBm Perlin map.
    #[must_use]
    pub fn perlin(generator: &'g Generator, length: usize, options: &FbmOptions) -> Self {
        Self::from_field(&generator.fbm(*options), length)
    }

    /// The underlying grid.
    #[inline]
    #[must_use]
    pub fn grid(&self) -> &Grid1D<RandomValue<'g>> {
        &self.grid
    }

    /// Number of cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    /// Whether the map has no cells.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Cell `i`.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&RandomValue<'g>> {
        self.grid.get(i)
    }

    /// Cells `start..=end`.
    #[must_use]
    pub fn range(&self, start: usize, end: usize) -> Option<&[RandomValue<'g>]> {
        self.grid.range(start, end)
    }

    /// All cells in order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[RandomValue<'g>] {
        self.grid.values()
    }
}

/// A `[y][x]` grid of noise samples.
///
/// # Example
///
/// ```rust
/// use seedfield_core::{FbmOptions, Generator};
/// use seedfield_procedural::NoiseMap2D;
///
/// let generator = Generator::new(1);
/// let options = FbmOptions::default();
/// let map = NoiseMap2D::perlin(&generator, 64, 32, &options);
///
/// assert_eq!(map.width(), 64);
/// assert_eq!(
///     map.get(10, 10).map(|v| v.get()),
///     Some(generator.fbm_2d(10.0, 10.0, &options).get())
/// );
/// ```
#[derive(Clone, Debug)]
pub struct NoiseMap2D<'g> {
    grid: Grid2D<RandomValue<'g>>,
}

impl<'g> NoiseMap2D<'g> {
    /// Samples `field` at every `(x, y)` in `width * height`.
    #[must_use]
    pub fn from_field<F>(field: &F, width: usize, height: usize) -> Self
    where
        F: NoiseField<'g, 2>,
    {
        tracing::debug!(
            "Building 2D noise map: {}x{}, seed {}",
            width,
            height,
            field.generator().seed()
        );
        Self {
            grid: Grid2D::from_fn(width, height, |x, y| field.sample([coord(x), coord(y)])),
        }
    }

    /// fBm Perlin map.
    #[must_use]
    pub fn perlin(
        generator: &'g Generator,
        width: usize,
        height: usize,
        options: &FbmOptions,
    ) -> Self {
        Self::from_field(&generator.fbm(*options), width, height)
    }

    /// Simplex map. Advances `generator` by 255 draws.
    #[must_use]
    pub fn simplex(generator: &'g Generator, width: usize, height: usize) -> Self {
        Self::from_field(&Simplex2D::new(generator), width, height)
    }

    /// The underlying grid.
    #[inline]
    #[must_use]
    pub fn grid(&self) -> &Grid2D<RandomValue<'g>> {
        &self.grid
    }

    /// Extent along x.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Extent along y.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Cell at `(x, y)`.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&RandomValue<'g>> {
        self.grid.get(x, y)
    }

    /// Row `y`.
    #[must_use]
    pub fn row(&self, y: usize) -> Option<&[RandomValue<'g>]> {
        self.grid.row(y)
    }

    /// Column `x`, ordered by y.
    pub fn column(&self, x: usize) -> Option<impl Iterator<Item = &RandomValue<'g>> + '_> {
        self.grid.column(x)
    }

    /// All cells, row-major.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[RandomValue<'g>] {
        self.grid.values()
    }

    /// Nested `[y][x]` copy of the map.
    #[must_use]
    pub fn full_map(&self) -> Vec<Vec<RandomValue<'g>>> {
        self.grid.full_map()
    }
}

/// A `[y][x][z]` grid of noise samples.
#[derive(Clone, Debug)]
pub struct NoiseMap3D<'g> {
    grid: Grid3D<RandomValue<'g>>,
}

impl<'g> NoiseMap3D<'g> {
    /// Samples `field` at every `(x, y, z)` in `width * height * depth`.
    #[must_use]
    pub fn from_field<F>(field: &F, width: usize, height: usize, depth: usize) -> Self
    where
        F: NoiseField<'g, 3>,
    {
        tracing::debug!(
            "Building 3D noise map: {}x{}x{}, seed {}",
            width,
            height,
            depth,
            field.generator().seed()
        );
        Self {
            grid: Grid3D::from_fn(width, height, depth, |x, y, z| {
                field.sample([coord(x), coord(y), coord(z)])
            }),
        }
    }

    /// fBm Perlin map.
    #[must_use]
    pub fn perlin(
        generator: &'g Generator,
        width: usize,
        height: usize,
        depth: usize,
        options: &FbmOptions,
    ) -> Self {
        Self::from_field(&generator.fbm(*options), width, height, depth)
    }

    /// Simplex map. Advances `generator` by 255 draws.
    #[must_use]
    pub fn simplex(generator: &'g Generator, width: usize, height: usize, depth: usize) -> Self {
        Self::from_field(&Simplex3D::new(generator), width, height, depth)
    }

    /// The underlying grid.
    #[inline]
    #[must_use]
    pub fn grid(&self) -> &Grid3D<RandomValue<'g>> {
        &self.grid
    }

    /// Extent along x.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Extent along y.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Extent along z.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.grid.depth()
    }

    /// Cell at `(x, y, z)`.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<&RandomValue<'g>> {
        self.grid.get(x, y, z)
    }

    /// The z run at `(x, y)`.
    #[must_use]
    pub fn depths(&self, x: usize, y: usize) -> Option<&[RandomValue<'g>]> {
        self.grid.depths(x, y)
    }

    /// The `[x][z]` plane at height `y`.
    #[must_use]
    pub fn row(&self, y: usize) -> Option<&[RandomValue<'g>]> {
        self.grid.row(y)
    }

    /// One z run per row at column `x`.
    pub fn column(&self, x: usize) -> Option<impl Iterator<Item = &[RandomValue<'g>]> + '_> {
        self.grid.column(x)
    }

    /// All cells, `[y][x][z]` order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[RandomValue<'g>] {
        self.grid.values()
    }

    /// Nested `[y][x][z]` copy of the map.
    #[must_use]
    pub fn full_map(&self) -> Vec<Vec<Vec<RandomValue<'g>>>> {
        self.grid.full_map()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perlin_1d_matches_fbm() {
        let generator = Generator::new(42);
        let options = FbmOptions::default();
        let map = NoiseMap1D::perlin(&generator, 64, &options);

        assert_eq!(map.len(), 64);
        assert_eq!(
            map.get(37).map(|v| v.get()),
            Some(generator.fbm_1d(37.0, &options).get())
        );
        assert_eq!(map.get(37).map(|v| v.get()), Some(0.460_075_964_332_8));
    }

    #[test]
    fn test_perlin_2d_golden_cell() {
        let generator = Generator::new(1);
        let map = NoiseMap2D::perlin(&generator, 16, 16, &FbmOptions::default());
        assert_eq!(map.get(10, 10).map(|v| v.get()), Some(0.426_343_795_2));
    }

    #[test]
    fn test_perlin_3d_matches_fbm() {
        let generator = Generator::new(7);
        let options = FbmOptions::new(3, 0.1, 2.0, 0.5).expect("valid options");
        let map = NoiseMap3D::perlin(&generator, 4, 5, 6, &options);

        assert_eq!(
            map.get(3, 4, 5).map(|v| v.get()),
            Some(0.511_629_274_514_285_7)
        );
        assert_eq!(map.depths(3, 4).map(<[RandomValue<'_>]>::len), Some(6));
    }

    #[test]
    fn test_perlin_maps_do_not_advance() {
        let generator = Generator::new(3);
        let before = generator.capture();
        let _a = NoiseMap1D::perlin(&generator, 8, &FbmOptions::default());
        let _b = NoiseMap2D::perlin(&generator, 8, 8, &FbmOptions::default());
        let _c = NoiseMap3D::from_field(&generator.perlin(), 4, 4, 4);
        assert_eq!(before, generator.capture());
    }

    #[test]
    fn test_simplex_map_matches_sampler() {
        let generator = Generator::new(21);
        let map = NoiseMap2D::simplex(&generator, 8, 8);

        let replay = Generator::new(21);
        let simplex = Simplex2D::new(&replay);
        for y in 0..8 {
            for x in 0..8 {
                let expected = simplex.noise(coord(x), coord(y)).get();
                assert_eq!(map.get(x, y).map(|v| v.get()), Some(expected));
            }
        }
        assert_eq!(generator.capture(), replay.capture());
    }

    #[test]
    fn test_simplex_3d_range() {
        let generator = Generator::new(21);
        let map = NoiseMap3D::simplex(&generator, 6, 6, 6);
        assert!(map.values().iter().all(|v| (0.0..=1.0).contains(&v.get())));
        assert_eq!(map.full_map().len(), 6);
    }

    #[test]
    fn test_snapshots_reflect_generator() {
        let generator = Generator::new(21);
        let map = NoiseMap2D::simplex(&generator, 2, 2);
        let snapshot = generator.capture();
        assert!(map.values().iter().all(|v| v.snapshot() == snapshot));
    }
}
