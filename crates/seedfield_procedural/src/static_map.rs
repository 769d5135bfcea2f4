//! # Static Maps
//!
//! White-noise grids: one `next_value` draw per cell, in fill order
//! (`y`, then `x`, then `z`). Building a map advances the generator by
//! exactly the number of cells.

use seedfield_core::{Generator, RandomValue};

use crate::grid::{Grid1D, Grid2D, Grid3D};

/// A run of sequence draws.
#[derive(Clone, Debug)]
pub struct StaticMap1D<'g> {
    grid: Grid1D<RandomValue<'g>>,
}

impl<'g> StaticMap1D<'g> {
    /// Draws `length` values from `generator`.
    #[must_use]
    pub fn new(generator: &'g Generator, length: usize) -> Self {
        tracing::debug!("Building static 1D map: {} cells, seed {}", length, generator.seed());
        Self {
            grid: Grid1D::from_fn(length, |_| generator.next_value()),
        }
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

/// A `[y][x]` grid of sequence draws.
///
/// # Example
///
/// ```rust
/// use seedfield_core::Generator;
/// use seedfield_procedural::StaticMap2D;
///
/// let generator = Generator::new(42);
/// let map = StaticMap2D::new(&generator, 3, 2);
///
/// // The first cell is the first draw of seed 42
/// let first = map.get(0, 0).map(|v| v.get());
/// assert_eq!(first, Some(0.252_345_174_783_840_8));
/// assert!(map.get(3, 0).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct StaticMap2D<'g> {
    grid: Grid2D<RandomValue<'g>>,
}

impl<'g> StaticMap2D<'g> {
    /// Draws `width * height` values from `generator`, row by row.
    #[must_use]
    pub fn new(generator: &'g Generator, width: usize, height: usize) -> Self {
        tracing::debug!(
            "Building static 2D map: {}x{}, seed {}",
            width,
            height,
            generator.seed()
        );
        Self {
            grid: Grid2D::from_fn(width, height, |_, _| generator.next_value()),
        }
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

/// A `[y][x][z]` grid of sequence draws.
#[derive(Clone, Debug)]
pub struct StaticMap3D<'g> {
    grid: Grid3D<RandomValue<'g>>,
}

impl<'g> StaticMap3D<'g> {
    /// Draws `width * height * depth` values from `generator`.
    #[must_use]
    pub fn new(generator: &'g Generator, width: usize, height: usize, depth: usize) -> Self {
        tracing::debug!(
            "Building static 3D map: {}x{}x{}, seed {}",
            width,
            height,
            depth,
            generator.seed()
        );
        Self {
            grid: Grid3D::from_fn(width, height, depth, |_, _, _| generator.next_value()),
        }
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
