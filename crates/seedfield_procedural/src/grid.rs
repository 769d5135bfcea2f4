//! # Dense Grids
//!
//! Flat, row-major storage shared by every map type.
//!
//! Layout follows the `[y][x]` / `[y][x][z]` nesting maps are filled in:
//! - 2D: `index = y * width + x`
//! - 3D: `index = (y * width + x) * depth + z`
//!
//! Every accessor bounds-checks and returns `None` outside the grid.

/// One-dimensional run of cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid1D<T> {
    cells: Vec<T>,
}

impl<T> Grid1D<T> {
    /// Fills `length` cells in index order.
    pub fn from_fn(length: usize, fill: impl FnMut(usize) -> T) -> Self {
        Self {
            cells: (0..length).map(fill).collect(),
        }
    }

    /// Number of cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell `i`.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.cells.get(i)
    }

    /// Cells `start..=end`. `None` when the range is reversed or runs past
    /// the end.
    #[must_use]
    pub fn range(&self, start: usize, end: usize) -> Option<&[T]> {
        if start > end {
            return None;
        }
        self.cells.get(start..=end)
    }

    /// All cells in order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.cells
    }
}

/// Two-dimensional grid stored as `[y][x]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid2D<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid2D<T> {
    /// Fills the grid row by row: `y` outer, `x` inner.
    pub fn from_fn(width: usize, height: usize, mut fill: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(fill(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Extent along x.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Extent along y.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Cell at `(x, y)`.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Row `y`, ordered by x.
    #[must_use]
    pub fn row(&self, y: usize) -> Option<&[T]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Column `x`, ordered by y.
    pub fn column(&self, x: usize) -> Option<impl Iterator<Item = &T> + '_> {
        if x >= self.width {
            return None;
        }
        Some(self.cells.iter().skip(x).step_by(self.width))
    }

    /// Rows in y order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.height).filter_map(|y| self.row(y))
    }

    /// All cells, row-major.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.cells
    }

    /// Nested `[y][x]` copy of the grid.
    #[must_use]
    pub fn full_map(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

/// Three-dimensional grid stored as `[y][x][z]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid3D<T> {
    width: usize,
    height: usize,
    depth: usize,
    cells: Vec<T>,
}

impl<T> Grid3D<T> {
    /// Fills the grid with `y` outermost, then `x`, then `z`.
    pub fn from_fn(
        width: usize,
        height: usize,
        depth: usize,
        mut fill: impl FnMut(usize, usize, usize) -> T,
    ) -> Self {
        let mut cells = Vec::with_capacity(width * height * depth);
        for y in 0..height {
            for x in 0..width {
                for z in 0..depth {
                    cells.push(fill(x, y, z));
                }
            }
        }
        Self {
            width,
            height,
            depth,
            cells,
        }
    }

    /// Extent along x.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Extent along y.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Extent along z.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Start of the z run at `(x, y)`.
    #[inline]
    fn run_start(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y * self.width + x) * self.depth)
        } else {
            None
        }
    }

    /// Cell at `(x, y, z)`.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<&T> {
        if z >= self.depth {
            return None;
        }
        self.run_start(x, y).map(|start| &self.cells[start + z])
    }

    /// The z run at `(x, y)`.
    #[must_use]
    pub fn depths(&self, x: usize, y: usize) -> Option<&[T]> {
        self.run_start(x, y)
            .map(|start| &self.cells[start..start + self.depth])
    }

    /// The `[x][z]` plane at height `y`, flattened x-major.
    #[must_use]
    pub fn row(&self, y: usize) -> Option<&[T]> {
        if y >= self.height {
            return None;
        }
        let plane = self.width * self.depth;
        let start = y * plane;
        Some(&self.cells[start..start + plane])
    }

    /// One z run per row at column `x`, ordered by y.
    pub fn column(&self, x: usize) -> Option<impl Iterator<Item = &[T]> + '_> {
        if x >= self.width {
            return None;
        }
        Some((0..self.height).filter_map(move |y| self.depths(x, y)))
    }

    /// All cells, `[y][x][z]` order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.cells
    }

    /// Nested `[y][x][z]` copy of the grid.
    #[must_use]
    pub fn full_map(&self) -> Vec<Vec<Vec<T>>>
    where
        T: Clone,
    {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .filter_map(|x| self.depths(x, y).map(<[T]>::to_vec))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_1d_range_inclusive() {
        let grid = Grid1D::from_fn(10, |i| i);
        assert_eq!(grid.range(2, 5), Some(&[2, 3, 4, 5][..]));
        assert_eq!(grid.range(9, 9), Some(&[9][..]));
        assert_eq!(grid.range(5, 2), None);
        assert_eq!(grid.range(8, 10), None);
        assert_eq!(grid.get(10), None);
    }

    #[test]
    fn test_2d_layout() {
        let grid = Grid2D::from_fn(4, 3, |x, y| (x, y));
        assert_eq!(grid.values()[0], (0, 0));
        assert_eq!(grid.values()[1], (1, 0));
        assert_eq!(grid.values()[4], (0, 1));
        assert_eq!(grid.get(3, 2), Some(&(3, 2)));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_2d_row_and_column() {
        let grid = Grid2D::from_fn(3, 4, |x, y| y * 10 + x);
        assert_eq!(grid.row(2), Some(&[20, 21, 22][..]));
        assert_eq!(grid.row(4), None);

        let column: Vec<_> = grid.column(1).map(|c| c.copied().collect()).unwrap_or_default();
        assert_eq!(column, vec![1, 11, 21, 31]);
        assert!(grid.column(3).is_none());

        assert_eq!(grid.rows().count(), 4);
        assert_eq!(grid.full_map()[3], vec![30, 31, 32]);
    }

    #[test]
    fn test_3d_layout() {
        let grid = Grid3D::from_fn(2, 3, 4, |x, y, z| (x, y, z));
        assert_eq!(grid.values().len(), 24);
        assert_eq!(grid.values()[1], (0, 0, 1));
        assert_eq!(grid.values()[4], (1, 0, 0));
        assert_eq!(grid.values()[8], (0, 1, 0));
        assert_eq!(grid.get(1, 2, 3), Some(&(1, 2, 3)));
        assert_eq!(grid.get(1, 2, 4), None);
    }

    #[test]
    fn test_3d_slices() {
        let grid = Grid3D::from_fn(2, 3, 4, |x, y, z| x * 100 + y * 10 + z);
        assert_eq!(grid.depths(1, 2), Some(&[120, 121, 122, 123][..]));
        assert_eq!(grid.row(1).map(<[usize]>::len), Some(8));
        assert_eq!(grid.row(1).map(|plane| plane[4]), Some(110));
        assert!(grid.row(3).is_none());

        let column: Vec<Vec<usize>> = grid
            .column(1)
            .map(|runs| runs.map(<[usize]>::to_vec).collect())
            .unwrap_or_default();
        assert_eq!(column.len(), 3);
        assert_eq!(column[2], vec![120, 121, 122, 123]);

        let nested = grid.full_map();
        assert_eq!(nested.len(), 3);
        assert_eq!(nested[2][1][3], 123);
    }

    #[test]
    fn test_empty_grids() {
        let grid = Grid2D::from_fn(0, 5, |x, y| x + y);
        assert!(grid.values().is_empty());
        assert!(grid.get(0, 0).is_none());
        assert!(grid.column(0).is_none());

        let grid = Grid3D::from_fn(2, 2, 0, |x, y, z| x + y + z);
        assert_eq!(grid.depths(1, 1), Some(&[][..]));
        assert!(grid.get(1, 1, 0).is_none());
    }
}
