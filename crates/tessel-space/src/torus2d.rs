//! 2D toroidal grid with 8-connected (Moore) neighbourhood.

use crate::error::SpaceError;
use crate::geometry::{index, wrap};
use crate::space::Space;
use smallvec::SmallVec;

/// All 8 offsets as `(drow, dcol)`: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A fixed-size `width x height` grid whose edges wrap on both axes.
///
/// Cells are stored row-major: the cell at `(row, col)` lives at offset
/// `row * width + col`. Every neighbour coordinate is wrapped, so a cell
/// on the left edge sees the right edge and a corner sees the three
/// opposite corners.
///
/// # Examples
///
/// ```
/// use tessel_space::{Space, Torus2D};
///
/// let t = Torus2D::new(3, 3).unwrap();
/// let corner = t.index(0, 0);
/// // (2, 2) is a diagonal neighbour of (0, 0) on a 3x3 torus.
/// assert!(t.neighbours(corner).contains(&t.index(2, 2)));
/// assert_eq!(t.neighbour_degree(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Torus2D {
    width: u32,
    height: u32,
}

impl Torus2D {
    /// Maximum size of either axis: signed offsets are applied as `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a `width x height` torus.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if width > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Flat offset of an in-range `(row, col)`.
    pub fn index(&self, row: u32, col: u32) -> usize {
        index(col, row, self.width)
    }

    /// Flat offset of an arbitrary `(row, col)`, wrapping both axes.
    pub fn wrapped_index(&self, row: i32, col: i32) -> usize {
        index(wrap(col, self.width), wrap(row, self.height), self.width)
    }

    /// `(row, col)` of a flat offset.
    pub fn coord(&self, index: usize) -> (u32, u32) {
        let w = self.width as usize;
        ((index / w) as u32, (index % w) as u32)
    }

    /// Flat offsets of the 8 wrapped neighbours of `(row, col)`.
    pub fn moore_neighbours(&self, row: u32, col: u32) -> SmallVec<[usize; 8]> {
        let (r, c) = (row as i32, col as i32);
        OFFSETS_8
            .iter()
            .map(|&(dr, dc)| self.wrapped_index(r + dr, c + dc))
            .collect()
    }

    /// How many of the 8 wrapped neighbours of `(row, col)` hold `target`.
    ///
    /// `cells` is a full row-major buffer of `width * height` states.
    pub fn count_matching<T: PartialEq>(&self, cells: &[T], row: u32, col: u32, target: &T) -> u8 {
        debug_assert_eq!(cells.len(), self.cell_count());
        let (r, c) = (row as i32, col as i32);
        let mut count = 0;
        for (dr, dc) in OFFSETS_8 {
            if cells[self.wrapped_index(r + dr, c + dc)] == *target {
                count += 1;
            }
        }
        count
    }

    /// Flat offsets of `(left, centre, right)` within the row of `(row, col)`.
    ///
    /// The window wraps horizontally only; used by substitution rules that
    /// treat each row as an independent ring.
    pub fn row_window(&self, row: u32, col: u32) -> [usize; 3] {
        let c = col as i32;
        let base = self.index(row, 0);
        [
            base + wrap(c - 1, self.width) as usize,
            base + col as usize,
            base + wrap(c + 1, self.width) as usize,
        ]
    }
}

impl Space for Torus2D {
    fn ndim(&self) -> usize {
        2
    }

    fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn neighbours(&self, index: usize) -> SmallVec<[usize; 8]> {
        let (row, col) = self.coord(index);
        self.moore_neighbours(row, col)
    }

    fn neighbour_degree(&self) -> usize {
        8
    }
}
