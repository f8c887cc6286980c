//! 1D ring (always-wrap periodic boundary).

use crate::error::SpaceError;
use crate::geometry::wrap;
use crate::space::Space;
use smallvec::{smallvec, SmallVec};

/// A one-dimensional ring of `len` cells.
///
/// Used both for a single row of a substitution automaton and for the
/// circular storage of a history of rows.
///
/// # Examples
///
/// ```
/// use tessel_space::{Ring1D, Space};
///
/// let ring = Ring1D::new(5).unwrap();
/// assert_eq!(ring.window(0), [4, 0, 1]);
/// assert_eq!(ring.slot(3, 4), 2);
/// assert_eq!(ring.neighbours(4).as_slice(), &[3, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ring1D {
    len: u32,
}

impl Ring1D {
    /// Maximum length: offsets are applied as `i32`.
    pub const MAX_LEN: u32 = i32::MAX as u32;

    /// Create a new ring with `len` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `len == 0`, or
    /// `Err(SpaceError::DimensionTooLarge)` if `len > i32::MAX`.
    pub fn new(len: u32) -> Result<Self, SpaceError> {
        if len == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if len > Self::MAX_LEN {
            return Err(SpaceError::DimensionTooLarge {
                name: "len",
                value: len,
                max: Self::MAX_LEN,
            });
        }
        Ok(Self { len })
    }

    /// Number of cells.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Always returns `false`; construction rejects `len == 0`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Wrap an arbitrary position onto the ring.
    pub fn wrap(&self, i: i32) -> usize {
        wrap(i, self.len) as usize
    }

    /// `(left, centre, right)` offsets around position `i`.
    pub fn window(&self, i: u32) -> [usize; 3] {
        let i = i as i32;
        [self.wrap(i - 1), self.wrap(i), self.wrap(i + 1)]
    }

    /// Offset `offset` steps after `begin`, wrapped.
    pub fn slot(&self, begin: usize, offset: usize) -> usize {
        (begin + offset) % self.len as usize
    }
}

impl Space for Ring1D {
    fn ndim(&self) -> usize {
        1
    }

    fn cell_count(&self) -> usize {
        self.len as usize
    }

    fn neighbours(&self, index: usize) -> SmallVec<[usize; 8]> {
        let [left, _, right] = self.window(index as u32);
        smallvec![left, right]
    }

    fn neighbour_degree(&self) -> usize {
        2
    }
}
