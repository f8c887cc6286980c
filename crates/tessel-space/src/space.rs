//! The core `Space` trait.

use smallvec::SmallVec;

/// Topology shared by every grid backend.
///
/// Cells are addressed by their flat storage offset (see
/// [`index`](crate::index)). Neighbour lists are returned in a fixed,
/// backend-defined order and may contain repeats on very small spaces,
/// where several offsets wrap onto the same cell.
pub trait Space: Send + Sync + 'static {
    /// Number of spatial dimensions.
    fn ndim(&self) -> usize;

    /// Total number of cells.
    fn cell_count(&self) -> usize;

    /// Flat offsets of the neighbours of the cell at `index`.
    ///
    /// `index` must be `< cell_count()`.
    fn neighbours(&self, index: usize) -> SmallVec<[usize; 8]>;

    /// Number of entries every [`neighbours`](Space::neighbours) call returns.
    ///
    /// Wrapping spaces have no boundary, so the degree is uniform.
    fn neighbour_degree(&self) -> usize;
}
