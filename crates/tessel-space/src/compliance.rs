//! Space trait compliance test helpers.
//!
//! Verify that a backend satisfies the invariants required by the
//! trait contract. Reused by every backend's test module.

use crate::space::Space;
use indexmap::IndexSet;

/// Assert that every neighbour offset is a valid cell.
pub fn assert_neighbours_in_range(space: &dyn Space) {
    for i in 0..space.cell_count() {
        for nb in space.neighbours(i) {
            assert!(
                nb < space.cell_count(),
                "neighbour {nb} of cell {i} out of range (cell_count {})",
                space.cell_count()
            );
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(space: &dyn Space) {
    for i in 0..space.cell_count() {
        for nb in space.neighbours(i) {
            assert!(
                space.neighbours(nb).contains(&i),
                "neighbour symmetry violated: {nb} in N({i}) but {i} not in N({nb})"
            );
        }
    }
}

/// Assert that every cell has exactly `neighbour_degree()` entries.
pub fn assert_uniform_degree(space: &dyn Space) {
    for i in 0..space.cell_count() {
        assert_eq!(
            space.neighbours(i).len(),
            space.neighbour_degree(),
            "cell {i} has non-uniform neighbour count"
        );
    }
}

/// Assert that neighbour lists are deterministic between calls.
pub fn assert_neighbours_deterministic(space: &dyn Space) {
    for i in 0..space.cell_count() {
        assert_eq!(space.neighbours(i), space.neighbours(i));
    }
}

/// Assert that large-enough spaces have distinct neighbours.
///
/// Repeats are only expected when an axis is shorter than 3.
pub fn assert_distinct_when_large(space: &dyn Space, large: bool) {
    if !large {
        return;
    }
    for i in 0..space.cell_count() {
        let n = space.neighbours(i);
        let unique: IndexSet<_> = n.iter().collect();
        assert_eq!(unique.len(), n.len(), "cell {i} has repeated neighbours");
        assert!(!unique.contains(&i), "cell {i} neighbours itself");
    }
}

/// Run all compliance checks on a space.
pub fn run_full_compliance(space: &dyn Space) {
    assert_neighbours_in_range(space);
    assert_neighbours_symmetric(space);
    assert_uniform_degree(space);
    assert_neighbours_deterministic(space);
}
