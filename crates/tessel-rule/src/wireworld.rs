//! Wireworld: electrons travelling along conductors.

use std::borrow::Cow;

use tessel_core::Cell;
use tessel_space::Torus2D;

use crate::transition::Transition;

/// Empty background.
pub const EMPTY: Cell = 0;
/// Electron head.
pub const HEAD: Cell = 1;
/// Electron tail.
pub const TAIL: Cell = 2;
/// Conductor.
pub const CONDUCTOR: Cell = 3;

/// Wireworld: heads become tails, tails become conductor, and conductor
/// becomes a head when one or two neighbours are heads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Wireworld;

impl Transition for Wireworld {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("wireworld")
    }

    fn state_count(&self) -> usize {
        4
    }

    fn apply(&self, space: &Torus2D, prev: &[Cell], next: &mut [Cell]) {
        for row in 0..space.height() {
            for col in 0..space.width() {
                let i = space.index(row, col);
                next[i] = match prev[i] {
                    HEAD => TAIL,
                    TAIL => CONDUCTOR,
                    CONDUCTOR => match space.count_matching(prev, row, col, &HEAD) {
                        1 | 2 => HEAD,
                        _ => CONDUCTOR,
                    },
                    _ => EMPTY,
                };
            }
        }
    }
}
