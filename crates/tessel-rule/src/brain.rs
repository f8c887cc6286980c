//! Brian's Brain: a three-state automaton with a refractory period.

use std::borrow::Cow;

use tessel_core::Cell;
use tessel_space::Torus2D;

use crate::transition::Transition;

/// Resting state.
pub const OFF: Cell = 0;
/// Firing state.
pub const ON: Cell = 1;
/// Refractory state.
pub const DYING: Cell = 2;

/// Brian's Brain: an off cell fires when exactly two neighbours are
/// firing; a firing cell starts dying; a dying cell turns off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BriansBrain;

impl Transition for BriansBrain {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("brians-brain")
    }

    fn state_count(&self) -> usize {
        3
    }

    fn apply(&self, space: &Torus2D, prev: &[Cell], next: &mut [Cell]) {
        for row in 0..space.height() {
            for col in 0..space.width() {
                let i = space.index(row, col);
                next[i] = match prev[i] {
                    ON => DYING,
                    DYING => OFF,
                    _ if space.count_matching(prev, row, col, &ON) == 2 => ON,
                    _ => OFF,
                };
            }
        }
    }
}
