//! Wolfram's elementary one-dimensional rules.
//!
//! The next state of a cell is a lookup on the three-cell window
//! `(left, centre, right)` packed as `p = left << 2 | centre << 1 | right`;
//! bit `p` of the rule number is the result. Every row of the step space
//! is treated as an independent wrapping ring.

use std::borrow::Cow;

use tessel_core::Cell;
use tessel_space::Torus2D;

use crate::transition::Transition;

/// An elementary rule, named by its Wolfram number.
///
/// ```
/// use tessel_rule::ElementaryRule;
///
/// let r = ElementaryRule::RULE_110;
/// assert_eq!(r.table(), [0, 1, 1, 1, 0, 1, 1, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementaryRule(pub u8);

impl ElementaryRule {
    /// Rule 30, chaotic.
    pub const RULE_30: Self = Self(30);
    /// Rule 90, the Sierpinski triangle.
    pub const RULE_90: Self = Self(90);
    /// Rule 110, Turing-complete.
    pub const RULE_110: Self = Self(110);
    /// Rule 184, traffic flow.
    pub const RULE_184: Self = Self(184);

    /// The pattern index of a three-cell window. Nonzero states read as 1.
    pub fn pattern(left: Cell, centre: Cell, right: Cell) -> usize {
        (usize::from(left != 0) << 2) | (usize::from(centre != 0) << 1) | usize::from(right != 0)
    }

    /// Next state for pattern index `p` (`< 8`).
    pub fn lookup(&self, p: usize) -> Cell {
        (self.0 >> p) & 1
    }

    /// The lookup table indexed by pattern.
    pub fn table(&self) -> [Cell; 8] {
        std::array::from_fn(|p| self.lookup(p))
    }
}

impl Transition for ElementaryRule {
    fn name(&self) -> Cow<'static, str> {
        Cow::Owned(format!("rule{}", self.0))
    }

    fn state_count(&self) -> usize {
        2
    }

    fn apply(&self, space: &Torus2D, prev: &[Cell], next: &mut [Cell]) {
        for row in 0..space.height() {
            for col in 0..space.width() {
                let [l, c, r] = space.row_window(row, col);
                next[c] = self.lookup(Self::pattern(prev[l], prev[c], prev[r]));
            }
        }
    }
}
