//! The closed set of built-in rules.

use std::borrow::Cow;
use std::fmt;

use tessel_board::Lattice;
use tessel_core::Cell;
use tessel_space::Torus2D;

use crate::brain::BriansBrain;
use crate::elementary::ElementaryRule;
use crate::life::LifeRule;
use crate::transition::Transition;
use crate::wireworld::Wireworld;

/// A rule chosen at simulation start.
///
/// Dispatch is a `match` over the built-in families rather than a trait
/// object, so the per-generation call is static.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Two-state birth/survival rule.
    Life(LifeRule),
    /// Brian's Brain.
    BriansBrain(BriansBrain),
    /// Wireworld.
    Wireworld(Wireworld),
    /// Elementary one-dimensional rule.
    Elementary(ElementaryRule),
}

impl Rule {
    /// Advance `lattice` by one generation under this rule.
    pub fn advance<L: Lattice>(&self, lattice: &mut L) {
        lattice.advance_with(|space, prev, next| self.apply(space, prev, next));
    }

    /// Advance `lattice` by `generations` generations.
    pub fn advance_by<L: Lattice>(&self, lattice: &mut L, generations: u64) {
        for _ in 0..generations {
            self.advance(lattice);
        }
    }
}

impl Transition for Rule {
    fn name(&self) -> Cow<'static, str> {
        match self {
            Self::Life(r) => r.name(),
            Self::BriansBrain(r) => r.name(),
            Self::Wireworld(r) => r.name(),
            Self::Elementary(r) => r.name(),
        }
    }

    fn state_count(&self) -> usize {
        match self {
            Self::Life(r) => r.state_count(),
            Self::BriansBrain(r) => r.state_count(),
            Self::Wireworld(r) => r.state_count(),
            Self::Elementary(r) => r.state_count(),
        }
    }

    fn apply(&self, space: &Torus2D, prev: &[Cell], next: &mut [Cell]) {
        match self {
            Self::Life(r) => r.apply(space, prev, next),
            Self::BriansBrain(r) => r.apply(space, prev, next),
            Self::Wireworld(r) => r.apply(space, prev, next),
            Self::Elementary(r) => r.apply(space, prev, next),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl From<LifeRule> for Rule {
    fn from(r: LifeRule) -> Self {
        Self::Life(r)
    }
}

impl From<ElementaryRule> for Rule {
    fn from(r: ElementaryRule) -> Self {
        Self::Elementary(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_board::{Board, RowHistory, Shape};
    use tessel_core::CellReader;

    #[test]
    fn dispatch_reports_family_state_counts() {
        assert_eq!(Rule::Life(LifeRule::CONWAY).state_count(), 2);
        assert_eq!(Rule::BriansBrain(BriansBrain).state_count(), 3);
        assert_eq!(Rule::Wireworld(Wireworld).state_count(), 4);
        assert_eq!(Rule::Elementary(ElementaryRule::RULE_30).state_count(), 2);
    }

    #[test]
    fn display_uses_rule_name() {
        assert_eq!(Rule::from(LifeRule::CONWAY).to_string(), "B3/S23");
        assert_eq!(Rule::from(ElementaryRule::RULE_110).to_string(), "rule110");
        assert_eq!(Rule::Wireworld(Wireworld).to_string(), "wireworld");
    }

    #[test]
    fn advance_by_steps_a_board() {
        let mut board = Board::new(6, 6).unwrap();
        board.inject(1, 1, &Shape::toad());
        let start = board.current().to_vec();
        let rule = Rule::from(LifeRule::CONWAY);
        rule.advance(&mut board);
        assert_ne!(board.current(), &start[..]);
        rule.advance_by(&mut board, 1);
        assert_eq!(board.current(), &start[..]);
        assert_eq!(board.generation().0, 2);
    }

    #[test]
    fn advance_grows_row_history() {
        let mut history = RowHistory::with_row(4, &[0, 0, 0, 1, 0]).unwrap();
        Rule::from(ElementaryRule::RULE_110).advance(&mut history);
        assert_eq!(history.size(), 2);
        assert_eq!(history.latest(), &[0, 0, 1, 1, 0]);
        assert_eq!(history.cell(0, 3), 1);
    }
}
