//! Two-state life-like rules in birth/survival notation.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use tessel_core::Cell;
use tessel_space::Torus2D;

use crate::error::RuleError;
use crate::transition::Transition;

/// Dead cell state.
pub const DEAD: Cell = 0;
/// Live cell state.
pub const ALIVE: Cell = 1;

/// A life-like rule: a dead cell with `n` live neighbours is born when bit
/// `n` of `birth` is set; a live cell survives when bit `n` of `survive`
/// is set. Only bits 0..=8 are meaningful.
///
/// Any state other than [`ALIVE`] reads as dead.
///
/// ```
/// use tessel_rule::LifeRule;
///
/// let highlife: LifeRule = "b36/s23".parse().unwrap();
/// assert_eq!(highlife, LifeRule::HIGHLIFE);
/// assert_eq!(highlife.to_string(), "B36/S23");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LifeRule {
    /// Neighbour counts that bring a dead cell to life.
    pub birth: u16,
    /// Neighbour counts that keep a live cell alive.
    pub survive: u16,
}

const fn mask(counts: &[u8]) -> u16 {
    let mut m = 0;
    let mut i = 0;
    while i < counts.len() {
        m |= 1 << counts[i];
        i += 1;
    }
    m
}

impl LifeRule {
    /// Conway's Game of Life, `B3/S23`.
    pub const CONWAY: Self = Self::new(&[3], &[2, 3]);
    /// HighLife, `B36/S23`.
    pub const HIGHLIFE: Self = Self::new(&[3, 6], &[2, 3]);
    /// Seeds, `B2/S`.
    pub const SEEDS: Self = Self::new(&[2], &[]);
    /// Day & Night, `B3678/S34678`.
    pub const DAY_AND_NIGHT: Self = Self::new(&[3, 6, 7, 8], &[3, 4, 6, 7, 8]);

    /// Build a rule from lists of neighbour counts (each `<= 8`).
    pub const fn new(birth: &[u8], survive: &[u8]) -> Self {
        Self {
            birth: mask(birth),
            survive: mask(survive),
        }
    }

    /// Next state of a cell in state `cell` with `live` live neighbours.
    pub fn next_state(&self, cell: Cell, live: u8) -> Cell {
        let table = if cell == ALIVE { self.survive } else { self.birth };
        Cell::from(table & (1 << live) != 0)
    }
}

impl Transition for LifeRule {
    fn name(&self) -> Cow<'static, str> {
        Cow::Owned(self.to_string())
    }

    fn state_count(&self) -> usize {
        2
    }

    fn apply(&self, space: &Torus2D, prev: &[Cell], next: &mut [Cell]) {
        for row in 0..space.height() {
            for col in 0..space.width() {
                let i = space.index(row, col);
                let live = space.count_matching(prev, row, col, &ALIVE);
                next[i] = self.next_state(prev[i], live);
            }
        }
    }
}

impl fmt::Display for LifeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |m: u16| -> String {
            (0..=8u8)
                .filter(|n| m & (1 << n) != 0)
                .map(|n| char::from(b'0' + n))
                .collect()
        };
        write!(f, "B{}/S{}", digits(self.birth), digits(self.survive))
    }
}

impl FromStr for LifeRule {
    type Err = RuleError;

    /// Parse `B<digits>/S<digits>` in either order, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| RuleError::InvalidNotation {
            notation: s.to_string(),
            reason: reason.to_string(),
        };
        let (left, right) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| invalid("expected `B.../S...`"))?;
        let mut birth = None;
        let mut survive = None;
        for part in [left, right] {
            let mut chars = part.chars();
            let slot = match chars.next().map(|c| c.to_ascii_uppercase()) {
                Some('B') => &mut birth,
                Some('S') => &mut survive,
                _ => return Err(invalid("each half must start with `B` or `S`")),
            };
            if slot.is_some() {
                return Err(invalid("`B` and `S` must each appear once"));
            }
            let mut m = 0u16;
            for c in chars {
                match c.to_digit(10) {
                    Some(d) if d <= 8 => m |= 1 << d,
                    _ => return Err(invalid("neighbour counts must be digits 0-8")),
                }
            }
            *slot = Some(m);
        }
        match (birth, survive) {
            (Some(birth), Some(survive)) => Ok(Self { birth, survive }),
            _ => Err(invalid("`B` and `S` must each appear once")),
        }
    }
}
