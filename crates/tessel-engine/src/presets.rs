//! Ready-made automata: a rule paired with a palette.

use indexmap::IndexMap;
use tessel_core::{Color, Palette, PaletteError};
use tessel_rule::{presets, Rule, RuleError};

/// Transparent background and a pink foreground.
const TWO_STATE: &[Color] = &[Color(0x0000_0000), Color(0xFFAA_BBFF)];
/// Off, firing, refractory.
const BRAIN: &[Color] = &[Color(0x0000_00FF), Color(0xFFFF_FFFF), Color(0x3050_A0FF)];
/// Empty, head, tail, conductor.
const WIREWORLD: &[Color] = &[
    Color(0x0000_00FF),
    Color(0x3080_FFFF),
    Color(0xFF40_20FF),
    Color(0xFFC0_00FF),
];

/// A rule with its default colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Automaton {
    /// Transition rule.
    pub rule: Rule,
    /// One colour per state.
    pub colors: &'static [Color],
}

impl Automaton {
    /// Pair `rule` with the default colours for its family.
    pub fn for_rule(rule: Rule) -> Self {
        let colors = match rule {
            Rule::Life(_) | Rule::Elementary(_) => TWO_STATE,
            Rule::BriansBrain(_) => BRAIN,
            Rule::Wireworld(_) => WIREWORLD,
        };
        Self { rule, colors }
    }

    /// Build the palette.
    pub fn palette(&self) -> Result<Palette, PaletteError> {
        Palette::new(self.colors.iter().copied())
    }
}

/// Every built-in automaton, keyed by rule preset name.
pub fn automata() -> IndexMap<&'static str, Automaton> {
    presets()
        .into_iter()
        .map(|(name, rule)| (name, Automaton::for_rule(rule)))
        .collect()
}

/// Resolve an automaton by preset name or rule notation.
///
/// ```
/// use tessel_engine::automaton;
/// use tessel_rule::Transition;
///
/// let wireworld = automaton("wireworld").unwrap();
/// assert_eq!(wireworld.palette().unwrap().len(), wireworld.rule.state_count());
/// assert!(automaton("B36/S23").is_ok());
/// ```
pub fn automaton(name: &str) -> Result<Automaton, RuleError> {
    tessel_rule::preset(name).map(Automaton::for_rule)
}
