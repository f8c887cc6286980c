//! Named rule presets.

use indexmap::IndexMap;

use crate::brain::BriansBrain;
use crate::elementary::ElementaryRule;
use crate::error::RuleError;
use crate::life::LifeRule;
use crate::rule::Rule;
use crate::wireworld::Wireworld;

/// Every built-in rule, keyed by name in a stable order.
pub fn presets() -> IndexMap<&'static str, Rule> {
    IndexMap::from([
        ("conway", Rule::Life(LifeRule::CONWAY)),
        ("highlife", Rule::Life(LifeRule::HIGHLIFE)),
        ("seeds", Rule::Life(LifeRule::SEEDS)),
        ("day-and-night", Rule::Life(LifeRule::DAY_AND_NIGHT)),
        ("brians-brain", Rule::BriansBrain(BriansBrain)),
        ("wireworld", Rule::Wireworld(Wireworld)),
        ("rule30", Rule::Elementary(ElementaryRule::RULE_30)),
        ("rule90", Rule::Elementary(ElementaryRule::RULE_90)),
        ("rule110", Rule::Elementary(ElementaryRule::RULE_110)),
        ("rule184", Rule::Elementary(ElementaryRule::RULE_184)),
    ])
}

/// Resolve a rule by preset name, `B.../S...` notation, or `ruleN`.
///
/// ```
/// use tessel_rule::{preset, ElementaryRule, LifeRule, Rule};
///
/// assert_eq!(preset("conway").unwrap(), Rule::Life(LifeRule::CONWAY));
/// assert_eq!(preset("B36/S23").unwrap(), Rule::Life(LifeRule::HIGHLIFE));
/// assert_eq!(preset("rule54").unwrap(), Rule::Elementary(ElementaryRule(54)));
/// ```
pub fn preset(name: &str) -> Result<Rule, RuleError> {
    let key = name.trim().to_ascii_lowercase();
    if let Some(rule) = presets().get(key.as_str()) {
        return Ok(*rule);
    }
    if key.contains('/') {
        return Ok(Rule::Life(name.parse()?));
    }
    if let Some(number) = key.strip_prefix("rule") {
        return number
            .trim()
            .parse::<u8>()
            .map(|n| Rule::Elementary(ElementaryRule(n)))
            .map_err(|_| RuleError::InvalidNotation {
                notation: name.to_string(),
                reason: "elementary rule number must be 0-255".to_string(),
            });
    }
    Err(RuleError::UnknownPreset {
        name: name.to_string(),
    })
}
