//! Transition rules for Tessel automata.
//!
//! A rule maps the authoritative cells of a lattice to the candidate
//! buffer for the next generation. Rules are pure: they never read the
//! candidate buffer and never mutate the authoritative one, so stepping
//! the same state with the same rule always yields the same result.
//!
//! The [`Transition`] trait is the extension seam. The closed [`Rule`]
//! enum covers the built-in families and is what a simulation is
//! configured with:
//!
//! - [`LifeRule`]: two-state birth/survival rules written `B3/S23`
//! - [`BriansBrain`]: three-state firing/refractory automaton
//! - [`Wireworld`]: four-state electron circuit automaton
//! - [`ElementaryRule`]: Wolfram's 256 one-dimensional three-cell rules

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod brain;
pub mod elementary;
pub mod error;
pub mod life;
pub mod presets;
pub mod rule;
pub mod transition;
pub mod wireworld;

pub use brain::BriansBrain;
pub use elementary::ElementaryRule;
pub use error::RuleError;
pub use life::LifeRule;
pub use presets::{preset, presets};
pub use rule::Rule;
pub use transition::Transition;
pub use wireworld::Wireworld;
