//! The [`Transition`] trait.

use std::borrow::Cow;

use tessel_core::Cell;
use tessel_space::Torus2D;

/// A pure generation step over a toroidal grid.
///
/// # Contract
///
/// - `apply()` MUST be deterministic: same inputs produce identical outputs.
/// - `apply()` MUST write every cell of `next`; its prior contents are an
///   older generation and carry no meaning.
/// - Every state written is in `[0, state_count())` for inputs in range.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use tessel_core::Cell;
/// use tessel_rule::Transition;
/// use tessel_space::{Space, Torus2D};
///
/// struct Invert;
///
/// impl Transition for Invert {
///     fn name(&self) -> Cow<'static, str> { "invert".into() }
///     fn state_count(&self) -> usize { 2 }
///     fn apply(&self, _: &Torus2D, prev: &[Cell], next: &mut [Cell]) {
///         for (n, p) in next.iter_mut().zip(prev) {
///             *n = 1 - p;
///         }
///     }
/// }
///
/// let space = Torus2D::new(3, 1).unwrap();
/// let mut next = vec![0; space.cell_count()];
/// Invert.apply(&space, &[1, 0, 1], &mut next);
/// assert_eq!(next, vec![0, 1, 0]);
/// ```
pub trait Transition: Send + Sync + 'static {
    /// Human-readable name for logging.
    fn name(&self) -> Cow<'static, str>;

    /// Number of distinct cell states.
    fn state_count(&self) -> usize;

    /// Compute the generation after `prev` into `next`.
    ///
    /// `prev` and `next` both hold `space.cell_count()` cells, row-major.
    fn apply(&self, space: &Torus2D, prev: &[Cell], next: &mut [Cell]);
}
