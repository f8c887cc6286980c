//! Ordered state-to-colour mapping.

use smallvec::SmallVec;

use crate::cell::{Cell, MAX_STATES};
use crate::color::Color;
use crate::error::PaletteError;

/// An ordered, injective mapping from cell state to RGBA colour.
///
/// State `i` renders as `colors[i]`. Construction rejects duplicate
/// colours so that an image saved through the palette can be loaded
/// back without ambiguity.
///
/// # Examples
///
/// ```
/// use tessel_core::{Color, Palette};
///
/// let palette = Palette::new([Color(0x000000FF), Color(0xFFAABBFF)]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.color(1), Some(Color(0xFFAABBFF)));
/// assert_eq!(palette.cell_for(Color(0x000000FF)), Some(0));
/// assert_eq!(palette.cell_for(Color(0x12345678)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: SmallVec<[Color; 8]>,
}

impl Palette {
    /// Build a palette, validating length and injectivity.
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Result<Self, PaletteError> {
        let colors: SmallVec<[Color; 8]> = colors.into_iter().collect();
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        if colors.len() > MAX_STATES {
            return Err(PaletteError::TooManyStates {
                count: colors.len(),
            });
        }
        for (second, color) in colors.iter().enumerate() {
            if let Some(first) = colors[..second].iter().position(|c| c == color) {
                return Err(PaletteError::DuplicateColor {
                    color: *color,
                    first,
                    second,
                });
            }
        }
        Ok(Self { colors })
    }

    /// Number of states the palette can render.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always returns `false`; construction rejects empty palettes.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Colour of a state, or `None` if the state has no entry.
    pub fn color(&self, cell: Cell) -> Option<Color> {
        self.colors.get(cell as usize).copied()
    }

    /// State whose colour matches exactly, by linear search in state order.
    pub fn cell_for(&self, color: Color) -> Option<Cell> {
        self.colors
            .iter()
            .position(|c| *c == color)
            .map(|i| i as Cell)
    }

    /// Colours in state order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}
