//! Palette and grid fixtures.

use tessel_core::{Cell, Color, Palette};

use crate::MockGrid;

/// Transparent background and a pink foreground, the classic
/// elementary-automaton colours.
pub fn two_state_palette() -> Palette {
    palette(&[0x0000_0000, 0xFFAA_BBFF])
}

/// Black, white, and a mid grey.
pub fn three_state_palette() -> Palette {
    palette(&[0x0000_00FF, 0xFFFF_FFFF, 0x8080_80FF])
}

/// Four opaque colours, enough for Wireworld.
pub fn four_state_palette() -> Palette {
    palette(&[0x0000_00FF, 0x0000_FFFF, 0xFF00_00FF, 0xFFFF_00FF])
}

fn palette(colors: &[u32]) -> Palette {
    Palette::new(colors.iter().copied().map(Color)).expect("fixture palette is valid")
}

/// A `rows x cols` grid cycling through `states` states in reading order.
pub fn striped_grid(rows: u32, cols: u32, states: usize) -> MockGrid {
    let cells = (0..rows as usize * cols as usize)
        .map(|i| (i % states.max(1)) as Cell)
        .collect();
    MockGrid::from_cells(rows, cols, cells)
}
