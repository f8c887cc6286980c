//! Benchmark profiles for the Tessel cellular automaton engine.
//!
//! Provides pre-built [`SimConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 100x100 Life board (10K cells), seeded soup
//! - [`stress_profile`]: 316x316 Life board (~100K cells)
//! - [`history_profile`]: Rule 110 row history, 256 cells wide

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessel_board::{Board, RowHistory};
use tessel_engine::{ConfigError, SimConfig};

/// Build a reference profile: 100x100 Conway board filled from `seed`.
pub fn reference_profile(seed: u64) -> Result<SimConfig<Board>, ConfigError> {
    soup_profile(100, seed)
}

/// Build a stress profile: 316x316 Conway board (~100K cells).
///
/// Same rule as [`reference_profile`] at 10x the cell count.
pub fn stress_profile(seed: u64) -> Result<SimConfig<Board>, ConfigError> {
    soup_profile(316, seed)
}

/// Build a Rule 110 history profile: 256 wide, 256 rows deep, one live
/// cell at the right edge.
pub fn history_profile() -> Result<SimConfig<RowHistory>, ConfigError> {
    let mut seed_row = vec![0; 256];
    seed_row[255] = 1;
    let history = RowHistory::with_row(256, &seed_row)?;
    SimConfig::from_preset(history, "rule110")
}

fn soup_profile(side: u32, seed: u64) -> Result<SimConfig<Board>, ConfigError> {
    let mut board = Board::new(side, side)?;
    board.randomize(seed, 2);
    SimConfig::from_preset(board, "conway")
}
