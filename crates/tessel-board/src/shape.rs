//! Small rectangular cell patterns for seeding boards.

use tessel_core::Cell;

use crate::error::BoardError;

/// A rectangular block of cell states, row-major.
///
/// Shapes are stamped into a [`Board`](crate::Board) with
/// [`Board::inject`](crate::Board::inject).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
}

impl Shape {
    /// Create a `rows x cols` shape from row-major `cells`.
    ///
    /// Returns `Err(BoardError::ShapeMismatch)` if the length is wrong.
    pub fn new(rows: u32, cols: u32, cells: Vec<Cell>) -> Result<Self, BoardError> {
        if cells.len() != rows as usize * cols as usize {
            return Err(BoardError::ShapeMismatch {
                rows,
                cols,
                len: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Parse a picture of the shape, one string per row.
    ///
    /// `.` is state 0; `O`, `#` and `*` are state 1; the digits `0`-`9`
    /// are that state. Short rows are padded with zeros.
    ///
    /// ```
    /// use tessel_board::Shape;
    ///
    /// let s = Shape::from_rows(&[".2", "1"]).unwrap();
    /// assert_eq!((s.rows(), s.cols()), (2, 2));
    /// assert_eq!(s.cell(0, 1), 2);
    /// assert_eq!(s.cell(1, 1), 0);
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let cols = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut cells = vec![0; rows.len() * cols];
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                cells[r * cols + c] = match ch {
                    '.' => 0,
                    'O' | '#' | '*' => 1,
                    '0'..='9' => ch as Cell - b'0',
                    _ => return Err(BoardError::ShapeSyntax { row: r, col: c, ch }),
                };
            }
        }
        Ok(Self {
            rows: rows.len() as u32,
            cols: cols as u32,
            cells,
        })
    }

    /// The bounding box of `coords` (as `(row, col)`), with those cells set
    /// to state 1.
    pub fn from_coords(coords: &[(u32, u32)]) -> Self {
        let rows = coords.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let cols = coords.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
        let mut cells = vec![0; rows as usize * cols as usize];
        for &(r, c) in coords {
            cells[r as usize * cols as usize + c as usize] = 1;
        }
        Self { rows, cols, cells }
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// State at `(row, col)`; both must be in range.
    pub fn cell(&self, row: u32, col: u32) -> Cell {
        self.cells[row as usize * self.cols as usize + col as usize]
    }

    /// Row-major cell states.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of nonzero cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    // ── Stock Life patterns ───────────────────────────────────────

    /// The 3x3 glider, heading south-east.
    pub fn glider() -> Self {
        Self::stock(&[".O.", "..O", "OOO"])
    }

    /// Period-2 horizontal blinker.
    pub fn blinker() -> Self {
        Self::stock(&["OOO"])
    }

    /// 2x2 still life.
    pub fn block() -> Self {
        Self::stock(&["OO", "OO"])
    }

    /// Period-2 toad.
    pub fn toad() -> Self {
        Self::stock(&[".OOO", "OOO."])
    }

    /// Period-2 beacon.
    pub fn beacon() -> Self {
        Self::stock(&["OO..", "OO..", "..OO", "..OO"])
    }

    /// Lightweight spaceship, heading west.
    pub fn lwss() -> Self {
        Self::stock(&[".O..O", "O....", "O...O", "OOOO."])
    }

    /// The R-pentomino methuselah.
    pub fn r_pentomino() -> Self {
        Self::stock(&[".OO", "OO.", ".O."])
    }

    /// Gosper's glider gun (period 30).
    pub fn gosper_glider_gun() -> Self {
        Self::stock(&[
            "........................O...........",
            "......................O.O...........",
            "............OO......OO............OO",
            "...........O...O....OO............OO",
            "OO........O.....O...OO..............",
            "OO........O...O.OO....O.O...........",
            "..........O.....O.......O...........",
            "...........O...O....................",
            "............OO......................",
        ])
    }

    /// Look up a stock pattern by name.
    pub fn named(name: &str) -> Option<Self> {
        Some(match name {
            "glider" => Self::glider(),
            "blinker" => Self::blinker(),
            "block" => Self::block(),
            "toad" => Self::toad(),
            "beacon" => Self::beacon(),
            "lwss" => Self::lwss(),
            "r-pentomino" => Self::r_pentomino(),
            "gosper-glider-gun" => Self::gosper_glider_gun(),
            _ => return None,
        })
    }

    /// Names accepted by [`Shape::named`].
    pub const NAMES: [&'static str; 8] = [
        "glider",
        "blinker",
        "block",
        "toad",
        "beacon",
        "lwss",
        "r-pentomino",
        "gosper-glider-gun",
    ];

    /// Build from fixed `.`/`O` rows; anything other than `O` is empty.
    fn stock(rows: &[&str]) -> Self {
        let cols = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut cells = vec![0; rows.len() * cols];
        for (r, line) in rows.iter().enumerate() {
            for (c, b) in line.bytes().enumerate() {
                cells[r * cols + c] = Cell::from(b == b'O');
            }
        }
        Self {
            rows: rows.len() as u32,
            cols: cols as u32,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_populations() {
        assert_eq!(Shape::glider().live_count(), 5);
        assert_eq!(Shape::blinker().live_count(), 3);
        assert_eq!(Shape::block().live_count(), 4);
        assert_eq!(Shape::toad().live_count(), 6);
        assert_eq!(Shape::beacon().live_count(), 8);
        assert_eq!(Shape::lwss().live_count(), 9);
        assert_eq!(Shape::r_pentomino().live_count(), 5);
        let gun = Shape::gosper_glider_gun();
        assert_eq!((gun.rows(), gun.cols()), (9, 36));
        assert_eq!(gun.live_count(), 36);
    }

    #[test]
    fn every_name_resolves() {
        for name in Shape::NAMES {
            assert!(Shape::named(name).is_some(), "{name}");
        }
        assert!(Shape::named("pulsar").is_none());
    }

    #[test]
    fn from_rows_matches_stock() {
        let parsed = Shape::from_rows(&[".#.", "..*", "OOO"]).unwrap();
        assert_eq!(parsed, Shape::glider());
    }

    #[test]
    fn from_rows_rejects_unknown_char() {
        assert_eq!(
            Shape::from_rows(&["..", ".x"]),
            Err(BoardError::ShapeSyntax {
                row: 1,
                col: 1,
                ch: 'x'
            })
        );
    }

    #[test]
    fn from_coords_builds_bounding_box() {
        let s = Shape::from_coords(&[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        assert_eq!(s, Shape::glider());
        assert_eq!(Shape::from_coords(&[]).cells(), &[] as &[Cell]);
    }

    #[test]
    fn new_checks_length() {
        assert!(Shape::new(2, 3, vec![0; 6]).is_ok());
        assert_eq!(
            Shape::new(2, 3, vec![0; 5]),
            Err(BoardError::ShapeMismatch {
                rows: 2,
                cols: 3,
                len: 5
            })
        );
    }
}
