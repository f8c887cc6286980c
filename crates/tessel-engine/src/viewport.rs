//! Mapping between screen pixels and grid cells.

use crate::config::ScreenConfig;

/// A logical screen split evenly into `rows x cols` cells.
///
/// ```
/// use tessel_engine::{ScreenConfig, Viewport};
///
/// let v = Viewport::new(ScreenConfig { width: 100, height: 50 }, 5, 10);
/// assert_eq!(v.cell_at(0.0, 0.0), Some((0, 0)));
/// assert_eq!(v.cell_at(99.9, 49.9), Some((4, 9)));
/// assert_eq!(v.cell_at(100.0, 10.0), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    screen: ScreenConfig,
    rows: u32,
    cols: u32,
}

impl Viewport {
    /// Create a viewport over a `rows x cols` grid.
    pub fn new(screen: ScreenConfig, rows: u32, cols: u32) -> Self {
        Self { screen, rows, cols }
    }

    /// Cell width and height in pixels.
    pub fn cell_size(&self) -> (f32, f32) {
        (
            self.screen.width as f32 / self.cols.max(1) as f32,
            self.screen.height as f32 / self.rows.max(1) as f32,
        )
    }

    /// The `(row, col)` under pixel `(x, y)`, or `None` off-screen.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(u32, u32)> {
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        if x >= self.screen.width as f32 || y >= self.screen.height as f32 {
            return None;
        }
        let (w, h) = self.cell_size();
        let col = ((x / w).floor() as u32).min(self.cols.saturating_sub(1));
        let row = ((y / h).floor() as u32).min(self.rows.saturating_sub(1));
        Some((row, col))
    }

    /// Top-left corner and size of cell `(row, col)` in pixels.
    pub fn cell_rect(&self, row: u32, col: u32) -> (f32, f32, f32, f32) {
        let (w, h) = self.cell_size();
        (col as f32 * w, row as f32 * h, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Viewport {
        Viewport::new(ScreenConfig::default(), 64, 64)
    }

    #[test]
    fn cells_are_sixteen_pixels_on_default_screen() {
        assert_eq!(square().cell_size(), (16.0, 16.0));
        assert_eq!(square().cell_at(16.0, 31.9), Some((1, 1)));
        assert_eq!(square().cell_at(1023.0, 0.0), Some((0, 63)));
    }

    #[test]
    fn off_screen_and_nan_are_rejected() {
        let v = square();
        assert_eq!(v.cell_at(-0.5, 10.0), None);
        assert_eq!(v.cell_at(10.0, 1024.0), None);
        assert_eq!(v.cell_at(f32::NAN, 10.0), None);
    }

    #[test]
    fn rect_and_hit_test_agree() {
        let v = Viewport::new(ScreenConfig { width: 300, height: 200 }, 7, 9);
        for row in 0..7 {
            for col in 0..9 {
                let (x, y, w, h) = v.cell_rect(row, col);
                assert_eq!(v.cell_at(x + w / 2.0, y + h / 2.0), Some((row, col)));
            }
        }
    }
}
