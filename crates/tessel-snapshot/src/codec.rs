//! PNG encode/decode through a palette.
//!
//! Pixel `(x, y)` of a snapshot is cell `(row = y, col = x)`. Channels are
//! written in `R, G, B, A` order from the packed `0xRRGGBBAA` palette
//! colour.

use std::fs::File;
use std::io::{self, BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};

use image::{GenericImageView, ImageFormat, ImageReader, Rgba, RgbaImage};
use tessel_core::{Cell, CellReader, CellWriter, Color, Palette};
use tracing::{debug, info};

use crate::error::SnapshotError;

/// Size of a decoded snapshot in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    /// Columns.
    pub width: u32,
    /// Rows.
    pub height: u32,
}

/// Render every filled row of `grid` to its palette colours.
///
/// Returns `Err(SnapshotError::UnmappedState)` for the first cell (in
/// row-major order) whose state has no palette entry.
pub fn encode(grid: &dyn CellReader, palette: &Palette) -> Result<RgbaImage, SnapshotError> {
    let rows = grid.filled_rows();
    let mut img = RgbaImage::new(grid.cols(), rows);
    for row in 0..rows {
        for col in 0..grid.cols() {
            let cell = grid.cell(row, col);
            let color = palette
                .color(cell)
                .ok_or(SnapshotError::UnmappedState { row, col, cell })?;
            img.put_pixel(col, row, Rgba(color.to_rgba_bytes()));
        }
    }
    Ok(img)
}

/// Encode `grid` and write it to `path` as a PNG.
///
/// Blocks on the filesystem. Nothing is written if encoding fails.
pub fn save(
    grid: &dyn CellReader,
    palette: &Palette,
    path: impl AsRef<Path>,
) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    let img = encode(grid, palette)?;
    let io_err = |source: io::Error| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
    img.write_to(&mut out, ImageFormat::Png)
        .map_err(|source| SnapshotError::Image {
            path: path.to_path_buf(),
            source,
        })?;
    out.flush().map_err(io_err)?;
    info!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "saved snapshot"
    );
    Ok(())
}

/// Decode an encoded image into row-major cell states.
///
/// `path` only labels errors. Fails on the first pixel whose colour is
/// not in `palette`.
pub fn decode(
    bytes: &[u8],
    palette: &Palette,
    path: &Path,
) -> Result<(Extent, Vec<Cell>), SnapshotError> {
    decode_within(bytes, palette, path, None)
}

/// Load the PNG at `path` into the top-left corner of `grid`.
///
/// The image may be smaller than the grid; cells outside it keep their
/// prior state. A grid with a variable number of filled rows ends up with
/// exactly the image's rows. On any error `grid` is left untouched.
pub fn load_into(
    path: impl AsRef<Path>,
    palette: &Palette,
    grid: &mut dyn CellWriter,
) -> Result<Extent, SnapshotError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let extent = load_bytes(&bytes, palette, grid, path)?;
    info!(
        path = %path.display(),
        width = extent.width,
        height = extent.height,
        "loaded snapshot"
    );
    Ok(extent)
}

/// [`load_into`] for an image already in memory.
pub fn load_from_memory(
    bytes: &[u8],
    palette: &Palette,
    grid: &mut dyn CellWriter,
) -> Result<Extent, SnapshotError> {
    load_bytes(bytes, palette, grid, &PathBuf::from("<memory>"))
}

fn load_bytes(
    bytes: &[u8],
    palette: &Palette,
    grid: &mut dyn CellWriter,
    path: &Path,
) -> Result<Extent, SnapshotError> {
    let bound = Extent {
        width: grid.cols(),
        height: grid.rows(),
    };
    let (extent, cells) = decode_within(bytes, palette, path, Some(bound))?;
    // Every pixel is validated; only now touch the grid.
    grid.set_filled_rows(extent.height);
    let w = extent.width as usize;
    for row in 0..extent.height {
        for col in 0..extent.width {
            grid.set_cell(row, col, cells[row as usize * w + col as usize]);
        }
    }
    Ok(extent)
}

fn decode_within(
    bytes: &[u8],
    palette: &Palette,
    path: &Path,
    bound: Option<Extent>,
) -> Result<(Extent, Vec<Cell>), SnapshotError> {
    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?
        .decode()
        .map_err(|source| SnapshotError::Image {
            path: path.to_path_buf(),
            source,
        })?;

    let channels = img.color().channel_count();
    if channels != 4 {
        return Err(SnapshotError::ChannelDepth {
            path: path.to_path_buf(),
            found: channels,
        });
    }

    let (width, height) = img.dimensions();
    let extent = Extent { width, height };
    if let Some(max) = bound {
        if extent.width > max.width || extent.height > max.height {
            return Err(SnapshotError::Oversized {
                path: path.to_path_buf(),
                width: extent.width,
                height: extent.height,
                max_width: max.width,
                max_height: max.height,
            });
        }
    }
    debug!(
        path = %path.display(),
        width = extent.width,
        height = extent.height,
        "decoding snapshot"
    );

    let rgba = img.into_rgba8();
    let mut cells = Vec::with_capacity(extent.width as usize * extent.height as usize);
    for (col, row, pixel) in rgba.enumerate_pixels() {
        let color = Color::from_rgba_bytes(pixel.0);
        let cell = palette
            .cell_for(color)
            .ok_or_else(|| SnapshotError::UnknownColor {
                path: path.to_path_buf(),
                color,
                row,
                col,
            })?;
        cells.push(cell);
    }
    Ok((extent, cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage};
    use tessel_test_utils::fixtures::{four_state_palette, striped_grid, two_state_palette};
    use tessel_test_utils::MockGrid;

    fn png_bytes(img: &DynamicImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    fn encoded(grid: &MockGrid, palette: &Palette) -> Vec<u8> {
        png_bytes(&DynamicImage::ImageRgba8(encode(grid, palette).unwrap()))
    }

    #[test]
    fn encode_writes_rgba_channel_order() {
        let grid = MockGrid::from_cells(1, 2, vec![0, 1]);
        let img = encode(&grid, &two_state_palette()).unwrap();
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [0xFF, 0xAA, 0xBB, 0xFF]);
    }

    #[test]
    fn encode_rejects_unmapped_state() {
        let grid = MockGrid::from_cells(2, 2, vec![0, 1, 1, 2]);
        assert!(matches!(
            encode(&grid, &two_state_palette()),
            Err(SnapshotError::UnmappedState {
                row: 1,
                col: 1,
                cell: 2
            })
        ));
    }

    #[test]
    fn decode_recovers_states() {
        let palette = four_state_palette();
        let grid = striped_grid(3, 5, 4);
        let (extent, cells) = decode(&encoded(&grid, &palette), &palette, Path::new("t")).unwrap();
        assert_eq!(extent, Extent { width: 5, height: 3 });
        assert_eq!(cells, grid.cells());
    }

    #[test]
    fn smaller_image_leaves_rest_of_grid() {
        let palette = two_state_palette();
        let small = MockGrid::from_cells(1, 2, vec![1, 0]);
        let mut target = MockGrid::new(3, 3);
        target.fill(1);
        let extent = load_from_memory(&encoded(&small, &palette), &palette, &mut target).unwrap();
        assert_eq!(extent, Extent { width: 2, height: 1 });
        assert_eq!(target.cells(), &[1, 0, 1, 1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn oversized_image_is_rejected() {
        let palette = two_state_palette();
        let big = MockGrid::new(2, 4);
        let mut target = MockGrid::new(3, 3);
        let err = load_from_memory(&encoded(&big, &palette), &palette, &mut target).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::Oversized {
                width: 4,
                height: 2,
                max_width: 3,
                max_height: 3,
                ..
            }
        ));
    }

    #[test]
    fn unknown_color_aborts_before_any_write() {
        let mut img = RgbaImage::new(3, 2);
        for p in img.pixels_mut() {
            *p = Rgba([0xFF, 0xAA, 0xBB, 0xFF]);
        }
        img.put_pixel(2, 1, Rgba([1, 2, 3, 4]));
        let bytes = png_bytes(&DynamicImage::ImageRgba8(img));

        let mut target = MockGrid::new(2, 3);
        let err = load_from_memory(&bytes, &two_state_palette(), &mut target).unwrap_err();
        match err {
            SnapshotError::UnknownColor { color, row, col, .. } => {
                assert_eq!(color, Color(0x01020304));
                assert_eq!((row, col), (1, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(target.cells(), &[0; 6]);
    }

    #[test]
    fn rgb_image_fails_channel_check() {
        let bytes = png_bytes(&DynamicImage::ImageRgb8(RgbImage::new(2, 2)));
        let mut target = MockGrid::new(2, 2);
        assert!(matches!(
            load_from_memory(&bytes, &two_state_palette(), &mut target),
            Err(SnapshotError::ChannelDepth { found: 3, .. })
        ));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let mut target = MockGrid::new(2, 2);
        assert!(matches!(
            load_from_memory(b"not an image", &two_state_palette(), &mut target),
            Err(SnapshotError::Image { .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let mut target = MockGrid::new(2, 2);
        let path = std::env::temp_dir().join("tessel-snapshot-does-not-exist.png");
        assert!(matches!(
            load_into(&path, &two_state_palette(), &mut target),
            Err(SnapshotError::Io { .. })
        ));
    }

    /// A grid whose filled row count varies, like a row history.
    struct PartialGrid {
        inner: MockGrid,
        filled: u32,
    }

    impl CellReader for PartialGrid {
        fn rows(&self) -> u32 {
            self.inner.rows()
        }

        fn cols(&self) -> u32 {
            self.inner.cols()
        }

        fn cell(&self, row: u32, col: u32) -> Cell {
            self.inner.cell(row, col)
        }

        fn filled_rows(&self) -> u32 {
            self.filled
        }
    }

    impl CellWriter for PartialGrid {
        fn set_cell(&mut self, row: u32, col: u32, cell: Cell) {
            self.inner.set_cell(row, col, cell);
        }

        fn set_filled_rows(&mut self, rows: u32) {
            self.filled = rows;
        }
    }

    #[test]
    fn partial_grids_save_and_restore_filled_rows_only() {
        let palette = two_state_palette();
        let saved = PartialGrid {
            inner: MockGrid::from_cells(4, 2, vec![1, 0, 0, 1, 0, 0, 0, 0]),
            filled: 2,
        };
        let img = encode(&saved, &palette).unwrap();
        assert_eq!(img.dimensions(), (2, 2));

        let bytes = png_bytes(&DynamicImage::ImageRgba8(img));
        let mut target = PartialGrid {
            inner: MockGrid::new(4, 2),
            filled: 4,
        };
        let extent = load_from_memory(&bytes, &palette, &mut target).unwrap();
        assert_eq!(extent.height, 2);
        assert_eq!(target.filled, 2);
        assert_eq!(target.inner.cells()[..4], [1, 0, 0, 1]);
    }
}
