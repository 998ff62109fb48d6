use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::LimgError;
use crate::format::PixelFormat;

/// An immutable rectangular pixel matrix.
///
/// Cells are stored flat in row-major order. Both shape and content
/// invariants are checked eagerly in [`Grid::from_rows`]; a value of this
/// type always satisfies them, so [`crate::encode`] cannot fail for any
/// reason other than oversized dimensions. There is no mutation API —
/// build a new grid to represent a change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    format: PixelFormat,
    cells: Vec<u8>,
}

impl Grid {
    /// Build a grid from explicit rows, validating shape then content.
    ///
    /// - zero rows, or a zero-width first row → [`LimgError::EmptyGrid`]
    /// - any row length differing from row 0 → [`LimgError::RaggedRow`]
    /// - any cell outside `format`'s range (every cell is scanned) →
    ///   [`LimgError::PixelOutOfRange`]
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R], format: PixelFormat) -> Result<Self, LimgError> {
        let height = rows.len();
        if height == 0 {
            return Err(LimgError::EmptyGrid);
        }
        let width = rows[0].as_ref().len();
        if width == 0 {
            return Err(LimgError::EmptyGrid);
        }

        for (row, cells) in rows.iter().enumerate() {
            let actual = cells.as_ref().len();
            if actual != width {
                return Err(LimgError::RaggedRow {
                    row,
                    expected: width,
                    actual,
                });
            }
        }

        let cell_count = width
            .checked_mul(height)
            .ok_or(LimgError::DimensionsTooLarge { width, height })?;
        let mut cells = Vec::with_capacity(cell_count);
        for (row, row_cells) in rows.iter().enumerate() {
            for (col, &value) in row_cells.as_ref().iter().enumerate() {
                if !format.contains(value) {
                    return Err(LimgError::PixelOutOfRange {
                        row,
                        col,
                        value,
                        format,
                    });
                }
                cells.push(value);
            }
        }

        Ok(Self {
            width,
            height,
            format,
            cells,
        })
    }

    /// Assemble a grid from already-validated cells (decode path).
    ///
    /// Callers guarantee `cells.len() == width * height` and that every
    /// value is legal for `format`.
    pub(crate) fn from_unpacked(
        width: usize,
        height: usize,
        cells: Vec<u8>,
        format: PixelFormat,
    ) -> Self {
        debug_assert!(width > 0 && height > 0);
        debug_assert_eq!(cells.len(), width * height);
        debug_assert!(cells.iter().all(|&v| format.contains(v)));
        Self {
            width,
            height,
            format,
            cells,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Flat row-major cell values.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Cell at (`row`, `col`), or `None` out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// Iterate rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.width)
    }

    /// Stringify every cell for uniform external consumption (printing,
    /// interop). Pure formatting; always succeeds.
    pub fn to_display_rows(&self) -> Vec<Vec<String>> {
        self.rows()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect()
    }
}
