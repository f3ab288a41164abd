//! The elevation grid and its continuous height sampling.
//!
//! This module provides [`HeightField`], a dense row-major grid of `f32`
//! heights. Grid cell `(x, y)` is stored at `x + y * columns`, with row 0 at
//! the bottom (south) edge of the source heightmap.

use crate::error::{HeightFieldError, Result};

/// A dense, regularly sampled elevation grid.
///
/// Column and row counts are fixed at construction. Heights are written by
/// the loaders through [`HeightField::heights_mut`] and treated as read-only
/// afterwards.
///
/// # Example
///
/// ```
/// use heightfield::HeightField;
///
/// let field = HeightField::from_heights(2, 2, vec![0.0, 10.0, 20.0, 30.0]).unwrap();
/// assert_eq!(field.height(0.5, 0.5), 15.0);
/// assert_eq!(field.height(-3.0, 9.0), 20.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    /// Height samples, `columns * rows` long
    heights: Vec<f32>,
    /// Number of samples per row
    columns: usize,
    /// Number of rows
    rows: usize,
}

impl HeightField {
    /// Create a zero-filled height field with the given dimensions.
    ///
    /// Zero columns or rows are allowed, but such a grid must not be sampled.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            heights: vec![0.0; columns * rows],
            columns,
            rows,
        }
    }

    /// Create a height field from an existing row-major height buffer.
    ///
    /// # Errors
    ///
    /// Returns [`HeightFieldError::DimensionMismatch`] if `heights.len()` is
    /// not `columns * rows`.
    pub fn from_heights(columns: usize, rows: usize, heights: Vec<f32>) -> Result<Self> {
        let expected = columns * rows;
        if heights.len() != expected {
            return Err(HeightFieldError::DimensionMismatch {
                expected,
                actual: heights.len(),
            });
        }

        Ok(Self {
            heights,
            columns,
            rows,
        })
    }

    /// Sample the height at a continuous grid coordinate.
    ///
    /// Coordinates are clamped to `[0, columns - 1]` and `[0, rows - 1]`, so
    /// positions outside the grid return the nearest boundary value. Inside
    /// the grid the four surrounding samples are blended bilinearly. On the
    /// last column or last row the blend degrades to a linear interpolation
    /// along the remaining axis, and on the last corner the stored sample is
    /// returned as-is.
    ///
    /// # Arguments
    ///
    /// * `column` - Fractional column coordinate
    /// * `row` - Fractional row coordinate (0 = bottom row)
    ///
    /// # Panics
    ///
    /// If the grid has zero columns or rows.
    pub fn height(&self, column: f32, row: f32) -> f32 {
        let last_column = self.columns.saturating_sub(1) as f32;
        let last_row = self.rows.saturating_sub(1) as f32;
        let column = column.clamp(0.0, last_column);
        let row = row.clamp(0.0, last_row);

        // Both are non-negative after clamping, so truncation is floor. The
        // f32 bounds can round past the last index on very large grids.
        let x1 = (column as usize).min(self.columns.saturating_sub(1));
        let y1 = (row as usize).min(self.rows.saturating_sub(1));
        let x2 = x1 + 1;
        let y2 = y1 + 1;
        let x_frac = column - x1 as f32;
        let y_frac = row - y1 as f32;
        let x_frac_inv = 1.0 - x_frac;
        let y_frac_inv = 1.0 - y_frac;

        let at = |x: usize, y: usize| self.heights[x + y * self.columns];

        if x2 >= self.columns && y2 >= self.rows {
            at(x1, y1)
        } else if x2 >= self.columns {
            at(x1, y1) * y_frac_inv + at(x1, y2) * y_frac
        } else if y2 >= self.rows {
            at(x1, y1) * x_frac_inv + at(x2, y1) * x_frac
        } else {
            let a = x_frac_inv * y_frac_inv;
            let b = x_frac_inv * y_frac;
            let c = x_frac * y_frac;
            let d = x_frac * y_frac_inv;
            at(x1, y1) * a + at(x1, y2) * b + at(x2, y2) * c + at(x2, y1) * d
        }
    }

    /// Get the stored height of a single cell, or `None` if out of range.
    pub fn get(&self, column: usize, row: usize) -> Option<f32> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.heights.get(column + row * self.columns).copied()
    }

    /// Returns the lowest and highest stored heights.
    ///
    /// NaN samples are skipped. Returns `None` for an empty grid.
    pub fn min_max_height(&self) -> Option<(f32, f32)> {
        self.heights
            .iter()
            .copied()
            .filter(|h| !h.is_nan())
            .fold(None, |acc, h| match acc {
                None => Some((h, h)),
                Some((lo, hi)) => Some((lo.min(h), hi.max(h))),
            })
    }

    /// Returns the number of columns (samples per row).
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns `true` if the grid has no samples.
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Returns the row-major height buffer.
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Returns the row-major height buffer for bulk population.
    ///
    /// Writers are trusted to index it as `x + y * columns`.
    pub fn heights_mut(&mut self) -> &mut [f32] {
        &mut self.heights
    }
}
