//! Grid partitioning of a rasterized page.
//!
//! A grid splits the canvas into `rows x columns` cells using two arrays of
//! line positions. Line indices double as resize-handle identities, so lines
//! are moved in place and never reordered.
//!
//! # Line Ordering
//!
//! [`Grid::update_line`] clamps a moved line between its neighbours, so the
//! line arrays stay monotonically non-decreasing. Two lines may coincide,
//! which yields zero-sized cells but never negative ones.

use crate::error::LayoutError;
use crate::geometry::Rect;
use crate::region::{Region, RegionId};
use serde::{Deserialize, Serialize};

/// Which family of grid lines an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridAxis {
    /// Horizontal lines, positioned along the canvas height.
    Row,
    /// Vertical lines, positioned along the canvas width.
    Column,
}

/// A rows x columns partition of a canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: u32,
    columns: u32,
    row_lines: Vec<f64>,
    column_lines: Vec<f64>,
    canvas_width: f64,
    canvas_height: f64,
}

impl Grid {
    /// Create a grid with evenly spaced lines.
    ///
    /// Produces `rows + 1` row lines and `columns + 1` column lines, with
    /// `lines[i] = i * dimension / count`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when either count is zero or either canvas
    /// dimension is not a positive finite number.
    pub fn new(
        canvas_width: f64,
        canvas_height: f64,
        rows: u32,
        columns: u32,
    ) -> Result<Self, LayoutError> {
        if rows == 0 || columns == 0 {
            return Err(LayoutError::InvalidArgument(format!(
                "grid needs at least one row and one column, got {rows}x{columns}"
            )));
        }
        if !is_positive(canvas_width) || !is_positive(canvas_height) {
            return Err(LayoutError::InvalidArgument(format!(
                "canvas dimensions must be positive, got {canvas_width}x{canvas_height}"
            )));
        }

        let grid = Self {
            rows,
            columns,
            row_lines: even_lines(canvas_height, rows),
            column_lines: even_lines(canvas_width, columns),
            canvas_width,
            canvas_height,
        };
        tracing::debug!(rows, columns, canvas_width, canvas_height, "created grid");
        Ok(grid)
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    pub fn row_lines(&self) -> &[f64] {
        &self.row_lines
    }

    pub fn column_lines(&self) -> &[f64] {
        &self.column_lines
    }

    /// Number of cells the grid produces.
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Move one interior grid line.
    ///
    /// The position is clamped to the neighbouring lines, so lines stay
    /// ordered. The outer lines are pinned to the canvas edges. Moving an
    /// outer line, an out-of-range index or a non-finite position is ignored,
    /// matching permissive drag semantics in the UI.
    ///
    /// Returns `true` when the line actually moved.
    pub fn update_line(&mut self, axis: GridAxis, index: usize, position: f64) -> bool {
        if !position.is_finite() {
            return false;
        }
        let lines = match axis {
            GridAxis::Row => &mut self.row_lines,
            GridAxis::Column => &mut self.column_lines,
        };
        if index == 0 || index + 1 >= lines.len() {
            return false;
        }

        let clamped = position.clamp(lines[index - 1], lines[index + 1]);
        if clamped == lines[index] {
            return false;
        }
        lines[index] = clamped;
        true
    }

    /// Emit one region per cell in row-major order.
    ///
    /// Cell ids are sequential starting at zero, and each cell's
    /// `merged_cell_ids` holds only its own id. Calling this again on the same
    /// grid state yields identical output.
    pub fn generate_cells(&self) -> Vec<Region> {
        let mut cells = Vec::with_capacity(self.cell_count());
        let mut id: RegionId = 0;

        for row in 0..self.rows as usize {
            for col in 0..self.columns as usize {
                let x = self.column_lines[col];
                let y = self.row_lines[row];
                let rect = Rect::new(
                    x,
                    y,
                    self.column_lines[col + 1] - x,
                    self.row_lines[row + 1] - y,
                );
                cells.push(Region::cell(id, rect));
                id += 1;
            }
        }

        cells
    }

    /// Check the structural invariants of a grid that did not come from
    /// [`Grid::new`], such as one loaded from a template.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(LayoutError::InvalidArgument(
                "grid needs at least one row and one column".to_string(),
            ));
        }
        if !is_positive(self.canvas_width) || !is_positive(self.canvas_height) {
            return Err(LayoutError::InvalidArgument(
                "canvas dimensions must be positive".to_string(),
            ));
        }
        check_lines("row", &self.row_lines, self.rows, self.canvas_height)?;
        check_lines("column", &self.column_lines, self.columns, self.canvas_width)
    }
}

fn even_lines(extent: f64, count: u32) -> Vec<f64> {
    // The last line is pinned so rounding never pushes it past the canvas
    (0..=count)
        .map(|i| {
            if i == count {
                extent
            } else {
                i as f64 * extent / count as f64
            }
        })
        .collect()
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn check_lines(name: &str, lines: &[f64], count: u32, extent: f64) -> Result<(), LayoutError> {
    if lines.len() != count as usize + 1 {
        return Err(LayoutError::InvalidArgument(format!(
            "expected {} {name} lines, found {}",
            count + 1,
            lines.len()
        )));
    }
    if lines.iter().any(|&p| !(0.0..=extent).contains(&p)) {
        return Err(LayoutError::InvalidArgument(format!(
            "{name} lines must lie within [0, {extent}]"
        )));
    }
    if lines.windows(2).any(|pair| pair[0] > pair[1]) {
        return Err(LayoutError::InvalidArgument(format!(
            "{name} lines must be in ascending order"
        )));
    }
    Ok(())
}
