//! Occupancy grid.
//!
//! Cells are stored row-major in a flat vector. Coordinates are `(x, y)` with
//! `x` growing to the right and `y` growing downward; both are signed at the
//! API so candidate positions left of or above the grid can be tested.

use crate::config::RowClearPolicy;
use crate::shape::Shape;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

/// Which lines one scan removed. Indices are in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClearReport {
    pub rows: Vec<usize>,
    pub columns: Vec<usize>,
}

impl ClearReport {
    pub fn lines(&self) -> usize {
        self.rows.len() + self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines() == 0
    }

    /// A column clear is what turns a clear into a cross clear.
    pub fn crosses(&self) -> bool {
        !self.columns.is_empty()
    }
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Size a grid to `fill` of the viewport, one cell per `cell_size` pixels.
    pub fn for_viewport(view_w: f32, view_h: f32, fill: f32, cell_size: f32) -> Self {
        let cols = (view_w * fill / cell_size).floor().max(0.0) as usize;
        let rows = (view_h * fill / cell_size).floor().max(0.0) as usize;
        Self::new(cols, rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// `None` when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<bool> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, occupied: bool) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = occupied;
                true
            }
            None => false,
        }
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(true)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks(0) panics, and a zero-width grid has no visible rows anyway.
        self.cells.chunks(self.width.max(1))
    }

    /// Whether `shape` with its top-left at `(x, y)` stays inside the grid
    /// and touches no occupied cell.
    pub fn is_valid_move(&self, x: i32, y: i32, shape: &Shape) -> bool {
        shape
            .occupied()
            .all(|(dx, dy)| self.get(x + dx, y + dy) == Some(false))
    }

    /// Write every occupied cell of `shape` at `(x, y)` into the grid.
    /// Cells falling outside are skipped. Returns how many were written.
    pub fn lock(&mut self, x: i32, y: i32, shape: &Shape) -> usize {
        let mut written = 0;
        for (dx, dy) in shape.occupied() {
            if self.set(x + dx, y + dy, true) {
                written += 1;
            }
        }
        written
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height || self.width == 0 {
            return false;
        }
        let start = y * self.width;
        self.cells[start..start + self.width].iter().all(|&c| c)
    }

    pub fn is_column_full(&self, x: usize) -> bool {
        if x >= self.width || self.height == 0 {
            return false;
        }
        (0..self.height).all(|y| self.cells[y * self.width + x])
    }

    /// Clear every full row and full column.
    ///
    /// Both kinds are detected on the grid as it stands before anything is
    /// cleared, so a full row and a full column crossing each other are both
    /// reported. Columns are always zeroed in place; rows follow `policy`.
    pub fn clear_lines(&mut self, policy: RowClearPolicy) -> ClearReport {
        let rows: Vec<usize> = (0..self.height).filter(|&y| self.is_row_full(y)).collect();
        let columns: Vec<usize> = (0..self.width).filter(|&x| self.is_column_full(x)).collect();

        for &x in &columns {
            for y in 0..self.height {
                self.cells[y * self.width + x] = false;
            }
        }

        match policy {
            RowClearPolicy::ZeroInPlace => {
                for &y in &rows {
                    let start = y * self.width;
                    self.cells[start..start + self.width].fill(false);
                }
            }
            RowClearPolicy::ShiftDown => self.collapse_rows(&rows),
        }

        ClearReport { rows, columns }
    }

    /// Drop `cleared` rows and let everything above fall into the gap,
    /// refilling the top with empty rows.
    fn collapse_rows(&mut self, cleared: &[usize]) {
        if cleared.is_empty() {
            return;
        }
        let width = self.width;
        let mut write_y = self.height;

        for read_y in (0..self.height).rev() {
            if cleared.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(false);
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }
}
