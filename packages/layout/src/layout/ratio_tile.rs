//! `RatioTile` layout - a grid whose cells approach a target aspect ratio.
//!
//! For `N` clients every grid with `rows` in `1..=max(1, N / 2)` and
//! `cols = ceil(N / rows)` is a candidate, once filled row by row and, when the
//! grid is not square, once more transposed and filled column by column. The
//! first candidate whose cell aspect ratio (`(W / cols) / (H / rows)`) is
//! closest to the target wins.
//!
//! ```text
//! row-major (2x4, 7 clients)      column-major (4x3, 10 clients)
//! ┌────┬────┬────┬────┐           ┌──────┬──────┬──────┐
//! │ 1  │ 2  │ 3  │ 4  │           │  1   │  5   │      │
//! ├────┴─┬──┴───┬┴────┤           ├──────┼──────┤  9   │
//! │  5   │  6   │  7  │           │  2   │  6   │      │
//! └──────┴──────┴─────┘           ├──────┼──────┼──────┤
//!                                 │  3   │  7   │      │
//!                                 ├──────┼──────┤  10  │
//!                                 │  4   │  8   │      │
//!                                 └──────┴──────┴──────┘
//! ```
//!
//! The last row (or column) is spread across the full width (or height) when
//! it holds fewer clients than the others.

use tracing::trace;

use super::sequence::{ClientSequence, Direction};
use super::{Layout, LayoutResult, snapshot};
use crate::client::{Client, ClientId};
use crate::command::LayoutCommand;
use crate::error::LayoutError;
use crate::geometry::{Rect, offset};
use crate::info::{LayoutDetails, LayoutInfo};

/// Default target aspect ratio (width / height) of a cell.
pub const GOLDEN_RATIO: f64 = 1.618;

/// Order in which a grid is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fill {
    /// Left to right, then top to bottom.
    RowMajor,
    /// Top to bottom, then left to right.
    ColumnMajor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Grid {
    rows: u32,
    cols: u32,
    fill: Fill,
}

impl Grid {
    fn deviation(self, width: u32, height: u32, ratio: f64) -> f64 {
        let cell_width = f64::from(width) / f64::from(self.cols);
        let cell_height = f64::from(height) / f64::from(self.rows);
        (cell_width / cell_height - ratio).abs()
    }

    /// Returns `true` if `count` clients reach the last row (or column) of the grid.
    ///
    /// Grids with an empty last band would leave part of the region uncovered.
    const fn fits(self, count: u32) -> bool {
        let (major, minor) = match self.fill {
            Fill::RowMajor => (self.rows, self.cols),
            Fill::ColumnMajor => (self.cols, self.rows),
        };
        (major - 1) * minor < count
    }
}

/// Picks the grid whose cells come closest to `ratio`. Earlier candidates win ties.
///
/// Only grids whose last band holds at least one client are considered.
fn choose_grid(count: u32, width: u32, height: u32, ratio: f64) -> Grid {
    let mut best = Grid { rows: 1, cols: count.max(1), fill: Fill::RowMajor };
    let mut best_deviation = f64::INFINITY;
    for rows in 1..=(count / 2).max(1) {
        let cols = count.div_ceil(rows);
        let mut candidates = [Some(Grid { rows, cols, fill: Fill::RowMajor }), None];
        if rows != cols {
            candidates[1] = Some(Grid { rows: cols, cols: rows, fill: Fill::ColumnMajor });
        }
        for grid in candidates.into_iter().flatten().filter(|grid| grid.fits(count)) {
            let deviation = grid.deviation(width, height, ratio);
            if deviation < best_deviation {
                best = grid;
                best_deviation = deviation;
            }
        }
    }
    best
}

/// Computes the cells for `count` clients, in fill order.
fn grid_cells(count: usize, screen: &Rect, ratio: f64) -> Vec<Rect> {
    let Ok(count) = u32::try_from(count) else {
        return Vec::new();
    };
    if count == 0 {
        return Vec::new();
    }
    let Rect { width, height, .. } = *screen;
    let grid = choose_grid(count, width, height, ratio);
    trace!(rows = grid.rows, cols = grid.cols, fill = ?grid.fill, "layout: ratiotile grid");

    let cell_width = width / grid.cols;
    let cell_height = height / grid.rows;
    (0..count)
        .map(|index| match grid.fill {
            Fill::RowMajor => {
                let (row, col) = (index / grid.cols, index % grid.cols);
                let remaining = (count - row * grid.cols).min(grid.cols);
                let row_width = width / remaining;
                let x = row_width * col;
                let last = col == grid.cols - 1 || index == count - 1;
                let w = if last { width - x } else { row_width };
                Rect::new(offset(screen.x, x), offset(screen.y, cell_height * row), w, cell_height)
            }
            Fill::ColumnMajor => {
                let (col, row) = (index / grid.rows, index % grid.rows);
                let remaining = (count - col * grid.rows).min(grid.rows);
                let col_height = height / remaining;
                let y = col_height * row;
                let last = row == grid.rows - 1 || index == count - 1;
                let h = if last { height - y } else { col_height };
                Rect::new(offset(screen.x, cell_width * col), offset(screen.y, y), cell_width, h)
            }
        })
        .collect()
}

/// `RatioTile` layout state.
#[derive(Debug, Clone)]
pub struct RatioTile {
    clients: ClientSequence,
    ratio: f64,
}

impl Default for RatioTile {
    fn default() -> Self { Self { clients: ClientSequence::new(), ratio: GOLDEN_RATIO } }
}

impl RatioTile {
    /// Creates a layout aiming for cells of the given aspect ratio.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidRatio`] unless `ratio` is finite and positive.
    pub fn new(ratio: f64) -> Result<Self, LayoutError> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(LayoutError::InvalidRatio(ratio));
        }
        Ok(Self { clients: ClientSequence::new(), ratio })
    }

    /// Target aspect ratio.
    #[must_use]
    pub const fn ratio(&self) -> f64 { self.ratio }

    /// Cells for the held clients, in sequence order.
    #[must_use]
    pub fn cells(&self, screen: &Rect) -> Vec<Rect> {
        grid_cells(self.clients.len(), screen, self.ratio)
    }
}

impl Layout for RatioTile {
    fn name(&self) -> &'static str { "ratiotile" }

    fn add(&mut self, client: Client) {
        trace!(client = %client.id(), "layout: ratiotile add");
        self.clients.push_back(client);
    }

    fn remove(&mut self, id: ClientId) -> Option<Client> {
        let removed = self.clients.remove(id)?;
        trace!(client = %id, "layout: ratiotile remove");
        Some(removed)
    }

    fn focus(&mut self, id: ClientId) -> bool { self.clients.focus(id) }

    fn focused(&self) -> Option<ClientId> { self.clients.current_id() }

    fn clients(&self) -> Vec<&Client> { self.clients.iter().collect() }

    fn contains(&self, id: ClientId) -> bool { self.clients.contains(id) }

    fn len(&self) -> usize { self.clients.len() }

    fn arrange(&self, screen: &Rect) -> LayoutResult {
        self.clients.ids().zip(self.cells(screen)).collect()
    }

    fn command(&mut self, command: LayoutCommand) -> bool {
        match command {
            LayoutCommand::Next => self.clients.step(Direction::Forward),
            LayoutCommand::Previous => self.clients.step(Direction::Backward),
            _ => return false,
        }
        true
    }

    fn info(&self, screen: &Rect) -> LayoutInfo {
        snapshot(self, LayoutDetails::RatioTile {
            ratio: self.ratio,
            layout_info: self.cells(screen),
        })
    }
}
