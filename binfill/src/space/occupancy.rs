use ndarray::{Array2, s};

use crate::entities::Container;
use crate::geometry::Rect;

/// Boolean coverage map of a [`Container`], derived from its placements.
/// A cell `(x, y)` is filled iff some placement covers it.
///
/// The grid is a snapshot: it does not follow later placements and has to be rebuilt after every commit.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    /// Indexed as `[[y, x]]`, shape `(width, length)`
    filled: Array2<bool>,
}

impl OccupancyGrid {
    pub fn build(container: &Container) -> Self {
        let mut filled = Array2::from_elem((container.width, container.length), false);
        for placement in container.placements() {
            let fp = placement.footprint();
            filled
                .slice_mut(s![fp.y..fp.y_max(), fp.x..fp.x_max()])
                .fill(true);
        }
        OccupancyGrid { filled }
    }

    /// Horizontal extent of the grid
    pub fn length(&self) -> usize {
        self.filled.ncols()
    }

    /// Vertical extent of the grid
    pub fn width(&self) -> usize {
        self.filled.nrows()
    }

    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        self.filled[[y, x]]
    }

    /// True if `rect` lies inside the grid and none of its cells are filled.
    pub fn is_free(&self, rect: &Rect) -> bool {
        rect.x_max() <= self.length()
            && rect.y_max() <= self.width()
            && self
                .filled
                .slice(s![rect.y..rect.y_max(), rect.x..rect.x_max()])
                .iter()
                .all(|f| !f)
    }

    pub fn n_free_cells(&self) -> usize {
        self.filled.iter().filter(|f| !**f).count()
    }

    /// The cell following `(x, y)` in row-major order (x fastest), `None` past the last cell.
    pub fn next_cell(&self, x: usize, y: usize) -> Option<(usize, usize)> {
        match (x + 1 < self.length(), y + 1 < self.width()) {
            (true, _) => Some((x + 1, y)),
            (false, true) => Some((0, y + 1)),
            (false, false) => None,
        }
    }

    /// Number of consecutive free cells in row `y`, starting at `x` and moving right.
    pub fn free_run_right(&self, x: usize, y: usize) -> usize {
        (x..self.length())
            .take_while(|&col| !self.is_filled(col, y))
            .count()
    }

    /// Number of consecutive free cells in column `x`, starting at `y` and moving up.
    pub fn free_run_up(&self, x: usize, y: usize) -> usize {
        (y..self.width())
            .take_while(|&row| !self.is_filled(x, row))
            .count()
    }

    /// Number of consecutive filled cells in column `x`, starting at `y` and moving up.
    pub fn filled_run_up(&self, x: usize, y: usize) -> usize {
        (y..self.width())
            .take_while(|&row| self.is_filled(x, row))
            .count()
    }
}
