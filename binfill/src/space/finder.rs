use log::trace;

use crate::geometry::Rect;
use crate::space::{FreeRegion, OccupancyGrid};

/// Finds the next free region in `grid`, given the regions already found during this pass.
///
/// The scan runs in row-major order (x fastest) and resumes at the cell right after the anchor of the last
/// region in `prior`. From the first free cell, a region is grown greedily: its length is the free run along
/// the anchor's row and its width is the free run along the anchor's column, each computed independently.
/// Candidates fully contained in any region of `prior` are skipped.
///
/// Returns `None` once the scan passes the last cell of the grid.
pub fn find_next(grid: &OccupancyGrid, prior: &[FreeRegion]) -> Option<FreeRegion> {
    if grid.length() == 0 || grid.width() == 0 {
        return None;
    }

    let mut cursor = match prior.last() {
        None => Some((0, 0)),
        Some(last) => grid.next_cell(last.rect.x, last.rect.y),
    };

    while let Some((x, y)) = cursor {
        if !grid.is_filled(x, y) {
            let rect = Rect {
                x,
                y,
                length: grid.free_run_right(x, y),
                width: grid.free_run_up(x, y),
            };
            if prior.iter().any(|r| r.rect.contains(&rect)) {
                trace!("skipping {rect}, contained in an earlier region");
            } else {
                return Some(with_walls(grid, rect));
            }
        }
        cursor = grid.next_cell(x, y);
    }
    None
}

fn with_walls(grid: &OccupancyGrid, rect: Rect) -> FreeRegion {
    let open_height = grid.width() - rect.y;
    let left_wall = match rect.x {
        0 => open_height,
        x => grid.filled_run_up(x - 1, rect.y),
    };
    let right_wall = match rect.x_max() == grid.length() {
        true => open_height,
        false => grid.filled_run_up(rect.x_max(), rect.y),
    };

    FreeRegion {
        rect,
        left_wall,
        right_wall,
    }
}

/// Iterator over the successive free regions of a single grid snapshot.
/// Keeps track of all regions yielded so far, so the scan never reports a region contained in an earlier one.
pub struct FreeRegions<'a> {
    grid: &'a OccupancyGrid,
    found: Vec<FreeRegion>,
}

impl<'a> FreeRegions<'a> {
    pub fn new(grid: &'a OccupancyGrid) -> Self {
        FreeRegions {
            grid,
            found: vec![],
        }
    }

    /// All regions yielded so far, in discovery order
    pub fn found(&self) -> &[FreeRegion] {
        &self.found
    }
}

impl Iterator for FreeRegions<'_> {
    type Item = FreeRegion;

    fn next(&mut self) -> Option<FreeRegion> {
        let region = find_next(self.grid, &self.found)?;
        self.found.push(region);
        Some(region)
    }
}

impl OccupancyGrid {
    /// Iterates over the free regions of this grid, see [`find_next`].
    pub fn free_regions(&self) -> FreeRegions<'_> {
        FreeRegions::new(self)
    }
}
