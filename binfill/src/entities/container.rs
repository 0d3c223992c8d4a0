use anyhow::Result;
use anyhow::ensure;

use crate::entities::{Item, Placement};
use crate::geometry::Rect;
use crate::space::OccupancyGrid;
use crate::util::assertions;

/// Fixed-size rectangular container, filled by appending [`Placement`]s.
/// Placements are never removed or moved once committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container {
    /// Horizontal extent
    pub length: usize,
    /// Vertical extent
    pub width: usize,
    /// All placements, in the order they were committed
    placements: Vec<Placement>,
}

impl Container {
    pub fn try_new(length: usize, width: usize) -> Result<Self> {
        ensure!(
            length > 0 && width > 0,
            "container has an invalid size: {length}x{width}"
        );
        Ok(Container {
            length,
            width,
            placements: vec![],
        })
    }

    /// Places `item` with its bottom-left cell at `(x, y)`.
    /// The caller is responsible for providing a position where the item fits.
    pub fn place(&mut self, item: Item, x: usize, y: usize) -> &Placement {
        let placement = Placement::new(item, x, y);
        assert!(
            self.bbox().contains(&placement.footprint()),
            "placement {} exceeds the container {}x{}",
            placement.footprint(),
            self.length,
            self.width
        );
        debug_assert!(
            self.placements
                .iter()
                .all(|p| !p.footprint().overlaps(&placement.footprint())),
            "placement {} overlaps an existing placement",
            placement.footprint()
        );

        let index = self.placements.len();
        self.placements.push(placement);
        debug_assert!(assertions::placements_are_disjoint(&self.placements));

        &self.placements[index]
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// True if nothing has been placed yet
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Builds a fresh [`OccupancyGrid`] from the current placements.
    pub fn occupancy(&self) -> OccupancyGrid {
        OccupancyGrid::build(self)
    }

    /// The full extent of the container as a rectangle anchored at the origin
    pub fn bbox(&self) -> Rect {
        Rect {
            x: 0,
            y: 0,
            length: self.length,
            width: self.width,
        }
    }

    pub fn area(&self) -> usize {
        self.length * self.width
    }

    /// Sum of the areas of all placed items
    pub fn placed_area(&self) -> usize {
        self.placements.iter().map(|p| p.item.area()).sum()
    }

    /// Ratio of the placed area to the area of the container
    pub fn density(&self) -> f32 {
        self.placed_area() as f32 / self.area() as f32
    }
}
