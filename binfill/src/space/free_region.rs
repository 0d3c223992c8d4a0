use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::entities::Item;
use crate::geometry::Rect;

/// Side of a [`FreeRegion`] an item is placed against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallSide {
    #[default]
    Left,
    Right,
}

/// Candidate free rectangle inside a container, together with the height of the walls on both sides.
///
/// A wall is the run of filled cells directly beside the region, measured upward from `rect.y`.
/// If the region touches the container boundary on that side, the wall is the remaining height of the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FreeRegion {
    pub rect: Rect,
    pub left_wall: usize,
    pub right_wall: usize,
}

impl FreeRegion {
    /// The tallest of both walls
    pub fn wall(&self) -> usize {
        usize::max(self.left_wall, self.right_wall)
    }

    /// The side to place against: the taller wall, or `tie_break` if both are equally tall.
    pub fn preferred_wall(&self, tie_break: WallSide) -> WallSide {
        match self.left_wall.cmp(&self.right_wall) {
            std::cmp::Ordering::Greater => WallSide::Left,
            std::cmp::Ordering::Less => WallSide::Right,
            std::cmp::Ordering::Equal => tie_break,
        }
    }

    /// Position of `item` placed flush against `side` of the region, on the region's bottom row.
    pub fn anchor_for(&self, item: &Item, side: WallSide) -> (usize, usize) {
        debug_assert!(item.length <= self.rect.length);
        match side {
            WallSide::Left => (self.rect.x, self.rect.y),
            WallSide::Right => (self.rect.x_max() - item.length, self.rect.y),
        }
    }

    /// True if the rectangle of `other` lies fully inside the rectangle of `self`.
    pub fn contains(&self, other: &FreeRegion) -> bool {
        self.rect.contains(&other.rect)
    }
}

impl Display for FreeRegion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} walls: ({}, {})",
            self.rect, self.left_wall, self.right_wall
        )
    }
}
