use anyhow::Result;
use anyhow::ensure;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Axis-aligned rectangle on the integer grid.
/// Covers the cells `[x, x + length) × [y, y + width)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    /// Horizontal extent
    pub length: usize,
    /// Vertical extent
    pub width: usize,
}

impl Rect {
    pub fn try_new(x: usize, y: usize, length: usize, width: usize) -> Result<Self> {
        ensure!(
            length > 0 && width > 0,
            "invalid rectangle, length: {length}, width: {width}"
        );
        Ok(Rect {
            x,
            y,
            length,
            width,
        })
    }

    /// Exclusive upper bound in the horizontal direction
    pub fn x_max(&self) -> usize {
        self.x + self.length
    }

    /// Exclusive upper bound in the vertical direction
    pub fn y_max(&self) -> usize {
        self.y + self.width
    }

    pub fn area(&self) -> usize {
        self.length * self.width
    }

    /// True if `other` lies completely within `self`, boundaries included.
    pub fn contains(&self, other: &Rect) -> bool {
        self.x <= other.x
            && other.x_max() <= self.x_max()
            && self.y <= other.y
            && other.y_max() <= self.y_max()
    }

    /// True if at least one cell is covered by both rectangles.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x_max()
            && other.x < self.x_max()
            && self.y < other.y_max()
            && other.y < self.y_max()
    }

    /// All cells covered by the rectangle, row by row
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let (x, x_max) = (self.x, self.x_max());
        (self.y..self.y_max()).flat_map(move |y| (x..x_max).map(move |x| (x, y)))
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[({}, {}), {}x{}]", self.x, self.y, self.length, self.width)
    }
}
