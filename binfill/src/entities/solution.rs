use std::time::Instant;

use crate::entities::{Container, Item, Placement};

/// Snapshot of a [`Problem`](crate::entities::Problem) at a specific moment. Can be used to restore to a previous state.
#[derive(Debug, Clone)]
pub struct Solution {
    /// The container with all committed placements
    pub container: Container,
    /// Items that were left unplaced, in pool order
    pub unplaced: Vec<Item>,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl Solution {
    pub fn placements(&self) -> &[Placement] {
        self.container.placements()
    }

    pub fn container_area(&self) -> usize {
        self.container.area()
    }

    pub fn placed_area(&self) -> usize {
        self.container.placed_area()
    }

    pub fn unplaced_area(&self) -> usize {
        self.unplaced.iter().map(|item| item.area()).sum()
    }

    /// Fraction of the container covered by placed items
    pub fn density(&self) -> f32 {
        self.container.density()
    }
}
