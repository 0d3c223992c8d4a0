use std::time::Instant;

use crate::entities::{Container, Instance, Item, Placement, Solution};
use crate::util::assertions::problem_matches_solution;

/// Modifiable counterpart of [`Instance`]: items are moved from the unplaced pool into the container.
#[derive(Clone, Debug)]
pub struct Problem {
    pub instance: Instance,
    pub container: Container,
    /// Items not yet placed, in pool order
    pub unplaced: Vec<Item>,
}

impl Problem {
    pub fn new(instance: Instance) -> Self {
        let container = instance.base_container.clone();
        let unplaced = instance.items.clone();
        Self {
            instance,
            container,
            unplaced,
        }
    }

    /// Moves the item at `pool_index` of the unplaced pool into the container at `(x, y)`.
    /// The relative order of the remaining unplaced items is preserved.
    pub fn place_item(&mut self, pool_index: usize, x: usize, y: usize) -> Placement {
        let n_unplaced = self.unplaced.len();
        let item = self.unplaced.remove(pool_index);
        let placement = *self.container.place(item, x, y);

        debug_assert!(self.unplaced.len() + 1 == n_unplaced);
        debug_assert!(
            self.unplaced.len() + self.container.placements().len()
                == self.instance.total_item_qty()
        );

        placement
    }

    /// Reorders the unplaced pool.
    pub fn reorder_unplaced(&mut self, reorder: impl FnOnce(&mut [Item])) {
        reorder(&mut self.unplaced);
    }

    /// Creates a snapshot of the current state of the problem as a [`Solution`].
    pub fn save(&self) -> Solution {
        let solution = Solution {
            container: self.container.clone(),
            unplaced: self.unplaced.clone(),
            time_stamp: Instant::now(),
        };

        debug_assert!(problem_matches_solution(self, &solution));

        solution
    }

    /// Restores the state of the problem to the given [`Solution`].
    pub fn restore(&mut self, solution: &Solution) {
        self.container = solution.container.clone();
        self.unplaced = solution.unplaced.clone();

        debug_assert!(problem_matches_solution(self, solution));
    }

    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    pub fn density(&self) -> f32 {
        self.container.density()
    }
}
