use itertools::Itertools;
use log::error;

use crate::entities::{Container, Item, Placement, Problem, Solution};
use crate::space::{FreeRegion, OccupancyGrid};
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and tests

pub fn item_ids_unique(items: &[Item]) -> bool {
    items.iter().map(|item| item.id).all_unique()
}

pub fn placements_are_disjoint(placements: &[Placement]) -> bool {
    for (p1, p2) in placements.iter().tuple_combinations() {
        if p1.footprint().overlaps(&p2.footprint()) {
            error!(
                "placements of items {} {} and {} {} overlap",
                p1.item_id(),
                p1.footprint(),
                p2.item_id(),
                p2.footprint()
            );
            return false;
        }
    }
    true
}

pub fn placements_within_container(container: &Container) -> bool {
    let bbox = container.bbox();
    container
        .placements()
        .iter()
        .all(|p| bbox.contains(&p.footprint()))
}

pub fn grid_matches_container(grid: &OccupancyGrid, container: &Container) -> bool {
    if grid.length() != container.length || grid.width() != container.width {
        return false;
    }
    let all_covered = container
        .placements()
        .iter()
        .flat_map(|p| p.footprint().cells())
        .all(|(x, y)| grid.is_filled(x, y));

    // placements are disjoint, so every filled cell is accounted for exactly once
    let n_filled = grid.length() * grid.width() - grid.n_free_cells();

    all_covered && n_filled == container.placed_area()
}

/// The anchor cell of a region is always free, and so are its full bottom row and left column.
pub fn region_is_consistent(grid: &OccupancyGrid, region: &FreeRegion) -> bool {
    let r = &region.rect;
    if r.x_max() > grid.length() || r.y_max() > grid.width() {
        return false;
    }
    let row_free = (r.x..r.x_max()).all(|x| !grid.is_filled(x, r.y));
    let col_free = (r.y..r.y_max()).all(|y| !grid.is_filled(r.x, y));
    let open_height = grid.width() - r.y;
    let walls_bounded = region.left_wall <= open_height && region.right_wall <= open_height;

    row_free && col_free && walls_bounded
}

pub fn problem_matches_solution(problem: &Problem, solution: &Solution) -> bool {
    let Solution {
        container,
        unplaced,
        time_stamp: _,
    } = solution;

    assert_eq!(&problem.container, container);
    assert_eq!(&problem.unplaced, unplaced);
    assert_eq!(
        container.placements().len() + unplaced.len(),
        problem.instance.total_item_qty()
    );

    true
}
