use binfill::entities::Item;
use binfill::geometry::Rect;
use binfill::space::{FreeRegion, OccupancyGrid, WallSide};
use log::trace;

use crate::fitness::Fitness;

/// An item of the unplaced pool matched to a free region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Index of the item in the unplaced pool
    pub pool_index: usize,
    pub fitness: Fitness,
    /// Position of the item's bottom-left cell
    pub anchor: (usize, usize),
}

/// Searches the pool for the item that best fits `region`, placed against `side`.
/// Ties are broken by pool order: the first item reaching the highest fitness wins.
///
/// The greedy region is only guaranteed to be free along its bottom row and left column,
/// so an item whose footprint covers filled cells at its anchor is treated as not fitting.
pub fn search(
    grid: &OccupancyGrid,
    pool: &[Item],
    region: &FreeRegion,
    side: WallSide,
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for (pool_index, item) in pool.iter().enumerate() {
        let fitness = Fitness::evaluate(item, region);
        let improves = match &best {
            Some(b) => fitness > b.fitness,
            None => fitness.fits(),
        };
        if !improves {
            continue;
        }

        let anchor = region.anchor_for(item, side);
        let footprint = Rect {
            x: anchor.0,
            y: anchor.1,
            length: item.length,
            width: item.width,
        };
        if !grid.is_free(&footprint) {
            trace!("item {} would cover filled cells at {footprint}", item.id);
            continue;
        }

        best = Some(Candidate {
            pool_index,
            fitness,
            anchor,
        });
        if fitness == Fitness::Perfect {
            break;
        }
    }
    best
}
