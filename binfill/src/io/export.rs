use std::time::Instant;

use crate::entities::{Instance, Item, Solution};
use crate::io::ext_repr::{ExtContainer, ExtInstance, ExtItem, ExtPlacement, ExtSolution};

/// Exports a solution out of the library
pub fn export(solution: &Solution, epoch: Instant) -> ExtSolution {
    ExtSolution {
        placements: solution
            .placements()
            .iter()
            .map(|p| ExtPlacement {
                item_id: p.item_id(),
                x: p.x,
                y: p.y,
            })
            .collect(),
        unplaced: solution.unplaced.iter().map(export_item).collect(),
        density: solution.density(),
        run_time_sec: solution.time_stamp.duration_since(epoch).as_secs(),
    }
}

/// Exports an instance out of the library, e.g. one that was generated rather than read from a file
pub fn export_instance(instance: &Instance, name: &str) -> ExtInstance {
    ExtInstance {
        name: name.to_string(),
        container: ExtContainer {
            length: instance.base_container.length,
            width: instance.base_container.width,
        },
        items: instance.items.iter().map(export_item).collect(),
    }
}

pub fn export_item(item: &Item) -> ExtItem {
    ExtItem {
        id: item.id,
        length: item.length,
        width: item.width,
    }
}
