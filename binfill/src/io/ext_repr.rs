use serde::{Deserialize, Serialize};

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtItem {
    /// Unique identifier of the item
    pub id: u64,
    pub length: usize,
    pub width: usize,
}

/// External representation of a [`Container`](crate::entities::Container).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtContainer {
    pub length: usize,
    pub width: usize,
}

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    pub container: ExtContainer,
    /// Items in pool order
    pub items: Vec<ExtItem>,
}

/// External representation of a [`Placement`](crate::entities::Placement).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtPlacement {
    pub item_id: u64,
    pub x: usize,
    pub y: usize,
}

/// External representation of a [`Solution`](crate::entities::Solution).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Placements in the order they were committed
    pub placements: Vec<ExtPlacement>,
    /// Items left unplaced, in pool order
    pub unplaced: Vec<ExtItem>,
    /// Fraction of the container covered by placed items
    pub density: f32,
    /// Seconds between the epoch and the creation of the solution
    pub run_time_sec: u64,
}
