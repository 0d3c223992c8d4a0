mod finder;
mod free_region;
mod occupancy;

#[doc(inline)]
pub use finder::FreeRegions;

#[doc(inline)]
pub use finder::find_next;

#[doc(inline)]
pub use free_region::FreeRegion;

#[doc(inline)]
pub use free_region::WallSide;

#[doc(inline)]
pub use occupancy::OccupancyGrid;
