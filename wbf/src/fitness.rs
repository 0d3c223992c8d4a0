use std::fmt::{Display, Formatter};

use binfill::entities::Item;
use binfill::space::FreeRegion;

/// How well an [`Item`] matches a [`FreeRegion`].
/// Variants are declared from worst to best, so the derived ordering ranks them.
///
/// The region's wall is the taller of its two walls, the item will be placed against it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Fitness {
    /// Item is too long for the region, or too wide for it
    NoFit,
    /// Fits, but matches neither the region's length nor the wall
    Loose,
    /// Item is as wide as the wall, but shorter than the region
    WallFit,
    /// Item is as long as the region, but lower than the wall
    LengthFitShort,
    /// Item is as long as the region and taller than the wall, the region can hold it
    LengthFitTall,
    /// Item is as long as the region and as wide as the wall
    Perfect,
}

impl Fitness {
    pub fn evaluate(item: &Item, region: &FreeRegion) -> Self {
        let wall = region.wall();
        let (r_length, r_width) = (region.rect.length, region.rect.width);

        if r_length == item.length && wall == item.width {
            Fitness::Perfect
        } else if r_length == item.length && wall < item.width && r_width >= item.width {
            Fitness::LengthFitTall
        } else if r_length == item.length && wall > item.width {
            Fitness::LengthFitShort
        } else if r_length > item.length && wall == item.width {
            Fitness::WallFit
        } else if r_length > item.length && r_width >= item.width {
            Fitness::Loose
        } else {
            Fitness::NoFit
        }
    }

    /// Ordinal score in `[-1, 4]`
    pub fn score(&self) -> i8 {
        match self {
            Fitness::NoFit => -1,
            Fitness::Loose => 0,
            Fitness::WallFit => 1,
            Fitness::LengthFitShort => 2,
            Fitness::LengthFitTall => 3,
            Fitness::Perfect => 4,
        }
    }

    pub fn fits(&self) -> bool {
        *self != Fitness::NoFit
    }
}

impl Display for Fitness {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} ({})", self, self.score())
    }
}
