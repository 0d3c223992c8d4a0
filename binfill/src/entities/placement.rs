use crate::entities::Item;
use crate::geometry::Rect;

/// An [`Item`] bound to a fixed position inside a [`Container`](crate::entities::Container).
/// `x` is measured along the length of the container, `y` along its width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub item: Item,
    pub x: usize,
    pub y: usize,
}

impl Placement {
    pub fn new(item: Item, x: usize, y: usize) -> Self {
        Placement { item, x, y }
    }

    pub fn item_id(&self) -> u64 {
        self.item.id
    }

    /// The cells covered by the placed item
    pub fn footprint(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            length: self.item.length,
            width: self.item.width,
        }
    }
}
