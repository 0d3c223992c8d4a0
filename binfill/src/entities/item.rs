use anyhow::Result;
use anyhow::ensure;

/// Rectangular item to be placed in a [`Container`](crate::entities::Container).
/// Items are never rotated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    /// Identifier supplied by the caller, unique within an [`Instance`](crate::entities::Instance)
    pub id: u64,
    /// Horizontal extent
    pub length: usize,
    /// Vertical extent
    pub width: usize,
}

impl Item {
    pub fn try_new(id: u64, length: usize, width: usize) -> Result<Self> {
        ensure!(
            length > 0 && width > 0,
            "item {id} has an invalid size: {length}x{width}"
        );
        Ok(Item { id, length, width })
    }

    pub fn area(&self) -> usize {
        self.length * self.width
    }
}
