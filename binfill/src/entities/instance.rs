use crate::entities::{Container, Item};
use crate::util::assertions;

/// Instance of the problem: a set of items to be packed into a single, initially empty container.
#[derive(Debug, Clone)]
pub struct Instance {
    /// The empty container to fill
    pub base_container: Container,
    /// The items to pack, in the order they enter the unplaced pool
    pub items: Vec<Item>,
}

impl Instance {
    pub fn new(base_container: Container, items: Vec<Item>) -> Self {
        assert!(
            base_container.is_empty(),
            "the base container of an instance should be empty"
        );
        assert!(
            assertions::item_ids_unique(&items),
            "all items should have unique ids"
        );

        Self {
            base_container,
            items,
        }
    }

    pub fn item(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn total_item_qty(&self) -> usize {
        self.items.len()
    }

    pub fn item_area(&self) -> usize {
        self.items.iter().map(|item| item.area()).sum()
    }
}
