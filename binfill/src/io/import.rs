use anyhow::{Context, Result, ensure};
use itertools::Itertools;

use crate::entities::{Container, Instance, Item};
use crate::io::ext_repr::{ExtInstance, ExtItem};

/// Imports an instance into the library.
/// Fails if the container or any item has a zero extent, or if item ids are not unique.
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    let ext_container = &ext_instance.container;
    let container = Container::try_new(ext_container.length, ext_container.width)
        .with_context(|| format!("invalid container in instance {}", ext_instance.name))?;

    let items = ext_instance
        .items
        .iter()
        .map(import_item)
        .collect::<Result<Vec<Item>>>()?;

    let duplicates = items.iter().map(|item| item.id).duplicates().collect_vec();
    ensure!(
        duplicates.is_empty(),
        "all items should have unique ids, duplicates: {duplicates:?}"
    );

    Ok(Instance::new(container, items))
}

pub fn import_item(ext_item: &ExtItem) -> Result<Item> {
    Item::try_new(ext_item.id, ext_item.length, ext_item.width)
}
