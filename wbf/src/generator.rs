use anyhow::{Result, ensure};
use binfill::entities::{Container, Instance, Item};
use log::debug;
use rand::Rng;

use crate::config::GeneratorConfig;

/// Generates random instances: a fixed container and items with uniformly sampled dimensions.
pub struct InstanceGenerator {
    pub config: GeneratorConfig,
}

impl InstanceGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let GeneratorConfig {
            item_length: (l_min, l_max),
            item_width: (w_min, w_max),
            ..
        } = config;
        ensure!(
            l_min > 0 && l_min <= l_max,
            "invalid item length bounds: ({l_min}, {l_max})"
        );
        ensure!(
            w_min > 0 && w_min <= w_max,
            "invalid item width bounds: ({w_min}, {w_max})"
        );
        Ok(Self { config })
    }

    /// Samples a new instance. Item ids are assigned consecutively from 0.
    pub fn generate(&self, rng: &mut impl Rng) -> Result<Instance> {
        let c = &self.config;
        let container = Container::try_new(c.container_length, c.container_width)?;
        let items = (0..c.n_items as u64)
            .map(|id| {
                let length = rng.random_range(c.item_length.0..=c.item_length.1);
                let width = rng.random_range(c.item_width.0..=c.item_width.1);
                Item::try_new(id, length, width)
            })
            .collect::<Result<Vec<Item>>>()?;

        debug!(
            "[GEN] generated {} items for a {}x{} container",
            items.len(),
            container.length,
            container.width
        );
        Ok(Instance::new(container, items))
    }
}
