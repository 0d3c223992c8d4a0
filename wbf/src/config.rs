use binfill::space::WallSide;
use serde::{Deserialize, Serialize};

/// Configuration for the WBF optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct WBFConfig {
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Shuffle the unplaced pool before packing. Ties between equally fit items are broken by pool order.
    #[serde(default)]
    pub shuffle_items: bool,
    /// Wall to place against when both walls of a region are equally tall
    #[serde(default)]
    pub wall_tie_break: WallSide,
    /// Stops the run after this many placements, for debugging purposes
    #[serde(default)]
    pub item_limit: Option<usize>,
    /// Used to generate a random instance when no input file is given
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Default for WBFConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(0),
            shuffle_items: false,
            wall_tie_break: WallSide::Left,
            item_limit: None,
            generator: GeneratorConfig::default(),
        }
    }
}

/// Bounds for randomly generated instances. All bounds are inclusive.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub container_length: usize,
    pub container_width: usize,
    pub n_items: usize,
    pub item_length: (usize, usize),
    pub item_width: (usize, usize),
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            container_length: 800,
            container_width: 600,
            n_items: 20,
            item_length: (50, 300),
            item_width: (50, 300),
        }
    }
}
