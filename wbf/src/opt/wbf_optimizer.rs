use std::time::Instant;

use binfill::entities::{Instance, Placement, Problem, Solution};
use log::{debug, info};
use rand::prelude::SmallRng;
use rand::seq::SliceRandom;
use thousands::Separable;

use crate::config::WBFConfig;
use crate::fitness::Fitness;
use crate::opt::search::search;

/// Wall-Best-Fit (WBF) optimizer.
///
/// Every pass takes a fresh snapshot of the container's occupancy and walks its free regions.
/// For each region the best fitting unplaced item is searched. The first region with a fitting item
/// receives it, after which the snapshot is stale and a new pass starts.
/// The run ends when all items are placed or a pass exhausts its regions without placing anything.
pub struct WBFOptimizer {
    pub instance: Instance,
    pub problem: Problem,
    pub config: WBFConfig,
    pub pass_counter: usize,
    pub region_counter: usize,
}

impl WBFOptimizer {
    /// `rng` is only used to shuffle the unplaced pool, if `config.shuffle_items` is set.
    pub fn new(instance: Instance, config: WBFConfig, mut rng: SmallRng) -> Self {
        let mut problem = Problem::new(instance.clone());
        if config.shuffle_items {
            problem.reorder_unplaced(|pool| pool.shuffle(&mut rng));
            debug!(
                "[WBF] shuffled pool: {:?}",
                problem.unplaced.iter().map(|i| i.id).collect::<Vec<_>>()
            );
        }
        Self {
            instance,
            problem,
            config,
            pass_counter: 0,
            region_counter: 0,
        }
    }

    pub fn solve(&mut self) -> Solution {
        let start = Instant::now();
        let item_limit = self.config.item_limit.unwrap_or(usize::MAX);

        while !self.problem.is_complete() {
            if self.problem.container.placements().len() >= item_limit {
                info!("[WBF] item limit of {item_limit} reached");
                break;
            }
            match self.pass() {
                Some((placement, fitness)) => {
                    info!(
                        "[WBF] placing item {}/{} with id {} at ({}, {}), fitness: {}",
                        self.problem.container.placements().len(),
                        self.instance.total_item_qty(),
                        placement.item_id(),
                        placement.x,
                        placement.y,
                        fitness
                    );
                }
                None => {
                    debug!(
                        "[WBF] no remaining item fits any free region, {} left unplaced",
                        self.problem.unplaced.len()
                    );
                    break;
                }
            }
        }

        let solution = self.problem.save();

        info!(
            "[WBF] optimization finished in {:.3}ms ({} passes, {} regions)",
            start.elapsed().as_secs_f64() * 1000.0,
            self.pass_counter.separate_with_commas(),
            self.region_counter.separate_with_commas()
        );
        info!(
            "[WBF] solution contains {}/{} items with a density of {:.3}%",
            solution.placements().len(),
            self.instance.total_item_qty(),
            solution.density() * 100.0
        );

        solution
    }

    /// Runs a single pass over the current state of the container.
    /// Returns the committed placement, or `None` if no unplaced item fits any free region.
    pub fn pass(&mut self) -> Option<(Placement, Fitness)> {
        self.pass_counter += 1;
        let grid = self.problem.container.occupancy();
        let pool = &self.problem.unplaced;
        let tie_break = self.config.wall_tie_break;

        let mut regions = grid.free_regions();
        let commit = regions.find_map(|region| {
            debug!("[WBF] pass {}: region {region}", self.pass_counter);
            let side = region.preferred_wall(tie_break);
            search(&grid, pool, &region, side)
        });
        self.region_counter += regions.found().len();

        let candidate = commit?;
        let (x, y) = candidate.anchor;
        let placement = self.problem.place_item(candidate.pool_index, x, y);

        Some((placement, candidate.fitness))
    }
}
