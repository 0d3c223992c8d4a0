use std::time::Instant;

use once_cell::sync::Lazy;

pub mod config;
pub mod fitness;
pub mod generator;
pub mod io;
pub mod opt;

pub static EPOCH: Lazy<Instant> = Lazy::new(Instant::now);
