pub mod search;
pub mod wbf_optimizer;
