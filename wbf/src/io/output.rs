use binfill::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

use crate::config::WBFConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct WBFOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: WBFConfig,
}
