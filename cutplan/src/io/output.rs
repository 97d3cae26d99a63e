use crate::config::CutConfig;
use serde::{Deserialize, Serialize};
use sheetpack::io::ext_repr::{ExtInstance, ExtSolution};

/// Contents of a solution file: the request, the solution and the config that produced it
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlanOutput {
    #[serde(flatten)]
    pub request: ExtInstance,
    pub solution: ExtSolution,
    pub config: CutConfig,
}
