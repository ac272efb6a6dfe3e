use serde::{Deserialize, Serialize};

use stowage::algos::Algorithm;

/// Configuration for a packing run
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Integer ids of the algorithms to run, see [`Algorithm`]
    pub algorithms: Vec<i32>,
    /// Run the capacity search (`pack_total`) instead of a plain pack.
    /// Requires a single container and a single algorithm.
    #[serde(default)]
    pub capacity_search: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ALL.iter().map(|a| a.id()).collect(),
            capacity_search: false,
        }
    }
}
