use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Container-loading problem instance
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Set of containers to be loaded
    pub containers: Vec<ExtContainer>,
    /// Set of items to be loaded
    pub items: Vec<ExtItem>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct ExtContainer {
    pub id: u64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct ExtItem {
    pub id: u64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// Number of identical units of this item to be loaded
    pub quantity: u64,
}

/// Container-loading solution
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtSolution {
    pub containers: Vec<ExtContainerResult>,
    /// The time at which the solution was generated, in seconds since the start of the run
    pub run_time_sec: u64,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct ExtContainerResult {
    pub container_id: u64,
    /// One entry per requested algorithm, sorted by algorithm name
    pub runs: Vec<ExtRun>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct ExtRun {
    pub algorithm: String,
    pub complete: bool,
    pub packed_units: u64,
    pub unpacked_units: u64,
    /// Percent of the container volume filled by packed units
    pub pct_container_volume: f64,
    /// Percent of the requested item volume that was packed
    pub pct_item_volume: f64,
    /// Time spent inside the heuristic, in milliseconds
    pub run_time_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uniform_qty: Option<u64>,
    pub placements: Vec<ExtPlacement>,
}

/// A single placed unit: position of its minimum corner and oriented dimensions
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtPlacement {
    pub item_id: u64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct Output {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: Config,
}
