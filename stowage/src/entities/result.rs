use std::time::Duration;

use crate::algos::Algorithm;
use crate::entities::PlacementOutcome;

/// Outcome and utilization metrics of one heuristic run on one container.
#[derive(Clone, Debug)]
pub struct AlgorithmRunResult {
    pub algorithm: Algorithm,
    pub outcome: PlacementOutcome,
    /// Wall-clock time spent inside the heuristic
    pub elapsed: Duration,
    /// Percent of the container volume filled by packed units, 2 decimals
    pub pct_container_volume: f64,
    /// Percent of the total requested item volume that was packed, 2 decimals.
    /// 0.00 when no volume was requested at all.
    pub pct_item_volume: f64,
    /// Maximum uniform quantity discovered by the capacity search, if one ran
    pub max_uniform_qty: Option<u64>,
}

/// All requested algorithm runs for a single container,
/// sorted ascending by algorithm name.
#[derive(Clone, Debug)]
pub struct ContainerResult {
    pub container_id: usize,
    pub runs: Vec<AlgorithmRunResult>,
}

impl ContainerResult {
    /// The run for a specific algorithm, if it was requested.
    pub fn run(&self, algorithm: Algorithm) -> Option<&AlgorithmRunResult> {
        self.runs.iter().find(|r| r.algorithm == algorithm)
    }
}

/// One [`ContainerResult`] per input container.
///
/// Container order reflects task completion and is not guaranteed;
/// consumers needing a deterministic order should call
/// [`FleetResult::sort_by_container_id`].
#[derive(Clone, Debug)]
pub struct FleetResult {
    pub containers: Vec<ContainerResult>,
}

impl FleetResult {
    /// The result for a specific container, if it was part of the fleet.
    pub fn container(&self, container_id: usize) -> Option<&ContainerResult> {
        self.containers.iter().find(|c| c.container_id == container_id)
    }

    pub fn sort_by_container_id(&mut self) {
        self.containers.sort_by_key(|c| c.container_id);
    }
}
