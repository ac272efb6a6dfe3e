use std::sync::Mutex;

use anyhow::Result;
use log::debug;

use crate::algos::Algorithm;
use crate::entities::{Container, ContainerResult, FleetResult, Item};
use crate::pack::executor::execute_run;

/// Packs every container with every requested algorithm, concurrently on
/// both levels, and aggregates the results.
///
/// All algorithm ids are resolved up front: an unknown id fails the call
/// before any packing work starts. The call blocks until every concurrent
/// run has completed. Container order in the result is not guaranteed, see
/// [`FleetResult::sort_by_container_id`].
pub fn pack(
    containers: &[Container],
    items: &[Item],
    algorithm_ids: &[i32],
) -> Result<FleetResult> {
    let algorithms = algorithm_ids
        .iter()
        .map(|&id| Algorithm::from_id(id))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "[PACK] packing {} container(s) with {} algorithm(s)",
        containers.len(),
        algorithms.len()
    );

    //fleet-scoped accumulator, lock held only for the append
    let fleet_acc = Mutex::new(Vec::with_capacity(containers.len()));
    rayon::scope(|s| {
        for container in containers {
            let fleet_acc = &fleet_acc;
            let algorithms = &algorithms;
            s.spawn(move |_| {
                let container_result = pack_container(container, items, algorithms);
                fleet_acc.lock().unwrap().push(container_result);
            });
        }
    });

    Ok(FleetResult {
        containers: fleet_acc.into_inner().unwrap(),
    })
}

/// Runs all requested algorithms against a single container, one concurrent
/// task per algorithm, each on its own owned copy of the item list.
fn pack_container(
    container: &Container,
    items: &[Item],
    algorithms: &[Algorithm],
) -> ContainerResult {
    //container-scoped accumulator, distinct from the fleet-scoped one
    let runs_acc = Mutex::new(Vec::with_capacity(algorithms.len()));
    rayon::scope(|s| {
        for &algorithm in algorithms {
            let runs_acc = &runs_acc;
            s.spawn(move |_| {
                //`to_vec` is the isolation mechanism: the heuristic only
                //ever sees this run's private item instances
                let run = execute_run(container, items.to_vec(), algorithm);
                runs_acc.lock().unwrap().push(run);
            });
        }
    });

    //sort by algorithm name so output order is independent of completion timing
    let mut runs = runs_acc.into_inner().unwrap();
    runs.sort_by(|a, b| a.algorithm.name().cmp(b.algorithm.name()));

    ContainerResult {
        container_id: container.id,
        runs,
    }
}
