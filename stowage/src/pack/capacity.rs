use anyhow::{Result, bail, ensure};
use itertools::Itertools;
use log::{debug, info};
use thousands::Separable;

use crate::algos::Algorithm;
use crate::entities::{Container, FleetResult, Item};
use crate::pack::pack;

/// Finds the maximum uniform quantity `q` such that `q` units of every
/// input item still pack completely into the target container.
///
/// Expects exactly one container and one algorithm. Returns the
/// [`FleetResult`] of packing at the discovered quantity, with
/// `max_uniform_qty` set on its run.
///
/// Precondition: packing must be monotonic in quantity (a complete pack at
/// `q` implies a complete pack at every `q' < q`). This is a property of
/// the caller's item geometry and is not verified at runtime; violating it
/// may yield an incorrect bound.
pub fn pack_total(
    containers: &[Container],
    items: &[Item],
    algorithm_ids: &[i32],
) -> Result<FleetResult> {
    ensure!(
        containers.len() == 1,
        "capacity search expects exactly one container, got {}",
        containers.len()
    );
    ensure!(
        algorithm_ids.len() == 1,
        "capacity search expects exactly one algorithm, got {}",
        algorithm_ids.len()
    );
    //an empty item list packs completely at every quantity,
    //the doubling phase would never terminate
    ensure!(!items.is_empty(), "capacity search requires at least one item");
    let algorithm = Algorithm::from_id(algorithm_ids[0])?;

    let pack_at = |qty: u64| -> Result<FleetResult> {
        let scaled = items
            .iter()
            .map(|item| item.with_quantity(qty as usize))
            .collect_vec();
        pack(containers, &scaled, algorithm_ids)
    };

    //phase 1: double until the first incomplete pack.
    //if quantity 2 already fails the bound is 2 and the loop stops immediately.
    let mut bound: u64 = 2;
    loop {
        let fleet = pack_at(bound)?;
        if !is_complete(&fleet) {
            break;
        }
        bound *= 2;
    }
    debug!("[CAP] {algorithm}: first incomplete pack at quantity {bound}");

    //phase 2: binary search on [0, bound] for the largest complete quantity
    let (mut lo, mut hi) = (0u64, bound);
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        let fleet = pack_at(mid)?;
        match is_complete(&fleet) {
            true => {
                let probe = pack_at(mid + 1)?;
                if !is_complete(&probe) {
                    info!(
                        "[CAP] {algorithm}: container {} holds at most {} unit(s) per item",
                        containers[0].id,
                        mid.separate_with_commas()
                    );
                    return Ok(attach_qty(fleet, mid));
                }
                lo = mid + 1;
            }
            false => {
                if mid == 0 {
                    break;
                }
                hi = mid - 1;
            }
        }
    }

    //unreachable for monotonic packings
    bail!("capacity search did not converge, packing is not monotonic in quantity");
}

fn is_complete(fleet: &FleetResult) -> bool {
    fleet.containers[0].runs[0].outcome.complete
}

fn attach_qty(mut fleet: FleetResult, qty: u64) -> FleetResult {
    fleet
        .containers
        .iter_mut()
        .flat_map(|c| c.runs.iter_mut())
        .for_each(|run| run.max_uniform_qty = Some(qty));
    fleet
}
