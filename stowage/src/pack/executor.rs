use std::time::Instant;

use log::debug;
use thousands::Separable;

use crate::algos::Algorithm;
use crate::entities::{AlgorithmRunResult, Container, Item};
use crate::util::pct;

/// Runs one heuristic on one container and derives the utilization metrics.
///
/// `items` is the run's private copy; the heuristic takes ownership of it,
/// so nothing here is ever shared with a concurrent run. No shared state is
/// touched in this function, all accumulator writes happen one level up.
pub(crate) fn execute_run(
    container: &Container,
    items: Vec<Item>,
    algorithm: Algorithm,
) -> AlgorithmRunResult {
    let n_units: usize = items.iter().map(|item| item.quantity).sum();

    let start = Instant::now();
    let outcome = algorithm.heuristic().run(container, items);
    let elapsed = start.elapsed();

    //volumes are only tallied once the full outcome is known
    let packed_volume = outcome.packed_volume();
    let unpacked_volume = outcome.unpacked_volume();
    let pct_container_volume = pct(packed_volume, container.volume());
    let pct_item_volume = pct(packed_volume, packed_volume + unpacked_volume);

    debug!(
        "[PACK] {} placed {}/{} units in container {} ({pct_container_volume:.2}% of volume) in {:.3}ms",
        algorithm.name(),
        outcome.packed.len().separate_with_commas(),
        n_units.separate_with_commas(),
        container.id,
        elapsed.as_secs_f64() * 1000.0,
    );

    AlgorithmRunResult {
        algorithm,
        outcome,
        elapsed,
        pct_container_volume,
        pct_item_volume,
        max_uniform_qty: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_items_is_a_complete_pack_with_zero_percentages() {
        let container = Container::new(0, 10.0, 10.0, 10.0);
        let result = execute_run(&container, vec![], Algorithm::LayerFill);

        assert!(result.outcome.complete);
        assert_eq!(result.outcome.packed_volume(), 0.0);
        assert_eq!(result.outcome.unpacked_volume(), 0.0);
        //zero-denominator convention: 0.00%, never a division fault
        assert_eq!(result.pct_item_volume, 0.0);
        assert_eq!(result.pct_container_volume, 0.0);
    }

    #[test]
    fn zero_volume_container_does_not_fault() {
        let container = Container::new(0, 0.0, 0.0, 0.0);
        let items = vec![Item::new(0, 1.0, 1.0, 1.0, 1)];
        let result = execute_run(&container, items, Algorithm::LayerFill);

        assert!(!result.outcome.complete);
        assert_eq!(result.pct_container_volume, 0.0);
        assert_eq!(result.pct_item_volume, 0.0);
    }
}
