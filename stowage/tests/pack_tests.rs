use float_cmp::approx_eq;
use itertools::Itertools;
use stowage::algos::Algorithm;
use stowage::entities::{Container, Item};
use stowage::pack::pack;

const ALL_IDS: [i32; 2] = [1, 2];

#[test]
fn one_run_per_requested_algorithm_sorted_by_name() {
    let containers = [
        Container::new(0, 10.0, 10.0, 10.0),
        Container::new(1, 5.0, 5.0, 5.0),
    ];
    let items = [Item::new(0, 1.0, 1.0, 1.0, 10)];

    let fleet = pack(&containers, &items, &ALL_IDS).unwrap();
    assert_eq!(fleet.containers.len(), 2);

    for container_result in &fleet.containers {
        assert_eq!(container_result.runs.len(), ALL_IDS.len());
        let names = container_result
            .runs
            .iter()
            .map(|r| r.algorithm.name())
            .collect_vec();
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn fully_packed_container_reports_100_percent() {
    let containers = [Container::new(0, 10.0, 10.0, 10.0)];
    let items = [Item::new(0, 1.0, 1.0, 1.0, 1000)];

    let fleet = pack(&containers, &items, &ALL_IDS).unwrap();
    for run in &fleet.containers[0].runs {
        assert!(run.outcome.complete);
        assert_eq!(run.outcome.packed.len(), 1000);
        assert!(approx_eq!(f64, run.pct_container_volume, 100.0));
        assert!(approx_eq!(f64, run.pct_item_volume, 100.0));
    }
}

#[test]
fn overflowing_request_reports_partial_item_volume() {
    let containers = [Container::new(0, 10.0, 10.0, 10.0)];
    let items = [Item::new(0, 1.0, 1.0, 1.0, 1001)];

    let fleet = pack(&containers, &items, &ALL_IDS).unwrap();
    for run in &fleet.containers[0].runs {
        assert!(!run.outcome.complete);
        assert_eq!(run.outcome.packed.len(), 1000);
        assert_eq!(run.outcome.unpacked.len(), 1);
        assert!(approx_eq!(f64, run.pct_container_volume, 100.0));
        //round(1000/1001 * 100, 2)
        assert!(approx_eq!(f64, run.pct_item_volume, 99.90));
    }
}

#[test]
fn concurrent_runs_with_shared_item_ids_do_not_interfere() {
    //same item id packed into two containers of different capacity:
    //each run's outcome must depend only on its own input
    let containers = [
        Container::new(0, 5.0, 1.0, 1.0),
        Container::new(1, 3.0, 1.0, 1.0),
    ];
    let items = [Item::new(42, 1.0, 1.0, 1.0, 5)];

    let fleet = pack(&containers, &items, &ALL_IDS).unwrap();

    let large = fleet.container(0).unwrap();
    for run in &large.runs {
        assert!(run.outcome.complete);
        assert_eq!(run.outcome.packed.len(), 5);
    }

    let small = fleet.container(1).unwrap();
    for run in &small.runs {
        assert!(!run.outcome.complete);
        assert_eq!(run.outcome.packed.len(), 3);
        assert_eq!(run.outcome.unpacked.len(), 2);
    }
}

#[test]
fn unsupported_algorithm_id_fails_without_partial_results() {
    let containers = [Container::new(0, 10.0, 10.0, 10.0)];
    let items = [Item::new(0, 1.0, 1.0, 1.0, 1)];

    let err = pack(&containers, &items, &[1, -1]).unwrap_err();
    assert!(err.to_string().contains("unsupported algorithm"));
}

#[test]
fn pack_is_idempotent_modulo_timing() {
    let containers = [Container::new(0, 4.0, 3.0, 2.0)];
    let items = [
        Item::new(0, 2.0, 1.0, 1.0, 6),
        Item::new(1, 1.0, 1.0, 1.0, 9),
    ];

    let a = pack(&containers, &items, &ALL_IDS).unwrap();
    let b = pack(&containers, &items, &ALL_IDS).unwrap();

    for (run_a, run_b) in a.containers[0].runs.iter().zip(&b.containers[0].runs) {
        assert_eq!(run_a.algorithm, run_b.algorithm);
        assert_eq!(run_a.outcome.packed, run_b.outcome.packed);
        assert_eq!(run_a.outcome.unpacked, run_b.outcome.unpacked);
        assert_eq!(run_a.pct_container_volume, run_b.pct_container_volume);
        assert_eq!(run_a.pct_item_volume, run_b.pct_item_volume);
    }
}

#[test]
fn zero_items_is_a_complete_pack() {
    let containers = [Container::new(0, 10.0, 10.0, 10.0)];

    let fleet = pack(&containers, &[], &ALL_IDS).unwrap();
    for run in &fleet.containers[0].runs {
        assert!(run.outcome.complete);
        assert_eq!(run.outcome.packed_volume(), 0.0);
        assert_eq!(run.outcome.unpacked_volume(), 0.0);
        assert_eq!(run.pct_item_volume, 0.0);
    }
}

#[test]
fn fleet_can_be_sorted_by_container_id() {
    let containers: Vec<Container> = (0..16)
        .map(|id| Container::new(id, 2.0, 2.0, 2.0))
        .collect();
    let items = [Item::new(0, 1.0, 1.0, 1.0, 4)];

    let mut fleet = pack(&containers, &items, &[Algorithm::LayerFill.id()]).unwrap();
    fleet.sort_by_container_id();
    let ids = fleet.containers.iter().map(|c| c.container_id).collect_vec();
    assert_eq!(ids, (0..16).collect_vec());
}
