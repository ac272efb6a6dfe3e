use crate::algos::PackingHeuristic;
use crate::algos::shelf::{Fit, ShelfCursor};
use crate::entities::{Container, Item, PackedItem, PlacementOutcome};

/// Orientation-searching shelf heuristic.
///
/// Every unit is probed in all six axis-aligned orientations and placed at
/// the position that advances the cursor the least: lowest layer first,
/// then earliest row, then earliest position in the row, with the flattest
/// orientation as tie-breaker. Deterministic for a given input.
pub struct LayerFill;

impl PackingHeuristic for LayerFill {
    fn run(&self, container: &Container, items: Vec<Item>) -> PlacementOutcome {
        let mut cursor = ShelfCursor::new();
        let mut packed = vec![];
        let mut unpacked = vec![];

        for item in &items {
            for _ in 0..item.quantity {
                match best_fit(&cursor, container, item) {
                    Some((fit, (l, w, h))) => {
                        cursor.commit(fit, l);
                        packed.push(PackedItem {
                            item_id: item.id,
                            x: fit.x,
                            y: fit.y,
                            z: fit.z,
                            o_length: l,
                            o_width: w,
                            o_height: h,
                        });
                    }
                    None => unpacked.push(item.unit()),
                }
            }
        }

        let complete = unpacked.is_empty();
        PlacementOutcome {
            packed,
            unpacked,
            complete,
        }
    }
}

/// All six axis-aligned orientations of an item's dimensions.
fn orientations(item: &Item) -> [(f64, f64, f64); 6] {
    let (l, w, h) = (item.length, item.width, item.height);
    [
        (l, w, h),
        (l, h, w),
        (w, l, h),
        (w, h, l),
        (h, l, w),
        (h, w, l),
    ]
}

fn best_fit(
    cursor: &ShelfCursor,
    container: &Container,
    item: &Item,
) -> Option<(Fit, (f64, f64, f64))> {
    orientations(item)
        .into_iter()
        .filter_map(|(l, w, h)| {
            cursor
                .probe(container, l, w, h)
                .map(|fit| (fit, (l, w, h)))
        })
        .min_by(|(a, (.., ah)), (b, (.., bh))| {
            a.z.total_cmp(&b.z)
                .then(a.y.total_cmp(&b.y))
                .then(a.x.total_cmp(&b.x))
                .then(ah.total_cmp(bh))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotates_unit_to_fit() {
        //only fits lying down
        let container = Container::new(0, 2.0, 1.0, 1.0);
        let items = vec![Item::new(0, 1.0, 1.0, 2.0, 1)];

        let outcome = LayerFill.run(&container, items);
        assert!(outcome.complete);
        assert_eq!(outcome.packed.len(), 1);
        assert_eq!(outcome.packed[0].o_height, 1.0);
    }

    #[test]
    fn reports_overflow_as_unpacked_units() {
        let container = Container::new(0, 3.0, 1.0, 1.0);
        let items = vec![Item::new(7, 1.0, 1.0, 1.0, 5)];

        let outcome = LayerFill.run(&container, items);
        assert!(!outcome.complete);
        assert_eq!(outcome.packed.len(), 3);
        assert_eq!(outcome.unpacked.len(), 2);
        assert!(outcome.unpacked.iter().all(|u| u.id == 7 && u.quantity == 1));
    }
}
