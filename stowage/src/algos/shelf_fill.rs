use crate::algos::PackingHeuristic;
use crate::algos::shelf::ShelfCursor;
use crate::entities::{Container, Item, PackedItem, PlacementOutcome};

/// Fixed-orientation shelf heuristic.
///
/// Units are placed exactly as dimensioned, in input order, at the first
/// position the cursor offers. Cheaper than [`LayerFill`](crate::algos::LayerFill)
/// but blind to rotations.
pub struct ShelfFill;

impl PackingHeuristic for ShelfFill {
    fn run(&self, container: &Container, items: Vec<Item>) -> PlacementOutcome {
        let mut cursor = ShelfCursor::new();
        let mut packed = vec![];
        let mut unpacked = vec![];

        for item in &items {
            for _ in 0..item.quantity {
                match cursor.probe(container, item.length, item.width, item.height) {
                    Some(fit) => {
                        cursor.commit(fit, item.length);
                        packed.push(PackedItem {
                            item_id: item.id,
                            x: fit.x,
                            y: fit.y,
                            z: fit.z,
                            o_length: item.length,
                            o_width: item.width,
                            o_height: item.height,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn does_not_rotate_units() {
        //would fit lying down, but shelf-fill places as dimensioned
        let container = Container::new(0, 2.0, 1.0, 1.0);
        let items = vec![Item::new(0, 1.0, 1.0, 2.0, 1)];

        let outcome = ShelfFill.run(&container, items);
        assert!(!outcome.complete);
        assert_eq!(outcome.unpacked.len(), 1);
    }
}
