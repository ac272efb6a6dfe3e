use crate::entities::Item;

/// An item unit placed by a heuristic: where it sits and in which orientation.
#[derive(Clone, Debug, PartialEq)]
pub struct PackedItem {
    pub item_id: usize,
    /// Position of the unit's minimum corner inside the container
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Dimensions of the unit in its placed orientation
    pub o_length: f64,
    pub o_width: f64,
    pub o_height: f64,
}

impl PackedItem {
    pub fn volume(&self) -> f64 {
        self.o_length * self.o_width * self.o_height
    }
}

/// Result of a single heuristic invocation: which units went in, which did not.
///
/// `packed` and `unpacked` are disjoint; `unpacked` holds single units
/// (quantity 1). A heuristic never mutates its caller's state beyond the
/// lists it returns here.
#[derive(Clone, Debug)]
pub struct PlacementOutcome {
    pub packed: Vec<PackedItem>,
    pub unpacked: Vec<Item>,
    /// Whether every requested unit was placed
    pub complete: bool,
}

impl PlacementOutcome {
    pub fn packed_volume(&self) -> f64 {
        self.packed.iter().map(|p| p.volume()).sum()
    }

    pub fn unpacked_volume(&self) -> f64 {
        self.unpacked.iter().map(|u| u.volume()).sum()
    }
}
