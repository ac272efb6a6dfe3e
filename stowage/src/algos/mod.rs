use std::fmt;

use anyhow::{Result, bail};

use crate::entities::{Container, Item, PlacementOutcome};

mod layer_fill;
mod shelf;
mod shelf_fill;

#[doc(inline)]
pub use layer_fill::LayerFill;

#[doc(inline)]
pub use shelf_fill::ShelfFill;

/// Contract any packing heuristic implements.
///
/// The heuristic receives its own owned copy of the item list (it is free to
/// consume or reorder it) and must not mutate anything beyond the lists it
/// returns in the [`PlacementOutcome`].
pub trait PackingHeuristic: Send + Sync {
    fn run(&self, container: &Container, items: Vec<Item>) -> PlacementOutcome;
}

/// Closed set of built-in packing heuristics, keyed by a stable integer id.
///
/// Adding a heuristic means adding a variant here; dispatch call sites
/// never change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum Algorithm {
    /// Orientation-searching shelf heuristic
    LayerFill = 1,
    /// Fixed-orientation shelf heuristic
    ShelfFill = 2,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::LayerFill, Algorithm::ShelfFill];

    /// Resolves an external integer id to an algorithm.
    /// Fails for unknown ids, before any packing work starts.
    pub fn from_id(id: i32) -> Result<Self> {
        match id {
            1 => Ok(Algorithm::LayerFill),
            2 => Ok(Algorithm::ShelfFill),
            _ => bail!("unsupported algorithm: {id}"),
        }
    }

    pub fn id(self) -> i32 {
        self as i32
    }

    /// Stable name, also the sort key for per-container run ordering.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::LayerFill => "layer-fill",
            Algorithm::ShelfFill => "shelf-fill",
        }
    }

    pub fn heuristic(self) -> &'static dyn PackingHeuristic {
        match self {
            Algorithm::LayerFill => &LayerFill,
            Algorithm::ShelfFill => &ShelfFill,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_id_rejects_unknown_ids() {
        for id in [-1, 0, 3, i32::MAX] {
            let err = Algorithm::from_id(id).unwrap_err();
            assert!(err.to_string().contains("unsupported algorithm"));
        }
    }

    #[test]
    fn ids_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_id(algorithm.id()).unwrap(), algorithm);
        }
    }
}
