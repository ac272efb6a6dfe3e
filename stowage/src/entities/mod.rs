mod container;
mod item;
mod outcome;
mod result;

#[doc(inline)]
pub use container::Container;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use outcome::PackedItem;

#[doc(inline)]
pub use outcome::PlacementOutcome;

#[doc(inline)]
pub use result::AlgorithmRunResult;

#[doc(inline)]
pub use result::ContainerResult;

#[doc(inline)]
pub use result::FleetResult;
