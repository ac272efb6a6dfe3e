mod capacity;
mod executor;
mod service;

#[doc(inline)]
pub use capacity::pack_total;

#[doc(inline)]
pub use service::pack;
