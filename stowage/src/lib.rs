//! Orchestration and search core for 3D container-loading problems.
//!
//! Runs packing heuristics concurrently across fleets of containers,
//! aggregates per-run utilization metrics, and binary-searches the
//! maximum uniform item quantity a container fully accommodates.

/// Closed set of packing heuristics and the adapter contract they implement
pub mod algos;

/// Entities to model 3D container-loading problems
pub mod entities;

/// Concurrent packing service and capacity search
pub mod pack;

/// Helper functions which do not belong to any specific module
pub mod util;
