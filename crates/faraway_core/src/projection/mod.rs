//! Read-only views derived from the item collection.
//!
//! # Responsibility
//! - Compute display ordering and aggregate statistics from a snapshot.
//!
//! # Invariants
//! - Projections never mutate the collection and never retain it; every
//!   render pass recomputes from the latest snapshot.

pub mod sort;
pub mod stats;
