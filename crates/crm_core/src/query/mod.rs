//! Read-only derived views over the entity store.
//!
//! # Responsibility
//! - Compute the filtered, sorted and aggregated views the UI renders.
//! - Recompute from scratch on every call; nothing is cached.
//!
//! # Invariants
//! - Filters preserve store order.
//! - Every sort is stable, so equal timestamps keep store order.
//! - Lookup misses degrade to fallbacks, never errors.

pub mod contacts;
pub mod dashboard;
pub mod timeline;
