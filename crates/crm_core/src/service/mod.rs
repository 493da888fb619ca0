//! Mutation use-cases.
//!
//! # Responsibility
//! - Own the entity store and apply every state change to it.
//! - Keep note saves single-flight through the save gate.
//!
//! # Invariants
//! - Validation failures never change state.
//! - Lookup misses on star/complete are silent no-ops.

pub mod crm_service;
pub mod draft;
