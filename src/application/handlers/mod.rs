//! Command handlers.
//!
//! Each handler wires ports and aggregates into one use case. Handlers
//! never perform I/O themselves beyond calling ports, and they return
//! transport-agnostic results.

pub mod auth;
