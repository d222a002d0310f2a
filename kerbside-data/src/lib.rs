//! Data access adapters for the Kerbside route engine.
//!
//! Responsibilities:
//! - Implement the provider traits from `kerbside-core` against HTTP routing
//!   and elevation services.
//! - Encapsulate the wire formats of those services.
//!
//! Boundaries:
//! - Do not encode routing rules (those live in `kerbside-core` and the
//!   solver crates).
//! - Keep blocking I/O off async executors; prefer async-capable clients.
//!
//! Invariants:
//! - Thread-safe by default where feasible.
//! - No global mutable state.

pub mod routing;
