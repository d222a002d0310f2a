//! Greedy nearest-next route optimizer for Kerbside.
//!
//! This crate provides [`GreedyRouteOptimizer`], the default implementation
//! of the [`RouteOptimizer`](kerbside_core::RouteOptimizer) trait. It fetches
//! one road matrix (and, for energy-aware requests, one batch of elevations)
//! and then repeatedly moves to the cheapest unvisited stop until every stop
//! has been visited.
//!
//! The heuristic is deterministic: ties are broken by destination input
//! order, so identical inputs always produce identical routes. The planning
//! step is exposed as [`plan_greedy_route`] for use without providers.

#![forbid(unsafe_code)]

mod plan;
mod solver;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use plan::{GreedyPlan, PlannedLeg, plan_greedy_route};
pub use solver::{GreedyOptimizerConfig, GreedyRouteOptimizer};
