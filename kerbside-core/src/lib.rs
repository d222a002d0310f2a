//! Core domain types for the Kerbside pickup route engine.
//!
//! A collector starts somewhere and must visit a set of pickup stops. This
//! crate defines the points, requests, routes and metrics exchanged with the
//! optimizer, the provider traits through which road and elevation data are
//! fetched, and the cost functions the optimizer minimises.
//!
//! Network access lives in `kerbside-data`; the greedy optimizer lives in
//! `kerbside-solver-greedy`.

#![forbid(unsafe_code)]

mod energy;
mod geodesy;
mod matrix;
mod optimizer;
mod point;
mod providers;
mod request;
mod route;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use energy::{EnergyWeights, EnergyWeightsError, energy_cost, uphill_gain};
pub use geodesy::{EARTH_RADIUS_M, haversine_distance, within_radius};
pub use matrix::{RoadLeg, RoadMatrix};
pub use optimizer::{RouteComputationError, RouteOptimizer};
pub use point::{Point, PointId, START_SENTINEL};
pub use providers::{
    ElevationProvider, NoElevationProvider, ProviderError, ProviderKind, RoadMatrixProvider,
};
pub use request::{CostMode, RouteRequest, RouteRequestValidationError};
pub use route::{Diagnostics, OptimizedRoute, RouteLeg, RouteMetrics};
