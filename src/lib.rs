//! Facade crate for the Kerbside pickup route engine.
//!
//! This crate re-exports the core domain types and exposes the greedy
//! optimizer and the HTTP providers behind feature flags.

#![forbid(unsafe_code)]

pub use kerbside_core::{
    CostMode, Diagnostics, ElevationProvider, EnergyWeights, NoElevationProvider, OptimizedRoute,
    Point, PointId, ProviderError, ProviderKind, RoadLeg, RoadMatrix, RoadMatrixProvider,
    RouteComputationError, RouteLeg, RouteMetrics, RouteOptimizer, RouteRequest,
};

#[cfg(feature = "solver-greedy")]
pub use kerbside_solver_greedy::{GreedyOptimizerConfig, GreedyRouteOptimizer};

#[cfg(feature = "http-providers")]
pub use kerbside_data::routing::{HttpProviderConfig, OpenElevationProvider, OsrmRoadMatrixProvider};
