//! `GreedyRouteOptimizer` implementation.

use std::time::Instant;

use kerbside_core::{
    Diagnostics, ElevationProvider, EnergyWeights, EnergyWeightsError, OptimizedRoute, Point,
    ProviderError, ProviderKind, RoadMatrix, RoadMatrixProvider, RouteComputationError, RouteLeg,
    RouteOptimizer, RouteRequest,
};

use crate::plan::{GreedyPlan, ensure_finite_elevations, plan_greedy_route};

/// Configuration for [`GreedyRouteOptimizer`].
///
/// Weights are validated on construction, so every leg cost the optimizer
/// compares is finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GreedyOptimizerConfig {
    energy_weights: EnergyWeights,
}

impl GreedyOptimizerConfig {
    /// Build a configuration using `energy_weights` for green-mode requests.
    ///
    /// # Errors
    ///
    /// Returns [`EnergyWeightsError`] when a weight is negative or not
    /// finite.
    pub fn new(energy_weights: EnergyWeights) -> Result<Self, EnergyWeightsError> {
        energy_weights.validate()?;
        Ok(Self { energy_weights })
    }

    /// Weights used by the energy cost model.
    #[must_use]
    pub const fn energy_weights(&self) -> &EnergyWeights {
        &self.energy_weights
    }
}

/// Nearest-next route optimizer.
///
/// The optimizer is generic over its two data boundaries: a road matrix
/// provider and an elevation provider. Elevations are only requested for
/// [`CostMode::Green`](kerbside_core::CostMode::Green) requests, so a
/// distance-only deployment can pass
/// [`NoElevationProvider`](kerbside_core::NoElevationProvider).
#[derive(Debug)]
pub struct GreedyRouteOptimizer<M, E>
where
    M: RoadMatrixProvider,
    E: ElevationProvider,
{
    road_matrix_provider: M,
    elevation_provider: E,
    config: GreedyOptimizerConfig,
}

impl<M, E> GreedyRouteOptimizer<M, E>
where
    M: RoadMatrixProvider,
    E: ElevationProvider,
{
    /// Construct an optimizer using default configuration.
    #[must_use]
    pub fn new(road_matrix_provider: M, elevation_provider: E) -> Self {
        Self::with_config(
            road_matrix_provider,
            elevation_provider,
            GreedyOptimizerConfig::default(),
        )
    }

    /// Construct an optimizer with explicit configuration.
    #[must_use]
    pub const fn with_config(
        road_matrix_provider: M,
        elevation_provider: E,
        config: GreedyOptimizerConfig,
    ) -> Self {
        Self {
            road_matrix_provider,
            elevation_provider,
            config,
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &GreedyOptimizerConfig {
        &self.config
    }

    fn fetch_matrix(&self, points: &[Point]) -> Result<RoadMatrix, RouteComputationError> {
        self.road_matrix_provider
            .road_matrix(points)
            .and_then(|matrix| {
                matrix.ensure_size(points.len())?;
                matrix.ensure_valid_legs()?;
                Ok(matrix)
            })
            .map_err(|err| RouteComputationError::from_provider(ProviderKind::RoadMatrix, err))
    }

    fn fetch_elevations(&self, points: &[Point]) -> Result<Vec<f64>, RouteComputationError> {
        self.elevation_provider
            .elevations(points)
            .and_then(|elevations| {
                if elevations.len() != points.len() {
                    return Err(ProviderError::DimensionMismatch {
                        expected: points.len(),
                        actual: elevations.len(),
                    });
                }
                ensure_finite_elevations(&elevations)?;
                Ok(elevations)
            })
            .map_err(|err| RouteComputationError::from_provider(ProviderKind::Elevation, err))
    }
}

impl<M, E> RouteOptimizer for GreedyRouteOptimizer<M, E>
where
    M: RoadMatrixProvider + Send + Sync,
    E: ElevationProvider + Send + Sync,
{
    fn optimize(&self, request: &RouteRequest) -> Result<OptimizedRoute, RouteComputationError> {
        request.validate()?;
        let started_at = Instant::now();

        if request.destinations.is_empty() {
            log::debug!("no destinations; route stays at the start point");
            let mut route = OptimizedRoute::stationary(request.start.clone());
            route.diagnostics.solve_time = started_at.elapsed();
            return Ok(route);
        }

        let points = request.all_points();
        let matrix = self.fetch_matrix(&points)?;
        let elevations = if request.mode.requires_elevation() {
            Some(self.fetch_elevations(&points)?)
        } else {
            None
        };

        let plan = plan_greedy_route(
            &matrix,
            elevations.as_deref(),
            request.mode,
            &self.config.energy_weights,
        )
        .map_err(|err| RouteComputationError::from_provider(ProviderKind::Elevation, err))?;

        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            stops_evaluated: request.destinations.len() as u64,
        };
        let route = assemble_route(&points, &plan, diagnostics);
        log::info!(
            "sequenced {} stops: {:.1} m, {:.1} s, {:.1} m climbed, energy {:.1}",
            request.destinations.len(),
            route.metrics.distance,
            route.metrics.duration,
            route.metrics.elevation_gain,
            route.metrics.energy_score
        );
        Ok(route)
    }
}

/// Map an index-based plan back onto the requested points.
fn assemble_route(points: &[Point], plan: &GreedyPlan, diagnostics: Diagnostics) -> OptimizedRoute {
    let path = plan
        .order
        .iter()
        .filter_map(|&index| points.get(index).cloned())
        .collect();
    let legs = plan
        .legs
        .iter()
        .filter_map(|leg| {
            let from = points.get(leg.from)?;
            let to = points.get(leg.to)?;
            Some(RouteLeg {
                from: from.id.clone(),
                to: to.id.clone(),
                distance: leg.road.distance,
                duration: leg.road.duration,
                elevation_gain: leg.elevation_gain,
                cost: leg.cost,
            })
        })
        .collect();
    OptimizedRoute {
        path,
        metrics: plan.metrics,
        legs,
        diagnostics,
    }
}
