//! Optimised routes and their aggregate metrics.

use std::time::Duration;

use crate::{Point, PointId};

/// Aggregate statistics for one computed route.
///
/// Serialised with camelCase keys (`elevationGain`, `energyScore`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteMetrics {
    /// Total road distance in metres.
    pub distance: f64,
    /// Total travel time in seconds.
    pub duration: f64,
    /// Total metres climbed; zero in distance-only mode.
    pub elevation_gain: f64,
    /// Sum of the per-leg selection costs; equals `distance` in
    /// distance-only mode.
    pub energy_score: f64,
}

/// One leg of an optimised route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteLeg {
    /// Origin of the leg.
    pub from: PointId,
    /// Destination of the leg.
    pub to: PointId,
    /// Road distance in metres.
    pub distance: f64,
    /// Travel time in seconds.
    pub duration: f64,
    /// Metres climbed; zero in distance-only mode.
    pub elevation_gain: f64,
    /// Cost used to select this leg.
    pub cost: f64,
}

/// Diagnostic information about an optimisation run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Diagnostics {
    /// Wall-clock time spent, provider calls included.
    pub solve_time: Duration,
    /// Number of destinations sequenced.
    pub stops_evaluated: u64,
}

/// The visiting order chosen for a request, with its metrics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizedRoute {
    /// Points in visiting order; the start point comes first.
    pub path: Vec<Point>,
    /// Aggregate statistics.
    pub metrics: RouteMetrics,
    /// Legs in visiting order; one fewer than `path`.
    pub legs: Vec<RouteLeg>,
    /// Run diagnostics.
    pub diagnostics: Diagnostics,
}

impl OptimizedRoute {
    /// The degenerate route that stays at `start`.
    ///
    /// # Examples
    /// ```
    /// use kerbside_core::{OptimizedRoute, Point, RouteMetrics};
    ///
    /// let route = OptimizedRoute::stationary(Point::start(0.0, 0.0));
    /// assert_eq!(route.path.len(), 1);
    /// assert_eq!(route.metrics, RouteMetrics::default());
    /// assert!(route.legs.is_empty());
    /// ```
    #[must_use]
    pub fn stationary(start: Point) -> Self {
        Self {
            path: vec![start],
            metrics: RouteMetrics::default(),
            legs: Vec::new(),
            diagnostics: Diagnostics::default(),
        }
    }

    /// Ids of the visited stops, excluding the start.
    #[must_use]
    pub fn stop_ids(&self) -> Vec<&PointId> {
        self.path.iter().skip(1).map(|point| &point.id).collect()
    }
}
