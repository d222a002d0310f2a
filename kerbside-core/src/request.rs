//! Optimisation requests and their validation.

use std::collections::HashSet;

use thiserror::Error;

use crate::{Point, PointId};

/// Cost model used to choose the next stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CostMode {
    /// Minimise road distance only.
    #[default]
    Standard,
    /// Minimise the energy cost, using elevation data.
    Green,
}

impl CostMode {
    /// Whether the mode needs elevation data.
    #[must_use]
    pub const fn requires_elevation(self) -> bool {
        matches!(self, Self::Green)
    }
}

/// A start position, the stops to visit, and the cost model.
///
/// # Examples
/// ```
/// use kerbside_core::{CostMode, Point, RouteRequest};
///
/// let request = RouteRequest::new(
///     Point::start(51.5, -0.1),
///     vec![Point::new(1_u64, 51.51, -0.11), Point::new("job-2", 51.49, -0.09)],
///     CostMode::Green,
/// );
/// assert!(request.validate().is_ok());
/// assert_eq!(request.all_points().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRequest {
    /// Where the collector starts.
    pub start: Point,
    /// Stops to visit, each exactly once.
    #[cfg_attr(feature = "serde", serde(default))]
    pub destinations: Vec<Point>,
    /// Cost model for stop selection.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: CostMode,
}

/// Reasons a [`RouteRequest`] is rejected before any provider is called.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteRequestValidationError {
    /// Latitude or longitude was non-finite or out of range.
    #[error("point {id} has invalid coordinates")]
    InvalidCoordinates {
        /// Offending point.
        id: PointId,
    },
    /// A destination reuses the start point's id.
    #[error("destination {id} collides with the start point id")]
    CollidesWithStart {
        /// Offending point.
        id: PointId,
    },
    /// Two destinations share an id.
    #[error("destination id {id} appears more than once")]
    DuplicateId {
        /// Repeated id.
        id: PointId,
    },
}

impl RouteRequest {
    /// Construct a request.
    #[must_use]
    pub const fn new(start: Point, destinations: Vec<Point>, mode: CostMode) -> Self {
        Self {
            start,
            destinations,
            mode,
        }
    }

    /// `[start, ...destinations]`, the order used for provider calls.
    #[must_use]
    pub fn all_points(&self) -> Vec<Point> {
        std::iter::once(&self.start)
            .chain(&self.destinations)
            .cloned()
            .collect()
    }

    /// Check coordinates and id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, scanning the start point and then
    /// destinations in input order.
    pub fn validate(&self) -> Result<(), RouteRequestValidationError> {
        if !self.start.has_valid_coordinates() {
            return Err(RouteRequestValidationError::InvalidCoordinates {
                id: self.start.id.clone(),
            });
        }
        let mut seen = HashSet::with_capacity(self.destinations.len());
        for point in &self.destinations {
            if !point.has_valid_coordinates() {
                return Err(RouteRequestValidationError::InvalidCoordinates {
                    id: point.id.clone(),
                });
            }
            if point.id == self.start.id {
                return Err(RouteRequestValidationError::CollidesWithStart {
                    id: point.id.clone(),
                });
            }
            if !seen.insert(&point.id) {
                return Err(RouteRequestValidationError::DuplicateId {
                    id: point.id.clone(),
                });
            }
        }
        Ok(())
    }
}
