//! Deterministic providers used by unit and behaviour tests.

use crate::{ElevationProvider, Point, ProviderError, RoadLeg, RoadMatrix, RoadMatrixProvider};

/// `RoadMatrixProvider` returning one-metre, one-second edges.
#[derive(Default, Debug, Copy, Clone)]
pub struct UnitRoadMatrixProvider;

impl RoadMatrixProvider for UnitRoadMatrixProvider {
    fn road_matrix(&self, points: &[Point]) -> Result<RoadMatrix, ProviderError> {
        if points.is_empty() {
            return Err(ProviderError::EmptyInput);
        }
        let n = points.len();
        let rows = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        if i == j {
                            RoadLeg::default()
                        } else {
                            RoadLeg::new(1.0, 1.0)
                        }
                    })
                    .collect()
            })
            .collect();
        RoadMatrix::from_rows(rows)
    }
}

/// `RoadMatrixProvider` whose legs are the great-circle distance, driven at
/// a constant speed.
///
/// Useful for property tests that need a metric, position-dependent matrix.
#[derive(Debug, Copy, Clone)]
pub struct HaversineRoadMatrixProvider {
    /// Constant speed in metres per second.
    pub speed_mps: f64,
}

impl Default for HaversineRoadMatrixProvider {
    fn default() -> Self {
        Self { speed_mps: 10.0 }
    }
}

impl RoadMatrixProvider for HaversineRoadMatrixProvider {
    #[expect(clippy::float_arithmetic, reason = "duration from distance and speed")]
    fn road_matrix(&self, points: &[Point]) -> Result<RoadMatrix, ProviderError> {
        if points.is_empty() {
            return Err(ProviderError::EmptyInput);
        }
        let rows = points
            .iter()
            .map(|from| {
                points
                    .iter()
                    .map(|to| {
                        let distance = from.haversine_to(to);
                        RoadLeg::new(distance, distance / self.speed_mps)
                    })
                    .collect()
            })
            .collect();
        RoadMatrix::from_rows(rows)
    }
}

/// `ElevationProvider` reporting the same elevation for every point.
#[derive(Default, Debug, Copy, Clone)]
pub struct FlatElevationProvider {
    elevation: f64,
}

impl FlatElevationProvider {
    /// Report `elevation` metres for every point.
    #[must_use]
    pub const fn at(elevation: f64) -> Self {
        Self { elevation }
    }
}

impl ElevationProvider for FlatElevationProvider {
    fn elevations(&self, points: &[Point]) -> Result<Vec<f64>, ProviderError> {
        if points.is_empty() {
            return Err(ProviderError::EmptyInput);
        }
        Ok(vec![self.elevation; points.len()])
    }
}

/// `ElevationProvider` deriving elevation from latitude, one metre per
/// thousandth of a degree north of the equator.
#[derive(Default, Debug, Copy, Clone)]
pub struct LatitudeElevationProvider;

impl ElevationProvider for LatitudeElevationProvider {
    #[expect(clippy::float_arithmetic, reason = "synthetic terrain")]
    fn elevations(&self, points: &[Point]) -> Result<Vec<f64>, ProviderError> {
        if points.is_empty() {
            return Err(ProviderError::EmptyInput);
        }
        Ok(points.iter().map(|point| point.latitude * 1000.0).collect())
    }
}
