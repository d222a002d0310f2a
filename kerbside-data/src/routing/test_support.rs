//! Test utilities for routing providers.
//!
//! [`StubRoadMatrixProvider`] and [`StubElevationProvider`] are deterministic
//! doubles that return pre-configured responses without making HTTP requests.

use kerbside_core::{
    ElevationProvider, Point, ProviderError, RoadLeg, RoadMatrix, RoadMatrixProvider,
};

#[derive(Debug, Clone)]
enum StubResponse<T> {
    Value(T),
    Error(ProviderError),
}

impl<T: Clone> StubResponse<T> {
    fn respond(&self, points: &[Point]) -> Result<T, ProviderError> {
        if points.is_empty() {
            return Err(ProviderError::EmptyInput);
        }
        match self {
            Self::Value(value) => Ok(value.clone()),
            Self::Error(error) => Err(error.clone()),
        }
    }
}

/// Stub `RoadMatrixProvider` for testing.
///
/// # Example
///
/// ```
/// use kerbside_data::routing::test_support::StubRoadMatrixProvider;
/// use kerbside_core::{Point, RoadLeg, RoadMatrixProvider};
///
/// let provider = StubRoadMatrixProvider::with_unit_matrix(2);
/// let points = vec![Point::start(0.0, 0.0), Point::new(1_u64, 1.0, 1.0)];
///
/// let matrix = provider.road_matrix(&points).expect("stub matrix");
/// assert_eq!(matrix.leg(0, 1), Some(RoadLeg::new(1.0, 1.0)));
/// ```
#[derive(Debug, Clone)]
pub struct StubRoadMatrixProvider {
    response: StubResponse<RoadMatrix>,
}

impl StubRoadMatrixProvider {
    /// Create a provider that returns the given matrix.
    ///
    /// The matrix is returned regardless of the points provided, as long as
    /// the input is non-empty.
    #[must_use]
    pub const fn with_matrix(matrix: RoadMatrix) -> Self {
        Self {
            response: StubResponse::Value(matrix),
        }
    }

    /// Create a provider that returns the given error.
    ///
    /// Empty input still returns `ProviderError::EmptyInput`.
    #[must_use]
    pub const fn with_error(error: ProviderError) -> Self {
        Self {
            response: StubResponse::Error(error),
        }
    }

    /// Create a provider returning a unit matrix of the given size.
    ///
    /// Zero on the diagonal, one metre and one second elsewhere.
    #[must_use]
    pub fn with_unit_matrix(size: usize) -> Self {
        let rows = (0..size)
            .map(|i| (0..size).map(|j| unit_leg(i, j)).collect())
            .collect();
        Self::with_matrix(RoadMatrix::from_rows(rows).unwrap_or_default())
    }
}

fn unit_leg(i: usize, j: usize) -> RoadLeg {
    if i == j {
        RoadLeg::default()
    } else {
        RoadLeg::new(1.0, 1.0)
    }
}

impl RoadMatrixProvider for StubRoadMatrixProvider {
    fn road_matrix(&self, points: &[Point]) -> Result<RoadMatrix, ProviderError> {
        self.response.respond(points)
    }
}

/// Stub `ElevationProvider` for testing.
#[derive(Debug, Clone)]
pub struct StubElevationProvider {
    response: StubResponse<Vec<f64>>,
}

impl StubElevationProvider {
    /// Create a provider that returns the given elevations.
    #[must_use]
    pub const fn with_elevations(elevations: Vec<f64>) -> Self {
        Self {
            response: StubResponse::Value(elevations),
        }
    }

    /// Create a provider that returns the given error.
    #[must_use]
    pub const fn with_error(error: ProviderError) -> Self {
        Self {
            response: StubResponse::Error(error),
        }
    }
}

impl ElevationProvider for StubElevationProvider {
    fn elevations(&self, points: &[Point]) -> Result<Vec<f64>, ProviderError> {
        self.response.respond(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_points(count: u64) -> Vec<Point> {
        (0..count).map(|i| Point::new(i, 0.0, 0.0)).collect()
    }

    #[rstest]
    fn with_matrix_returns_configured_matrix() {
        let matrix = RoadMatrix::from_rows(vec![
            vec![RoadLeg::default(), RoadLeg::new(500.0, 60.0)],
            vec![RoadLeg::new(500.0, 60.0), RoadLeg::default()],
        ])
        .expect("square matrix");
        let provider = StubRoadMatrixProvider::with_matrix(matrix.clone());

        let result = provider
            .road_matrix(&sample_points(2))
            .expect("should succeed");

        assert_eq!(result, matrix);
    }

    #[rstest]
    fn with_error_returns_configured_error() {
        let provider = StubRoadMatrixProvider::with_error(ProviderError::NetworkError {
            url: "http://example.com".to_owned(),
            message: "connection refused".to_owned(),
        });

        let err = provider
            .road_matrix(&sample_points(2))
            .expect_err("should fail");

        assert!(matches!(err, ProviderError::NetworkError { .. }));
    }

    #[rstest]
    fn empty_input_returns_empty_input_error() {
        let provider = StubRoadMatrixProvider::with_unit_matrix(2);

        let err = provider.road_matrix(&[]).expect_err("should fail");

        assert_eq!(err, ProviderError::EmptyInput);
    }

    #[rstest]
    fn with_unit_matrix_creates_correct_pattern() {
        let provider = StubRoadMatrixProvider::with_unit_matrix(3);

        let matrix = provider
            .road_matrix(&sample_points(3))
            .expect("should succeed");

        assert_eq!(matrix.size(), 3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(matrix.leg(i, j), Some(unit_leg(i, j)));
            }
        }
    }

    #[rstest]
    fn elevation_stub_returns_configured_values() {
        let provider = StubElevationProvider::with_elevations(vec![5.0, 7.5]);

        let elevations = provider
            .elevations(&sample_points(2))
            .expect("should succeed");

        assert_eq!(elevations, vec![5.0, 7.5]);
    }

    #[rstest]
    fn elevation_stub_returns_configured_error() {
        let provider = StubElevationProvider::with_error(ProviderError::Timeout {
            url: "http://example.com".to_owned(),
            timeout_secs: 30,
        });

        let err = provider
            .elevations(&sample_points(1))
            .expect_err("should fail");

        assert!(matches!(err, ProviderError::Timeout { .. }));
    }
}
