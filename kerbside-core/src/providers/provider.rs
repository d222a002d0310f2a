//! Provider traits for road matrices and elevations.

use crate::{Point, RoadMatrix};

use super::error::{ProviderError, ProviderKind};

/// Fetch pairwise road distances and durations for a set of points.
///
/// Implementers must return a square `n×n` matrix where `n == points.len()`.
/// `matrix.leg(i, j)` is the leg from `points[i]` to `points[j]`.
///
/// # Examples
///
/// ```rust
/// use kerbside_core::{Point, ProviderError, RoadLeg, RoadMatrix, RoadMatrixProvider};
///
/// struct FlatProvider;
///
/// impl RoadMatrixProvider for FlatProvider {
///     fn road_matrix(&self, points: &[Point]) -> Result<RoadMatrix, ProviderError> {
///         if points.is_empty() {
///             return Err(ProviderError::EmptyInput);
///         }
///         let n = points.len();
///         RoadMatrix::from_rows(
///             (0..n)
///                 .map(|i| {
///                     (0..n)
///                         .map(|j| if i == j { RoadLeg::default() } else { RoadLeg::new(100.0, 10.0) })
///                         .collect()
///                 })
///                 .collect(),
///         )
///     }
/// }
///
/// let matrix = FlatProvider.road_matrix(&[Point::start(0.0, 0.0)])?;
/// assert_eq!(matrix.size(), 1);
/// # Ok::<(), ProviderError>(())
/// ```
pub trait RoadMatrixProvider {
    /// Return the road matrix for `points`.
    ///
    /// Implementations must return `Err(ProviderError::EmptyInput)` when
    /// `points` is empty.
    fn road_matrix(&self, points: &[Point]) -> Result<RoadMatrix, ProviderError>;
}

/// Fetch one ground elevation, in metres, per point.
///
/// The returned vector is in the same order as `points`.
pub trait ElevationProvider {
    /// Return elevations for `points`.
    ///
    /// Implementations must return `Err(ProviderError::EmptyInput)` when
    /// `points` is empty.
    fn elevations(&self, points: &[Point]) -> Result<Vec<f64>, ProviderError>;
}

impl<T: RoadMatrixProvider + ?Sized> RoadMatrixProvider for &T {
    fn road_matrix(&self, points: &[Point]) -> Result<RoadMatrix, ProviderError> {
        (**self).road_matrix(points)
    }
}

impl<T: ElevationProvider + ?Sized> ElevationProvider for &T {
    fn elevations(&self, points: &[Point]) -> Result<Vec<f64>, ProviderError> {
        (**self).elevations(points)
    }
}

/// Elevation provider for deployments without elevation data.
///
/// Every call fails with [`ProviderError::Unsupported`], so only the
/// distance-only cost mode can succeed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoElevationProvider;

impl ElevationProvider for NoElevationProvider {
    fn elevations(&self, points: &[Point]) -> Result<Vec<f64>, ProviderError> {
        if points.is_empty() {
            return Err(ProviderError::EmptyInput);
        }
        Err(ProviderError::Unsupported {
            provider: ProviderKind::Elevation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::RoadLeg;
    use crate::test_support::{FlatElevationProvider, UnitRoadMatrixProvider};

    fn sample_points() -> Vec<Point> {
        vec![Point::start(0.0, 0.0), Point::new(1_u64, 1.0, 1.0)]
    }

    #[rstest]
    fn returns_square_matrix() {
        let provider = UnitRoadMatrixProvider;
        let points = sample_points();
        let matrix = provider
            .road_matrix(&points)
            .expect("expected square matrix from UnitRoadMatrixProvider");
        assert_eq!(matrix.size(), points.len());
        assert!(matrix.rows().iter().all(|row| row.len() == points.len()));
        assert_eq!(matrix.leg(0, 0), Some(RoadLeg::default()));
        assert_eq!(matrix.leg(0, 1), Some(RoadLeg::new(1.0, 1.0)));
    }

    #[rstest]
    fn errors_on_empty_input() {
        let err = UnitRoadMatrixProvider
            .road_matrix(&[])
            .expect_err("expected EmptyInput for empty slice");
        assert_eq!(err, ProviderError::EmptyInput);
    }

    #[rstest]
    fn borrowed_providers_delegate() {
        let provider = FlatElevationProvider::at(12.5);
        let borrowed = &provider;
        let elevations = borrowed
            .elevations(&sample_points())
            .expect("flat elevations");
        assert_eq!(elevations, vec![12.5, 12.5]);
    }

    #[rstest]
    fn missing_elevation_provider_is_unsupported() {
        let err = NoElevationProvider
            .elevations(&sample_points())
            .expect_err("no elevation data");
        assert_eq!(
            err,
            ProviderError::Unsupported {
                provider: ProviderKind::Elevation
            }
        );
        assert!(!err.is_malformed());
    }
}
