//! Test-only utilities for `kerbside-solver-greedy`.
//!
//! The helpers in this module are available to unit tests, behavioural tests
//! and benchmarks. They are gated behind the `test-support` feature (and
//! `cfg(test)`).

use std::sync::atomic::{AtomicUsize, Ordering};

use kerbside_core::{
    ElevationProvider, Point, ProviderError, RoadLeg, RoadMatrix, RoadMatrixProvider,
};

/// Build a square matrix from `(distance, duration)` rows.
///
/// # Panics
///
/// Panics when the rows are not square.
///
/// # Examples
/// ```rust
/// use kerbside_core::RoadLeg;
/// use kerbside_solver_greedy::test_support::matrix_from_legs;
///
/// let matrix = matrix_from_legs(&[&[(0.0, 0.0), (1000.0, 120.0)], &[(1000.0, 120.0), (0.0, 0.0)]]);
/// assert_eq!(matrix.leg(0, 1), Some(RoadLeg::new(1000.0, 120.0)));
/// ```
#[must_use]
#[expect(clippy::expect_used, reason = "fixtures are square by construction")]
pub fn matrix_from_legs(rows: &[&[(f64, f64)]]) -> RoadMatrix {
    RoadMatrix::from_rows(
        rows.iter()
            .map(|row| {
                row.iter()
                    .map(|&(distance, duration)| RoadLeg::new(distance, duration))
                    .collect()
            })
            .collect(),
    )
    .expect("fixture matrix must be square")
}

/// Build a square matrix from distances, with zero durations.
///
/// # Panics
///
/// Panics when the rows are not square.
#[must_use]
pub fn matrix_from_distances(rows: &[&[f64]]) -> RoadMatrix {
    let legs: Vec<Vec<(f64, f64)>> = rows
        .iter()
        .map(|row| row.iter().map(|&distance| (distance, 0.0)).collect())
        .collect();
    let borrowed: Vec<&[(f64, f64)]> = legs.iter().map(Vec::as_slice).collect();
    matrix_from_legs(&borrowed)
}

/// `n` destinations with numeric ids `1..=n`, spread north-east of the
/// origin.
///
/// # Examples
/// ```rust
/// use kerbside_core::PointId;
/// use kerbside_solver_greedy::test_support::destinations;
///
/// let stops = destinations(3);
/// assert_eq!(stops.len(), 3);
/// assert_eq!(stops[0].id, PointId::from(1_u64));
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "fixture coordinates")]
pub fn destinations(count: u32) -> Vec<Point> {
    (1..=count)
        .map(|i| {
            let offset = f64::from(i) * 0.001;
            Point::new(u64::from(i), offset, offset)
        })
        .collect()
}

/// A [`RoadMatrixProvider`] returning a fixed matrix.
///
/// The matrix must match the number of points requested; otherwise the call
/// fails with [`ProviderError::DimensionMismatch`].
#[derive(Debug, Clone)]
pub struct FixedRoadMatrixProvider {
    matrix: RoadMatrix,
}

impl FixedRoadMatrixProvider {
    /// Construct a provider returning `matrix`.
    #[must_use]
    pub const fn new(matrix: RoadMatrix) -> Self {
        Self { matrix }
    }
}

impl RoadMatrixProvider for FixedRoadMatrixProvider {
    fn road_matrix(&self, points: &[Point]) -> Result<RoadMatrix, ProviderError> {
        if points.is_empty() {
            return Err(ProviderError::EmptyInput);
        }
        self.matrix.ensure_size(points.len())?;
        Ok(self.matrix.clone())
    }
}

/// An [`ElevationProvider`] returning fixed elevations verbatim.
///
/// The values are returned even when their count differs from the number of
/// points, so callers can exercise count checks.
#[derive(Debug, Clone)]
pub struct FixedElevationProvider {
    elevations: Vec<f64>,
}

impl FixedElevationProvider {
    /// Construct a provider returning `elevations`.
    #[must_use]
    pub const fn new(elevations: Vec<f64>) -> Self {
        Self { elevations }
    }
}

impl ElevationProvider for FixedElevationProvider {
    fn elevations(&self, points: &[Point]) -> Result<Vec<f64>, ProviderError> {
        if points.is_empty() {
            return Err(ProviderError::EmptyInput);
        }
        Ok(self.elevations.clone())
    }
}

/// A provider failing every call with the same error.
#[derive(Debug, Clone)]
pub struct FailingProvider {
    error: ProviderError,
}

impl FailingProvider {
    /// Construct a provider failing with `error`.
    #[must_use]
    pub const fn new(error: ProviderError) -> Self {
        Self { error }
    }
}

impl RoadMatrixProvider for FailingProvider {
    fn road_matrix(&self, _points: &[Point]) -> Result<RoadMatrix, ProviderError> {
        Err(self.error.clone())
    }
}

impl ElevationProvider for FailingProvider {
    fn elevations(&self, _points: &[Point]) -> Result<Vec<f64>, ProviderError> {
        Err(self.error.clone())
    }
}

/// Wraps a provider and counts calls made through it.
#[derive(Debug, Default)]
pub struct CountingProvider<P> {
    inner: P,
    calls: AtomicUsize,
}

impl<P> CountingProvider<P> {
    /// Wrap `inner`.
    #[must_use]
    pub const fn new(inner: P) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of calls forwarded so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl<P: RoadMatrixProvider> RoadMatrixProvider for CountingProvider<P> {
    fn road_matrix(&self, points: &[Point]) -> Result<RoadMatrix, ProviderError> {
        self.record();
        self.inner.road_matrix(points)
    }
}

impl<P: ElevationProvider> ElevationProvider for CountingProvider<P> {
    fn elevations(&self, points: &[Point]) -> Result<Vec<f64>, ProviderError> {
        self.record();
        self.inner.elevations(points)
    }
}
