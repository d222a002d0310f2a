//! Road distance/duration matrices returned by routing services.

use crate::ProviderError;

/// Road distance and travel time for one ordered pair of points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadLeg {
    /// Road distance in metres.
    pub distance: f64,
    /// Travel time in seconds.
    pub duration: f64,
}

impl RoadLeg {
    /// Construct a leg from metres and seconds.
    #[must_use]
    pub const fn new(distance: f64, duration: f64) -> Self {
        Self { distance, duration }
    }

    /// Whether distance and duration are both finite and non-negative.
    ///
    /// # Examples
    /// ```
    /// use kerbside_core::RoadLeg;
    ///
    /// assert!(RoadLeg::new(500.0, 60.0).is_valid());
    /// assert!(!RoadLeg::new(f64::NAN, 60.0).is_valid());
    /// assert!(!RoadLeg::new(500.0, -1.0).is_valid());
    /// ```
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.distance.is_finite()
            && self.distance >= 0.0
            && self.duration.is_finite()
            && self.duration >= 0.0
    }
}

/// Square matrix of [`RoadLeg`]s.
///
/// `leg(i, j)` is the leg from the i-th to the j-th requested point. The
/// matrix is not assumed to be symmetric.
///
/// # Examples
/// ```
/// use kerbside_core::{RoadLeg, RoadMatrix};
///
/// let matrix = RoadMatrix::from_rows(vec![
///     vec![RoadLeg::default(), RoadLeg::new(500.0, 60.0)],
///     vec![RoadLeg::new(650.0, 75.0), RoadLeg::default()],
/// ])?;
/// assert_eq!(matrix.size(), 2);
/// assert_eq!(matrix.leg(1, 0), Some(RoadLeg::new(650.0, 75.0)));
/// # Ok::<(), kerbside_core::ProviderError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadMatrix {
    rows: Vec<Vec<RoadLeg>>,
}

impl RoadMatrix {
    /// Build a matrix from origin-major rows.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::DimensionMismatch`] when any row length
    /// differs from the number of rows.
    pub fn from_rows(rows: Vec<Vec<RoadLeg>>) -> Result<Self, ProviderError> {
        let expected = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != expected) {
            return Err(ProviderError::DimensionMismatch {
                expected,
                actual: row.len(),
            });
        }
        Ok(Self { rows })
    }

    /// Number of points covered by the matrix.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// The leg from `from` to `to`, if both indices are in range.
    #[must_use]
    pub fn leg(&self, from: usize, to: usize) -> Option<RoadLeg> {
        self.rows.get(from).and_then(|row| row.get(to)).copied()
    }

    /// Check that the matrix covers exactly `points` points.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::DimensionMismatch`] otherwise.
    pub fn ensure_size(&self, points: usize) -> Result<(), ProviderError> {
        if self.size() == points {
            Ok(())
        } else {
            Err(ProviderError::DimensionMismatch {
                expected: points,
                actual: self.size(),
            })
        }
    }

    /// Check that every leg is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingCell`] for the first offending leg in
    /// row-major order.
    pub fn ensure_valid_legs(&self) -> Result<(), ProviderError> {
        for (row, legs) in self.rows.iter().enumerate() {
            if let Some(col) = legs.iter().position(|leg| !leg.is_valid()) {
                return Err(ProviderError::MissingCell { row, col });
            }
        }
        Ok(())
    }

    /// Origin-major rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<RoadLeg>] {
        &self.rows
    }
}
