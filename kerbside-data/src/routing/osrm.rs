//! OSRM API response types for the Table service.
//!
//! The Table API computes the duration and, when requested through
//! `annotations=duration,distance`, the distance of the fastest route between
//! all pairs of supplied coordinates.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#table-service>

use kerbside_core::{ProviderError, RoadLeg, RoadMatrix};
use serde::Deserialize;

/// Cell matrix as returned by OSRM; `None` marks an unroutable pair.
type OptionalMatrix = Vec<Vec<Option<f64>>>;

/// OSRM Table API response.
///
/// The response contains the requested annotation matrices on success or an
/// error message on failure. The `code` field indicates the response status.
#[derive(Debug, Deserialize)]
pub struct TableResponse {
    /// Status code from OSRM.
    ///
    /// Common values:
    /// - `"Ok"` - Request was successful
    /// - `"InvalidQuery"` - Invalid query parameters
    /// - `"InvalidOptions"` - Invalid option combination
    /// - `"NoTable"` - Table computation failed
    pub code: String,

    /// Optional error message when `code` is not `"Ok"`.
    pub message: Option<String>,

    /// Matrix of durations in seconds.
    pub durations: Option<OptionalMatrix>,

    /// Matrix of distances in metres.
    pub distances: Option<OptionalMatrix>,
}

impl TableResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }

    /// Convert the response into a [`RoadMatrix`] covering `expected` points.
    ///
    /// Every cell must be present in both annotations and hold a finite,
    /// non-negative number; the optimizer never guesses a missing leg.
    pub fn into_road_matrix(self, expected: usize) -> Result<RoadMatrix, ProviderError> {
        if !self.is_ok() {
            return Err(ProviderError::ServiceError {
                code: self.code,
                message: self.message.unwrap_or_default(),
            });
        }

        let durations = self.durations.ok_or_else(|| ProviderError::ParseError {
            message: "OSRM response missing durations array".to_owned(),
        })?;
        let distances = self.distances.ok_or_else(|| ProviderError::ParseError {
            message: "OSRM response missing distances array".to_owned(),
        })?;

        check_rows(&durations, expected)?;
        check_rows(&distances, expected)?;

        let rows = distances
            .into_iter()
            .zip(durations)
            .enumerate()
            .map(|(row, (distance_row, duration_row))| {
                distance_row
                    .into_iter()
                    .zip(duration_row)
                    .enumerate()
                    .map(|(col, cells)| match cells {
                        (Some(distance), Some(duration))
                            if is_valid_cell(distance) && is_valid_cell(duration) =>
                        {
                            Ok(RoadLeg::new(distance, duration))
                        }
                        _ => Err(ProviderError::MissingCell { row, col }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        RoadMatrix::from_rows(rows)
    }
}

fn is_valid_cell(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn check_rows(matrix: &OptionalMatrix, expected: usize) -> Result<(), ProviderError> {
    if matrix.len() != expected {
        return Err(ProviderError::DimensionMismatch {
            expected,
            actual: matrix.len(),
        });
    }
    match matrix.iter().find(|row| row.len() != expected) {
        Some(row) => Err(ProviderError::DimensionMismatch {
            expected,
            actual: row.len(),
        }),
        None => Ok(()),
    }
}
