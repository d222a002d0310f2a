//! HTTP-based `ElevationProvider` using the Open-Elevation lookup API.
//!
//! All points are looked up in one batched `POST {base}/api/v1/lookup`.
//! Results are positional: the `i`-th result is the elevation of the `i`-th
//! requested point.

use kerbside_core::{ElevationProvider, Point, ProviderError};
use serde::{Deserialize, Serialize};

use super::backend::HttpBackend;
use super::config::{DEFAULT_ELEVATION_BASE_URL, HttpProviderConfig, ProviderBuildError};

#[derive(Debug, Serialize)]
struct LookupRequest {
    locations: Vec<LookupLocation>,
}

#[derive(Debug, Serialize)]
struct LookupLocation {
    latitude: f64,
    longitude: f64,
}

/// Open-Elevation lookup response.
#[derive(Debug, Deserialize)]
struct LookupResponse {
    results: Vec<LookupResult>,
}

#[derive(Debug, Deserialize)]
struct LookupResult {
    elevation: Option<f64>,
}

impl LookupRequest {
    fn for_points(points: &[Point]) -> Self {
        Self {
            locations: points
                .iter()
                .map(|point| LookupLocation {
                    latitude: point.latitude,
                    longitude: point.longitude,
                })
                .collect(),
        }
    }
}

impl LookupResponse {
    fn into_elevations(self, expected: usize) -> Result<Vec<f64>, ProviderError> {
        if self.results.len() != expected {
            return Err(ProviderError::DimensionMismatch {
                expected,
                actual: self.results.len(),
            });
        }
        self.results
            .into_iter()
            .enumerate()
            .map(|(row, result)| match result.elevation {
                Some(elevation) if elevation.is_finite() => Ok(elevation),
                _ => Err(ProviderError::MissingCell { row, col: 0 }),
            })
            .collect()
    }
}

/// Elevation provider backed by an Open-Elevation compatible service.
#[derive(Debug)]
pub struct OpenElevationProvider {
    backend: HttpBackend,
}

impl OpenElevationProvider {
    /// Create a provider for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpProviderConfig::new(base_url))
    }

    /// Create a provider for a local service on the default port.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn local() -> Result<Self, ProviderBuildError> {
        Self::new(DEFAULT_ELEVATION_BASE_URL)
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpProviderConfig) -> Result<Self, ProviderBuildError> {
        Ok(Self {
            backend: HttpBackend::new(config)?,
        })
    }

    fn lookup_url(&self) -> String {
        format!("{}/api/v1/lookup", self.backend.config().trimmed_base_url())
    }

    async fn fetch_elevations_async(&self, points: &[Point]) -> Result<Vec<f64>, ProviderError> {
        let url = self.lookup_url();
        log::debug!("requesting elevations for {} points", points.len());

        let request = self
            .backend
            .client()
            .post(&url)
            .json(&LookupRequest::for_points(points));
        let response: LookupResponse = self.backend.fetch_json(request, &url).await?;

        response.into_elevations(points.len())
    }
}

impl ElevationProvider for OpenElevationProvider {
    fn elevations(&self, points: &[Point]) -> Result<Vec<f64>, ProviderError> {
        if points.is_empty() {
            return Err(ProviderError::EmptyInput);
        }
        self.backend.block_on(self.fetch_elevations_async(points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn decode(json: &str) -> LookupResponse {
        serde_json::from_str(json).expect("lookup response should deserialise")
    }

    #[rstest]
    fn request_body_lists_locations_in_order() {
        let points = vec![Point::start(51.5, -0.1), Point::new("bin-2", 51.6, -0.2)];

        let body = serde_json::to_value(LookupRequest::for_points(&points)).expect("serialise");

        assert_eq!(
            body,
            serde_json::json!({
                "locations": [
                    {"latitude": 51.5, "longitude": -0.1},
                    {"latitude": 51.6, "longitude": -0.2}
                ]
            })
        );
    }

    #[rstest]
    fn lookup_url_strips_trailing_slash() {
        let provider = OpenElevationProvider::new("http://elevation.example.com/")
            .expect("provider should build");

        assert_eq!(
            provider.lookup_url(),
            "http://elevation.example.com/api/v1/lookup"
        );
    }

    #[rstest]
    fn results_convert_positionally() {
        let response = decode(
            r#"{"results": [
                {"latitude": 51.5, "longitude": -0.1, "elevation": 10.0},
                {"latitude": 51.6, "longitude": -0.2, "elevation": 62.5}
            ]}"#,
        );

        let elevations = response.into_elevations(2).expect("two results");

        assert_eq!(elevations, vec![10.0, 62.5]);
    }

    #[rstest]
    fn count_mismatch_is_reported() {
        let response = decode(r#"{"results": [{"elevation": 10.0}]}"#);

        let err = response.into_elevations(3).expect_err("short response");

        assert_eq!(
            err,
            ProviderError::DimensionMismatch {
                expected: 3,
                actual: 1
            }
        );
    }

    #[rstest]
    fn null_elevation_is_a_missing_cell() {
        let response = decode(r#"{"results": [{"elevation": 10.0}, {"elevation": null}]}"#);

        let err = response.into_elevations(2).expect_err("null elevation");

        assert_eq!(err, ProviderError::MissingCell { row: 1, col: 0 });
        assert!(err.is_malformed());
    }

    #[rstest]
    fn empty_input_is_rejected_without_a_request() {
        let provider = OpenElevationProvider::local().expect("provider should build");

        let err = provider.elevations(&[]).expect_err("empty input");

        assert_eq!(err, ProviderError::EmptyInput);
    }
}
