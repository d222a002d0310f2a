//! HTTP-based `RoadMatrixProvider` using OSRM's Table API.
//!
//! [`OsrmRoadMatrixProvider`] requests both the `distance` and `duration`
//! annotations in a single Table call and converts them into a
//! [`RoadMatrix`].
//!
//! # Example
//!
//! ```no_run
//! use kerbside_data::routing::OsrmRoadMatrixProvider;
//! use kerbside_core::{Point, RoadMatrixProvider};
//!
//! let provider = OsrmRoadMatrixProvider::new("http://localhost:5000")?;
//! let points = vec![
//!     Point::start(51.5, -0.1),
//!     Point::new(7_u64, 51.6, -0.2),
//! ];
//!
//! let matrix = provider.road_matrix(&points)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use kerbside_core::{Point, ProviderError, RoadMatrix, RoadMatrixProvider};

use super::backend::HttpBackend;
use super::config::{HttpProviderConfig, ProviderBuildError};
use super::osrm::TableResponse;

/// Default OSRM routing profile.
pub const DEFAULT_OSRM_PROFILE: &str = "driving";

/// HTTP-based road matrix provider backed by the OSRM Table API.
///
/// The provider implements the synchronous [`RoadMatrixProvider`] trait by
/// blocking on asynchronous HTTP requests. The HTTP client and runtime are
/// reused across calls.
///
/// # Runtime requirements
///
/// When called from within an existing Tokio runtime, the runtime should be
/// multi-threaded. From a `current_thread` runtime the provider falls back to
/// its own runtime, which may deadlock if the caller's runtime drives IO the
/// request depends on.
#[derive(Debug)]
pub struct OsrmRoadMatrixProvider {
    backend: HttpBackend,
    profile: String,
}

impl OsrmRoadMatrixProvider {
    /// Create a provider for the OSRM instance at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpProviderConfig::new(base_url))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpProviderConfig) -> Result<Self, ProviderBuildError> {
        Ok(Self {
            backend: HttpBackend::new(config)?,
            profile: DEFAULT_OSRM_PROFILE.to_owned(),
        })
    }

    /// Route with `profile` (e.g. `"driving"`, `"cycling"`) instead of the
    /// default.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Routing profile used in Table requests.
    #[must_use]
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Build the OSRM Table API URL for the given points.
    ///
    /// The URL format is
    /// `{base_url}/table/v1/{profile}/{coordinates}?annotations=duration,distance`
    /// where coordinates are semicolon-separated `lon,lat` pairs.
    fn build_table_url(&self, points: &[Point]) -> String {
        let coords = points
            .iter()
            .map(|point| format!("{},{}", point.longitude, point.latitude))
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/table/v1/{}/{}?annotations=duration,distance",
            self.backend.config().trimmed_base_url(),
            self.profile,
            coords
        )
    }

    async fn fetch_matrix_async(&self, points: &[Point]) -> Result<RoadMatrix, ProviderError> {
        let url = self.build_table_url(points);
        log::debug!("requesting OSRM table for {} points", points.len());

        let response: TableResponse = self
            .backend
            .fetch_json(self.backend.client().get(&url), &url)
            .await?;

        response.into_road_matrix(points.len())
    }
}

impl RoadMatrixProvider for OsrmRoadMatrixProvider {
    fn road_matrix(&self, points: &[Point]) -> Result<RoadMatrix, ProviderError> {
        if points.is_empty() {
            return Err(ProviderError::EmptyInput);
        }
        self.backend.block_on(self.fetch_matrix_async(points))
    }
}
