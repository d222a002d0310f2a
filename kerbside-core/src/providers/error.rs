use std::fmt;

use thiserror::Error;

/// Which external provider an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Road distance/duration matrix provider.
    RoadMatrix,
    /// Ground elevation provider.
    Elevation,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoadMatrix => f.write_str("road matrix"),
            Self::Elevation => f.write_str("elevation"),
        }
    }
}

/// Errors from [`crate::RoadMatrixProvider`] and [`crate::ElevationProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// No points were provided.
    ///
    /// Providers require at least one point. Callers should pre-filter input
    /// to avoid this condition.
    #[error("at least one point is required")]
    EmptyInput,
    /// The provider is not available in this deployment.
    #[error("{provider} provider is not configured")]
    Unsupported {
        /// The missing provider.
        provider: ProviderKind,
    },
    /// The request could not reach the service.
    #[error("request to {url} failed: {message}")]
    NetworkError {
        /// Requested URL.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The service did not answer in time.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("request to {url} returned HTTP {status}: {message}")]
    HttpError {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The service reported an application-level error.
    #[error("service error {code}: {message}")]
    ServiceError {
        /// Service status code, e.g. `"InvalidQuery"`.
        code: String,
        /// Service-provided message.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse response: {message}")]
    ParseError {
        /// Decoder error description.
        message: String,
    },
    /// The response covered a different number of points than requested.
    #[error("expected data for {expected} points, got {actual}")]
    DimensionMismatch {
        /// Number of points requested.
        expected: usize,
        /// Number of rows, columns or values returned.
        actual: usize,
    },
    /// A required cell was null or not a finite, non-negative number.
    #[error("missing or invalid value at row {row}, column {col}")]
    MissingCell {
        /// Row (origin) index.
        row: usize,
        /// Column (destination) index.
        col: usize,
    },
}

impl ProviderError {
    /// Whether the service answered but the payload was unusable.
    ///
    /// # Examples
    /// ```
    /// use kerbside_core::ProviderError;
    ///
    /// assert!(ProviderError::MissingCell { row: 0, col: 1 }.is_malformed());
    /// assert!(!ProviderError::EmptyInput.is_malformed());
    /// ```
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::ParseError { .. } | Self::DimensionMismatch { .. } | Self::MissingCell { .. }
        )
    }
}
