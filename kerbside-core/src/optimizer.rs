use thiserror::Error;

use crate::{OptimizedRoute, ProviderError, ProviderKind, RouteRequest, RouteRequestValidationError};

/// Errors returned by [`RouteOptimizer::optimize`].
///
/// No variant carries a partial route: a failed provider call fails the
/// whole optimisation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteComputationError {
    /// The request was rejected before any provider was called.
    #[error("invalid route request: {0}")]
    InvalidRequest(#[from] RouteRequestValidationError),
    /// A provider call failed (network, HTTP status, timeout, service error).
    #[error("{provider} request failed: {source}")]
    ProviderRequest {
        /// Failing provider.
        provider: ProviderKind,
        /// Underlying error.
        #[source]
        source: ProviderError,
    },
    /// A provider answered with missing rows, cells or values.
    #[error("{provider} response was malformed: {source}")]
    ProviderResponseMalformed {
        /// Failing provider.
        provider: ProviderKind,
        /// Underlying error.
        #[source]
        source: ProviderError,
    },
}

impl RouteComputationError {
    /// Classify a provider failure as a request or malformed-response error.
    ///
    /// # Examples
    /// ```
    /// use kerbside_core::{ProviderError, ProviderKind, RouteComputationError};
    ///
    /// let err = RouteComputationError::from_provider(
    ///     ProviderKind::RoadMatrix,
    ///     ProviderError::DimensionMismatch { expected: 3, actual: 2 },
    /// );
    /// assert!(matches!(err, RouteComputationError::ProviderResponseMalformed { .. }));
    /// ```
    #[must_use]
    pub fn from_provider(provider: ProviderKind, source: ProviderError) -> Self {
        log::warn!("{provider} provider failed: {source}");
        if source.is_malformed() {
            Self::ProviderResponseMalformed { provider, source }
        } else {
            Self::ProviderRequest { provider, source }
        }
    }
}

/// Produce a visiting order for a set of pickup stops.
///
/// Implementations must visit every destination exactly once, start at the
/// request's start point, and never return to it. Optimizers must be
/// `Send + Sync` so a single instance can serve concurrent callers.
pub trait RouteOptimizer: Send + Sync {
    /// Optimise a request, producing a route or an error.
    ///
    /// # Errors
    ///
    /// Returns [`RouteComputationError`] when validation or any provider
    /// call fails.
    fn optimize(&self, request: &RouteRequest) -> Result<OptimizedRoute, RouteComputationError>;
}
