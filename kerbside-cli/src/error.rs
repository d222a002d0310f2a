//! Error types emitted by the Kerbside CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use kerbside_core::{EnergyWeightsError, RouteComputationError, RouteRequestValidationError};
use kerbside_data::routing::ProviderBuildError;
use thiserror::Error;

/// Errors emitted by the Kerbside CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass it on the command line or set {env})")]
    MissingArgument {
        /// Name of the missing argument.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The provider timeout was zero.
    #[error("--{field} must be at least one second")]
    InvalidTimeout {
        /// Name of the offending argument.
        field: &'static str,
    },
    /// The configured energy weights were rejected.
    #[error("invalid energy weights: {0}")]
    InvalidEnergyWeights(#[from] EnergyWeightsError),
    /// The request path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingRequestFile {
        /// Name of the argument holding the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// The request path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    RequestPathNotFile {
        /// Name of the argument holding the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// The request path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectRequestPath {
        /// Name of the argument holding the path.
        field: &'static str,
        /// The path being inspected.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Opening the route request file failed.
    #[error("failed to open route request at {path:?}: {source}")]
    OpenRouteRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Route request JSON could not be decoded.
    #[error("failed to parse route request JSON at {path:?}: {source}")]
    ParseRouteRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// The route request payload failed validation.
    #[error("route request in {path:?} failed validation: {source}")]
    InvalidRouteRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// The validation failure.
        #[source]
        source: RouteRequestValidationError,
    },
    /// Constructing an HTTP provider failed.
    #[error("failed to build provider for {base_url:?}: {source}")]
    BuildProvider {
        /// Base URL of the service.
        base_url: String,
        /// Underlying build error.
        #[source]
        source: ProviderBuildError,
    },
    /// The optimizer rejected the request.
    #[error("optimisation failed: {source}")]
    Optimize {
        /// Underlying optimizer error.
        source: RouteComputationError,
    },
    /// Serialising the optimised route failed.
    #[error("failed to serialise route: {0}")]
    SerializeRoute(#[source] serde_json::Error),
    /// Writing the route output failed.
    #[error("failed to write route output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
