//! Optimize command implementation for the Kerbside CLI.

use std::io::{BufReader, Write};
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use kerbside_core::{EnergyWeights, OptimizedRoute, RouteOptimizer, RouteRequest};
use kerbside_data::routing::{
    DEFAULT_ELEVATION_BASE_URL, DEFAULT_OSRM_BASE_URL, DEFAULT_OSRM_PROFILE, HttpProviderConfig,
    OpenElevationProvider, OsrmRoadMatrixProvider,
};
use kerbside_solver_greedy::{GreedyOptimizerConfig, GreedyRouteOptimizer};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_ELEVATION_BASE_URL, ARG_ELEVATION_WEIGHT, ARG_IDLE_WEIGHT, ARG_OPTIMIZE_REQUEST,
    ARG_OSRM_BASE_URL, ARG_OSRM_PROFILE, ARG_ROLLING_WEIGHT, ARG_TIMEOUT_SECS, CliError,
    ENV_OPTIMIZE_REQUEST,
};

/// CLI arguments for the `optimize` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "optimize",
    long_about = "Sequence the destinations of a JSON-encoded RouteRequest \
                 greedily, querying an OSRM instance for road distances and, \
                 in green mode, an Open-Elevation instance for elevations. \
                 The optimised route is printed to stdout as JSON.",
    about = "Optimise a pickup route"
)]
#[ortho_config(prefix = "KERBSIDE")]
pub(crate) struct OptimizeArgs {
    /// Path to a JSON file containing a RouteRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Base URL for the OSRM server (e.g. "http://localhost:5000").
    #[arg(long = ARG_OSRM_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) osrm_base_url: Option<String>,
    /// OSRM routing profile.
    #[arg(long = ARG_OSRM_PROFILE, value_name = "profile")]
    #[serde(default)]
    pub(crate) osrm_profile: Option<String>,
    /// Base URL for the Open-Elevation server (e.g. "http://localhost:8080").
    #[arg(long = ARG_ELEVATION_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) elevation_base_url: Option<String>,
    /// Timeout applied to each provider request.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "seconds")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// Energy cost per metre travelled.
    #[arg(long = ARG_ROLLING_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) rolling_weight: Option<f64>,
    /// Energy cost per metre climbed.
    #[arg(long = ARG_ELEVATION_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) elevation_weight: Option<f64>,
    /// Energy cost per second on the road.
    #[arg(long = ARG_IDLE_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) idle_weight: Option<f64>,
}

impl OptimizeArgs {
    pub(crate) fn into_config(self) -> Result<OptimizeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        OptimizeConfig::try_from(merged)
    }
}

/// Resolved `optimize` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OptimizeConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Base URL for the OSRM table service.
    pub(crate) osrm_base_url: String,
    /// OSRM routing profile.
    pub(crate) osrm_profile: String,
    /// Base URL for the Open-Elevation lookup service.
    pub(crate) elevation_base_url: String,
    /// Timeout applied to each provider request.
    pub(crate) timeout: Duration,
    /// Optimizer settings with validated energy weights.
    pub(crate) optimizer: GreedyOptimizerConfig,
}

impl OptimizeConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path = &self.request_path;
        let field = ARG_OPTIMIZE_REQUEST;
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::RequestPathNotFile {
                field,
                path: path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingRequestFile {
                    field,
                    path: path.clone(),
                })
            }
            Err(source) => Err(CliError::InspectRequestPath {
                field,
                path: path.clone(),
                source,
            }),
        }
    }

    fn http_config(&self, base_url: &str) -> HttpProviderConfig {
        HttpProviderConfig::new(base_url).with_timeout(self.timeout)
    }
}

impl TryFrom<OptimizeArgs> for OptimizeConfig {
    type Error = CliError;

    fn try_from(args: OptimizeArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_OPTIMIZE_REQUEST,
            env: ENV_OPTIMIZE_REQUEST,
        })?;

        let timeout = match args.timeout_secs {
            Some(0) => {
                return Err(CliError::InvalidTimeout {
                    field: ARG_TIMEOUT_SECS,
                });
            }
            Some(secs) => Duration::from_secs(secs),
            None => HttpProviderConfig::default().timeout,
        };

        let defaults = EnergyWeights::default();
        let weights = EnergyWeights {
            rolling: args.rolling_weight.unwrap_or(defaults.rolling),
            elevation: args.elevation_weight.unwrap_or(defaults.elevation),
            idle: args.idle_weight.unwrap_or(defaults.idle),
        };
        let optimizer = GreedyOptimizerConfig::new(weights)?;

        Ok(Self {
            request_path,
            osrm_base_url: args
                .osrm_base_url
                .unwrap_or_else(|| DEFAULT_OSRM_BASE_URL.to_owned()),
            osrm_profile: args
                .osrm_profile
                .unwrap_or_else(|| DEFAULT_OSRM_PROFILE.to_owned()),
            elevation_base_url: args
                .elevation_base_url
                .unwrap_or_else(|| DEFAULT_ELEVATION_BASE_URL.to_owned()),
            timeout,
            optimizer,
        })
    }
}

/// Builds a route optimizer for the current invocation.
pub(crate) trait OptimizerBuilder {
    fn build(&self, config: &OptimizeConfig) -> Result<Box<dyn RouteOptimizer>, CliError>;
}

/// Wires the OSRM and Open-Elevation providers into the greedy optimizer.
pub(crate) struct DefaultOptimizerBuilder;

impl OptimizerBuilder for DefaultOptimizerBuilder {
    fn build(&self, config: &OptimizeConfig) -> Result<Box<dyn RouteOptimizer>, CliError> {
        let matrix_provider =
            OsrmRoadMatrixProvider::with_config(config.http_config(&config.osrm_base_url))
                .map_err(|source| CliError::BuildProvider {
                    base_url: config.osrm_base_url.clone(),
                    source,
                })?
                .with_profile(config.osrm_profile.clone());
        let elevation_provider =
            OpenElevationProvider::with_config(config.http_config(&config.elevation_base_url))
                .map_err(|source| CliError::BuildProvider {
                    base_url: config.elevation_base_url.clone(),
                    source,
                })?;
        Ok(Box::new(GreedyRouteOptimizer::with_config(
            matrix_provider,
            elevation_provider,
            config.optimizer,
        )))
    }
}

pub(crate) fn run_optimize(args: OptimizeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_optimize_with(args, &DefaultOptimizerBuilder, &mut stdout)
}

pub(crate) fn run_optimize_with(
    args: OptimizeArgs,
    builder: &dyn OptimizerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let route = execute_optimize(&config, builder)?;
    write_route(writer, &route)
}

fn execute_optimize(
    config: &OptimizeConfig,
    builder: &dyn OptimizerBuilder,
) -> Result<OptimizedRoute, CliError> {
    let request = load_route_request(&config.request_path)?;
    request
        .validate()
        .map_err(|source| CliError::InvalidRouteRequest {
            path: config.request_path.clone(),
            source,
        })?;
    log::debug!(
        "optimising {} destinations from {} in {:?} mode",
        request.destinations.len(),
        config.request_path,
        request.mode
    );
    let optimizer = builder.build(config)?;
    optimizer
        .optimize(&request)
        .map_err(|source| CliError::Optimize { source })
}

/// Loads a JSON-encoded [`RouteRequest`] from disk.
pub(crate) fn load_route_request(path: &Utf8Path) -> Result<RouteRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRouteRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRouteRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_route(writer: &mut dyn Write, route: &OptimizedRoute) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(route).map_err(CliError::SerializeRoute)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<OptimizeConfig, CliError> {
    let merged = OptimizeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    OptimizeConfig::try_from(merged)
}
