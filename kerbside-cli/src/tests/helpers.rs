//! Test helpers for writing request files and stubbing optimizer builds.

use std::cell::Cell;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use kerbside_core::test_support::{HaversineRoadMatrixProvider, LatitudeElevationProvider};
use kerbside_core::{CostMode, Point, RouteOptimizer, RouteRequest};
use kerbside_solver_greedy::GreedyRouteOptimizer;
use tempfile::TempDir;

use crate::CliError;
use crate::optimize::{OptimizeConfig, OptimizerBuilder};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A temporary directory and the request path inside it.
pub(super) fn request_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    let request_path = root.join("request.json");
    (tmp, request_path)
}

pub(super) fn write_request(path: &Utf8Path, request: &RouteRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialise request");
    write_utf8(path, payload.as_bytes());
}

/// Start in central London with a near and a far stop due north.
pub(super) fn near_and_far_request(mode: CostMode) -> RouteRequest {
    RouteRequest::new(
        Point::start(51.5, -0.1),
        vec![
            Point::new("far", 51.52, -0.1),
            Point::new("near", 51.505, -0.1),
        ],
        mode,
    )
}

/// Builds the greedy optimizer over offline providers and records whether it
/// was asked to.
#[derive(Debug, Default)]
pub(super) struct OfflineOptimizerBuilder {
    built: Cell<bool>,
}

impl OfflineOptimizerBuilder {
    pub(super) fn was_built(&self) -> bool {
        self.built.get()
    }
}

impl OptimizerBuilder for OfflineOptimizerBuilder {
    fn build(&self, config: &OptimizeConfig) -> Result<Box<dyn RouteOptimizer>, CliError> {
        self.built.set(true);
        Ok(Box::new(GreedyRouteOptimizer::with_config(
            HaversineRoadMatrixProvider::default(),
            LatitudeElevationProvider,
            config.optimizer,
        )))
    }
}
