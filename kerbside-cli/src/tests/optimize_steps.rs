//! Behaviour-driven step definitions driving the optimize CLI scenarios.

use super::helpers::{OfflineOptimizerBuilder, near_and_far_request, write_request, write_utf8};
use super::*;
use crate::optimize::run_optimize_with;
use camino::Utf8PathBuf;
use kerbside_core::{
    CostMode, EnergyWeightsError, OptimizedRoute, Point, PointId, RouteRequest,
    RouteRequestValidationError,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tempfile::TempDir;

#[derive(Debug)]
struct OptimizeWorld {
    _tmp: TempDir,
    request_path: Utf8PathBuf,
    include_request: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl OptimizeWorld {
    fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        let request_path = root.join("request.json");

        Self {
            _tmp: tmp,
            request_path,
            include_request: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["kerbside".to_owned(), "optimize".to_owned()];
        if *self.include_request.borrow() {
            argv.push(self.request_path.as_str().to_owned());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn push_flag(&self, flag: &str, value: &str) {
        // `--flag=value` keeps negative numbers from parsing as flags.
        self.cli_args.borrow_mut().push(format!("--{flag}={value}"));
    }

    fn route(&self) -> OptimizedRoute {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        result.as_ref().expect("expected success");
        serde_json::from_slice(&self.stdout.borrow()).expect("output should be a JSON route")
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> OptimizeWorld {
    OptimizeWorld::new()
}

#[given("a route request with a near and a far stop exists on disk")]
fn standard_request_exists(#[from(world)] world: &OptimizeWorld) {
    write_request(&world.request_path, &near_and_far_request(CostMode::Standard));
}

#[given("a green route request with a near and a far stop exists on disk")]
fn green_request_exists(#[from(world)] world: &OptimizeWorld) {
    write_request(&world.request_path, &near_and_far_request(CostMode::Green));
}

#[given("I pass an elevation weight of 10")]
fn pass_elevation_weight(#[from(world)] world: &OptimizeWorld) {
    world.push_flag(ARG_ELEVATION_WEIGHT, "10");
}

#[given("I pass a rolling weight of -1")]
fn pass_negative_rolling_weight(#[from(world)] world: &OptimizeWorld) {
    world.push_flag(ARG_ROLLING_WEIGHT, "-1");
}

#[given("the route request contains invalid JSON")]
fn request_contains_invalid_json(#[from(world)] world: &OptimizeWorld) {
    write_utf8(&world.request_path, b"{ not valid json");
}

#[given("the route request reuses the start id for a destination")]
fn request_reuses_start_id(#[from(world)] world: &OptimizeWorld) {
    let request = RouteRequest::new(
        Point::start(51.5, -0.1),
        vec![Point::new(PointId::start(), 51.51, -0.1)],
        CostMode::Standard,
    );
    write_request(&world.request_path, &request);
}

#[given("I omit the route request path")]
fn omit_request_path(#[from(world)] world: &OptimizeWorld) {
    *world.include_request.borrow_mut() = false;
}

#[when("I run the optimize command")]
fn run_optimize_command(#[from(world)] world: &OptimizeWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Optimize(args) => {
            let builder = OfflineOptimizerBuilder::default();
            let mut buffer = world.stdout.borrow_mut();
            run_optimize_with(args, &builder, &mut *buffer)
        }
    });

    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints the near stop before the far stop")]
fn command_prints_near_before_far(#[from(world)] world: &OptimizeWorld) {
    let route = world.route();
    assert_eq!(
        route.stop_ids(),
        vec![&PointId::from("near"), &PointId::from("far")]
    );
    assert!(route.path.first().is_some_and(|point| point.id.is_start()));
}

#[then("the command succeeds and reports a positive climb")]
fn command_reports_climb(#[from(world)] world: &OptimizeWorld) {
    let route = world.route();
    assert!(route.metrics.elevation_gain > 0.0);
    assert!(route.metrics.energy_score > route.metrics.distance);
}

#[then("the command fails because the request JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &OptimizeWorld) {
    match &*world.error() {
        CliError::ParseRouteRequest { .. } => {}
        other => panic!("expected ParseRouteRequest, found {other:?}"),
    }
}

#[then("the command fails because the request is invalid")]
fn command_fails_invalid_request(#[from(world)] world: &OptimizeWorld) {
    match &*world.error() {
        CliError::InvalidRouteRequest { source, .. } => assert_eq!(
            *source,
            RouteRequestValidationError::CollidesWithStart {
                id: PointId::start()
            }
        ),
        other => panic!("expected InvalidRouteRequest, found {other:?}"),
    }
}

#[then("the command fails because the request path is missing")]
fn command_fails_missing_request_path(#[from(world)] world: &OptimizeWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_OPTIMIZE_REQUEST),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the energy weights are invalid")]
fn command_fails_invalid_weights(#[from(world)] world: &OptimizeWorld) {
    match &*world.error() {
        CliError::InvalidEnergyWeights(EnergyWeightsError::InvalidWeight { name, .. }) => {
            assert_eq!(*name, "rolling");
        }
        other => panic!("expected InvalidEnergyWeights, found {other:?}"),
    }
}

macro_rules! register_optimize_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/optimize_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: OptimizeWorld) {
            let _ = world;
        }
    };
}

register_optimize_scenario!(optimize_happy_path, "optimising a request from JSON");
register_optimize_scenario!(optimize_green_weights, "optimising a green request with custom weights");
register_optimize_scenario!(optimize_invalid_json, "rejecting invalid JSON input");
register_optimize_scenario!(optimize_invalid_request, "rejecting invalid route requests");
register_optimize_scenario!(optimize_missing_request, "rejecting missing request paths");
register_optimize_scenario!(optimize_negative_weights, "rejecting negative energy weights");
