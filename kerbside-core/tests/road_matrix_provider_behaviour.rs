//! Behavioural tests for `RoadMatrixProvider` implementations.

use kerbside_core::{
    Point, ProviderError, RoadLeg, RoadMatrix, RoadMatrixProvider,
    test_support::UnitRoadMatrixProvider,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

type ResultCell = RefCell<Result<RoadMatrix, ProviderError>>;

#[fixture]
fn provider() -> UnitRoadMatrixProvider {
    UnitRoadMatrixProvider
}

#[fixture]
fn result() -> ResultCell {
    RefCell::new(Ok(RoadMatrix::default()))
}

#[given("a provider returning unit legs")]
fn given_provider(
    #[from(provider)] _provider: &UnitRoadMatrixProvider,
    #[from(result)] result: &ResultCell,
) {
    *result.borrow_mut() = Ok(RoadMatrix::default());
}

#[when("I request a road matrix for two points")]
fn request_two(
    #[from(provider)] provider: &UnitRoadMatrixProvider,
    #[from(result)] result: &ResultCell,
) {
    let points = vec![Point::start(0.0, 0.0), Point::new(1_u64, 1.0, 1.0)];
    *result.borrow_mut() = provider.road_matrix(&points);
}

#[when("I request a road matrix for no points")]
fn request_none(
    #[from(provider)] provider: &UnitRoadMatrixProvider,
    #[from(result)] result: &ResultCell,
) {
    *result.borrow_mut() = provider.road_matrix(&[]);
}

#[then("a 2x2 matrix is returned")]
fn then_matrix(#[from(result)] result: &ResultCell) {
    let borrow = result.borrow();
    let matrix = borrow.as_ref().expect("expected Ok result");
    assert_eq!(matrix.size(), 2);
    assert_eq!(matrix.leg(0, 0), Some(RoadLeg::default()));
    assert_eq!(matrix.leg(1, 0), Some(RoadLeg::new(1.0, 1.0)));
}

#[then("an empty input error is returned")]
fn then_empty_error(#[from(result)] result: &ResultCell) {
    let borrow = result.borrow();
    assert!(
        matches!(&*borrow, Err(ProviderError::EmptyInput)),
        "expected EmptyInput, got {borrow:?}"
    );
}

#[scenario(path = "tests/features/road_matrix_provider.feature", index = 0)]
fn matrix_returned(provider: UnitRoadMatrixProvider, result: ResultCell) {
    let _ = (provider, result);
}

#[scenario(path = "tests/features/road_matrix_provider.feature", index = 1)]
fn error_on_empty(provider: UnitRoadMatrixProvider, result: ResultCell) {
    let _ = (provider, result);
}
