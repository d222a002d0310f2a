//! Property-based tests for the haversine distance and the energy model.

use geo::Coord;
use kerbside_core::{EnergyWeights, energy_cost, haversine_distance, uphill_gain};
use proptest::prelude::*;

const TOLERANCE: f64 = 1.0e-6;

fn coord_strategy() -> impl Strategy<Value = Coord<f64>> {
    (-180.0_f64..=180.0, -90.0_f64..=90.0).prop_map(|(x, y)| Coord { x, y })
}

fn weights_strategy() -> impl Strategy<Value = EnergyWeights> {
    (0.0_f64..10.0, 0.0_f64..100.0, 0.0_f64..5.0).prop_map(|(rolling, elevation, idle)| {
        EnergyWeights {
            rolling,
            elevation,
            idle,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: distance does not depend on direction.
    #[test]
    fn haversine_is_symmetric(a in coord_strategy(), b in coord_strategy()) {
        let forward = haversine_distance(a, b);
        let backward = haversine_distance(b, a);
        prop_assert!((forward - backward).abs() <= TOLERANCE * forward.max(1.0));
    }

    /// Property: a point is zero metres from itself.
    #[test]
    fn haversine_to_self_is_zero(a in coord_strategy()) {
        prop_assert!(haversine_distance(a, a).abs() <= TOLERANCE);
    }

    /// Property: distances are non-negative and bounded by half the
    /// circumference.
    #[test]
    fn haversine_is_bounded(a in coord_strategy(), b in coord_strategy()) {
        let metres = haversine_distance(a, b);
        prop_assert!(metres >= 0.0);
        prop_assert!(metres <= std::f64::consts::PI * kerbside_core::EARTH_RADIUS_M + 1.0);
    }

    /// Property: raising the destination elevation never lowers the cost.
    #[test]
    fn energy_cost_is_monotonic_in_end_elevation(
        distance in 0.0_f64..50_000.0,
        duration in 0.0_f64..7_200.0,
        start in -100.0_f64..3_000.0,
        end in -100.0_f64..3_000.0,
        rise in 0.0_f64..500.0,
        weights in weights_strategy(),
    ) {
        let lower = energy_cost(distance, duration, start, end, &weights);
        let higher = energy_cost(distance, duration, start, end + rise, &weights);
        prop_assert!(higher >= lower);
    }

    /// Property: descending legs cost exactly the flat-leg cost.
    #[test]
    fn descents_carry_no_penalty(
        distance in 0.0_f64..50_000.0,
        duration in 0.0_f64..7_200.0,
        start in 0.0_f64..3_000.0,
        fall in 0.0_f64..500.0,
    ) {
        let weights = EnergyWeights::default();
        let flat = energy_cost(distance, duration, start, start, &weights);
        let descending = energy_cost(distance, duration, start, start - fall, &weights);
        prop_assert_eq!(uphill_gain(start, start - fall), 0.0);
        prop_assert!((flat - descending).abs() <= TOLERANCE);
        prop_assert!(descending >= 0.0);
    }
}
