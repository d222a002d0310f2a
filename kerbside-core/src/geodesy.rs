//! Great-circle distances that need no network round trip.
//!
//! Callers use these to pre-filter candidate pickups before requesting a
//! road matrix for the survivors.

use geo::Coord;

use crate::Point;

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance in metres between two WGS84 coordinates.
///
/// Coordinates use `x = longitude` and `y = latitude`, in degrees. The result
/// is unspecified for non-finite input.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use kerbside_core::haversine_distance;
///
/// let london = Coord { x: -0.1278, y: 51.5074 };
/// let paris = Coord { x: 2.3522, y: 48.8566 };
/// let metres = haversine_distance(london, paris);
/// assert!((metres - 343_550.0).abs() < 1_000.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_distance(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();
    let d_lat = (to.y - from.y).to_radians();
    let d_lon = (to.x - from.x).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Points lying within `radius_m` metres of `origin`, in input order.
///
/// # Examples
/// ```
/// use kerbside_core::{Point, within_radius};
///
/// let depot = Point::start(0.0, 0.0);
/// let stops = vec![Point::new(1_u64, 0.0, 0.001), Point::new(2_u64, 0.0, 1.0)];
/// let near: Vec<_> = within_radius(&depot, &stops, 500.0).collect();
/// assert_eq!(near.len(), 1);
/// assert_eq!(near[0].id, 1_u64.into());
/// ```
pub fn within_radius<'a>(
    origin: &'a Point,
    points: &'a [Point],
    radius_m: f64,
) -> impl Iterator<Item = &'a Point> + 'a {
    points
        .iter()
        .filter(move |point| origin.haversine_to(point) <= radius_m)
}
