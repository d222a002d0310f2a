//! Locations visited by a collector: the start position and pickup stops.

use std::fmt;

use geo::Coord;

use crate::geodesy::haversine_distance;

/// Identifier reserved for the synthetic start point of a route.
pub const START_SENTINEL: &str = "__start__";

/// Identifier of a [`Point`].
///
/// Callers use whatever identifies their job records: a numeric row id or an
/// opaque string. In JSON the id is written as a bare number or string.
///
/// # Examples
/// ```
/// use kerbside_core::PointId;
///
/// assert_eq!(PointId::from(7_u64).to_string(), "7");
/// assert_eq!(PointId::from("job-7").to_string(), "job-7");
/// assert!(PointId::start().is_start());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PointId {
    /// Numeric identifier.
    Numeric(u64),
    /// Free-form textual identifier.
    Text(String),
}

impl PointId {
    /// The reserved identifier used for the start of every route.
    #[must_use]
    pub fn start() -> Self {
        Self::Text(START_SENTINEL.to_owned())
    }

    /// Whether this id is the reserved start sentinel.
    #[must_use]
    pub fn is_start(&self) -> bool {
        matches!(self, Self::Text(text) if text == START_SENTINEL)
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<u64> for PointId {
    fn from(value: u64) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for PointId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PointId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A location to be visited, in WGS84 degrees.
///
/// # Examples
/// ```
/// use kerbside_core::Point;
///
/// let stop = Point::new("bin-12", 51.5, -0.12);
/// assert_eq!(stop.coord().x, -0.12);
/// assert_eq!(stop.coord().y, 51.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Identifier, unique among the points of one optimisation call.
    pub id: PointId,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Point {
    /// Construct a point.
    pub fn new(id: impl Into<PointId>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
        }
    }

    /// Construct the synthetic start point for a route.
    ///
    /// # Examples
    /// ```
    /// use kerbside_core::Point;
    ///
    /// let start = Point::start(51.5, -0.1);
    /// assert!(start.id.is_start());
    /// ```
    #[must_use]
    pub fn start(latitude: f64, longitude: f64) -> Self {
        Self::new(PointId::start(), latitude, longitude)
    }

    /// Position as a `geo` coordinate (`x = longitude`, `y = latitude`).
    #[must_use]
    pub const fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }

    /// Great-circle distance to `other` in metres.
    #[must_use]
    pub fn haversine_to(&self, other: &Self) -> f64 {
        haversine_distance(self.coord(), other.coord())
    }

    /// Whether both coordinates are finite and inside the WGS84 range.
    #[must_use]
    pub fn has_valid_coordinates(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0, true)]
    #[case(90.0, 180.0, true)]
    #[case(-90.0, -180.0, true)]
    #[case(90.5, 0.0, false)]
    #[case(0.0, -180.5, false)]
    #[case(f64::NAN, 0.0, false)]
    #[case(0.0, f64::INFINITY, false)]
    fn coordinate_range_is_checked(
        #[case] latitude: f64,
        #[case] longitude: f64,
        #[case] valid: bool,
    ) {
        let point = Point::new(1_u64, latitude, longitude);
        assert_eq!(point.has_valid_coordinates(), valid);
    }

    #[rstest]
    fn only_the_sentinel_is_the_start() {
        assert!(PointId::start().is_start());
        assert!(!PointId::from("start").is_start());
        assert!(!PointId::from(0_u64).is_start());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(r#"{"id": 42, "latitude": 1.0, "longitude": 2.0}"#, PointId::Numeric(42))]
    #[case(r#"{"id": "job-42", "latitude": 1.0, "longitude": 2.0}"#, PointId::from("job-42"))]
    fn point_ids_decode_from_numbers_and_strings(#[case] json: &str, #[case] expected: PointId) {
        let point: Point = serde_json::from_str(json).expect("point should decode");
        assert_eq!(point.id, expected);
        assert_eq!(point.coord(), Coord { x: 2.0, y: 1.0 });
    }
}
