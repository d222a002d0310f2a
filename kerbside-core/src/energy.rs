//! Energy cost of driving one road leg.
//!
//! The model is linear: a rolling term proportional to distance, an idle term
//! proportional to duration, and a penalty for climbing. Descending never
//! earns a credit, because a ground vehicle recovers little of that energy.

use thiserror::Error;

/// Linear weights of the energy model.
///
/// # Examples
/// ```
/// use kerbside_core::EnergyWeights;
///
/// let weights = EnergyWeights::default().with_elevation(30.0);
/// assert_eq!(weights.rolling, 1.0);
/// assert_eq!(weights.elevation, 30.0);
/// assert_eq!(weights.idle, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyWeights {
    /// Cost per metre travelled.
    pub rolling: f64,
    /// Cost per metre climbed.
    pub elevation: f64,
    /// Cost per second spent on the leg.
    pub idle: f64,
}

/// Errors returned by [`EnergyWeights::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EnergyWeightsError {
    /// A weight was negative, NaN or infinite.
    #[error("energy weight `{name}` must be finite and non-negative, got {value}")]
    InvalidWeight {
        /// Name of the offending weight.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl Default for EnergyWeights {
    fn default() -> Self {
        Self {
            rolling: 1.0,
            elevation: 25.0,
            idle: 0.5,
        }
    }
}

impl EnergyWeights {
    /// Set the per-metre rolling weight.
    #[must_use]
    pub const fn with_rolling(mut self, rolling: f64) -> Self {
        self.rolling = rolling;
        self
    }

    /// Set the per-metre climbing weight.
    #[must_use]
    pub const fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    /// Set the per-second idle weight.
    #[must_use]
    pub const fn with_idle(mut self, idle: f64) -> Self {
        self.idle = idle;
        self
    }

    /// Reject weights that would make leg costs negative or undefined.
    ///
    /// # Errors
    ///
    /// Returns [`EnergyWeightsError::InvalidWeight`] naming the first bad
    /// weight.
    pub fn validate(&self) -> Result<(), EnergyWeightsError> {
        [
            ("rolling", self.rolling),
            ("elevation", self.elevation),
            ("idle", self.idle),
        ]
        .into_iter()
        .find(|(_, value)| !(value.is_finite() && *value >= 0.0))
        .map_or(Ok(()), |(name, value)| {
            Err(EnergyWeightsError::InvalidWeight { name, value })
        })
    }
}

/// Metres climbed between two elevations; zero when the leg descends.
///
/// # Examples
/// ```
/// use kerbside_core::uphill_gain;
///
/// assert_eq!(uphill_gain(10.0, 35.0), 25.0);
/// assert_eq!(uphill_gain(35.0, 10.0), 0.0);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "elevation delta")]
pub fn uphill_gain(elevation_start: f64, elevation_end: f64) -> f64 {
    (elevation_end - elevation_start).max(0.0)
}

/// Scalar energy cost of one leg.
///
/// `distance` is in metres, `duration` in seconds, elevations in metres.
///
/// # Examples
/// ```
/// use kerbside_core::{EnergyWeights, energy_cost};
///
/// let weights = EnergyWeights::default();
/// assert_eq!(energy_cost(1000.0, 100.0, 0.0, 50.0, &weights), 2300.0);
/// assert_eq!(energy_cost(1000.0, 100.0, 50.0, 0.0, &weights), 1050.0);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "linear energy model")]
pub fn energy_cost(
    distance: f64,
    duration: f64,
    elevation_start: f64,
    elevation_end: f64,
    weights: &EnergyWeights,
) -> f64 {
    let rolling = distance * weights.rolling;
    let climbing = uphill_gain(elevation_start, elevation_end) * weights.elevation;
    let idle = duration * weights.idle;
    rolling + climbing + idle
}
