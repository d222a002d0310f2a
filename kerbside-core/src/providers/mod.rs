//! External data the optimizer depends on.
//!
//! The [`RoadMatrixProvider`] trait abstracts the retrieval of pairwise road
//! distances and durations, and [`ElevationProvider`] the retrieval of ground
//! elevations. Both take the full ordered point list and answer in a single
//! batched call.
//!
//! Errors are returned when inputs are invalid, e.g. an empty slice, or when
//! the backing service fails or answers with a malformed payload.

mod error;
mod provider;

pub use error::{ProviderError, ProviderKind};
pub use provider::{ElevationProvider, NoElevationProvider, RoadMatrixProvider};
