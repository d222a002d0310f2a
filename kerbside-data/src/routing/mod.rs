//! HTTP-based road matrix and elevation providers.
//!
//! This module provides [`OsrmRoadMatrixProvider`], an implementation of
//! [`kerbside_core::RoadMatrixProvider`] backed by the OSRM Table API, and
//! [`OpenElevationProvider`], an implementation of
//! [`kerbside_core::ElevationProvider`] backed by the Open-Elevation lookup
//! API.
//!
//! # Architecture
//!
//! The provider traits are synchronous, keeping the core library embeddable
//! in synchronous contexts. Each provider owns an HTTP client and a Tokio
//! runtime and blocks on async calls internally.
//!
//! # Example
//!
//! ```no_run
//! use kerbside_data::routing::{HttpProviderConfig, OsrmRoadMatrixProvider};
//! use kerbside_core::{Point, RoadMatrixProvider};
//! use std::time::Duration;
//!
//! let config = HttpProviderConfig::new("http://localhost:5000")
//!     .with_timeout(Duration::from_secs(60))
//!     .with_user_agent("my-app/1.0");
//! let provider = OsrmRoadMatrixProvider::with_config(config)?.with_profile("driving");
//!
//! let points = vec![Point::start(51.5, -0.1), Point::new(1_u64, 51.6, -0.2)];
//! let matrix = provider.road_matrix(&points)?;
//! println!("First leg: {:?}", matrix.leg(0, 1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod backend;
mod config;
mod elevation;
mod matrix_provider;
mod osrm;

#[doc(hidden)]
pub mod test_support;

pub use config::{
    DEFAULT_ELEVATION_BASE_URL, DEFAULT_OSRM_BASE_URL, DEFAULT_USER_AGENT, HttpProviderConfig,
    ProviderBuildError,
};
pub use elevation::OpenElevationProvider;
pub use matrix_provider::{DEFAULT_OSRM_PROFILE, OsrmRoadMatrixProvider};
