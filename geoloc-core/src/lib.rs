//! Core library for the `geoloc-util` CLI.
//!
//! This crate defines:
//! - Configuration (API key, base URL)
//! - Input classification into zip / named / invalid queries
//! - Abstraction over geocoding providers and the OpenWeather implementation
//! - Result formatting
//!
//! It is used by `geoloc-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod lookup;
pub mod model;
pub mod provider;
pub mod query;

pub use config::Config;
pub use lookup::{Geolocator, Outcome};
pub use model::{LocationResult, format_result};
pub use provider::{GeocodeError, GeocodingProvider, OpenWeatherGeocoder};
pub use query::{Batch, InputSource, InvalidInput, LocationQuery, QueryKind, classify};
