use crate::{Config, LocationQuery};
use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

pub use openweather::OpenWeatherGeocoder;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("cannot geocode invalid input '{0}'")]
    InvalidQuery(String),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("failed to parse response JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait]
pub trait GeocodingProvider: Send + Sync + Debug {
    /// Look up a single classified query and return the raw JSON response.
    async fn geocode(&self, query: &LocationQuery) -> Result<Value, GeocodeError>;
}

/// Construct the default provider from config.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn GeocodingProvider>, GeocodeError> {
    Ok(Box::new(OpenWeatherGeocoder::new(config)?))
}
