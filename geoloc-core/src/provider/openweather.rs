use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::{borrow::Cow, fmt};
use tracing::{debug, warn};

use crate::{Config, LocationQuery, QueryKind, config::API_KEY_ENV};

use super::{GeocodeError, GeocodingProvider};

/// OpenWeather Geocoding API (`/zip` and `/direct` endpoints).
#[derive(Clone)]
pub struct OpenWeatherGeocoder {
    base_url: String,
    api_key: Option<String>,
    http: Client,
}

impl OpenWeatherGeocoder {
    /// Connections are not kept idle, so every lookup opens its own.
    pub fn new(config: &Config) -> Result<Self, GeocodeError> {
        let http = Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(GeocodeError::Client)?;

        Ok(Self {
            base_url: config.base_url().to_owned(),
            api_key: config.api_key().map(str::to_owned),
            http,
        })
    }

    /// Build the request URL for a classified query.
    ///
    /// Without an API key the `appid` parameter is left empty and the remote
    /// service rejects the request.
    pub fn build_url(&self, query: &LocationQuery) -> Result<String, GeocodeError> {
        let encoded = urlencoding::encode(&query.raw);
        let appid = self.api_key.as_deref().unwrap_or_default();

        match query.kind {
            QueryKind::Zip => Ok(format!(
                "{}/zip?zip={encoded},US&appid={appid}",
                self.base_url
            )),
            QueryKind::Named => Ok(format!(
                "{}/direct?q={encoded},US&limit=1&appid={appid}",
                self.base_url
            )),
            QueryKind::Invalid => Err(GeocodeError::InvalidQuery(query.raw.clone())),
        }
    }
}

/// Mask the `appid` value of a request URL.
fn redact(url: &str) -> Cow<'_, str> {
    let Some(pos) = url.find("appid=") else {
        return url.into();
    };
    let start = pos + "appid=".len();
    let end = url[start..].find('&').map_or(url.len(), |i| start + i);

    if start == end {
        url.into()
    } else {
        format!("{}***{}", &url[..start], &url[end..]).into()
    }
}

impl fmt::Debug for OpenWeatherGeocoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherGeocoder")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

#[async_trait]
impl GeocodingProvider for OpenWeatherGeocoder {
    async fn geocode(&self, query: &LocationQuery) -> Result<Value, GeocodeError> {
        let url = self.build_url(query)?;

        if self.api_key.is_none() {
            warn!("{API_KEY_ENV} is not set; the geocoding request will be rejected");
        }

        let shown = redact(&url).into_owned();
        debug!(kind = %query.kind, url = %shown, "sending geocoding request");

        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| GeocodeError::Request {
                url: shown,
                source: e.without_url(),
            })?;

        // Error payloads are still JSON; the formatter turns them into "no result".
        let status = res.status();
        if !status.is_success() {
            debug!(%status, "geocoding request returned non-success status");
        }

        let body = res
            .text()
            .await
            .map_err(|e| GeocodeError::Body(e.without_url()))?;
        Ok(serde_json::from_str(&body)?)
    }
}
