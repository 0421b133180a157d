use tracing::debug;

use crate::{
    Batch, Config, LocationQuery,
    model::format_result,
    provider::{GeocodeError, GeocodingProvider, provider_from_config},
};

/// What happened to one query.
#[derive(Debug)]
pub enum Outcome {
    /// Formatted output line, possibly "No valid result found.".
    Resolved(String),
    Failed(GeocodeError),
}

/// Runs classified queries against a provider, one at a time.
#[derive(Debug)]
pub struct Geolocator {
    provider: Box<dyn GeocodingProvider>,
}

impl Geolocator {
    pub fn new(provider: Box<dyn GeocodingProvider>) -> Self {
        Self { provider }
    }

    pub fn from_config(config: &Config) -> Result<Self, GeocodeError> {
        Ok(Self::new(provider_from_config(config)?))
    }

    pub async fn lookup(&self, query: &LocationQuery) -> Outcome {
        debug!(query = %query.raw, kind = %query.kind, "looking up");

        match self.provider.geocode(query).await {
            Ok(response) => Outcome::Resolved(format_result(&response)),
            Err(err) => Outcome::Failed(err),
        }
    }

    /// Look up every valid query of the batch in input order.
    ///
    /// A failed lookup never stops the remaining ones.
    pub async fn run(&self, batch: &Batch) -> Vec<Outcome> {
        let mut outcomes = Vec::with_capacity(batch.queries.len());
        for query in &batch.queries {
            outcomes.push(self.lookup(query).await);
        }
        outcomes
    }
}
