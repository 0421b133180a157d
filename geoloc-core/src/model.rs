use serde_json::{Number, Value};
use std::fmt;

pub const NO_RESULT: &str = "No valid result found.";

/// A geocoded place as returned by the API.
///
/// Coordinates keep the JSON number as written, so `40.0` prints as `40.0`
/// and `40` as `40`.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationResult {
    pub name: String,
    pub lat: Number,
    pub lon: Number,
}

impl LocationResult {
    /// Pick the result out of a raw API response.
    ///
    /// The direct endpoint answers with an array (first element wins), the zip
    /// endpoint with a single object. Anything without a string `name` and
    /// numeric `lat`/`lon` yields `None`.
    pub fn from_response(response: &Value) -> Option<Self> {
        let candidate = match response {
            Value::Array(items) => items.first()?,
            Value::Object(_) => response,
            _ => return None,
        };

        Some(Self {
            name: candidate.get("name")?.as_str()?.to_owned(),
            lat: candidate.get("lat")?.as_number()?.clone(),
            lon: candidate.get("lon")?.as_number()?.clone(),
        })
    }
}

impl fmt::Display for LocationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location: {}, Lat: {}, Lon: {}", self.name, self.lat, self.lon)
    }
}

/// Render a raw API response as the single output line.
pub fn format_result(response: &Value) -> String {
    LocationResult::from_response(response)
        .map(|result| result.to_string())
        .unwrap_or_else(|| NO_RESULT.to_string())
}
