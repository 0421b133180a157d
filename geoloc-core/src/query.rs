//! Input classification.
//!
//! Every raw string, whichever flag it came from, goes through [`classify`].
//! Only `Zip` and `Named` queries ever reach the network. Digit, word and
//! space classes are ASCII-only.

use regex::Regex;
use std::{fmt, sync::LazyLock};

static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?-u:\d){5}$").expect("zip pattern is valid"));

static NAMED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^,]+,(?-u:\s)*(?-u:\w){2}$").expect("named pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// 5-digit US postal code.
    Zip,
    /// `"City, ST"`.
    Named,
    Invalid,
}

impl QueryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::Zip => "zip",
            QueryKind::Named => "named",
            QueryKind::Invalid => "invalid",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn classify(input: &str) -> QueryKind {
    if ZIP_RE.is_match(input) {
        QueryKind::Zip
    } else if NAMED_RE.is_match(input) {
        QueryKind::Named
    } else {
        QueryKind::Invalid
    }
}

/// A raw input string together with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    pub raw: String,
    pub kind: QueryKind,
}

impl LocationQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let kind = classify(&raw);
        Self { raw, kind }
    }

    pub fn is_valid(&self) -> bool {
        self.kind != QueryKind::Invalid
    }
}

/// Where an input string came from on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Locations,
    Zip,
    Positional,
}

/// An input rejected by the classifier, ready to be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// One or two adjacent tokens, e.g. an unquoted `Madison,` `WI`.
    Location(String),
    Zip(String),
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::Location(loc) => write!(
                f,
                "Error: Invalid location format for '{loc}'. Please wrap city and state in quotes."
            ),
            InvalidInput::Zip(zip) => write!(f, "Error: Invalid zip code: {zip}"),
        }
    }
}

/// All inputs of one invocation, classified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    /// Valid queries in the order they will be looked up.
    pub queries: Vec<LocationQuery>,
    pub invalid: Vec<InvalidInput>,
}

impl Batch {
    /// Classify the inputs of one invocation.
    ///
    /// Positional arguments are only considered when both flag lists are empty.
    /// Locations are looked up before zips.
    pub fn collect(locations: &[String], zips: &[String], positional: &[String]) -> Self {
        let mut batch = Self::default();

        if locations.is_empty() && zips.is_empty() {
            batch.extend(InputSource::Positional, positional);
        } else {
            batch.extend(InputSource::Locations, locations);
            batch.extend(InputSource::Zip, zips);
        }

        batch
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty() && self.invalid.is_empty()
    }

    fn extend(&mut self, source: InputSource, inputs: &[String]) {
        let mut rejected = Vec::new();

        for input in inputs {
            let query = LocationQuery::new(input.as_str());
            if query.is_valid() {
                self.queries.push(query);
            } else {
                rejected.push(query.raw);
            }
        }

        match source {
            InputSource::Zip => {
                self.invalid
                    .extend(rejected.into_iter().map(InvalidInput::Zip));
            }
            InputSource::Locations | InputSource::Positional => {
                self.invalid.extend(
                    rejected
                        .chunks(2)
                        .map(|pair| InvalidInput::Location(pair.join(" "))),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case("33101", QueryKind::Zip)]
    #[case("00000", QueryKind::Zip)]
    #[case("Madison, WI", QueryKind::Named)]
    #[case("Chicago,IL", QueryKind::Named)]
    #[case("New York,   NY", QueryKind::Named)]
    #[case("0000000000", QueryKind::Invalid)]
    #[case("1234", QueryKind::Invalid)]
    #[case("Madison,", QueryKind::Invalid)]
    #[case("WI", QueryKind::Invalid)]
    #[case("Madison, Wisconsin", QueryKind::Invalid)]
    #[case("Madison WI", QueryKind::Invalid)]
    #[case("", QueryKind::Invalid)]
    #[case("١٢٣٤٥", QueryKind::Invalid)]
    #[case("１２３４５", QueryKind::Invalid)]
    #[case("Zürich, ÉÜ", QueryKind::Invalid)]
    #[case("Zürich,\u{3000}WI", QueryKind::Invalid)]
    #[case("Zürich, WI", QueryKind::Named)]
    fn classifies_inputs(#[case] input: &str, #[case] expected: QueryKind) {
        assert_eq!(classify(input), expected);
    }

    #[test]
    fn every_five_digit_string_is_a_zip() {
        for n in (0..100_000).step_by(7_919) {
            let zip = format!("{n:05}");
            assert_eq!(classify(&zip), QueryKind::Zip, "{zip}");
        }
    }

    #[test]
    fn locations_flag_accepts_zips_and_names_in_order() {
        let batch = Batch::collect(
            &strings(&["Madison, WI", "11208", "Chicago, IL"]),
            &[],
            &[],
        );

        let raws: Vec<_> = batch.queries.iter().map(|q| q.raw.as_str()).collect();
        assert_eq!(raws, ["Madison, WI", "11208", "Chicago, IL"]);
        assert_eq!(batch.queries[1].kind, QueryKind::Zip);
        assert!(batch.invalid.is_empty());
    }

    #[test]
    fn unquoted_city_and_state_are_reported_as_one_entry() {
        let batch = Batch::collect(
            &strings(&["Madison,", "WI", "11208", "Chicago, IL"]),
            &[],
            &[],
        );

        assert_eq!(batch.queries.len(), 2);
        assert_eq!(
            batch.invalid,
            vec![InvalidInput::Location("Madison, WI".into())]
        );
        assert_eq!(
            batch.invalid[0].to_string(),
            "Error: Invalid location format for 'Madison, WI'. Please wrap city and state in quotes."
        );
    }

    #[test]
    fn positional_inputs_ignored_when_flags_present() {
        let batch = Batch::collect(&[], &strings(&["10003"]), &strings(&["Madison, WI"]));

        assert_eq!(batch.queries, vec![LocationQuery::new("10003")]);
    }

    #[test]
    fn positional_inputs_classified_without_flags() {
        let batch = Batch::collect(&[], &[], &strings(&["Madison, WI", "bogus"]));

        assert_eq!(batch.queries, vec![LocationQuery::new("Madison, WI")]);
        assert_eq!(batch.invalid, vec![InvalidInput::Location("bogus".into())]);
    }

    #[test]
    fn invalid_zip_is_reported_per_value() {
        let batch = Batch::collect(&[], &strings(&["0000000000", "123"]), &[]);

        assert!(batch.queries.is_empty());
        assert_eq!(
            batch.invalid.iter().map(ToString::to_string).collect::<Vec<_>>(),
            [
                "Error: Invalid zip code: 0000000000",
                "Error: Invalid zip code: 123"
            ]
        );
    }

    #[test]
    fn empty_inputs_produce_empty_batch() {
        assert!(Batch::collect(&[], &[], &[]).is_empty());
    }
}
