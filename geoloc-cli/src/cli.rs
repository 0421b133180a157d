use std::io::Write;

use clap::{CommandFactory, Parser, error::ErrorKind};
use geoloc_core::{Batch, Config, Geolocator, Outcome};
use tracing::debug;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "geoloc-util",
    version,
    about = "Look up latitude and longitude for US cities and zip codes",
    after_help = "Requires GEOLOCATOR_API_KEY to be set."
)]
pub struct Cli {
    /// List of locations, city & state must be wrapped in quotes, e.g. "Madison, WI".
    #[arg(short, long, num_args = 1.., value_name = "LOCATION")]
    pub locations: Vec<String>,

    /// List of zip codes, e.g. 10003.
    #[arg(short, long, num_args = 1.., value_name = "ZIP")]
    pub zip: Vec<String>,

    /// Locations or zip codes given without a flag.
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let batch = Batch::collect(&self.locations, &self.zip, &self.inputs);
        if batch.is_empty() {
            Cli::command()
                .error(
                    ErrorKind::MissingRequiredArgument,
                    "Please provide a location or zip code using the --locations or --zip flag.",
                )
                .exit();
        }

        debug!(
            queries = batch.queries.len(),
            invalid = batch.invalid.len(),
            "classified inputs"
        );

        let config = Config::load()?;
        let geolocator = Geolocator::from_config(&config)?;
        let outcomes = geolocator.run(&batch).await;

        report(
            &batch,
            &outcomes,
            &mut std::io::stdout().lock(),
            &mut std::io::stderr().lock(),
        )?;

        Ok(())
    }
}

/// Write lookup lines to `out` and every diagnostic to `err`.
fn report(
    batch: &Batch,
    outcomes: &[Outcome],
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<()> {
    for outcome in outcomes {
        match outcome {
            Outcome::Resolved(line) => writeln!(out, "{line}")?,
            Outcome::Failed(e) => writeln!(err, "Error: {e}")?,
        }
    }

    for invalid in &batch.invalid {
        writeln!(err, "{invalid}")?;
    }

    Ok(())
}
