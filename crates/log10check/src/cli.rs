//! Command-line interface for conformance runs.

use clap::{ArgAction, Parser, ValueEnum};
use log10check_core::prelude::*;
use tracing::{info, warn};

/// Floating-point precision(s) to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrecisionArg {
    /// binary32 (`f32`)
    Single,
    /// binary64 (`f64`)
    Double,
    /// Double, then single
    Both,
}

/// Implementation of `log10` to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImplementationArg {
    /// The platform math library
    Std,
    /// `ln(x) / ln(10)`
    LnRatio,
}

#[derive(Parser, Debug)]
#[command(name = "log10check")]
#[command(author, version, about = "Check a log10 implementation against a conformance table")]
pub struct Cli {
    /// Precision to check
    #[arg(long, value_enum, default_value_t = PrecisionArg::Double)]
    pub precision: PrecisionArg,

    /// Implementation to check
    #[arg(long = "implementation", value_enum, default_value_t = ImplementationArg::Std)]
    pub implementation: ImplementationArg,

    /// Run every check instead of stopping at the first failure
    #[arg(long)]
    pub collect_all: bool,

    /// Also check 10^log10(x) ≈ x for each positive table input
    #[arg(long)]
    pub round_trip: bool,

    /// Multiply every non-zero tolerance by this factor
    #[arg(long, value_name = "FACTOR", default_value_t = 1.0)]
    pub tolerance_scale: f64,

    /// Relative round-trip tolerance per decade
    #[arg(long, value_name = "TOL")]
    pub round_trip_tolerance: Option<f64>,

    /// Evaluate the table in parallel (with --collect-all)
    #[arg(long)]
    pub parallel: bool,

    /// Print reports as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Build the run configuration from the flags.
    pub fn run_config(&self) -> Result<RunConfig> {
        let mut builder = RunConfigBuilder::new()
            .collect_all(self.collect_all)
            .round_trip(self.round_trip)
            .tolerance_scale(self.tolerance_scale)
            .parallel(self.parallel);
        if let Some(tolerance) = self.round_trip_tolerance {
            builder = builder.round_trip_tolerance(tolerance);
        }
        builder.build()
    }

    /// Precisions to run, in order.
    pub fn precisions(&self) -> Vec<Precision> {
        match self.precision {
            PrecisionArg::Single => vec![Precision::Single],
            PrecisionArg::Double => vec![Precision::Double],
            PrecisionArg::Both => vec![Precision::Double, Precision::Single],
        }
    }

    /// Default `tracing` filter for the verbosity flag.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Run every requested precision and return the reports.
///
/// In fail-fast mode a failing precision ends the run.
pub fn run(cli: &Cli) -> Result<Vec<ConformanceReport>> {
    let config = cli.run_config()?;
    let mut reports = Vec::new();

    for precision in cli.precisions() {
        let report = match precision {
            Precision::Double => run_precision::<f64>(cli.implementation, &config)?,
            Precision::Single => run_precision::<f32>(cli.implementation, &config)?,
        };
        let failed = !report.is_success();
        reports.push(report);

        if failed && config.is_fail_fast() {
            warn!(%precision, "stopping after failed conformance run");
            break;
        }
    }

    info!(runs = reports.len(), "done");
    Ok(reports)
}

fn run_precision<T>(implementation: ImplementationArg, config: &RunConfig) -> Result<ConformanceReport>
where
    T: ConformanceTable,
    StdLog10: Log10<T>,
    LnRatioLog10: Log10<T>,
{
    let mut callback = TracingCallback::new();
    let report = match implementation {
        ImplementationArg::Std => Log10Validator::with_config(StdLog10, config.clone())?
            .run_with_callback(T::cases(), &nan_inputs::<T>(), &mut callback),
        ImplementationArg::LnRatio => Log10Validator::with_config(LnRatioLog10, config.clone())?
            .run_with_callback(T::cases(), &nan_inputs::<T>(), &mut callback),
    };
    Ok(report)
}
