use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use holiday_dump::{
    BuiltinProvider, Clock, DumpOptions, FixedClock, HolidayDumper, Quoting, SystemClock,
};
use tracing_subscriber::EnvFilter;

/// Print public holidays of the previous, current and next year as CSV.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Country codes to dump; every supported country when omitted.
    countries: Vec<String>,

    /// Year the three year window is centred on; defaults to the current year.
    #[arg(long, env = "HOLIDAY_DUMP_YEAR")]
    year: Option<isize>,

    /// Also dump each country's subdivisions.
    #[arg(long)]
    subdivisions: bool,

    /// Also list and dump the supported financial market calendars.
    #[arg(long)]
    financial: bool,

    /// Leave out substitute dates of holidays falling on a weekend.
    #[arg(long)]
    no_observed: bool,

    /// Quoting of CSV fields.
    #[arg(long, value_enum, default_value_t = QuoteArg::Necessary)]
    quote: QuoteArg,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum QuoteArg {
    Necessary,
    Never,
}

impl From<QuoteArg> for Quoting {
    fn from(value: QuoteArg) -> Self {
        match value {
            QuoteArg::Necessary => Quoting::Necessary,
            QuoteArg::Never => Quoting::Never,
        }
    }
}

impl Args {
    fn options(&self) -> DumpOptions {
        DumpOptions {
            observed: !self.no_observed,
            subdivisions: self.subdivisions,
            financial: self.financial,
            quoting: self.quote.into(),
        }
    }
}

fn dump(args: &Args, clock: impl Clock) -> anyhow::Result<usize> {
    let stdout = io::stdout().lock();
    let stderr = io::stderr().lock();
    HolidayDumper::new(BuiltinProvider, clock)
        .with_options(args.options())
        .run(&args.countries, stdout, stderr)
        .context("failed to dump holidays")
}

fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let result = match args.year {
        Some(year) => dump(&args, FixedClock(year)),
        None => dump(&args, SystemClock),
    };

    ExitCode::from(report(result))
}

/// Logs a failed dump and maps the outcome to a process exit status.
fn report(result: anyhow::Result<usize>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(e) => {
            tracing::error!("{e:#}");
            1
        }
    }
}
