//! CSV dump of holiday calendars.
//!
//! Output starts with the header `country,subdivision,date,holiday` and has
//! one row per holiday. The list of codes being dumped is written to a
//! separate diagnostics stream before the CSV body.

use std::io::Write;

use tracing::{debug, info};

use crate::calendar::HolidayCalendar;
use crate::clock::{Clock, YearWindow};
use crate::date::Date;
use crate::provider::HolidayProvider;

pub const HEADER: [&str; 4] = ["country", "subdivision", "date", "holiday"];

pub type Result<T> = std::result::Result<T, DumpError>;

#[derive(thiserror::Error, Debug)]
pub enum DumpError {
    /// Fetching a calendar failed. Aborts the remaining codes.
    #[error(transparent)]
    Provider(#[from] crate::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Quoting applied to CSV fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Quoting {
    /// Quote fields containing a delimiter, quote or line break.
    #[default]
    Necessary,
    /// Write every field verbatim. Names containing a comma produce rows
    /// with extra columns.
    Never,
}

impl Quoting {
    fn style(&self) -> csv::QuoteStyle {
        match self {
            Quoting::Necessary => csv::QuoteStyle::Necessary,
            Quoting::Never => csv::QuoteStyle::Never,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpOptions {
    /// Include the substitute dates of holidays falling on a weekend.
    pub observed: bool,
    /// After each country, dump every one of its subdivisions.
    pub subdivisions: bool,
    /// List the supported financial markets and dump their calendars after
    /// the countries.
    pub financial: bool,
    pub quoting: Quoting,
}

impl Default for DumpOptions {
    fn default() -> Self {
        DumpOptions {
            observed: true,
            subdivisions: false,
            financial: false,
            quoting: Quoting::default(),
        }
    }
}

/// One line of the CSV body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayRow<'a> {
    pub code: &'a str,
    pub subdivision: Option<&'a str>,
    pub date: Date,
    pub name: &'a str,
}

impl HolidayRow<'_> {
    pub fn fields(&self) -> [String; 4] {
        [
            self.code.to_string(),
            self.subdivision.unwrap_or_default().to_string(),
            self.date.to_string(),
            self.name.to_string(),
        ]
    }
}

/// Dumps the holidays of the previous, current and next year.
pub struct HolidayDumper<P, C> {
    provider: P,
    clock: C,
    options: DumpOptions,
}

impl<P, C> HolidayDumper<P, C>
where
    P: HolidayProvider,
    C: Clock,
{
    pub fn new(provider: P, clock: C) -> Self {
        HolidayDumper {
            provider,
            clock,
            options: DumpOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DumpOptions) -> Self {
        self.options = options;
        self
    }

    /// The three years around the clock's current year.
    pub fn window(&self) -> crate::Result<YearWindow> {
        YearWindow::from_clock(&self.clock)
    }

    /// The codes given on the command line, untouched, or every supported
    /// country when none are given.
    pub fn resolve_countries(&self, args: &[String]) -> Vec<String> {
        if args.is_empty() {
            self.provider.supported_countries(false)
        } else {
            args.to_vec()
        }
    }

    pub fn fetch(&self, country: &str, window: &YearWindow) -> crate::Result<HolidayCalendar> {
        self.provider
            .country_holidays(country, &window.years(), self.options.observed)
    }

    pub fn fetch_subdivision(
        &self,
        country: &str,
        subdivision: &str,
        window: &YearWindow,
    ) -> crate::Result<HolidayCalendar> {
        self.provider.subdivision_holidays(
            country,
            subdivision,
            &window.years(),
            self.options.observed,
        )
    }

    pub fn fetch_financial(
        &self,
        market: &str,
        window: &YearWindow,
    ) -> crate::Result<HolidayCalendar> {
        self.provider
            .financial_holidays(market, &window.years(), self.options.observed)
    }

    /// Writes the CSV dump for `args` to `out`, returning the number of
    /// rows written.
    ///
    /// Codes are processed one after the other and `out` is flushed after
    /// each of them. The first failing fetch stops the dump; rows written
    /// for earlier codes are kept.
    pub fn run<W, D>(&self, args: &[String], out: W, mut diagnostics: D) -> Result<usize>
    where
        W: Write,
        D: Write,
    {
        let window = self.window()?;
        let countries = self.resolve_countries(args);
        writeln!(diagnostics, "{countries:?}")?;

        let markets = if self.options.financial {
            let markets = self.provider.supported_financial(false);
            writeln!(diagnostics, "{markets:?}")?;
            markets
        } else {
            Vec::new()
        };

        let mut writer = csv::WriterBuilder::new()
            .quote_style(self.options.quoting.style())
            .from_writer(out);
        writer.write_record(HEADER)?;
        writer.flush()?;

        let mut rows = 0;
        for country in &countries {
            let calendar = self.fetch(country, &window)?;
            debug!(%country, holidays = calendar.len(), "fetched calendar");
            rows += write_calendar(&mut writer, country, None, &calendar)?;

            if self.options.subdivisions {
                for subdivision in calendar.subdivisions() {
                    let regional = self.fetch_subdivision(country, subdivision, &window)?;
                    debug!(%country, %subdivision, holidays = regional.len(), "fetched calendar");
                    rows += write_calendar(
                        &mut writer,
                        country,
                        Some(subdivision.as_str()),
                        &regional,
                    )?;
                }
            }
            writer.flush()?;
        }

        for market in &markets {
            let calendar = self.fetch_financial(market, &window)?;
            debug!(%market, holidays = calendar.len(), "fetched calendar");
            rows += write_calendar(&mut writer, market, None, &calendar)?;
            writer.flush()?;
        }

        info!(
            countries = countries.len(),
            markets = markets.len(),
            rows,
            %window,
            "dump complete"
        );
        Ok(rows)
    }
}

fn write_calendar<W: Write>(
    writer: &mut csv::Writer<W>,
    code: &str,
    subdivision: Option<&str>,
    calendar: &HolidayCalendar,
) -> Result<usize> {
    let mut rows = 0;
    for holiday in calendar {
        let row = HolidayRow {
            code,
            subdivision,
            date: holiday.date,
            name: holiday.name,
        };
        writer.write_record(row.fields())?;
        rows += 1;
    }
    Ok(rows)
}
