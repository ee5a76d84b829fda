mod calendar;
mod clock;
mod country;
mod date;
pub mod dump;
mod provider;
mod rules;

pub use calendar::{HolidayCalendar, Iter, NAME_SEPARATOR};
pub use clock::{Clock, FixedClock, SystemClock, YearWindow};
pub use country::{Country, Market};
pub use date::{Date, DateExt, Weekday};
pub use dump::{DumpOptions, HolidayDumper, HolidayRow, Quoting};
pub use provider::{BuiltinProvider, HolidayProvider};

/// Represents a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holiday<'a> {
    /// Date of holiday.
    pub date: Date,
    /// Name of holiday. Several names sharing a date are joined with
    /// [`NAME_SEPARATOR`].
    pub name: &'a str,
}

/// National holidays of `country` for `years`, observed dates included.
pub fn get<Y>(country: Country, years: Y) -> Result<HolidayCalendar>
where
    Y: IntoIterator<Item = isize>,
{
    let years: Vec<isize> = years.into_iter().collect();
    BuiltinProvider.country(country, &years, true)
}

pub fn contains(country: Country, date: impl Into<Date>) -> bool {
    let date = date.into();
    get(country, [date.year()]).is_ok_and(|calendar| calendar.contains(date))
}

#[inline]
pub fn contains_in_many<C>(countries: C, date: impl Into<Date>) -> bool
where
    C: IntoIterator<Item = Country>,
{
    let date = date.into();
    countries
        .into_iter()
        .any(|country| contains(country, date))
}

pub type Result<T> = std::result::Result<T, Error>;

/// Error states the holiday crate might encounter.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Holiday is not available for this country.
    #[error("Holiday is not available for country `{0}`")]
    CountryNotAvailable(String),
    /// Holiday is not available for this subdivision.
    #[error("Holiday is not available for subdivision `{subdivision}` of `{country}`")]
    SubdivisionNotAvailable {
        country: String,
        subdivision: String,
    },
    /// Holiday is not available for this financial market.
    #[error("Holiday is not available for market `{0}`")]
    MarketNotAvailable(String),
    /// Holiday is not available for this year.
    #[error("Holiday is not available for year {0}")]
    YearNotAvailable(isize),
    /// Conversion to another date format is not supported.
    #[error("Date is too large for conversion")]
    DateTooLarge,
}
