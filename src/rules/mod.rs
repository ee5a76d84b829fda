//! Rule sets behind [`BuiltinProvider`](crate::BuiltinProvider).
//!
//! Each rule set lists the canonical holidays of a single year. Observed
//! dates are derived afterwards from the whole multi-year list, so that a
//! holiday on January 1st can be observed on December 31st of the previous
//! year and substitutes never land on another holiday.

use std::collections::BTreeSet;

use crate::calendar::HolidayCalendar;
use crate::country::{Country, Market};
use crate::date::{Date, Weekday};
use crate::{Error, Result};

#[cfg(feature = "CA")]
mod ca;
#[cfg(feature = "DE")]
mod de;
#[cfg(feature = "ECB")]
mod ecb;
#[cfg(feature = "FR")]
mod fr;
#[cfg(feature = "GB")]
mod gb;
#[cfg(feature = "NYSE")]
mod nyse;
#[cfg(feature = "US")]
mod us;

include!(concat!(env!("OUT_DIR"), "/year_range.rs"));

/// Fills in the canonical holidays of one year, optionally including the
/// supplementary holidays of a subdivision.
pub(crate) type Populate = fn(&mut YearHolidays, Option<&str>) -> Result<()>;

pub(crate) fn country_rules(country: Country) -> Populate {
    match country {
        #[cfg(feature = "CA")]
        Country::CA => ca::populate,
        #[cfg(feature = "DE")]
        Country::DE => de::populate,
        #[cfg(feature = "FR")]
        Country::FR => fr::populate,
        #[cfg(feature = "GB")]
        Country::GB => gb::populate,
        #[cfg(feature = "US")]
        Country::US => us::populate,
    }
}

pub(crate) fn market_rules(market: Market) -> Populate {
    match market {
        #[cfg(feature = "ECB")]
        Market::ECB => ecb::populate,
        #[cfg(feature = "NYSE")]
        Market::NYSE => nyse::populate,
    }
}

/// How a holiday falling on a weekend is moved to a working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Observance {
    /// Saturday to the preceding Friday, Sunday to the following Monday.
    NearestWeekday,
    /// Saturday or Sunday to the next weekday that is not a holiday itself.
    NextWorkday,
    /// Sunday to the following Monday. Saturdays are not moved.
    SundayToMonday,
}

impl Observance {
    fn shift(&self, date: Date, taken: &BTreeSet<Date>) -> Option<Date> {
        match (self, date.weekday()) {
            (Observance::NearestWeekday, Weekday::Saturday) => Some(date.pred()),
            (Observance::NearestWeekday, Weekday::Sunday)
            | (Observance::SundayToMonday, Weekday::Sunday) => Some(date.succ()),
            (Observance::NextWorkday, weekday) if weekday.is_weekend() => {
                let mut shifted = date.succ();
                while shifted.weekday().is_weekend() || taken.contains(&shifted) {
                    shifted = shifted.succ();
                }
                Some(shifted)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry {
    date: Date,
    name: &'static str,
    observance: Option<Observance>,
}

/// One-off holidays: `(year, month, day, name)`.
pub(crate) type Special = (isize, usize, usize, &'static str);

/// Canonical holidays of a single year.
pub(crate) struct YearHolidays {
    year: isize,
    entries: Vec<Entry>,
}

impl YearHolidays {
    pub(crate) fn new(year: isize) -> Self {
        YearHolidays {
            year,
            entries: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn year(&self) -> isize {
        self.year
    }

    pub(crate) fn add(&mut self, date: Date, name: &'static str) {
        self.entries.push(Entry {
            date,
            name,
            observance: None,
        });
    }

    pub(crate) fn add_observed(&mut self, date: Date, name: &'static str, observance: Observance) {
        self.entries.push(Entry {
            date,
            name,
            observance: Some(observance),
        });
    }

    /// Adds `month`/`day` of the current year.
    #[inline]
    pub(crate) fn fixed(&mut self, month: usize, day: usize, name: &'static str) {
        self.add(Date::from_ymd(self.year, month, day), name);
    }

    #[inline]
    pub(crate) fn fixed_observed(
        &mut self,
        month: usize,
        day: usize,
        name: &'static str,
        observance: Observance,
    ) {
        self.add_observed(Date::from_ymd(self.year, month, day), name, observance);
    }

    /// Adds the entries of `days` that fall into the current year.
    pub(crate) fn specials(&mut self, days: &[Special]) {
        for &(year, month, day, name) in days {
            if year == self.year {
                self.add(Date::from_ymd(year, month, day), name);
            }
        }
    }

    /// Easter Sunday of the current year.
    pub(crate) fn easter(&self) -> Result<Date> {
        easter(self.year)
    }
}

/// Gregorian Easter Sunday.
pub(crate) fn easter(year: isize) -> Result<Date> {
    let y = i32::try_from(year).map_err(|_| Error::YearNotAvailable(year))?;
    let easter = computus::gregorian(y).map_err(|_| Error::YearNotAvailable(year))?;
    Ok(Date::from_ymd(
        easter.year as isize,
        easter.month as usize,
        easter.day as usize,
    ))
}

/// The `n`-th (1-based) `weekday` of a month.
pub(crate) fn nth_weekday(year: isize, month: usize, weekday: Weekday, n: isize) -> Date {
    let first = Date::from_ymd(year, month, 1);
    let offset = (weekday.index() - first.weekday().index()).rem_euclid(7);
    first.add_days(offset + 7 * (n - 1))
}

pub(crate) fn last_weekday(year: isize, month: usize, weekday: Weekday) -> Date {
    let last = Date::end_of_month(year, month);
    let offset = (last.weekday().index() - weekday.index()).rem_euclid(7);
    last.add_days(-offset)
}

/// The closest `weekday` strictly before `date`.
pub(crate) fn weekday_before(date: Date, weekday: Weekday) -> Date {
    let offset = (date.weekday().index() - weekday.index() - 1).rem_euclid(7) + 1;
    date.add_days(-offset)
}

pub(crate) fn check_year(year: isize) -> Result<()> {
    if (DATA_MIN_YEAR..=DATA_MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(Error::YearNotAvailable(year))
    }
}

/// Evaluates `populate` for the calendar's years and fills the calendar.
///
/// Neighbouring years are evaluated too, since observed dates may cross a
/// year boundary. Entries outside the calendar's years are dropped by
/// [`HolidayCalendar::insert`].
pub(crate) fn fill(
    calendar: &mut HolidayCalendar,
    populate: Populate,
    subdivision: Option<&str>,
) -> Result<()> {
    for &year in calendar.years() {
        check_year(year)?;
    }

    let evaluated: BTreeSet<isize> = calendar
        .years()
        .iter()
        .flat_map(|&year| [year - 1, year, year + 1])
        .filter(|year| check_year(*year).is_ok())
        .collect();

    let mut entries = Vec::new();
    for year in evaluated {
        let mut holidays = YearHolidays::new(year);
        populate(&mut holidays, subdivision)?;
        entries.extend(holidays.entries);
    }
    entries.sort_by_key(|it| it.date);

    for entry in &entries {
        calendar.insert(entry.date, entry.name);
    }
    if calendar.observed() {
        for (date, name) in observed_dates(&entries) {
            calendar.insert(date, name);
        }
    }

    Ok(())
}

/// Computes substitute dates for `entries`, which must be sorted by date.
fn observed_dates(entries: &[Entry]) -> Vec<(Date, String)> {
    let mut taken: BTreeSet<Date> = entries.iter().map(|it| it.date).collect();
    let mut observed = Vec::new();

    for entry in entries {
        let Some(observance) = entry.observance else {
            continue;
        };
        if let Some(date) = observance.shift(entry.date, &taken) {
            taken.insert(date);
            observed.push((date, format!("{} (observed)", entry.name)));
        }
    }

    observed
}
