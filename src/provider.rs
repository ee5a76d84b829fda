use crate::calendar::HolidayCalendar;
use crate::country::{list_codes, Country, Market};
use crate::{rules, Error, Result};

/// Source of holiday calendars.
///
/// Codes are plain strings so that unvalidated user input can be passed
/// straight through; an unknown code is reported by the fetch methods.
pub trait HolidayProvider {
    /// Supported country codes, followed by their aliases when
    /// `include_aliases` is set.
    fn supported_countries(&self, include_aliases: bool) -> Vec<String>;

    /// Supported financial market codes, followed by their aliases when
    /// `include_aliases` is set.
    fn supported_financial(&self, include_aliases: bool) -> Vec<String>;

    /// National holidays of `country` for `years`. The returned calendar
    /// lists the country's subdivisions.
    fn country_holidays(
        &self,
        country: &str,
        years: &[isize],
        observed: bool,
    ) -> Result<HolidayCalendar>;

    /// National plus regional holidays of one subdivision of `country`.
    fn subdivision_holidays(
        &self,
        country: &str,
        subdivision: &str,
        years: &[isize],
        observed: bool,
    ) -> Result<HolidayCalendar>;

    /// Closing days of a financial market.
    fn financial_holidays(
        &self,
        market: &str,
        years: &[isize],
        observed: bool,
    ) -> Result<HolidayCalendar>;
}

impl<P: HolidayProvider + ?Sized> HolidayProvider for &P {
    fn supported_countries(&self, include_aliases: bool) -> Vec<String> {
        (**self).supported_countries(include_aliases)
    }

    fn supported_financial(&self, include_aliases: bool) -> Vec<String> {
        (**self).supported_financial(include_aliases)
    }

    fn country_holidays(
        &self,
        country: &str,
        years: &[isize],
        observed: bool,
    ) -> Result<HolidayCalendar> {
        (**self).country_holidays(country, years, observed)
    }

    fn subdivision_holidays(
        &self,
        country: &str,
        subdivision: &str,
        years: &[isize],
        observed: bool,
    ) -> Result<HolidayCalendar> {
        (**self).subdivision_holidays(country, subdivision, years, observed)
    }

    fn financial_holidays(
        &self,
        market: &str,
        years: &[isize],
        observed: bool,
    ) -> Result<HolidayCalendar> {
        (**self).financial_holidays(market, years, observed)
    }
}

/// Rule-based provider covering every country and market compiled into
/// this build.
///
/// Aliases are accepted wherever a code is; calendars are labelled with
/// the code that was requested.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProvider;

impl BuiltinProvider {
    pub fn country(
        &self,
        country: Country,
        years: &[isize],
        observed: bool,
    ) -> Result<HolidayCalendar> {
        let mut calendar = HolidayCalendar::new(country.code(), years, observed)
            .with_subdivisions(country.subdivisions().iter().copied());
        rules::fill(&mut calendar, rules::country_rules(country), None)?;
        Ok(calendar)
    }

    pub fn market(&self, market: Market, years: &[isize], observed: bool) -> Result<HolidayCalendar> {
        let mut calendar = HolidayCalendar::new(market.code(), years, observed);
        rules::fill(&mut calendar, rules::market_rules(market), None)?;
        Ok(calendar)
    }
}

impl HolidayProvider for BuiltinProvider {
    fn supported_countries(&self, include_aliases: bool) -> Vec<String> {
        list_codes(Country::ALL, include_aliases, Country::aliases)
    }

    fn supported_financial(&self, include_aliases: bool) -> Vec<String> {
        list_codes(Market::ALL, include_aliases, Market::aliases)
    }

    fn country_holidays(
        &self,
        country: &str,
        years: &[isize],
        observed: bool,
    ) -> Result<HolidayCalendar> {
        let resolved: Country = country.parse()?;
        let mut calendar = HolidayCalendar::new(country, years, observed)
            .with_subdivisions(resolved.subdivisions().iter().copied());
        rules::fill(&mut calendar, rules::country_rules(resolved), None)?;
        Ok(calendar)
    }

    fn subdivision_holidays(
        &self,
        country: &str,
        subdivision: &str,
        years: &[isize],
        observed: bool,
    ) -> Result<HolidayCalendar> {
        let resolved: Country = country.parse()?;
        if !resolved.has_subdivision(subdivision) {
            return Err(Error::SubdivisionNotAvailable {
                country: country.to_string(),
                subdivision: subdivision.to_string(),
            });
        }
        let mut calendar = HolidayCalendar::new(country, years, observed)
            .with_subdivision(subdivision)
            .with_subdivisions(resolved.subdivisions().iter().copied());
        rules::fill(
            &mut calendar,
            rules::country_rules(resolved),
            Some(subdivision),
        )?;
        Ok(calendar)
    }

    fn financial_holidays(
        &self,
        market: &str,
        years: &[isize],
        observed: bool,
    ) -> Result<HolidayCalendar> {
        let resolved: Market = market.parse()?;
        let mut calendar = HolidayCalendar::new(market, years, observed);
        rules::fill(&mut calendar, rules::market_rules(resolved), None)?;
        Ok(calendar)
    }
}
