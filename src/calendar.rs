use std::collections::BTreeMap;

use crate::{date::Date, Holiday};

/// Separator used when two differently named holidays share a date.
pub const NAME_SEPARATOR: &str = "; ";

/// Holidays of one country (or one of its subdivisions, or one market) for
/// a fixed set of years, keyed and iterated by ascending date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    code: String,
    subdivision: Option<String>,
    years: Vec<isize>,
    observed: bool,
    subdivisions: Vec<String>,
    entries: BTreeMap<Date, String>,
}

impl HolidayCalendar {
    pub fn new(code: impl Into<String>, years: &[isize], observed: bool) -> Self {
        let mut years = years.to_vec();
        years.sort_unstable();
        years.dedup();
        HolidayCalendar {
            code: code.into(),
            subdivision: None,
            years,
            observed,
            subdivisions: Vec::new(),
            entries: BTreeMap::new(),
        }
    }

    pub fn with_subdivision(mut self, subdivision: impl Into<String>) -> Self {
        self.subdivision = Some(subdivision.into());
        self
    }

    /// Records the subdivisions known for this calendar's country.
    pub fn with_subdivisions<I, S>(mut self, subdivisions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subdivisions = subdivisions.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a holiday, returning whether the calendar changed.
    ///
    /// Dates outside the calendar's years are ignored. A second, different
    /// name on an occupied date is appended after [`NAME_SEPARATOR`].
    pub fn insert(&mut self, date: Date, name: impl AsRef<str>) -> bool {
        if !self.covers(date) {
            return false;
        }
        let name = name.as_ref();
        match self.entries.get_mut(&date) {
            Some(existing) => {
                if existing.split(NAME_SEPARATOR).any(|it| it == name) {
                    return false;
                }
                existing.push_str(NAME_SEPARATOR);
                existing.push_str(name);
            }
            None => {
                self.entries.insert(date, name.to_string());
            }
        }
        true
    }

    /// Whether `date` falls into one of the calendar's years.
    pub fn covers(&self, date: Date) -> bool {
        self.years.binary_search(&date.year()).is_ok()
    }

    pub fn get(&self, date: impl Into<Date>) -> Option<&str> {
        self.entries.get(&date.into()).map(String::as_str)
    }

    #[inline]
    pub fn contains(&self, date: impl Into<Date>) -> bool {
        self.entries.contains_key(&date.into())
    }

    /// Holidays in ascending date order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.entries.keys().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn subdivision(&self) -> Option<&str> {
        self.subdivision.as_deref()
    }

    pub fn years(&self) -> &[isize] {
        &self.years
    }

    pub fn observed(&self) -> bool {
        self.observed
    }

    pub fn subdivisions(&self) -> &[String] {
        &self.subdivisions
    }
}

/// Iterator over the holidays of a [`HolidayCalendar`].
pub struct Iter<'a> {
    inner: std::collections::btree_map::Iter<'a, Date, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Holiday<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(date, name)| Holiday {
                date: *date,
                name: name.as_str(),
            })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a HolidayCalendar {
    type Item = Holiday<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calendar() -> HolidayCalendar {
        HolidayCalendar::new("US", &[2024, 2023, 2023], true)
    }

    #[test]
    fn years_are_sorted_and_unique() {
        assert_eq!(calendar().years(), &[2023, 2024]);
    }

    #[test]
    fn ignores_dates_outside_years() {
        let mut cal = calendar();
        assert!(!cal.insert(Date::from_ymd(2022, 12, 26), "Christmas Day (observed)"));
        assert!(cal.insert(Date::from_ymd(2023, 12, 25), "Christmas Day"));
        assert_eq!(cal.len(), 1);
    }

    #[test]
    fn merges_distinct_names_on_one_date() {
        let mut cal = calendar();
        cal.insert(Date::from_ymd(2023, 1, 1), "New Year's Day");
        cal.insert(Date::from_ymd(2023, 1, 1), "Founders Day");
        assert!(!cal.insert(Date::from_ymd(2023, 1, 1), "Founders Day"));
        assert_eq!(
            cal.get(Date::from_ymd(2023, 1, 1)),
            Some("New Year's Day; Founders Day")
        );
    }

    #[test]
    fn iterates_in_ascending_order() {
        let mut cal = calendar();
        cal.insert(Date::from_ymd(2024, 7, 4), "Independence Day");
        cal.insert(Date::from_ymd(2023, 11, 23), "Thanksgiving");
        cal.insert(Date::from_ymd(2023, 1, 2), "New Year's Day (observed)");

        let dates: Vec<_> = cal.iter().map(|h| h.date.to_string()).collect();
        assert_eq!(dates, ["2023-01-02", "2023-11-23", "2024-07-04"]);
    }

    #[test]
    fn keeps_subdivision_metadata() {
        let cal = calendar()
            .with_subdivision("TX")
            .with_subdivisions(["CA", "TX"]);
        assert_eq!(cal.subdivision(), Some("TX"));
        assert_eq!(cal.subdivisions(), &["CA".to_string(), "TX".to_string()]);
    }
}
