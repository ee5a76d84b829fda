use std::fmt;

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Days since Monday.
    #[inline]
    pub const fn index(&self) -> isize {
        *self as isize
    }

    #[inline]
    pub const fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

/// Days from 0000-03-01, the start of the proleptic Gregorian era used by
/// the civil conversions, to 1970-01-01.
const DAYS_TO_UNIX_EPOCH: isize = 719468;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Date(
    /// Days since 1st of January, 1970. (UNIX epoch)
    pub(crate) isize,
);

impl Date {
    /// Builds a date from its calendar components.
    ///
    /// The components are not validated: `month` must be `1..=12` and `day`
    /// a valid day of that month.
    pub const fn from_ymd(year: isize, month: usize, day: usize) -> Self {
        // Source: https://howardhinnant.github.io/date_algorithms.html#days_from_civil

        let m = month as isize;
        let d = day as isize;

        let y = year - if m <= 2 { 1 } else { 0 };
        let era = (if y >= 0 { y } else { y - 399 }) / 400;
        let year_of_era = y - era * 400;
        let month_part = if m > 2 { m - 3 } else { m + 9 };
        let day_of_year = (153 * month_part + 2) / 5 + d - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

        Self(era * 146097 + day_of_era - DAYS_TO_UNIX_EPOCH)
    }

    pub const fn ymd(&self) -> (isize, usize, usize) {
        // Source: https://howardhinnant.github.io/date_algorithms.html#civil_from_days

        let z = self.0 + DAYS_TO_UNIX_EPOCH;
        let era = (if z >= 0 { z } else { z - 146096 }) / 146097;
        let day_of_era = z - era * 146097;
        let year_of_era =
            (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146096) / 365;
        let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let month_part = (5 * day_of_year + 2) / 153;

        let day = day_of_year - (153 * month_part + 2) / 5 + 1;
        let month = if month_part < 10 {
            month_part + 3
        } else {
            month_part - 9
        };
        let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };

        (year, month as usize, day as usize)
    }

    /// Day of the month
    #[inline]
    pub const fn day(&self) -> usize {
        self.ymd().2
    }

    /// Month of the year
    #[inline]
    pub const fn month(&self) -> usize {
        self.ymd().1
    }

    /// Year
    #[inline]
    pub const fn year(&self) -> isize {
        self.ymd().0
    }

    pub const fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday.
        Weekday::ALL[(self.0 + 3).rem_euclid(7) as usize]
    }

    #[inline]
    pub const fn add_days(&self, days: isize) -> Self {
        Self(self.0 + days)
    }

    #[inline]
    pub const fn succ(&self) -> Self {
        self.add_days(1)
    }

    #[inline]
    pub const fn pred(&self) -> Self {
        self.add_days(-1)
    }

    /// Last day of the given month.
    pub const fn end_of_month(year: isize, month: usize) -> Self {
        if month >= 12 {
            Self::from_ymd(year + 1, 1, 1).pred()
        } else {
            Self::from_ymd(year, month + 1, 1).pred()
        }
    }
}

const SECONDS_IN_DAY: isize = 86400;

impl From<std::time::SystemTime> for Date {
    fn from(value: std::time::SystemTime) -> Self {
        let days = match value.duration_since(std::time::SystemTime::UNIX_EPOCH) {
            Ok(duration) => duration.as_secs() as isize / SECONDS_IN_DAY,
            Err(err) => -((err.duration().as_secs() as isize + SECONDS_IN_DAY - 1) / SECONDS_IN_DAY),
        };

        Date(days)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::NaiveDate {
    type Error = crate::Error;

    fn try_from(value: Date) -> Result<Self, Self::Error> {
        if value.0 > i32::MAX as isize - 719163 {
            return Err(crate::Error::DateTooLarge);
        }
        chrono::NaiveDate::from_num_days_from_ce_opt(value.0 as i32 + 719163)
            .ok_or(crate::Error::DateTooLarge)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for Date {
    fn from(value: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Date(value.num_days_from_ce() as isize - 719163)
    }
}
#[cfg(feature = "chrono")]
impl From<chrono::DateTime<chrono::Utc>> for Date {
    #[inline]
    fn from(value: chrono::DateTime<chrono::Utc>) -> Self {
        Date::from(value.date_naive())
    }
}
#[cfg(feature = "chrono")]
impl From<chrono::DateTime<chrono::Local>> for Date {
    #[inline]
    fn from(value: chrono::DateTime<chrono::Local>) -> Self {
        Date::from(value.naive_local().date())
    }
}

/// Julian day number of 1970-01-01.
#[cfg(feature = "time")]
const UNIX_EPOCH_JULIAN_DAY: isize = 2440588;

#[cfg(feature = "time")]
impl TryFrom<Date> for time::Date {
    type Error = crate::Error;

    fn try_from(value: Date) -> Result<Self, Self::Error> {
        let julian_day = i32::try_from(value.0 + UNIX_EPOCH_JULIAN_DAY)
            .map_err(|_| crate::Error::DateTooLarge)?;
        time::Date::from_julian_day(julian_day).map_err(|_| crate::Error::DateTooLarge)
    }
}

#[cfg(feature = "time")]
impl From<time::Date> for Date {
    #[inline]
    fn from(value: time::Date) -> Self {
        Date(value.to_julian_day() as isize - UNIX_EPOCH_JULIAN_DAY)
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

/// ISO 8601 calendar date, `YYYY-MM-DD`.
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

pub trait DateExt: Into<Date> + Clone {
    fn is_holiday(&self, country: crate::country::Country) -> bool {
        crate::contains(country, self.clone())
    }

    fn is_holiday_in_any<C>(&self, countries: C) -> bool
    where
        C: IntoIterator<Item = crate::country::Country>,
    {
        crate::contains_in_many(countries, self.clone())
    }
}

impl DateExt for Date {}
impl DateExt for std::time::SystemTime {}

#[cfg(feature = "chrono")]
impl DateExt for chrono::NaiveDate {}
#[cfg(feature = "chrono")]
impl DateExt for chrono::DateTime<chrono::Utc> {}
#[cfg(feature = "chrono")]
impl DateExt for chrono::DateTime<chrono::Local> {}

#[cfg(feature = "time")]
impl DateExt for time::Date {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(Date::from_ymd(1970, 1, 1), Date(0));
        assert_eq!(Date(0).ymd(), (1970, 1, 1));
        assert_eq!(Date(0).weekday(), Weekday::Thursday);
    }

    #[test]
    fn day_counts_from_epoch() {
        assert_eq!(Date::from_ymd(2000, 3, 1), Date(11017));
        assert_eq!(Date::from_ymd(1950, 1, 1), Date(-7305));
        assert_eq!(Date::from_ymd(2100, 12, 31), Date(47846));
        assert_eq!(Date::from_ymd(1600, 2, 29), Date(-135081));
        assert_eq!(Date(11017).ymd(), (2000, 3, 1));
        assert_eq!(Date(-135081).ymd(), (1600, 2, 29));
    }

    #[test]
    fn ymd_round_trips_across_leap_days() {
        for (y, m, d) in [(2000, 2, 29), (2023, 12, 31), (2024, 2, 29), (1969, 12, 31)] {
            assert_eq!(Date::from_ymd(y, m, d).ymd(), (y, m, d));
        }
        assert_eq!(Date::from_ymd(2024, 2, 29).succ(), Date::from_ymd(2024, 3, 1));
    }

    #[test]
    fn weekday_before_epoch() {
        assert_eq!(Date::from_ymd(1969, 12, 31).weekday(), Weekday::Wednesday);
        assert_eq!(Date::from_ymd(1950, 1, 1).weekday(), Weekday::Sunday);
    }

    #[test]
    fn display_is_iso_8601() {
        assert_eq!(Date::from_ymd(2023, 1, 2).to_string(), "2023-01-02");
        assert_eq!(format!("{:?}", Date::from_ymd(987, 6, 5)), "Date(0987-06-05)");
    }

    #[test]
    fn end_of_month_handles_december_and_february() {
        assert_eq!(Date::end_of_month(2023, 12), Date::from_ymd(2023, 12, 31));
        assert_eq!(Date::end_of_month(2024, 2), Date::from_ymd(2024, 2, 29));
        assert_eq!(Date::end_of_month(2023, 2), Date::from_ymd(2023, 2, 28));
    }

    #[test]
    fn system_time_before_epoch_rounds_down() {
        let t = std::time::SystemTime::UNIX_EPOCH - std::time::Duration::from_secs(3600);
        assert_eq!(Date::from(t), Date::from_ymd(1969, 12, 31));
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn chrono_conversion() {
        let naive = chrono::NaiveDate::from_ymd_opt(2023, 7, 4).unwrap();
        let date = Date::from(naive);
        assert_eq!(date, Date::from_ymd(2023, 7, 4));
        assert_eq!(chrono::NaiveDate::try_from(date).unwrap(), naive);
    }

    #[cfg(feature = "time")]
    #[test]
    fn time_conversion() {
        let date = time::Date::from_calendar_date(2024, time::Month::December, 25).unwrap();
        assert_eq!(Date::from(date), Date::from_ymd(2024, 12, 25));
        assert_eq!(time::Date::try_from(Date::from_ymd(2024, 12, 25)).unwrap(), date);
    }

    const FIRST: isize = Date::from_ymd(1950, 1, 1).0;
    const LAST: isize = Date::from_ymd(2100, 12, 31).0;

    proptest! {
        #[test]
        fn civil_round_trip(days in FIRST..=LAST) {
            let date = Date(days);
            let (y, m, d) = date.ymd();
            prop_assert!((1..=12).contains(&m));
            prop_assert!(d >= 1 && d <= Date::end_of_month(y, m).day());
            prop_assert_eq!(Date::from_ymd(y, m, d), date);
            prop_assert_eq!(date.succ().weekday().index(), (date.weekday().index() + 1) % 7);
        }

        #[cfg(feature = "chrono")]
        #[test]
        fn civil_matches_chrono(days in FIRST..=LAST) {
            use chrono::Datelike;

            let naive = chrono::NaiveDate::try_from(Date(days)).unwrap();
            let (y, m, d) = Date(days).ymd();
            prop_assert_eq!(naive.year() as isize, y);
            prop_assert_eq!(naive.month() as usize, m);
            prop_assert_eq!(naive.day() as usize, d);
            prop_assert_eq!(
                naive.weekday().num_days_from_monday() as isize,
                Date(days).weekday().index()
            );
        }
    }
}
