//! Canadian statutory holidays and provincial additions.

use super::{nth_weekday, weekday_before, Observance::*, YearHolidays};
use crate::date::{Date, Weekday};
use crate::Result;

pub(crate) fn populate(h: &mut YearHolidays, subdivision: Option<&str>) -> Result<()> {
    let y = h.year();
    let easter = h.easter()?;

    h.fixed_observed(1, 1, "New Year's Day", NextWorkday);
    h.add(easter.add_days(-2), "Good Friday");

    if y >= 1953 {
        h.add(victoria_day(y), "Victoria Day");
    }

    if y >= 1983 {
        h.fixed_observed(7, 1, "Canada Day", NextWorkday);
    } else {
        h.fixed_observed(7, 1, "Dominion Day", NextWorkday);
    }

    h.add(nth_weekday(y, 9, Weekday::Monday, 1), "Labour Day");

    if y >= 2021 {
        h.fixed_observed(
            9,
            30,
            "National Day for Truth and Reconciliation",
            NextWorkday,
        );
    }

    if y >= 1957 {
        h.add(nth_weekday(y, 10, Weekday::Monday, 2), "Thanksgiving");
    }

    h.fixed_observed(11, 11, "Remembrance Day", NextWorkday);
    h.fixed_observed(12, 25, "Christmas Day", NextWorkday);
    h.fixed_observed(12, 26, "Boxing Day", NextWorkday);

    match subdivision {
        Some("AB") => {
            if y >= 1990 {
                h.add(nth_weekday(y, 2, Weekday::Monday, 3), "Family Day");
            }
            if y >= 1974 {
                h.add(nth_weekday(y, 8, Weekday::Monday, 1), "Heritage Day");
            }
        }
        Some("BC") => {
            match y {
                2013..=2018 => h.add(nth_weekday(y, 2, Weekday::Monday, 2), "Family Day"),
                2019.. => h.add(nth_weekday(y, 2, Weekday::Monday, 3), "Family Day"),
                _ => {}
            }
            if y >= 1974 {
                h.add(nth_weekday(y, 8, Weekday::Monday, 1), "British Columbia Day");
            }
        }
        Some("NS") => {
            if y >= 2015 {
                h.add(nth_weekday(y, 2, Weekday::Monday, 3), "Heritage Day");
            }
            h.add(nth_weekday(y, 8, Weekday::Monday, 1), "Natal Day");
        }
        Some("ON") => {
            if y >= 2008 {
                h.add(nth_weekday(y, 2, Weekday::Monday, 3), "Family Day");
            }
            h.add(nth_weekday(y, 8, Weekday::Monday, 1), "Civic Holiday");
        }
        Some("QC") => {
            if y >= 2003 {
                h.add(victoria_day(y), "National Patriots' Day");
            }
            if y >= 1925 {
                h.fixed_observed(6, 24, "St. Jean Baptiste Day", SundayToMonday);
            }
        }
        _ => {}
    }

    Ok(())
}

/// Monday preceding May 25th.
fn victoria_day(year: isize) -> Date {
    weekday_before(Date::from_ymd(year, 5, 25), Weekday::Monday)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HolidayCalendar;
    use crate::rules::fill;

    fn calendar(years: &[isize], subdivision: Option<&str>) -> HolidayCalendar {
        let mut cal = HolidayCalendar::new("CA", years, true);
        fill(&mut cal, populate, subdivision).unwrap();
        cal
    }

    fn date(y: isize, m: usize, d: usize) -> Date {
        Date::from_ymd(y, m, d)
    }

    #[test]
    fn national_2023() {
        let cal = calendar(&[2023], None);
        assert_eq!(cal.get(date(2023, 1, 2)), Some("New Year's Day (observed)"));
        assert_eq!(cal.get(date(2023, 4, 7)), Some("Good Friday"));
        assert_eq!(cal.get(date(2023, 5, 22)), Some("Victoria Day"));
        assert_eq!(cal.get(date(2023, 7, 1)), Some("Canada Day"));
        assert_eq!(cal.get(date(2023, 7, 3)), Some("Canada Day (observed)"));
        assert_eq!(
            cal.get(date(2023, 10, 2)),
            Some("National Day for Truth and Reconciliation (observed)")
        );
        assert_eq!(cal.get(date(2023, 10, 9)), Some("Thanksgiving"));
        assert_eq!(cal.get(date(2023, 11, 13)), Some("Remembrance Day (observed)"));
        assert!(!cal.contains(date(2023, 2, 20)));
    }

    #[test]
    fn quebec_shares_victoria_day() {
        let cal = calendar(&[2024], Some("QC"));
        assert_eq!(
            cal.get(date(2024, 5, 20)),
            Some("Victoria Day; National Patriots' Day")
        );
        assert_eq!(cal.get(date(2024, 6, 24)), Some("St. Jean Baptiste Day"));
    }

    #[test]
    fn british_columbia_family_day_moved_in_2019() {
        assert!(calendar(&[2018], Some("BC")).contains(date(2018, 2, 12)));
        assert!(calendar(&[2019], Some("BC")).contains(date(2019, 2, 18)));
    }
}
