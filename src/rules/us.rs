//! United States federal holidays, with the state level holidays of a few
//! subdivisions.

use super::{last_weekday, nth_weekday, Observance::*, YearHolidays};
use crate::date::{Date, Weekday};
use crate::Result;

pub(crate) fn populate(h: &mut YearHolidays, subdivision: Option<&str>) -> Result<()> {
    let y = h.year();

    h.fixed_observed(1, 1, "New Year's Day", NearestWeekday);

    if y >= 1986 {
        h.add(
            nth_weekday(y, 1, Weekday::Monday, 3),
            "Martin Luther King Jr. Day",
        );
    }

    if y >= 1971 {
        h.add(nth_weekday(y, 2, Weekday::Monday, 3), "Washington's Birthday");
    } else {
        h.fixed_observed(2, 22, "Washington's Birthday", NearestWeekday);
    }

    if y >= 1971 {
        h.add(last_weekday(y, 5, Weekday::Monday), "Memorial Day");
    } else {
        h.fixed_observed(5, 30, "Memorial Day", NearestWeekday);
    }

    if y >= 2021 {
        h.fixed_observed(6, 19, "Juneteenth National Independence Day", NearestWeekday);
    }

    h.fixed_observed(7, 4, "Independence Day", NearestWeekday);
    h.add(nth_weekday(y, 9, Weekday::Monday, 1), "Labor Day");

    if y >= 1971 {
        h.add(nth_weekday(y, 10, Weekday::Monday, 2), "Columbus Day");
    } else {
        h.fixed_observed(10, 12, "Columbus Day", NearestWeekday);
    }

    if (1971..=1977).contains(&y) {
        h.add(nth_weekday(y, 10, Weekday::Monday, 4), "Veterans Day");
    } else {
        h.fixed_observed(11, 11, "Veterans Day", NearestWeekday);
    }

    h.add(thanksgiving(y), "Thanksgiving Day");
    h.fixed_observed(12, 25, "Christmas Day", NearestWeekday);

    match subdivision {
        Some("CA") => california(h),
        Some("DC") => district_of_columbia(h),
        Some("MA") => massachusetts(h),
        Some("NY") => new_york(h),
        Some("TX") => texas(h),
        _ => {}
    }

    Ok(())
}

fn thanksgiving(year: isize) -> Date {
    nth_weekday(year, 11, Weekday::Thursday, 4)
}

fn california(h: &mut YearHolidays) {
    let y = h.year();
    if y >= 1995 {
        h.fixed_observed(3, 31, "Cesar Chavez Day", SundayToMonday);
    }
    if y >= 1975 {
        h.add(thanksgiving(y).succ(), "Day After Thanksgiving");
    }
}

fn district_of_columbia(h: &mut YearHolidays) {
    let y = h.year();
    if y >= 1937 && (y - 1789) % 4 == 0 {
        let inauguration = Date::from_ymd(y, 1, 20);
        if inauguration.weekday() == Weekday::Sunday {
            h.add(inauguration.succ(), "Inauguration Day");
        } else {
            h.add(inauguration, "Inauguration Day");
        }
    }
    if y >= 2005 {
        h.fixed_observed(4, 16, "Emancipation Day", NearestWeekday);
    }
}

fn massachusetts(h: &mut YearHolidays) {
    let y = h.year();
    if y >= 1969 {
        h.add(nth_weekday(y, 4, Weekday::Monday, 3), "Patriots' Day");
    } else {
        h.fixed_observed(4, 19, "Patriots' Day", SundayToMonday);
    }
}

fn new_york(h: &mut YearHolidays) {
    let y = h.year();
    h.fixed_observed(2, 12, "Lincoln's Birthday", NearestWeekday);
    if y >= 2004 {
        h.fixed(2, 15, "Susan B. Anthony Day");
    }
    if y >= 2015 {
        h.add(
            nth_weekday(y, 11, Weekday::Monday, 1).succ(),
            "Election Day",
        );
    }
}

fn texas(h: &mut YearHolidays) {
    let y = h.year();
    if y >= 1931 {
        h.fixed(1, 19, "Confederate Memorial Day");
    }
    h.fixed(3, 2, "Texas Independence Day");
    h.fixed(4, 21, "San Jacinto Day");
    if y >= 1980 {
        h.fixed(6, 19, "Emancipation Day In Texas");
    }
    if y >= 1973 {
        h.fixed(8, 27, "Lyndon Baines Johnson Day");
    }
    if y >= 1975 {
        h.add(thanksgiving(y).succ(), "Friday After Thanksgiving");
    }
    if y >= 1981 {
        h.fixed(12, 24, "Christmas Eve");
        h.fixed(12, 26, "Day After Christmas");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HolidayCalendar;
    use crate::rules::fill;

    fn calendar(years: &[isize], subdivision: Option<&str>) -> HolidayCalendar {
        let mut cal = HolidayCalendar::new("US", years, true);
        fill(&mut cal, populate, subdivision).unwrap();
        cal
    }

    fn date(y: isize, m: usize, d: usize) -> Date {
        Date::from_ymd(y, m, d)
    }

    #[test]
    fn federal_holidays_2023() {
        let cal = calendar(&[2023], None);
        assert_eq!(cal.get(date(2023, 1, 1)), Some("New Year's Day"));
        assert_eq!(cal.get(date(2023, 1, 2)), Some("New Year's Day (observed)"));
        assert_eq!(cal.get(date(2023, 1, 16)), Some("Martin Luther King Jr. Day"));
        assert_eq!(cal.get(date(2023, 2, 20)), Some("Washington's Birthday"));
        assert_eq!(cal.get(date(2023, 5, 29)), Some("Memorial Day"));
        assert_eq!(
            cal.get(date(2023, 6, 19)),
            Some("Juneteenth National Independence Day")
        );
        assert_eq!(cal.get(date(2023, 9, 4)), Some("Labor Day"));
        assert_eq!(cal.get(date(2023, 10, 9)), Some("Columbus Day"));
        assert_eq!(cal.get(date(2023, 11, 10)), Some("Veterans Day (observed)"));
        assert_eq!(cal.get(date(2023, 11, 23)), Some("Thanksgiving Day"));
        assert_eq!(cal.len(), 13);
    }

    #[test]
    fn saturday_new_year_is_observed_in_previous_year() {
        let cal = calendar(&[2021], None);
        assert_eq!(cal.get(date(2021, 12, 31)), Some("New Year's Day (observed)"));
        // Juneteenth 2021 fell on a Saturday.
        assert_eq!(
            cal.get(date(2021, 6, 18)),
            Some("Juneteenth National Independence Day (observed)")
        );

        let cal = calendar(&[2022], None);
        assert!(!cal.contains(date(2021, 12, 31)));
        assert_eq!(cal.get(date(2022, 1, 1)), Some("New Year's Day"));
    }

    #[test]
    fn no_juneteenth_before_2021() {
        let cal = calendar(&[2020], None);
        assert!(!cal.contains(date(2020, 6, 19)));
    }

    #[test]
    fn texas_merges_juneteenth() {
        let cal = calendar(&[2023], Some("TX"));
        assert_eq!(
            cal.get(date(2023, 6, 19)),
            Some("Juneteenth National Independence Day; Emancipation Day In Texas")
        );
        assert_eq!(cal.get(date(2023, 11, 24)), Some("Friday After Thanksgiving"));
    }

    #[test]
    fn district_of_columbia() {
        let cal = calendar(&[2025], Some("DC"));
        assert_eq!(cal.get(date(2025, 1, 20)), Some("Martin Luther King Jr. Day; Inauguration Day"));
        // 2023-04-16 was a Sunday.
        let cal = calendar(&[2023], Some("DC"));
        assert_eq!(cal.get(date(2023, 4, 17)), Some("Emancipation Day (observed)"));
        // 2022-04-16 was a Saturday.
        let cal = calendar(&[2022], Some("DC"));
        assert_eq!(cal.get(date(2022, 4, 15)), Some("Emancipation Day (observed)"));
        assert_eq!(cal.get(date(2022, 4, 16)), Some("Emancipation Day"));
        assert!(!cal.contains(date(2022, 4, 18)));
    }

    #[test]
    fn new_york_election_day() {
        let cal = calendar(&[2024], Some("NY"));
        assert_eq!(cal.get(date(2024, 11, 5)), Some("Election Day"));
        assert_eq!(cal.get(date(2024, 2, 12)), Some("Lincoln's Birthday"));
    }
}
