//! United Kingdom bank holidays. Without a subdivision the holidays common
//! to England and Wales are returned.

use super::{last_weekday, nth_weekday, Observance::*, Special, YearHolidays};
use crate::date::{Date, Weekday};
use crate::Result;

const SPECIAL_DAYS: &[Special] = &[
    (1977, 6, 7, "Silver Jubilee of Elizabeth II"),
    (1981, 7, 29, "Wedding of Charles and Diana"),
    (1999, 12, 31, "Millennium Celebrations"),
    (2002, 6, 3, "Golden Jubilee of Elizabeth II"),
    (2011, 4, 29, "Wedding of William and Catherine"),
    (2012, 6, 5, "Diamond Jubilee of Elizabeth II"),
    (2022, 6, 3, "Platinum Jubilee of Elizabeth II"),
    (2022, 9, 19, "State Funeral of Queen Elizabeth II"),
    (2023, 5, 8, "Coronation of Charles III"),
];

pub(crate) fn populate(h: &mut YearHolidays, subdivision: Option<&str>) -> Result<()> {
    let y = h.year();
    let easter = h.easter()?;
    let scotland = subdivision == Some("SCT");
    let northern_ireland = subdivision == Some("NIR");

    h.fixed_observed(1, 1, "New Year's Day", NextWorkday);
    if scotland {
        h.fixed_observed(1, 2, "New Year Holiday", NextWorkday);
    }
    if northern_ireland {
        h.fixed_observed(3, 17, "St. Patrick's Day", NextWorkday);
    }

    h.add(easter.add_days(-2), "Good Friday");
    if !scotland {
        h.add(easter.succ(), "Easter Monday");
    }

    if y >= 1978 {
        let may_day = match y {
            1995 | 2020 => Date::from_ymd(y, 5, 8),
            _ => nth_weekday(y, 5, Weekday::Monday, 1),
        };
        h.add(may_day, "May Day");
    }

    if y >= 1971 {
        let spring = match y {
            1977 => Date::from_ymd(y, 6, 6),
            2002 | 2012 => Date::from_ymd(y, 6, 4),
            2022 => Date::from_ymd(y, 6, 2),
            _ => last_weekday(y, 5, Weekday::Monday),
        };
        h.add(spring, "Spring Bank Holiday");
    }

    if northern_ireland {
        h.fixed_observed(7, 12, "Battle of the Boyne", NextWorkday);
    }

    if scotland {
        h.add(nth_weekday(y, 8, Weekday::Monday, 1), "Summer Bank Holiday");
    } else if y >= 1971 {
        h.add(last_weekday(y, 8, Weekday::Monday), "Late Summer Bank Holiday");
    }

    if scotland && y >= 2006 {
        h.fixed_observed(11, 30, "St. Andrew's Day", NextWorkday);
    }

    h.fixed_observed(12, 25, "Christmas Day", NextWorkday);
    h.fixed_observed(12, 26, "Boxing Day", NextWorkday);

    h.specials(SPECIAL_DAYS);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HolidayCalendar;
    use crate::rules::fill;

    fn calendar(years: &[isize], subdivision: Option<&str>) -> HolidayCalendar {
        let mut cal = HolidayCalendar::new("GB", years, true);
        fill(&mut cal, populate, subdivision).unwrap();
        cal
    }

    fn date(y: isize, m: usize, d: usize) -> Date {
        Date::from_ymd(y, m, d)
    }

    #[test]
    fn england_2022() {
        let cal = calendar(&[2022], None);
        let expected = [
            (date(2022, 1, 1), "New Year's Day"),
            (date(2022, 1, 3), "New Year's Day (observed)"),
            (date(2022, 4, 15), "Good Friday"),
            (date(2022, 4, 18), "Easter Monday"),
            (date(2022, 5, 2), "May Day"),
            (date(2022, 6, 2), "Spring Bank Holiday"),
            (date(2022, 6, 3), "Platinum Jubilee of Elizabeth II"),
            (date(2022, 8, 29), "Late Summer Bank Holiday"),
            (date(2022, 9, 19), "State Funeral of Queen Elizabeth II"),
            (date(2022, 12, 25), "Christmas Day"),
            (date(2022, 12, 26), "Boxing Day"),
            (date(2022, 12, 27), "Christmas Day (observed)"),
        ];
        let actual: Vec<_> = cal.iter().map(|h| (h.date, h.name)).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn scotland_new_year_substitutes_stack() {
        let cal = calendar(&[2022], Some("SCT"));
        assert_eq!(cal.get(date(2022, 1, 3)), Some("New Year's Day (observed)"));
        assert_eq!(cal.get(date(2022, 1, 4)), Some("New Year Holiday (observed)"));
        assert_eq!(cal.get(date(2022, 8, 1)), Some("Summer Bank Holiday"));
        assert_eq!(cal.get(date(2022, 11, 30)), Some("St. Andrew's Day"));
        assert!(!cal.contains(date(2022, 4, 18)));
    }

    #[test]
    fn northern_ireland() {
        let cal = calendar(&[2023], Some("NIR"));
        assert_eq!(cal.get(date(2023, 3, 17)), Some("St. Patrick's Day"));
        assert_eq!(cal.get(date(2023, 7, 12)), Some("Battle of the Boyne"));
        assert_eq!(cal.get(date(2023, 5, 8)), Some("Coronation of Charles III"));
    }
}
