//! TARGET2 closing days of the European Central Bank.

use super::{Special, YearHolidays};
use crate::Result;

const ADDITIONAL_CLOSING_DAYS: &[Special] = &[
    (1999, 12, 31, "Additional closing day"),
    (2001, 12, 31, "Additional closing day"),
];

pub(crate) fn populate(h: &mut YearHolidays, _subdivision: Option<&str>) -> Result<()> {
    let y = h.year();
    if y < 1999 {
        return Ok(());
    }

    h.fixed(1, 1, "New Year's Day");
    if y >= 2000 {
        let easter = h.easter()?;
        h.add(easter.add_days(-2), "Good Friday");
        h.add(easter.succ(), "Easter Monday");
        h.fixed(5, 1, "Labour Day");
    }
    h.fixed(12, 25, "Christmas Day");
    h.fixed(12, 26, "Christmas Holiday");
    h.specials(ADDITIONAL_CLOSING_DAYS);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HolidayCalendar;
    use crate::date::Date;
    use crate::rules::fill;

    #[test]
    fn closing_days_2024() {
        let mut cal = HolidayCalendar::new("ECB", &[2024], true);
        fill(&mut cal, populate, None).unwrap();
        let dates: Vec<_> = cal.dates().map(|it| it.to_string()).collect();
        assert_eq!(
            dates,
            ["2024-01-01", "2024-03-29", "2024-04-01", "2024-05-01", "2024-12-25", "2024-12-26"]
        );
    }

    #[test]
    fn nothing_before_target() {
        let mut cal = HolidayCalendar::new("ECB", &[1990], true);
        fill(&mut cal, populate, None).unwrap();
        assert!(cal.is_empty());
        assert!(!cal.contains(Date::from_ymd(1990, 1, 1)));
    }
}
