//! French public holidays (metropolitan France).

use super::YearHolidays;
use crate::Result;

pub(crate) fn populate(h: &mut YearHolidays, _subdivision: Option<&str>) -> Result<()> {
    let y = h.year();
    let easter = h.easter()?;

    h.fixed(1, 1, "New Year's Day");
    h.add(easter.succ(), "Easter Monday");
    h.fixed(5, 1, "Labor Day");
    if (1953..=1959).contains(&y) || y >= 1982 {
        h.fixed(5, 8, "Victory Day");
    }
    h.add(easter.add_days(39), "Ascension Day");
    // Replaced by the "day of solidarity" between 2005 and 2007.
    if !(2005..=2007).contains(&y) {
        h.add(easter.add_days(50), "Whit Monday");
    }
    h.fixed(7, 14, "National Day");
    h.fixed(8, 15, "Assumption Day");
    h.fixed(11, 1, "All Saints' Day");
    h.fixed(11, 11, "Armistice Day");
    h.fixed(12, 25, "Christmas Day");

    Ok(())
}
