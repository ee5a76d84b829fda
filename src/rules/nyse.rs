//! New York Stock Exchange full-day closures.
//!
//! Holidays on a Saturday close the market on the preceding Friday, those on
//! a Sunday on the following Monday. New Year's Day is the exception: the
//! exchange does not close on the last trading day of the year.

use super::{last_weekday, nth_weekday, Observance::*, Special, YearHolidays};
use crate::date::Weekday;
use crate::Result;

const SPECIAL_CLOSINGS: &[Special] = &[
    (1963, 11, 25, "Funeral of President John F. Kennedy"),
    (1968, 4, 9, "Day of Mourning for Martin Luther King Jr."),
    (1969, 3, 31, "Funeral of President Dwight D. Eisenhower"),
    (1973, 1, 25, "Funeral of President Lyndon B. Johnson"),
    (1977, 7, 14, "Blackout in New York City"),
    (1985, 9, 27, "Hurricane Gloria"),
    (1994, 4, 27, "Funeral of President Richard M. Nixon"),
    (2001, 9, 11, "Closed for Sept 11, 2001 Attacks"),
    (2001, 9, 12, "Closed for Sept 11, 2001 Attacks"),
    (2001, 9, 13, "Closed for Sept 11, 2001 Attacks"),
    (2001, 9, 14, "Closed for Sept 11, 2001 Attacks"),
    (2004, 6, 11, "Day of Mourning for President Ronald W. Reagan"),
    (2007, 1, 2, "Day of Mourning for President Gerald R. Ford"),
    (2012, 10, 29, "Hurricane Sandy"),
    (2012, 10, 30, "Hurricane Sandy"),
    (2018, 12, 5, "Day of Mourning for President George H.W. Bush"),
    (2025, 1, 9, "Day of Mourning for President Jimmy Carter"),
];

pub(crate) fn populate(h: &mut YearHolidays, _subdivision: Option<&str>) -> Result<()> {
    let y = h.year();
    let easter = h.easter()?;

    h.fixed_observed(1, 1, "New Year's Day", SundayToMonday);

    if y >= 1998 {
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

    h.add(easter.add_days(-2), "Good Friday");

    if y >= 1971 {
        h.add(last_weekday(y, 5, Weekday::Monday), "Memorial Day");
    } else {
        h.fixed_observed(5, 30, "Memorial Day", NearestWeekday);
    }

    if y >= 2022 {
        h.fixed_observed(6, 19, "Juneteenth National Independence Day", NearestWeekday);
    }

    h.fixed_observed(7, 4, "Independence Day", NearestWeekday);
    h.add(nth_weekday(y, 9, Weekday::Monday, 1), "Labor Day");
    h.add(nth_weekday(y, 11, Weekday::Thursday, 4), "Thanksgiving Day");
    h.fixed_observed(12, 25, "Christmas Day", NearestWeekday);

    h.specials(SPECIAL_CLOSINGS);

    Ok(())
}
