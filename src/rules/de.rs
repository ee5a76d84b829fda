//! German public holidays. Germany does not move holidays falling on a
//! weekend.

use super::{weekday_before, Special, YearHolidays};
use crate::date::{Date, Weekday};
use crate::Result;

const BERLIN_SPECIAL_DAYS: &[Special] = &[
    (
        2020,
        5,
        8,
        "75th anniversary of the liberation from Nazism and the end of the Second World War in Europe",
    ),
    (
        2025,
        5,
        8,
        "80th anniversary of the liberation from Nazism and the end of the Second World War in Europe",
    ),
];

pub(crate) fn populate(h: &mut YearHolidays, subdivision: Option<&str>) -> Result<()> {
    let y = h.year();
    let easter = h.easter()?;

    h.fixed(1, 1, "New Year's Day");
    h.add(easter.add_days(-2), "Good Friday");
    h.add(easter.succ(), "Easter Monday");
    h.fixed(5, 1, "Labor Day");
    h.add(easter.add_days(39), "Ascension Day");
    h.add(easter.add_days(50), "Whit Monday");
    if y >= 1990 {
        h.fixed(10, 3, "German Unity Day");
    }
    if y == 2017 {
        h.fixed(10, 31, "Reformation Day");
    }
    if y <= 1994 {
        h.add(repentance_and_prayer_day(y), "Repentance and Prayer Day");
    }
    h.fixed(12, 25, "Christmas Day");
    h.fixed(12, 26, "Second Day of Christmas");

    match subdivision {
        Some("BB") => {
            h.add(easter, "Easter Sunday");
            h.add(easter.add_days(49), "Whit Sunday");
            if y >= 1991 && y != 2017 {
                h.fixed(10, 31, "Reformation Day");
            }
        }
        Some("BE") => {
            if y >= 2019 {
                h.fixed(3, 8, "International Women's Day");
            }
            h.specials(BERLIN_SPECIAL_DAYS);
        }
        Some("BW") | Some("BY") => {
            h.fixed(1, 6, "Epiphany");
            h.add(easter.add_days(60), "Corpus Christi");
            h.fixed(11, 1, "All Saints' Day");
        }
        Some("HH") => {
            if y >= 2018 {
                h.fixed(10, 31, "Reformation Day");
            }
        }
        Some("NW") => {
            h.add(easter.add_days(60), "Corpus Christi");
            h.fixed(11, 1, "All Saints' Day");
        }
        Some("SN") => {
            if y >= 1991 && y != 2017 {
                h.fixed(10, 31, "Reformation Day");
            }
            if y >= 1995 {
                h.add(repentance_and_prayer_day(y), "Repentance and Prayer Day");
            }
        }
        _ => {}
    }

    Ok(())
}

/// Wednesday before November 23rd.
fn repentance_and_prayer_day(year: isize) -> Date {
    weekday_before(Date::from_ymd(year, 11, 23), Weekday::Wednesday)
}
