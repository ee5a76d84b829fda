use chrono::NaiveDate;
use holiday_dump::{BuiltinProvider, HolidayProvider};

fn main() -> anyhow::Result<()> {
    let calendar = BuiltinProvider.subdivision_holidays("GB", "SCT", &[2022], true)?;

    for holiday in &calendar {
        let date = NaiveDate::try_from(holiday.date)?;
        println!("{date} {}", holiday.name);
    }

    Ok(())
}
