use chrono::NaiveDate;
use holiday_dump::{Country, DateExt};

fn main() -> anyhow::Result<()> {
    let d = NaiveDate::from_ymd_opt(2023, 1, 2).expect("Invalid date");
    println!(
        "Is {d} a holiday in the United States? Answer is {}",
        d.is_holiday(Country::US)
    );

    let calendar = holiday_dump::get(Country::US, [2023])?;
    println!("{:?}", calendar.get(d));

    Ok(())
}
