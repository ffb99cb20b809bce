//! High-latitude behavior through the year, and the fallback schedule.
//!
//! Tromsø sits well above the Arctic Circle: in midsummer deep twilight
//! never ends, in midwinter the sun never rises. Both show up as
//! degenerate-geometry errors naming the first impossible event, and the
//! fixed fallback keeps a usable daily structure.

use chrono::NaiveDate;
use salat_times::{fallback, schedule, CalculationMethod, GeoCoordinate, Prayer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tromso = GeoCoordinate::new(69.6492, 18.9553)?;
    let method = CalculationMethod::MuslimWorldLeague;

    println!("=== Tromsø, Norway (69.65°N) through 2024, {method} ===");
    println!();

    for month in 1..=12 {
        let date = NaiveDate::from_ymd_opt(2024, month, 21).unwrap();

        match schedule::compute(date, tromso, method) {
            Ok(times) => println!(
                "{date}: fajr {} .. isha {}",
                times.fajr().format("%H:%M"),
                times.isha().format("%H:%M")
            ),
            Err(error) => println!("{date}: {error}"),
        }
    }

    println!();
    println!("=== Fallback for a midsummer day ===");
    println!();

    let midsummer = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    let times = fallback::default_times(midsummer);

    for prayer in Prayer::ALL {
        println!("  {:<8} {}", prayer, times.time_of(prayer).format("%H:%M"));
    }

    Ok(())
}
