//! Daily prayer schedule for several cities, shown in each city's local time.

use chrono::NaiveDate;
use salat_times::{classify, schedule, CalculationMethod, GeoCoordinate, Prayer};

struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    method: CalculationMethod,
    timezone: chrono_tz::Tz,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Mecca, Saudi Arabia",
            latitude: 21.4225,
            longitude: 39.8262,
            method: CalculationMethod::UmmAlQura,
            timezone: chrono_tz::Asia::Riyadh,
        },
        City {
            name: "Istanbul, Turkey",
            latitude: 41.0082,
            longitude: 28.9784,
            method: CalculationMethod::Turkey,
            timezone: chrono_tz::Europe::Istanbul,
        },
        City {
            name: "Jakarta, Indonesia",
            latitude: -6.2088,
            longitude: 106.8456,
            method: CalculationMethod::Singapore,
            timezone: chrono_tz::Asia::Jakarta,
        },
        City {
            name: "New York, USA",
            latitude: 40.7128,
            longitude: -74.0060,
            method: CalculationMethod::NorthAmerica,
            timezone: chrono_tz::America::New_York,
        },
    ];

    let date = NaiveDate::from_ymd_opt(2024, 9, 15).unwrap();

    for city in &cities {
        let coordinate = GeoCoordinate::new(city.latitude, city.longitude)?;
        let times = schedule::compute(date, coordinate, city.method)?;
        let local = times.with_timezone(&city.timezone);

        println!("=== {} ===", city.name);
        println!("Method: {}", city.method);
        println!();

        for prayer in Prayer::ALL {
            println!(
                "  {:<8} {}",
                prayer,
                local.time_of(prayer).format("%H:%M %Z")
            );
        }

        // Classify an instant half an hour after maghrib
        let instant = *times.maghrib() + chrono::Duration::minutes(30);
        println!();
        println!(
            "  30 min after maghrib: period {:?}, slot {:?}",
            classify::current_prayer(&instant, &times),
            classify::routine_slot(&instant, &times)
        );
        println!();
    }

    Ok(())
}
