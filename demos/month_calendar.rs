//! Prints a month of stargazing scores as a calendar grid, then the detail of the
//! best night.
//!
//! ```text
//! cargo run --example month_calendar -- 2025 10
//! ```

use chrono::Datelike;
use stargazing::{DayOutlook, Month, Stargazing, StargazingError};
use std::env;

#[tokio::main]
async fn main() -> Result<(), StargazingError> {
    let client = Stargazing::new()?;
    let today = client.provider().today();

    let mut args = env::args().skip(1);
    let year = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(today.year());
    let month = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(today.month());

    let calendar = client.month_calendar(year, month).await?;
    println!("{} at {}", calendar.month, client.site().name);
    println!("   Sun    Mon    Tue    Wed    Thu    Fri    Sat");

    let mut line = "       ".repeat(calendar.first_weekday.num_days_from_sunday() as usize);
    for day in &calendar.days {
        let cell = match &day.outlook {
            DayOutlook::Scored(score) => format!("{:>2} {:>3}", day.day, score.total_score),
            DayOutlook::Unavailable => format!("{:>2}   -", day.day),
        };
        line.push_str(&cell);
        line.push(' ');
        if day.date.weekday().num_days_from_sunday() == 6 {
            println!("{}", line.trim_end());
            line.clear();
        }
    }
    if !line.is_empty() {
        println!("{}", line.trim_end());
    }

    match calendar.best_day() {
        Some(best) => {
            if let DayOutlook::Scored(score) = &best.outlook {
                println!();
                println!("Best night: {}", best.date);
                println!("  Stargazing index:   {} / 100 ({})", score.total_score, score.tier());
                println!("  Cloud cover (21h):  {}%", score.cloud_cover_percent);
                println!("  Moon:               {}", score.moon_phase_display_name);
                println!("  Weather:            {}", score.weather_display_name);
            }
        }
        None => println!("\nNo forecast available for {}.", calendar.month),
    }

    if let Some(next) = Month::new(year, month).and_then(Month::next) {
        println!("\nNext: cargo run --example month_calendar -- {} {}", next.year(), next.month());
    }

    Ok(())
}
