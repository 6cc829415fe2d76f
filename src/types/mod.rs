pub mod calendar;
pub mod day_score;
pub mod month;
pub mod month_forecast;
pub mod moon_phase;
pub mod site;
pub mod weather_code;
