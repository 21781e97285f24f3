//! Plain-text rendering of core view data.

use std::fmt::Write;

use wonder_core::{Notice, NoticeLevel, Route, WeatherView};

pub fn notice(notice: &Notice) -> String {
    let marker = match notice.level {
        NoticeLevel::Info => "i",
        NoticeLevel::Success => "✓",
        NoticeLevel::Warning => "!",
        NoticeLevel::Error => "✗",
    };
    format!("{marker} {}", notice.message)
}

/// Shown while the details view is loading.
pub fn loading(route: &Route) -> Option<Notice> {
    match route {
        Route::Weather { city: Some(city) } => {
            Some(Notice::info(format!("Loading weather for {city}...")))
        }
        _ => None,
    }
}

pub fn suggestions(names: &[String]) -> String {
    names.iter().map(|name| format!("  {name}\n")).collect()
}

pub fn weather(view: &WeatherView) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Weather in {}, {}", view.location, view.country);
    let _ = writeln!(out);
    let _ = writeln!(out, "Current Weather");
    let _ = writeln!(out, "  {} {}°C  {}", view.category.icon(), view.temperature_c, view.condition);
    let _ = writeln!(out, "  Wind: {} km/h", view.wind_kph);
    let _ = writeln!(out, "  Humidity: {}%", view.humidity_pct);

    if !view.chart.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Temperature Trend");
        let _ = writeln!(out, "  {:<5} {:>6} {:>6} {:>6}", "Day", "Max", "Min", "Avg");
        for point in &view.chart {
            let _ = writeln!(
                out,
                "  {:<5} {:>6.1} {:>6.1} {:>6.1}",
                point.date, point.max, point.min, point.avg
            );
        }
    }

    if !view.days.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}-Day Forecast", view.days.len());
        for day in &view.days {
            let _ = writeln!(
                out,
                "  {:<12} {} {:<24} Max: {}°C  Min: {}°C",
                day.label,
                day.category.icon(),
                day.condition,
                day.max,
                day.min
            );
        }
    }

    out
}
