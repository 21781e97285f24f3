use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    condition::ConditionCategory,
    model::{ForecastDay, ForecastResponse},
};

/// One point of the temperature trend series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Short weekday label, e.g. `Sat`.
    pub date: String,
    pub max: f64,
    pub min: f64,
    pub avg: f64,
}

impl ChartPoint {
    pub fn from_day(day: &ForecastDay) -> Self {
        Self {
            date: day_label(&day.date, "%a"),
            max: day.day.maxtemp_c,
            min: day.day.mintemp_c,
            avg: day.day.avgtemp_c,
        }
    }
}

/// One tile of the multi-day forecast grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastCard {
    /// e.g. `Sat, Jun 1`.
    pub label: String,
    pub condition: String,
    pub category: ConditionCategory,
    pub max: f64,
    pub min: f64,
}

impl ForecastCard {
    pub fn from_day(day: &ForecastDay) -> Self {
        Self {
            label: day_label(&day.date, "%a, %b %-d"),
            condition: day.day.condition.text.clone(),
            category: ConditionCategory::from_text(&day.day.condition.text),
            max: day.day.maxtemp_c,
            min: day.day.mintemp_c,
        }
    }
}

pub fn chart_series(forecast: &ForecastResponse) -> Vec<ChartPoint> {
    forecast.forecast.forecastday.iter().map(ChartPoint::from_day).collect()
}

pub fn forecast_cards(forecast: &ForecastResponse) -> Vec<ForecastCard> {
    forecast.forecast.forecastday.iter().map(ForecastCard::from_day).collect()
}

// Provider dates are calendar dates, so they are formatted without any
// timezone shift. Unparseable dates are shown as-is.
fn day_label(date: &str, format: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format(format).to_string(),
        Err(_) => date.to_string(),
    }
}
