use serde::{Deserialize, Serialize};

/// One entry of the city directory. Extra fields in `cities.json` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
}

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Current {
    pub temp_c: f64,
    pub condition: Condition,
    pub wind_kph: f64,
    pub humidity: u8,
}

/// Body of `GET /current.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentResponse {
    pub location: Location,
    pub current: Current,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    pub avgtemp_c: f64,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// ISO date, e.g. `2024-06-01`.
    pub date: String,
    pub day: Day,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

/// Body of `GET /forecast.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub forecast: Forecast,
}

/// Both provider payloads for one city, as fetched together by the details view.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub current: CurrentResponse,
    pub forecast: ForecastResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_response_ignores_unknown_fields() {
        let json = r#"{
            "location": {"name": "Paris", "country": "France", "tz_id": "Europe/Paris"},
            "current": {
                "temp_c": 18.0,
                "feelslike_c": 17.1,
                "condition": {"text": "Partly cloudy", "code": 1003},
                "wind_kph": 11.2,
                "humidity": 64
            }
        }"#;

        let parsed: CurrentResponse = serde_json::from_str(json).expect("should parse");
        assert_eq!(parsed.location.name, "Paris");
        assert_eq!(parsed.current.condition.text, "Partly cloudy");
        assert_eq!(parsed.current.humidity, 64);
    }

    #[test]
    fn city_directory_entries_keep_only_name() {
        let json = r#"[{"name": "Paris", "country": "FR"}, {"name": "London", "lat": 51.5}]"#;
        let cities: Vec<City> = serde_json::from_str(json).expect("should parse");
        assert_eq!(cities, vec![City::new("Paris"), City::new("London")]);
    }
}
