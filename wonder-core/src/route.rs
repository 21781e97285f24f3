//! The two views of the app and how search submissions navigate between them.
//!
//! Routes use URL-style paths: `/` for search and `/weather?city=<encoded>`
//! for the details view.

use std::{borrow::Cow, fmt};

use crate::error::ValidationError;

pub const SEARCH_PATH: &str = "/";
pub const WEATHER_PATH: &str = "/weather";
pub const CITY_PARAM: &str = "city";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Search,
    /// Details view. `city` is `None` when the parameter is absent or empty.
    Weather { city: Option<String> },
}

impl Route {
    pub fn weather(city: impl Into<String>) -> Self {
        Route::Weather { city: Some(city.into()) }
    }

    /// Parse a path such as `/weather?city=Paris%2C%20TX`.
    ///
    /// Returns `None` for paths that name no known view.
    pub fn parse(target: &str) -> Option<Self> {
        let target = target.split('#').next().unwrap_or_default();
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (target, None),
        };

        match path.trim_end_matches('/') {
            "" => Some(Route::Search),
            WEATHER_PATH => {
                let city = query
                    .and_then(|q| query_param(q, CITY_PARAM))
                    .filter(|c| !c.is_empty());
                Some(Route::Weather { city })
            }
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Search => SEARCH_PATH.to_string(),
            Route::Weather { city: Some(city) } => {
                format!("{WEATHER_PATH}?{CITY_PARAM}={}", urlencoding::encode(city))
            }
            Route::Weather { city: None } => WEATHER_PATH.to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Request to switch views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub target: Route,
}

impl NavigationIntent {
    pub fn to(target: Route) -> Self {
        Self { target }
    }

    pub fn back_to_search() -> Self {
        Self::to(Route::Search)
    }

    pub fn path(&self) -> String {
        self.target.path()
    }
}

/// Validate a search submission and build the navigation to its details view.
///
/// Only literal emptiness is rejected; whitespace is passed through untouched.
pub fn submit(query: Option<&str>) -> Result<NavigationIntent, ValidationError> {
    match query {
        Some(city) if !city.is_empty() => Ok(NavigationIntent::to(Route::weather(city))),
        _ => Err(ValidationError::EmptyCity),
    }
}

// First value of `name` in a form-encoded query string.
fn query_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (decode_component(key) == name).then(|| decode_component(value))
    })
}

fn decode_component(raw: &str) -> String {
    let spaced: Cow<'_, str> =
        if raw.contains('+') { Cow::Owned(raw.replace('+', " ")) } else { Cow::Borrowed(raw) };
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_missing_query_is_rejected() {
        assert_eq!(submit(Some("")), Err(ValidationError::EmptyCity));
        assert_eq!(submit(None), Err(ValidationError::EmptyCity));
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let intent = submit(Some(" ")).expect("whitespace is non-empty");
        assert_eq!(intent.path(), "/weather?city=%20");
    }

    #[test]
    fn submit_targets_details_view() {
        let intent = submit(Some("Paris")).expect("should navigate");
        assert_eq!(intent.target, Route::weather("Paris"));
        assert_eq!(intent.path(), "/weather?city=Paris");
    }

    #[test]
    fn city_is_percent_encoded() {
        let intent = submit(Some("Paris, TX")).expect("should navigate");
        assert_eq!(intent.path(), "/weather?city=Paris%2C%20TX");

        let intent = submit(Some("São Paulo & Co")).expect("should navigate");
        assert_eq!(intent.path(), "/weather?city=S%C3%A3o%20Paulo%20%26%20Co");
    }

    #[test]
    fn parse_roundtrips_weather_route() {
        for city in ["Paris", "Paris, TX", "São Paulo", "a=b&c"] {
            let route = Route::weather(city);
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn parse_search_and_unknown() {
        assert_eq!(Route::parse("/"), Some(Route::Search));
        assert_eq!(Route::parse(""), Some(Route::Search));
        assert_eq!(Route::parse("/settings"), None);
    }

    #[test]
    fn parse_weather_without_city() {
        assert_eq!(Route::parse("/weather"), Some(Route::Weather { city: None }));
        assert_eq!(Route::parse("/weather?city="), Some(Route::Weather { city: None }));
        assert_eq!(Route::parse("/weather?days=3"), Some(Route::Weather { city: None }));
    }

    #[test]
    fn parse_takes_first_city_and_decodes_plus() {
        assert_eq!(
            Route::parse("/weather?city=New+York&city=Boston#top"),
            Some(Route::weather("New York"))
        );
    }
}
