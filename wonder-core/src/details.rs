//! The weather details view.
//!
//! A mount starts in [`DetailsState::Loading`] and settles exactly once into
//! [`DetailsState::Ready`] or [`DetailsState::Failed`]. The current conditions
//! and the forecast are requested together and both must succeed; there is no
//! partial rendering. A new navigation means a new mount.

use std::sync::Arc;

use futures::future::{AbortHandle, Abortable, BoxFuture, FutureExt, try_join};
use tracing::{info, warn};

use crate::{
    chart::{self, ChartPoint, ForecastCard},
    client::{DEFAULT_FORECAST_DAYS, WeatherApi},
    condition::{ConditionCategory, Theme},
    error::FailureReason,
    model::WeatherSnapshot,
    notice::Notice,
    route::{NavigationIntent, Route},
};

/// Everything the details view shows once data has arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub location: String,
    pub country: String,
    pub temperature_c: f64,
    pub condition: String,
    pub wind_kph: f64,
    pub humidity_pct: u8,
    pub category: ConditionCategory,
    pub theme: Theme,
    pub chart: Vec<ChartPoint>,
    pub days: Vec<ForecastCard>,
    pub snapshot: WeatherSnapshot,
}

impl WeatherView {
    pub fn from_snapshot(snapshot: WeatherSnapshot) -> Self {
        let current = &snapshot.current;
        let category = ConditionCategory::from_text(&current.current.condition.text);

        Self {
            location: current.location.name.clone(),
            country: current.location.country.clone(),
            temperature_c: current.current.temp_c,
            condition: current.current.condition.text.clone(),
            wind_kph: current.current.wind_kph,
            humidity_pct: current.current.humidity,
            category,
            theme: category.theme(),
            chart: chart::chart_series(&snapshot.forecast),
            days: chart::forecast_cards(&snapshot.forecast),
            snapshot,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailsState {
    Loading,
    Ready(Box<WeatherView>),
    Failed(FailureReason),
}

impl DetailsState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DetailsState::Loading)
    }
}

/// Terminal state of a mount plus the side effects the caller should apply.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsOutcome {
    pub state: DetailsState,
    pub notice: Option<Notice>,
    pub redirect: Option<NavigationIntent>,
}

/// Cancels a mount whose view has gone away.
#[derive(Debug, Clone)]
pub struct MountHandle(AbortHandle);

impl MountHandle {
    pub fn abort(&self) {
        self.0.abort();
    }

    pub fn is_aborted(&self) -> bool {
        self.0.is_aborted()
    }
}

/// An in-flight mount of the details view, in [`DetailsState::Loading`]
/// until [`Mount::settle`] returns.
pub struct Mount {
    handle: MountHandle,
    task: Abortable<BoxFuture<'static, DetailsOutcome>>,
}

impl Mount {
    pub fn handle(&self) -> MountHandle {
        self.handle.clone()
    }

    /// Wait for the mount to settle. `None` if it was aborted first; the
    /// late result, if any, is dropped.
    pub async fn settle(self) -> Option<DetailsOutcome> {
        match self.task.await {
            Ok(outcome) => Some(outcome),
            Err(_aborted) => {
                info!("Weather details mount aborted; discarding result");
                None
            }
        }
    }
}

#[derive(Clone)]
pub struct WeatherDetails {
    api: Arc<dyn WeatherApi>,
    forecast_days: u32,
}

impl WeatherDetails {
    pub fn new(api: Arc<dyn WeatherApi>) -> Self {
        Self { api, forecast_days: DEFAULT_FORECAST_DAYS }
    }

    pub fn with_forecast_days(mut self, days: u32) -> Self {
        self.forecast_days = days;
        self
    }

    /// Start loading the view for `route`.
    ///
    /// Anything other than a details route with a city is treated as a
    /// missing city.
    pub fn mount(&self, route: &Route) -> Mount {
        let city = match route {
            Route::Weather { city } => city.clone(),
            Route::Search => None,
        };

        let api = Arc::clone(&self.api);
        let days = self.forecast_days;
        let task = async move { resolve(api.as_ref(), city.as_deref(), days).await }.boxed();

        let (handle, registration) = AbortHandle::new_pair();
        Mount { handle: MountHandle(handle), task: Abortable::new(task, registration) }
    }

    /// Mount and wait in one step, for callers that never abort.
    pub async fn load(&self, city: Option<&str>) -> DetailsOutcome {
        resolve(self.api.as_ref(), city, self.forecast_days).await
    }
}

async fn resolve(api: &dyn WeatherApi, city: Option<&str>, days: u32) -> DetailsOutcome {
    let city = match city {
        Some(city) if !city.is_empty() => city,
        _ => {
            warn!("Weather details opened without a city");
            return DetailsOutcome {
                state: DetailsState::Failed(FailureReason::NoCityProvided),
                notice: Some(Notice::warning(FailureReason::NoCityProvided.to_string())),
                redirect: Some(NavigationIntent::back_to_search()),
            };
        }
    };

    match try_join(api.get_current(city), api.get_forecast(city, days)).await {
        Ok((current, forecast)) => {
            info!(city, days = forecast.forecast.forecastday.len(), "Weather data loaded");
            let view = WeatherView::from_snapshot(WeatherSnapshot { current, forecast });
            DetailsOutcome {
                state: DetailsState::Ready(Box::new(view)),
                notice: Some(Notice::success("Weather data loaded successfully")),
                redirect: None,
            }
        }
        Err(err) => {
            let reason = FailureReason::from(err);
            warn!(city, "Error fetching weather data");
            DetailsOutcome {
                state: DetailsState::Failed(reason),
                notice: Some(Notice::error(reason.to_string())),
                redirect: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        client::MockWeatherApi,
        error::ClientError,
        model::{
            Condition, Current, CurrentResponse, Day, Forecast, ForecastDay, ForecastResponse,
            Location,
        },
        notice::NoticeLevel,
    };

    fn current(text: &str) -> CurrentResponse {
        CurrentResponse {
            location: Location { name: "Paris".into(), country: "France".into() },
            current: Current {
                temp_c: 21.5,
                condition: Condition { text: text.into() },
                wind_kph: 9.4,
                humidity: 58,
            },
        }
    }

    fn forecast() -> ForecastResponse {
        let day = |date: &str, max, min, avg| ForecastDay {
            date: date.into(),
            day: Day {
                maxtemp_c: max,
                mintemp_c: min,
                avgtemp_c: avg,
                condition: Condition { text: "Sunny".into() },
            },
        };

        ForecastResponse {
            forecast: Forecast {
                forecastday: vec![
                    day("2024-06-01", 30.0, 20.0, 25.0),
                    day("2024-06-02", 27.0, 18.0, 22.5),
                ],
            },
        }
    }

    fn details(mock: MockWeatherApi) -> WeatherDetails {
        WeatherDetails::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn missing_city_fails_without_calling_the_api() {
        let mut mock = MockWeatherApi::new();
        mock.expect_get_current().never();
        mock.expect_get_forecast().never();
        let details = details(mock);

        let outcome = details.mount(&Route::Weather { city: None }).settle().await;
        let outcome = outcome.expect("mount was not aborted");

        assert_eq!(outcome.state, DetailsState::Failed(FailureReason::NoCityProvided));
        assert_eq!(outcome.redirect, Some(NavigationIntent::back_to_search()));
        let notice = outcome.notice.expect("user should be told");
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, "No city specified");
    }

    #[tokio::test]
    async fn empty_city_counts_as_missing() {
        let mut mock = MockWeatherApi::new();
        mock.expect_get_current().never();
        mock.expect_get_forecast().never();

        let outcome = details(mock).load(Some("")).await;
        assert_eq!(outcome.state, DetailsState::Failed(FailureReason::NoCityProvided));
    }

    #[tokio::test]
    async fn both_calls_succeed_gives_ready_view() {
        let mut mock = MockWeatherApi::new();
        mock.expect_get_current()
            .withf(|q| q == "Paris")
            .times(1)
            .returning(|_| Ok(current("Partly cloudy")));
        mock.expect_get_forecast()
            .withf(|q, days| q == "Paris" && *days == 7)
            .times(1)
            .returning(|_, _| Ok(forecast()));

        let mount = details(mock).mount(&Route::weather("Paris"));
        let outcome = mount.settle().await.expect("mount was not aborted");
        let DetailsState::Ready(view) = &outcome.state else {
            panic!("expected ready state, got {:?}", outcome.state);
        };

        assert_eq!(view.location, "Paris");
        assert_eq!(view.category, ConditionCategory::Cloudy);
        assert_eq!(view.theme, ConditionCategory::Cloudy.theme());
        assert_eq!(view.chart.len(), 2);
        assert_eq!(
            view.chart[0],
            ChartPoint { date: "Sat".into(), max: 30.0, min: 20.0, avg: 25.0 }
        );
        assert_eq!(view.days[1].label, "Sun, Jun 2");
        assert!(outcome.redirect.is_none());
        assert_eq!(outcome.notice.map(|n| n.level), Some(NoticeLevel::Success));
    }

    #[tokio::test]
    async fn forecast_failure_discards_current_data() {
        let mut mock = MockWeatherApi::new();
        mock.expect_get_current().returning(|_| Ok(current("Sunny")));
        mock.expect_get_forecast().returning(|_, _| Err(ClientError::FetchFailed));

        let outcome = details(mock).load(Some("Paris")).await;

        assert_eq!(outcome.state, DetailsState::Failed(FailureReason::FetchFailed));
        assert!(outcome.redirect.is_none());
        let notice = outcome.notice.expect("user should be told");
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Failed to fetch weather data");
    }

    #[tokio::test]
    async fn current_failure_is_fetch_failed() {
        let mut mock = MockWeatherApi::new();
        mock.expect_get_current().returning(|_| Err(ClientError::FetchFailed));
        mock.expect_get_forecast().returning(|_, _| Ok(forecast()));

        let outcome = details(mock).load(Some("Paris")).await;
        assert_eq!(outcome.state, DetailsState::Failed(FailureReason::FetchFailed));
    }

    #[tokio::test]
    async fn custom_forecast_days_are_requested() {
        let mut mock = MockWeatherApi::new();
        mock.expect_get_current().returning(|_| Ok(current("Snow")));
        mock.expect_get_forecast()
            .withf(|_, days| *days == 3)
            .times(1)
            .returning(|_, _| Ok(forecast()));

        let outcome = details(mock).with_forecast_days(3).load(Some("Oslo")).await;
        assert!(outcome.state.is_terminal());
    }

    #[tokio::test]
    async fn aborted_mount_settles_quietly() {
        let mut mock = MockWeatherApi::new();
        mock.expect_get_current().never();
        mock.expect_get_forecast().never();

        let mount = details(mock).mount(&Route::weather("Paris"));
        let handle = mount.handle();
        handle.abort();

        assert!(handle.is_aborted());
        assert!(mount.settle().await.is_none());
    }

    #[tokio::test]
    async fn search_route_is_treated_as_missing_city() {
        let mock = MockWeatherApi::new();
        let outcome = details(mock).mount(&Route::Search).settle().await;
        assert_eq!(
            outcome.map(|o| o.state),
            Some(DetailsState::Failed(FailureReason::NoCityProvided))
        );
    }
}
