use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use wonder_core::{
    Config, DetailsOutcome, DetailsState, DirectoryLoader, DirectorySource, LoadedDirectory,
    Notice, Route, SearchBox, WeatherApi, WeatherApiClient, WeatherDetails,
    client::DEFAULT_FORECAST_DAYS, route,
};

use crate::{logging::Verbosity, prompt, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wonder", version, about = "Weather Wonder: city search and forecasts")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Show debug logs.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// URL or path of cities.json (overrides config and WONDER_CITIES).
    #[arg(long, global = true, value_name = "LOCATION")]
    pub cities: Option<String>,

    /// Number of forecast days to request.
    #[arg(long, global = true, default_value_t = DEFAULT_FORECAST_DAYS)]
    pub days: u32,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store provider credentials in the config file.
    Configure,

    /// List city suggestions for a partial name.
    Suggest {
        /// Partial city name; at least three characters.
        query: String,
    },

    /// Search for a city and show its weather. Prompts when no city is given.
    Search {
        /// City to search for.
        query: Option<String>,
    },

    /// Show weather for a city.
    Show {
        /// City name as understood by the provider.
        city: String,
    },

    /// Open a view by path, e.g. `/` or `/weather?city=Paris`.
    Open {
        path: String,
    },
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.global.verbose, self.global.quiet)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let command = match self.command {
            Command::Configure => return configure(),
            other => other,
        };

        let mut config = Config::load()?;
        if let Some(cities) = self.global.cities {
            config.cities = Some(cities);
        }
        let mut app = App::new(config, self.global.days);

        match command {
            Command::Configure => configure(),
            Command::Suggest { query } => {
                let mut search = app.search_box().await;
                search.set_query(query);
                print!("{}", render::suggestions(search.suggestions()));
                Ok(())
            }
            Command::Search { query: None } => app.navigate(Route::Search).await,
            Command::Search { query: Some(query) } => match route::submit(Some(&query)) {
                Ok(intent) => app.navigate(intent.target).await,
                Err(err) => {
                    show_notice(&Notice::error(err.to_string()));
                    Ok(())
                }
            },
            Command::Show { city } => app.navigate(Route::weather(city)).await,
            Command::Open { path } => {
                let target = Route::parse(&path)
                    .with_context(|| format!("Unknown view '{path}'. Try `/` or `/weather?city=<name>`."))?;
                app.navigate(target).await
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let current = Config::load_from(&Config::config_file_path()?)?;
    let Some(updated) = prompt::provider_settings(&current)? else {
        println!("Configuration unchanged.");
        return Ok(());
    };

    let path = updated.save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

fn show_notice(notice: &Notice) {
    eprintln!("{}", render::notice(notice));
}

/// Session state shared by both views.
struct App {
    config: Config,
    days: u32,
    directory: Option<LoadedDirectory>,
}

impl App {
    fn new(config: Config, days: u32) -> Self {
        Self { config, days, directory: None }
    }

    /// Search box backed by the city directory, loaded on first use.
    async fn search_box(&mut self) -> SearchBox {
        if self.directory.is_none() {
            self.directory = Some(self.load_directory().await);
        }

        match &self.directory {
            Some(loaded) => SearchBox::with_directory(Arc::clone(&loaded.cities)),
            None => SearchBox::new(),
        }
    }

    async fn load_directory(&self) -> LoadedDirectory {
        let location = self.config.cities.as_deref().unwrap_or("cities.json");
        let loader = DirectoryLoader::new(DirectorySource::parse(location));
        let loaded = loader.load().await;

        if let Some(notice) = &loaded.notice {
            show_notice(notice);
        }
        debug!(count = loaded.cities.len(), "City directory ready");
        loaded
    }

    async fn navigate(&mut self, start: Route) -> anyhow::Result<()> {
        let mut route = start;

        loop {
            info!(%route, "Navigating");
            route = match route {
                Route::Search => {
                    let search = self.search_box().await;
                    match self.search_view(search)? {
                        Some(next) => next,
                        None => return Ok(()),
                    }
                }
                Route::Weather { .. } => match self.details_view(&route).await {
                    Some(next) => next,
                    None => return Ok(()),
                },
            };
        }
    }

    /// Prompt until a valid city is submitted. `None` when the user quits.
    fn search_view(&self, mut search: SearchBox) -> anyhow::Result<Option<Route>> {
        loop {
            let Some(answer) = prompt::city(&search)? else {
                return Ok(None);
            };

            search.set_query(answer);
            match search.submit() {
                Ok(intent) => return Ok(Some(intent.target)),
                Err(err) => show_notice(&Notice::error(err.to_string())),
            }
        }
    }

    /// Fetch and render the details view. Returns the redirect target, if any.
    async fn details_view(&self, route: &Route) -> Option<Route> {
        let api: Arc<dyn WeatherApi> = Arc::new(WeatherApiClient::new(&self.config));
        let details = WeatherDetails::new(api).with_forecast_days(self.days);

        if let Some(notice) = render::loading(route) {
            show_notice(&notice);
        }

        let mount = details.mount(route);
        let handle = mount.handle();

        let outcome = tokio::select! {
            outcome = mount.settle() => outcome,
            _ = tokio::signal::ctrl_c() => {
                handle.abort();
                None
            }
        };

        let DetailsOutcome { state, notice, redirect } = outcome?;
        if let Some(notice) = &notice {
            show_notice(notice);
        }

        match state {
            DetailsState::Ready(view) => print!("{}", render::weather(&view)),
            DetailsState::Failed(reason) => debug!(%reason, "Weather details failed"),
            DetailsState::Loading => {}
        }

        redirect.map(|intent| intent.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_show_with_global_days() {
        let cli = Cli::try_parse_from(["wonder", "show", "Paris", "--days", "3"]).expect("parse");
        assert_eq!(cli.global.days, 3);
        assert!(matches!(cli.command, Command::Show { ref city } if city == "Paris"));
    }

    #[test]
    fn search_query_is_optional() {
        let cli = Cli::try_parse_from(["wonder", "search"]).expect("parse");
        assert!(matches!(cli.command, Command::Search { query: None }));
        assert_eq!(cli.global.days, DEFAULT_FORECAST_DAYS);
    }

    #[test]
    fn verbose_and_cities_flags() {
        let cli = Cli::try_parse_from(["wonder", "-v", "suggest", "par", "--cities", "c.json"])
            .expect("parse");
        assert_eq!(cli.verbosity(), Verbosity::Verbose);
        assert_eq!(cli.global.cities.as_deref(), Some("c.json"));
    }

    #[test]
    fn open_takes_a_path() {
        let cli = Cli::try_parse_from(["wonder", "open", "/weather?city=Paris"]).expect("parse");
        assert!(matches!(cli.command, Command::Open { ref path } if path == "/weather?city=Paris"));
    }
}
