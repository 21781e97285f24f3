//! Core library for the `wonder` weather CLI.
//!
//! This crate defines:
//! - Configuration & provider credentials handling
//! - The city directory, its loader and the suggestion filter
//! - Routing between the search and details views
//! - The weather provider client and the details view state machine
//!
//! Nothing here renders; `wonder-cli` turns the resulting plain data into
//! terminal output.

pub mod chart;
pub mod client;
pub mod condition;
pub mod config;
pub mod details;
pub mod directory;
pub mod error;
pub mod model;
pub mod notice;
pub mod route;
pub mod suggest;

pub use chart::{ChartPoint, ForecastCard};
pub use client::{WeatherApi, WeatherApiClient};
pub use condition::{ConditionCategory, Theme};
pub use config::Config;
pub use details::{DetailsOutcome, DetailsState, Mount, MountHandle, WeatherDetails, WeatherView};
pub use directory::{DirectoryLoader, DirectorySource, LoadedDirectory};
pub use error::{ClientError, DirectoryError, FailureReason, ValidationError};
pub use model::{City, CurrentResponse, ForecastResponse, WeatherSnapshot};
pub use notice::{Notice, NoticeLevel};
pub use route::{NavigationIntent, Route};
pub use suggest::{SearchBox, filter_suggestions};
