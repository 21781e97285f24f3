//! Interactive prompts backed by `inquire`.

use inquire::{
    InquireError, Password, PasswordDisplayMode, Text,
    autocompletion::{Autocomplete, Replacement},
    error::CustomUserError,
};
use wonder_core::{Config, SearchBox};

/// Feeds the search box's suggestions into the text prompt as the user types.
#[derive(Debug, Clone)]
pub struct CityCompleter {
    search: SearchBox,
}

impl CityCompleter {
    pub fn new(search: SearchBox) -> Self {
        Self { search }
    }
}

impl Autocomplete for CityCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        self.search.set_query(input);
        Ok(self.search.suggestions().to_vec())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion)
    }
}

/// Ask for a city. `Ok(None)` when the user cancels the prompt.
pub fn city(search: &SearchBox) -> anyhow::Result<Option<String>> {
    let answer = Text::new("Enter city name:")
        .with_help_message("Type at least 3 letters for suggestions, Esc to quit")
        .with_autocomplete(CityCompleter::new(search.clone()))
        .prompt();

    cancelled_as_none(answer)
}

/// Ask for the provider settings, pre-filled with `current` values.
pub fn provider_settings(current: &Config) -> anyhow::Result<Option<Config>> {
    let base_url = Text::new("Provider base URL:")
        .with_initial_value(current.base_url())
        .prompt();
    let Some(base_url) = cancelled_as_none(base_url)? else {
        return Ok(None);
    };

    let api_host = Text::new("Provider host header:")
        .with_initial_value(current.api_host())
        .prompt();
    let Some(api_host) = cancelled_as_none(api_host)? else {
        return Ok(None);
    };

    let api_key = Password::new("Provider API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt();
    let Some(api_key) = cancelled_as_none(api_key)? else {
        return Ok(None);
    };

    Ok(Some(Config {
        api_key: Some(api_key).filter(|v| !v.is_empty()).or_else(|| current.api_key.clone()),
        api_host: Some(api_host),
        base_url: Some(base_url),
        cities: current.cities.clone(),
    }))
}

fn cancelled_as_none(answer: Result<String, InquireError>) -> anyhow::Result<Option<String>> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
