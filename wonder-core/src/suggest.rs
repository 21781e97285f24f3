//! City suggestions for the search box.

use std::sync::Arc;

use crate::{
    error::ValidationError,
    model::City,
    route::{self, NavigationIntent},
};

/// Maximum number of suggestions offered at once.
pub const MAX_SUGGESTIONS: usize = 5;

/// Queries this short (in characters) produce no suggestions yet.
pub const MIN_QUERY_LEN: usize = 2;

/// Names from `directory` containing `query`, ignoring case.
///
/// Returns nothing until the query is longer than [`MIN_QUERY_LEN`]. Matches
/// keep directory order and are capped at [`MAX_SUGGESTIONS`].
pub fn filter_suggestions(query: &str, directory: &[City]) -> Vec<String> {
    if query.chars().count() <= MIN_QUERY_LEN {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    directory
        .iter()
        .filter(|city| city.name.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .map(|city| city.name.clone())
        .collect()
}

/// State of the search view: the typed query, the directory once it has
/// loaded, and the suggestions derived from both.
#[derive(Debug, Clone, Default)]
pub struct SearchBox {
    query: String,
    directory: Option<Arc<[City]>>,
    suggestions: Vec<String>,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(directory: Arc<[City]>) -> Self {
        let mut search = Self::new();
        search.attach_directory(directory);
        search
    }

    pub fn attach_directory(&mut self, directory: Arc<[City]>) {
        self.directory = Some(directory);
        self.refresh();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn has_directory(&self) -> bool {
        self.directory.is_some()
    }

    pub fn submit(&self) -> Result<NavigationIntent, ValidationError> {
        route::submit(Some(&self.query))
    }

    fn refresh(&mut self) {
        self.suggestions = match &self.directory {
            Some(directory) => filter_suggestions(&self.query, directory),
            None => Vec::new(),
        };
    }
}
