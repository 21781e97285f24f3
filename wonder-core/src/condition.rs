//! Mapping from provider condition text to a display category.
//!
//! The provider returns free text such as `"Partly cloudy"`. Only a small
//! vocabulary is recognized (exact match, ignoring case); everything else
//! falls back to [`ConditionCategory::Default`].

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionCategory {
    Sunny,
    Rainy,
    Cloudy,
    Snowy,
    Default,
}

const VOCABULARY: &[(&str, ConditionCategory)] = &[
    ("sunny", ConditionCategory::Sunny),
    ("clear", ConditionCategory::Sunny),
    ("rain", ConditionCategory::Rainy),
    ("heavy rain", ConditionCategory::Rainy),
    ("moderate rain", ConditionCategory::Rainy),
    ("partly cloudy", ConditionCategory::Cloudy),
    ("cloudy", ConditionCategory::Cloudy),
    ("snow", ConditionCategory::Snowy),
];

impl ConditionCategory {
    pub fn from_text(text: &str) -> Self {
        let lower = text.to_lowercase();
        VOCABULARY
            .iter()
            .find(|(word, _)| *word == lower)
            .map(|(_, category)| *category)
            .unwrap_or(ConditionCategory::Default)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionCategory::Sunny => "sunny",
            ConditionCategory::Rainy => "rainy",
            ConditionCategory::Cloudy => "cloudy",
            ConditionCategory::Snowy => "snowy",
            ConditionCategory::Default => "default",
        }
    }

    /// Glyph shown next to the condition.
    pub fn icon(&self) -> &'static str {
        match self {
            ConditionCategory::Sunny => "☀",
            ConditionCategory::Rainy => "☂",
            ConditionCategory::Cloudy => "☁",
            ConditionCategory::Snowy => "❄",
            ConditionCategory::Default => "☁",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ConditionCategory::Sunny => Theme {
                mode: ThemeMode::Light,
                primary: "#FF6B6B",
                background: "#FFD166",
                gradient: ("#FFD166", "#FF9999"),
            },
            ConditionCategory::Rainy => Theme {
                mode: ThemeMode::Dark,
                primary: "#4ECDC4",
                background: "#292F36",
                gradient: ("#292F36", "#4ECDC4"),
            },
            ConditionCategory::Cloudy => Theme {
                mode: ThemeMode::Light,
                primary: "#45B7D1",
                background: "#E0E0E0",
                gradient: ("#E0E0E0", "#45B7D1"),
            },
            ConditionCategory::Snowy => Theme {
                mode: ThemeMode::Light,
                primary: "#6B9080",
                background: "#F0F7F4",
                gradient: ("#F0F7F4", "#A4C3B2"),
            },
            ConditionCategory::Default => Theme {
                mode: ThemeMode::Dark,
                primary: "#90caf9",
                background: "#0a1929",
                gradient: ("#0a1929", "#1e3a5f"),
            },
        }
    }
}

impl fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Palette a renderer may apply for a given condition category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub primary: &'static str,
    pub background: &'static str,
    pub gradient: (&'static str, &'static str),
}
