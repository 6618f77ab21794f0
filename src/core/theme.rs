//! Persisted light/dark display preference

use crate::store::{self, StateStore};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

/// Store key holding the selected theme.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Reads the persisted preference; an absent or undecodable key means
    /// the default light theme.
    pub fn load(store: &dyn StateStore) -> Self {
        store::get_json(store, THEME_KEY).unwrap_or_default()
    }

    pub fn save(self, store: &dyn StateStore) {
        if let Err(e) = store::put_json(store, THEME_KEY, &self) {
            warn!(error = %e, "Failed to persist theme preference");
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(anyhow::anyhow!("Unknown theme: {s} (expected light or dark)")),
        }
    }
}
