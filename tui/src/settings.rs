use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use termsweep_core::{CellCount, Coord};

/// Defaults and limits for the command line, optionally read from a TOML file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub default_cols: Coord,
    pub default_rows: Coord,
    pub default_mines: CellCount,
    pub max_cols: Coord,
    pub max_rows: Coord,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_cols: 30,
            default_rows: 24,
            default_mines: 10,
            max_cols: 30,
            max_rows: 24,
        }
    }
}

impl Settings {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read settings file {}", path.display()))?;
        let settings = Self::from_toml(&text)
            .with_context(|| format!("invalid settings file {}", path.display()))?;
        log::debug!("Loaded {:?} from {}", settings, path.display());
        Ok(settings)
    }
}
