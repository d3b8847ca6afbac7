// src/config.rs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Environment variable naming an optional YAML settings file.
pub const CONFIG_ENV: &str = "CO2MAPS_CONFIG";

/// Everything the pipeline can be tuned with.
///
/// Every field has a default, so a settings file only needs the keys it
/// wants to override:
///
/// ```yaml
/// csv_path: data/co2.csv
/// auto_last_n: 15
/// min_countries_per_year: 40
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// CSV with a header row, UTF-8.
    pub csv_path: PathBuf,
    /// Created if absent; receives the SVGs, `index.html` and `manifest.json`.
    pub out_dir: PathBuf,
    /// Explicit years to render, intersected with the years present.
    pub years: Vec<i32>,
    /// When set (and > 0), render the N most recent years instead of `years`.
    pub auto_last_n: Option<usize>,
    /// A year needs at least this many resolved countries to get a map.
    pub min_countries_per_year: usize,
    /// How many recent years to fall back to when nothing else is selected.
    pub fallback_last_n: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("co-emissions-per-capita.csv"),
            out_dir: PathBuf::from("maps_out_percap"),
            years: vec![1990, 2000, 2010, 2020, 2023],
            auto_last_n: None,
            min_countries_per_year: 60,
            fallback_last_n: 10,
        }
    }
}

impl Settings {
    /// Parse a YAML settings file; missing keys keep their defaults.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        Self::from_yaml_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        // an empty document deserializes to unit, not to a map
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Resolve settings from, in order: an explicit path (first CLI arg),
    /// `$CO2MAPS_CONFIG`, or the built-in defaults.
    pub fn load(explicit: Option<PathBuf>) -> Result<Self> {
        let path = explicit.or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));
        match path {
            Some(p) => Self::from_yaml_file(&p),
            None => Ok(Self::default()),
        }
    }
}
