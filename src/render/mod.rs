// src/render/mod.rs
pub mod choropleth;
pub mod index;
pub mod manifest;
pub mod outlines;
pub mod world;

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

pub use choropleth::{value_range, Choropleth};
pub use index::write_index;
pub use manifest::{write_manifest, Manifest};

use crate::dataset::YearData;

pub const SERIES_LABEL: &str = "tCO₂/person";

/// A map that was written to the output directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedMap {
    pub year: i32,
    /// File name relative to the output directory.
    pub file: String,
    pub countries: usize,
    pub min: f64,
    pub max: f64,
}

/// A selected year that had too few countries for a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkippedYear {
    pub year: i32,
    pub countries: usize,
}

pub fn svg_file_name(year: i32) -> String {
    format!("world_percap_{}.svg", year)
}

pub fn map_title(year: i32) -> String {
    format!("CO₂ per capita (t/person) - {}", year)
}

/// Render one year's map to `<out_dir>/world_percap_<year>.svg`.
#[tracing::instrument(level = "debug", skip(out_dir, data), fields(countries = data.len()))]
pub fn render_year(out_dir: &Path, year: i32, data: &YearData) -> Result<GeneratedMap> {
    let off_map: Vec<&str> = data
        .keys()
        .copied()
        .filter(|code| world::by_code(code).is_none())
        .collect();
    if !off_map.is_empty() {
        warn!(year, codes = ?off_map, "codes without a map region are not drawn");
    }

    let file = svg_file_name(year);
    let path = out_dir.join(&file);
    Choropleth::new(map_title(year), SERIES_LABEL, data).render_to_file(&path)?;

    let (min, max) = value_range(data).unwrap_or((0.0, 0.0));
    info!(year, countries = data.len(), path = %path.display(), "map written");
    Ok(GeneratedMap {
        year,
        file,
        countries: data.len(),
        min,
        max,
    })
}
