// src/pipeline.rs
use anyhow::{Context, Result};
use chrono::Utc;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

use crate::{
    columns::plan_columns,
    config::Settings,
    dataset::{group_rows, LoadStats},
    load::load_csv,
    render::{self, GeneratedMap, Manifest, SkippedYear},
    years::select_years,
};

/// Outcome of a full run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub stats: LoadStats,
    pub maps: Vec<GeneratedMap>,
    pub skipped: Vec<SkippedYear>,
    /// `None` when no map was produced.
    pub index: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
}

/// Load, group, select, render and index.
///
/// Only an unreadable/empty CSV or a missing year/country column is an
/// error, and both are detected before anything is written.
pub fn run(settings: &Settings) -> Result<RunSummary> {
    // ─── 1) load + detect columns ───────────────────────────────────
    let table = load_csv(&settings.csv_path)?;
    let plan = plan_columns(&table.columns)?;

    // ─── 2) group values by (year, code) ────────────────────────────
    let (data, stats) = group_rows(&table.rows, &plan);
    if data.is_empty() {
        warn!("no usable per-capita values found");
    }

    // ─── 3) choose years ────────────────────────────────────────────
    let years = select_years(&data.available_years(), settings);

    fs::create_dir_all(&settings.out_dir)
        .with_context(|| format!("creating output directory {}", settings.out_dir.display()))?;

    // ─── 4) one map per year above the threshold ────────────────────
    let mut summary = RunSummary {
        stats,
        ..RunSummary::default()
    };
    for year in years {
        let Some(year_data) = data.get(year) else {
            continue;
        };
        if year_data.len() < settings.min_countries_per_year {
            info!(
                year,
                countries = year_data.len(),
                min = settings.min_countries_per_year,
                "skip: too few countries mapped"
            );
            summary.skipped.push(SkippedYear {
                year,
                countries: year_data.len(),
            });
            continue;
        }
        summary
            .maps
            .push(render::render_year(&settings.out_dir, year, year_data)?);
    }

    // ─── 5) index + manifest ────────────────────────────────────────
    if summary.maps.is_empty() {
        warn!(
            min = settings.min_countries_per_year,
            "no maps generated; lower min_countries_per_year or adjust years/auto_last_n"
        );
        return Ok(summary);
    }

    let index = render::write_index(&settings.out_dir, &summary.maps)?;
    info!(path = %index.display(), maps = summary.maps.len(), "index written");

    let manifest = render::write_manifest(
        &settings.out_dir,
        &Manifest {
            generated_at: Utc::now(),
            input: &settings.csv_path,
            maps: &summary.maps,
            skipped: &summary.skipped,
        },
    )?;

    summary.index = Some(index);
    summary.manifest = Some(manifest);
    Ok(summary)
}
