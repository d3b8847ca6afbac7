// src/render/manifest.rs
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use super::{GeneratedMap, SkippedYear};

pub const MANIFEST_FILE: &str = "manifest.json";

/// Machine-readable summary of one run.
#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub generated_at: DateTime<Utc>,
    pub input: &'a Path,
    pub maps: &'a [GeneratedMap],
    pub skipped: &'a [SkippedYear],
}

/// Write `manifest.json` atomically: to a temp file, then rename over.
pub fn write_manifest(out_dir: &Path, manifest: &Manifest<'_>) -> Result<PathBuf> {
    let path = out_dir.join(MANIFEST_FILE);
    let tmp_path = out_dir.join(format!(".{}.tmp", MANIFEST_FILE));

    let mut tmp = fs::File::create(&tmp_path)
        .with_context(|| format!("creating {}", tmp_path.display()))?;
    serde_json::to_writer_pretty(&mut tmp, manifest).context("serializing manifest")?;
    tmp.write_all(b"\n")?;
    drop(tmp);

    fs::rename(&tmp_path, &path)
        .with_context(|| format!("renaming {} -> {}", tmp_path.display(), path.display()))?;
    Ok(path)
}
