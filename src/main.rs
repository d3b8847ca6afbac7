use anyhow::Result;
use co2maps::{config::Settings, pipeline};
use std::{env, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(filter).init();

    // ─── 2) settings: optional YAML path as the only argument ────────
    let settings = Settings::load(env::args_os().nth(1).map(PathBuf::from))?;
    info!(
        csv = %settings.csv_path.display(),
        out = %settings.out_dir.display(),
        "startup"
    );

    // ─── 3) run ──────────────────────────────────────────────────────
    let summary = pipeline::run(&settings)?;
    match summary.index {
        Some(index) => info!(
            maps = summary.maps.len(),
            skipped = summary.skipped.len(),
            index = %index.display(),
            "all done"
        ),
        None => info!("no maps generated"),
    }
    Ok(())
}
