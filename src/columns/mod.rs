// src/columns/mod.rs
pub mod detect;
pub mod rank;

use anyhow::{anyhow, Result};
use tracing::info;

pub use detect::{find_country_column, find_year_column};
pub use rank::{percap_score, rank_value_columns, RankedColumn};

/// Which columns a table's rows are read through.
#[derive(Debug, Clone)]
pub struct ColumnPlan {
    pub year: String,
    pub country: String,
    /// All other columns, best per-capita candidate first.
    pub values: Vec<RankedColumn>,
}

impl ColumnPlan {
    /// Value columns that may actually supply a number, in trial order.
    pub fn eligible_values(&self) -> impl Iterator<Item = &RankedColumn> {
        self.values.iter().filter(|c| c.is_eligible())
    }
}

/// Detect the year, country and value columns of a table.
///
/// Missing year or country columns are fatal.
pub fn plan_columns(columns: &[String]) -> Result<ColumnPlan> {
    let year = find_year_column(columns)
        .ok_or_else(|| anyhow!("no 'year' column found (columns: {})", columns.join(", ")))?
        .to_string();
    let country = find_country_column(columns, &year)
        .ok_or_else(|| anyhow!("no country column found (columns: {})", columns.join(", ")))?
        .to_string();
    let values = rank_value_columns(columns, &[year.as_str(), country.as_str()]);

    info!(
        year = %year,
        country = %country,
        value_candidates = values.iter().filter(|c| c.is_eligible()).count(),
        "detected columns"
    );
    Ok(ColumnPlan {
        year,
        country,
        values,
    })
}
