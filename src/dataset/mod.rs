// src/dataset/mod.rs
pub mod numbers;

use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::{columns::ColumnPlan, countries::to_code, load::Row};
pub use numbers::{parse_value, parse_year};

/// ISO code → value for one year.
pub type YearData = BTreeMap<&'static str, f64>;

/// Per-capita values grouped by year, then by country code.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct YearlyDataset {
    by_year: BTreeMap<i32, YearData>,
}

/// What happened to the rows while grouping.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub rows: usize,
    pub bad_year: usize,
    pub unresolved_country: usize,
    pub no_value: usize,
    pub accepted: usize,
}

impl YearlyDataset {
    /// Record `value` for `code` in `year`; a later value for the same pair wins.
    pub fn insert(&mut self, year: i32, code: &'static str, value: f64) {
        self.by_year.entry(year).or_default().insert(code, value);
    }

    pub fn get(&self, year: i32) -> Option<&YearData> {
        self.by_year.get(&year)
    }

    /// Number of countries with a value in `year`.
    pub fn country_count(&self, year: i32) -> usize {
        self.by_year.get(&year).map_or(0, BTreeMap::len)
    }

    /// Years with at least one value, ascending.
    pub fn available_years(&self) -> Vec<i32> {
        self.by_year.keys().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.by_year.is_empty()
    }
}

/// First positively scored column holding a number wins.
fn pick_value(row: &Row, plan: &ColumnPlan) -> Option<f64> {
    plan.eligible_values()
        .find_map(|col| row.get(&col.name).and_then(|raw| parse_value(raw)))
}

/// Build the yearly dataset from raw rows.
///
/// Rows are skipped, never rejected: an unparsable year, an unresolvable or
/// aggregate country name, or no usable value each drop the row.
pub fn group_rows(rows: &[Row], plan: &ColumnPlan) -> (YearlyDataset, LoadStats) {
    let mut data = YearlyDataset::default();
    let mut stats = LoadStats {
        rows: rows.len(),
        ..LoadStats::default()
    };

    for row in rows {
        let Some(year) = row.get(&plan.year).and_then(|y| parse_year(y)) else {
            stats.bad_year += 1;
            continue;
        };

        let name = row.get(&plan.country).map(String::as_str).unwrap_or("");
        let Some(code) = to_code(name) else {
            debug!(name, year, "unresolved country");
            stats.unresolved_country += 1;
            continue;
        };

        let Some(value) = pick_value(row, plan) else {
            stats.no_value += 1;
            continue;
        };

        data.insert(year, code, value);
        stats.accepted += 1;
    }

    info!(
        rows = stats.rows,
        accepted = stats.accepted,
        bad_year = stats.bad_year,
        unresolved = stats.unresolved_country,
        no_value = stats.no_value,
        years = data.by_year.len(),
        "grouped rows"
    );
    (data, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{columns::plan_columns, load::read_table};
    use anyhow::Result;

    fn group(csv: &str) -> Result<(YearlyDataset, LoadStats)> {
        let table = read_table(csv.as_bytes())?;
        let plan = plan_columns(&table.columns)?;
        Ok(group_rows(&table.rows, &plan))
    }

    #[test]
    fn groups_by_year_and_code() -> Result<()> {
        let (data, stats) = group(
            "Entity,Code,Year,co2_per_capita\n\
             France,FRA,2020,4.5\n\
             Germany,DEU,2020,7.7\n\
             France,FRA,2019,4.8\n",
        )?;
        assert_eq!(data.available_years(), vec![2019, 2020]);
        assert_eq!(data.country_count(2020), 2);
        assert_eq!(data.get(2020).and_then(|d| d.get("fr")), Some(&4.5));
        assert_eq!(data.get(2019).and_then(|d| d.get("fr")), Some(&4.8));
        assert_eq!(stats.accepted, 3);
        Ok(())
    }

    #[test]
    fn aggregates_never_reach_any_year() -> Result<()> {
        let (data, stats) = group(
            "country,year,co2_per_capita\n\
             World,2000,4.1\n\
             Europe,2000,7.0\n\
             High income countries,2001,10.2\n\
             Chile,2000,3.9\n",
        )?;
        assert_eq!(data.available_years(), vec![2000]);
        assert_eq!(data.country_count(2000), 1);
        assert_eq!(stats.unresolved_country, 3);
        Ok(())
    }

    #[test]
    fn duplicate_code_last_value_wins() -> Result<()> {
        let (data, _) = group(
            "country,year,co2_per_capita\n\
             Russia,2010,11.0\n\
             Russian Federation,2010,12.5\n",
        )?;
        assert_eq!(data.country_count(2010), 1);
        assert_eq!(data.get(2010).and_then(|d| d.get("ru")), Some(&12.5));
        Ok(())
    }

    #[test]
    fn falls_through_ranked_columns_per_row() -> Result<()> {
        // co2_per_capita (5) before co2_pc (3); share columns are never used.
        let (data, stats) = group(
            "country,year,co2_pc,co2_per_capita,share_co2\n\
             Peru,2015,1.5,,9\n\
             Chad,2015,,0.1,9\n\
             Mali,2015,,,9\n",
        )?;
        let y = data.get(2015).expect("2015 present");
        assert_eq!(y.get("pe"), Some(&1.5));
        assert_eq!(y.get("td"), Some(&0.1));
        assert!(y.get("ml").is_none());
        assert_eq!(stats.no_value, 1);
        Ok(())
    }

    #[test]
    fn non_positive_columns_are_ignored_even_when_numeric() -> Result<()> {
        let (data, stats) = group("country,year,population\nPeru,2015,33000000\n")?;
        assert!(data.is_empty());
        assert_eq!(stats.no_value, 1);
        Ok(())
    }

    #[test]
    fn bad_years_are_skipped() -> Result<()> {
        let (data, stats) = group(
            "country,year,co2_per_capita\n\
             Peru,,1.0\n\
             Peru,n/a,1.0\n\
             Peru,2001.0,1.0\n",
        )?;
        assert_eq!(data.available_years(), vec![2001]);
        assert_eq!(stats.bad_year, 2);
        Ok(())
    }
}
