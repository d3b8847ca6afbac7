// src/load/mod.rs
use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use std::{
    collections::HashMap,
    fs,
    io::{Cursor, Read},
    path::Path,
};
use tracing::{debug, warn};

/// One data row: lower-cased column name → raw cell value.
pub type Row = HashMap<String, String>;

#[derive(Debug, Default)]
pub struct Table {
    /// Normalized column names, in header order, without duplicates.
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Header names are compared trimmed and lower-cased everywhere.
pub fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Read the whole CSV at `path` into memory.
///
/// Fails if the file cannot be read, is not valid CSV/UTF-8, or holds no
/// data rows.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("failed to read CSV {}", path.display()))?;
    let table = read_table(Cursor::new(data))
        .with_context(|| format!("failed to parse CSV {}", path.display()))?;

    if table.is_empty() {
        bail!("CSV {} is empty or unreadable", path.display());
    }
    debug!(
        rows = table.rows.len(),
        columns = table.columns.len(),
        "loaded CSV"
    );
    Ok(table)
}

/// Parse CSV text with a header row into a [`Table`].
///
/// Short records simply lack the trailing keys; cells beyond the header are
/// ignored. When two headers normalize to the same name the later column wins.
pub fn read_table<R: Read>(reader: R) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .context("reading CSV header row")?
        .iter()
        .map(normalize_header)
        .collect();

    let mut columns: Vec<String> = Vec::with_capacity(headers.len());
    for h in &headers {
        if columns.contains(h) {
            warn!(column = %h, "duplicate column name; later column wins");
        } else {
            columns.push(h.clone());
        }
    }

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV parse error at record {}", idx + 1))?;
        let row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(Table { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn headers_are_trimmed_and_lower_cased() -> Result<()> {
        let csv = "\u{feff} Entity ,Code,YEAR,Annual CO2 emissions (per capita)\n\
                   France,FRA,2020,4.5\n";
        let t = read_table(csv.as_bytes())?;
        assert_eq!(
            t.columns,
            vec!["entity", "code", "year", "annual co2 emissions (per capita)"]
        );
        assert_eq!(t.rows.len(), 1);
        assert_eq!(t.rows[0]["entity"], "France");
        assert_eq!(t.rows[0]["annual co2 emissions (per capita)"], "4.5");
        Ok(())
    }

    #[test]
    fn short_rows_miss_trailing_keys() -> Result<()> {
        let t = read_table("country,year,co2\nChad,2001\n".as_bytes())?;
        assert_eq!(t.rows[0].get("year").map(String::as_str), Some("2001"));
        assert!(t.rows[0].get("co2").is_none());
        Ok(())
    }

    #[test]
    fn duplicate_headers_keep_last_value() -> Result<()> {
        let t = read_table("Year,year,country\n1999,2000,Peru\n".as_bytes())?;
        assert_eq!(t.columns, vec!["year", "country"]);
        assert_eq!(t.rows[0]["year"], "2000");
        Ok(())
    }

    #[test]
    fn header_only_file_is_fatal() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        writeln!(tmp, "country,year,co2_per_capita")?;
        let err = load_csv(tmp.path()).expect_err("no rows must fail");
        assert!(err.to_string().contains("empty"));
        Ok(())
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = load_csv("/no/such/file.csv").expect_err("missing file must fail");
        assert!(err.to_string().contains("failed to read CSV"));
    }
}
