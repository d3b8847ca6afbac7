// src/columns/detect.rs
use once_cell::sync::Lazy;
use regex::Regex;

/// Country column candidates, most specific first.
pub static COUNTRY_PRIORITY: &[&str] = &["country", "entity", "region", "area", "name", "location"];

static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:year|annee|année)$").expect("year column regex"));

/// `year` if present, otherwise the first column named like a year.
pub fn find_year_column(columns: &[String]) -> Option<&str> {
    if let Some(c) = columns.iter().find(|c| c.as_str() == "year") {
        return Some(c.as_str());
    }
    columns
        .iter()
        .map(String::as_str)
        .find(|c| YEAR_RE.is_match(c))
}

/// First hit from [`COUNTRY_PRIORITY`]; otherwise the first column (in header
/// order) whose name is not purely numeric and which is not `year_col`.
pub fn find_country_column<'a>(columns: &'a [String], year_col: &str) -> Option<&'a str> {
    for wanted in COUNTRY_PRIORITY {
        if let Some(c) = columns.iter().find(|c| c.as_str() == *wanted) {
            return Some(c.as_str());
        }
    }
    columns
        .iter()
        .map(String::as_str)
        .find(|c| *c != year_col && !is_numeric_name(c))
}

// "1990", "2020" style headers from wide-format exports
fn is_numeric_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(char::is_numeric)
}
