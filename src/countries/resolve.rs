// src/countries/resolve.rs
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use super::aliases::ALIASES;
use crate::render::world::COUNTRIES;

/// Names of aggregates (continents, income groups, unions, "World") that
/// must never be mapped onto a single country.
static AGGREGATE_RE: Lazy<Regex> = Lazy::new(|| {
    let patterns = [
        r"\bworld\b",
        r"\binternational\b",
        r"\beurope\b",
        r"\beu\b",
        r"\beu-?\d+\b",
        r"\bafrica\b",
        r"\basia\b",
        r"\boceania\b",
        r"\bnorth america\b",
        r"\bsouth america\b",
        r"\b(excl\.)\b",
        r"\(excl",
        r"\ball income\b",
        r"\bupper|lower middle\b",
        r"\bhigh income\b",
        r"\blow income\b",
        r"\bglobal\b",
        r"\bunion\b",
    ];
    Regex::new(&format!("(?i){}", patterns.join("|"))).expect("aggregate regex")
});

static PARENTHETICAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\(.*?\)\s*").expect("parenthetical regex"));

/// Lower-cased canonical registry name → code.
static NAME_TO_CODE: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    COUNTRIES
        .iter()
        .map(|c| (c.name.to_lowercase(), c.code))
        .collect()
});

/// True if `name` denotes a region or group rather than a country.
pub fn is_aggregate(name: &str) -> bool {
    AGGREGATE_RE.is_match(name)
}

/// Map a free-form country name to its lower-case alpha-2 code.
///
/// Tried in order: aggregate rejection, alias table, exact registry name,
/// registry name after punctuation normalization, and finally with every
/// parenthetical group removed. `None` if nothing matches.
pub fn to_code(name: &str) -> Option<&'static str> {
    let key = name.to_lowercase();
    let key = key.trim();
    if is_aggregate(key) {
        return None;
    }
    if let Some(code) = ALIASES.get(key) {
        return Some(*code);
    }
    if let Some(code) = NAME_TO_CODE.get(key) {
        return Some(*code);
    }

    let key = key.replace('’', "'").replace('&', "and");
    if let Some(code) = NAME_TO_CODE.get(&key) {
        return Some(*code);
    }

    let key = PARENTHETICAL_RE.replace_all(&key, "");
    NAME_TO_CODE.get(key.trim()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregates_are_rejected() {
        for name in [
            "World",
            "Europe",
            "Asia (excl. China and India)",
            "EU-27",
            "EU27",
            "European Union (27)",
            "High income countries",
            "Upper-middle-income countries",
            "Lower middle income",
            "North America",
            "International transport",
            "Africa",
            "Global",
        ] {
            assert!(is_aggregate(&name.to_lowercase()), "{name}");
            assert_eq!(to_code(name), None, "{name}");
        }
    }

    #[test]
    fn plain_countries_are_not_aggregates() {
        for name in ["france", "european", "asian games", "papua new guinea"] {
            assert!(!is_aggregate(name), "{name}");
        }
    }

    #[test]
    fn registry_names_resolve_case_insensitively() {
        assert_eq!(to_code("France"), Some("fr"));
        assert_eq!(to_code("  GERMANY "), Some("de"));
        assert_eq!(to_code("Viet Nam"), Some("vn"));
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(to_code("United States"), Some("us"));
        assert_eq!(to_code("Russia"), Some("ru"));
        assert_eq!(to_code("Côte d’Ivoire"), Some("ci"));
        assert_eq!(to_code("UK"), Some("gb"));
        assert_eq!(to_code("Democratic Republic of Congo"), Some("cd"));
        assert_eq!(to_code("Congo (Brazzaville)"), Some("cg"));
    }

    #[test]
    fn aliases_win_over_registry_entries() {
        // "myanmar (burma)" would also reach "mm" via parenthetical stripping,
        // "congo (kinshasa)" would reach "cg" ("congo") that way.
        assert_eq!(to_code("Congo (Kinshasa)"), Some("cd"));
        for (name, code) in ALIASES.iter() {
            assert_eq!(to_code(name), Some(*code), "{name}");
        }
    }

    #[test]
    fn punctuation_and_parentheses_are_normalized() {
        assert_eq!(to_code("Trinidad & Tobago"), Some("tt"));
        assert_eq!(to_code("Korea, Democratic People’s Republic of"), Some("kp"));
        assert_eq!(to_code("Micronesia (country)"), None);
        assert_eq!(to_code("Peru (country)"), Some("pe"));
        assert_eq!(to_code("Holy See (Vatican City State)"), Some("va"));
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert_eq!(to_code(""), None);
        assert_eq!(to_code("Atlantis"), None);
        assert_eq!(to_code("Kuwaiti Oil Fires"), None);
    }
}
