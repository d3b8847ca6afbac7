// src/years.rs
use std::collections::BTreeSet;
use tracing::{info, warn};

use crate::config::Settings;

/// The `n` most recent of `available`, ascending.
fn most_recent(available: &[i32], n: usize) -> BTreeSet<i32> {
    available.iter().rev().take(n).copied().collect()
}

/// Decide which years get a map.
///
/// `auto_last_n` (when > 0) takes precedence over the explicit list. If the
/// chosen mode yields nothing, the `fallback_last_n` most recent years are
/// used instead. The result is ascending and free of duplicates.
pub fn select_years(available: &[i32], settings: &Settings) -> BTreeSet<i32> {
    let mut available = available.to_vec();
    available.sort_unstable();
    available.dedup();

    let selected: BTreeSet<i32> = match settings.auto_last_n {
        Some(n) if n > 0 => most_recent(&available, n),
        _ => settings
            .years
            .iter()
            .copied()
            .filter(|y| available.binary_search(y).is_ok())
            .collect(),
    };

    if !selected.is_empty() {
        return selected;
    }

    let fallback = most_recent(&available, settings.fallback_last_n);
    if fallback.is_empty() {
        warn!("no years available to select");
    } else {
        info!(
            years = ?fallback,
            "configured years not present; falling back to most recent"
        );
    }
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(years: &[i32], auto_last_n: Option<usize>) -> Settings {
        Settings {
            years: years.to_vec(),
            auto_last_n,
            ..Settings::default()
        }
    }

    fn list(set: BTreeSet<i32>) -> Vec<i32> {
        set.into_iter().collect()
    }

    #[test]
    fn explicit_years_intersect_available_and_sort() {
        let available = [1990, 2000, 2010, 2020];
        let s = settings(&[2020, 1990, 1995, 2020], None);
        assert_eq!(list(select_years(&available, &s)), vec![1990, 2020]);
    }

    #[test]
    fn auto_last_n_overrides_explicit_list() {
        let available = [2018, 2019, 2020, 2021, 2022];
        let s = settings(&[2018], Some(3));
        assert_eq!(list(select_years(&available, &s)), vec![2020, 2021, 2022]);
    }

    #[test]
    fn zero_last_n_means_explicit_list() {
        let available = [2018, 2019];
        let s = settings(&[2018], Some(0));
        assert_eq!(list(select_years(&available, &s)), vec![2018]);
    }

    #[test]
    fn falls_back_to_ten_most_recent() {
        let available: Vec<i32> = (1990..=2023).collect();
        let s = settings(&[1850], None);
        assert_eq!(
            list(select_years(&available, &s)),
            (2014..=2023).collect::<Vec<_>>()
        );
    }

    #[test]
    fn nothing_available_selects_nothing() {
        assert!(select_years(&[], &Settings::default()).is_empty());
    }
}
