// src/columns/rank.rs

/// A candidate value column with its per-capita score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedColumn {
    pub name: String,
    pub score: i32,
}

impl RankedColumn {
    /// Only positively scored columns may supply values.
    pub fn is_eligible(&self) -> bool {
        self.score > 0
    }
}

fn mentions_co2(n: &str) -> bool {
    n.contains("co2") || n.contains("co₂")
}

fn mentions_per_capita(n: &str) -> bool {
    n.contains("per") && n.contains("capita")
}

fn mentions_pc(n: &str) -> bool {
    n.contains("pc")
}

// kg columns are usually a secondary unit
fn mentions_kg(n: &str) -> bool {
    n.contains("kg")
}

fn mentions_ratio(n: &str) -> bool {
    n.contains("share") || n.contains("intensity") || n.contains("percent")
}

/// Name heuristics, applied to the lower-cased column name. Every rule that
/// matches contributes its weight.
static SCORE_RULES: &[(fn(&str) -> bool, i32)] = &[
    (mentions_co2, 2),
    (mentions_per_capita, 3),
    (mentions_pc, 1),
    (mentions_kg, -1),
    (mentions_ratio, -5),
];

/// How likely `column` is to hold tonnes of CO₂ per person.
pub fn percap_score(column: &str) -> i32 {
    let n = column.to_lowercase();
    SCORE_RULES
        .iter()
        .filter(|(matches, _)| matches(n.as_str()))
        .map(|(_, weight)| weight)
        .sum()
}

/// Score every column not listed in `exclude` and sort by descending score.
/// The sort is stable, so equally scored columns keep their header order.
pub fn rank_value_columns(columns: &[String], exclude: &[&str]) -> Vec<RankedColumn> {
    let mut ranked: Vec<RankedColumn> = columns
        .iter()
        .filter(|c| !exclude.contains(&c.as_str()))
        .map(|c| RankedColumn {
            name: c.clone(),
            score: percap_score(c),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_capita_co2_outranks_everything() {
        assert_eq!(percap_score("Annual CO₂ emissions (per capita)"), 5);
        assert_eq!(percap_score("co2_per_capita"), 5);
        assert_eq!(percap_score("co2_pc"), 3);
        assert_eq!(percap_score("co2"), 2);
        assert_eq!(percap_score("population"), 0);
    }

    #[test]
    fn penalties_apply() {
        assert_eq!(percap_score("co2_per_capita_kg"), 4);
        assert_eq!(percap_score("share_global_co2"), -3);
        assert_eq!(percap_score("co2 intensity"), -3);
        assert_eq!(percap_score("percent change"), -5);
    }

    #[test]
    fn ranking_is_descending_and_stable() {
        let cols: Vec<String> = ["entity", "year", "gdp", "co2", "pop", "co2_per_capita"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let ranked = rank_value_columns(&cols, &["entity", "year"]);
        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["co2_per_capita", "co2", "gdp", "pop"]);
        assert!(ranked[0].is_eligible());
        assert!(ranked[1].is_eligible());
        assert!(!ranked[2].is_eligible());
    }
}
