use anyhow::{Context, Result};
use co2maps::{columns::plan_columns, load::load_csv};
use std::env;

fn main() -> Result<()> {
    // 1) CSV path from the first CLI argument
    let path = env::args()
        .nth(1)
        .context("usage: inspect_columns <CSV_PATH>")?;

    // 2) same loader + detection as the map pipeline
    let table = load_csv(&path)?;
    let plan = plan_columns(&table.columns)?;

    println!("{} rows, {} columns", table.rows.len(), table.columns.len());
    println!("year column:    {}", plan.year);
    println!("country column: {}", plan.country);
    println!("value columns (trial order):");
    for col in &plan.values {
        let mark = if col.is_eligible() { "*" } else { " " };
        println!("  {} {:>3}  {}", mark, col.score, col.name);
    }
    if plan.eligible_values().next().is_none() {
        println!("no column scores above zero; no values would be mapped");
    }
    Ok(())
}
