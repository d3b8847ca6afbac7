// src/render/index.rs
use anyhow::{Context, Result};
use maud::{html, Markup, DOCTYPE};
use std::{
    fs,
    path::{Path, PathBuf},
};

use super::GeneratedMap;

pub const INDEX_FILE: &str = "index.html";

/// HTML page embedding every generated map under a heading for its year.
pub fn render_index(maps: &[GeneratedMap]) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "CO₂ per capita maps" }
            }
            body {
                h1 { "CO₂ emissions per capita" }
                @for map in maps {
                    h2 { (map.year) }
                    object type="image/svg+xml" data=(map.file) width="100%" {}
                    hr;
                }
            }
        }
    }
}

pub fn write_index(out_dir: &Path, maps: &[GeneratedMap]) -> Result<PathBuf> {
    let path = out_dir.join(INDEX_FILE);
    fs::write(&path, render_index(maps).into_string())
        .with_context(|| format!("writing index {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(year: i32) -> GeneratedMap {
        GeneratedMap {
            year,
            file: crate::render::svg_file_name(year),
            countries: 80,
            min: 0.1,
            max: 30.0,
        }
    }

    #[test]
    fn one_section_per_map_in_given_order() {
        let html = render_index(&[map(2010), map(2020)]).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<meta charset=\"utf-8\">"));
        let h2010 = html.find("<h2>2010</h2>").expect("2010 heading");
        let h2020 = html.find("<h2>2020</h2>").expect("2020 heading");
        assert!(h2010 < h2020);
        assert!(html.contains(
            "<object type=\"image/svg+xml\" data=\"world_percap_2020.svg\" width=\"100%\"></object>"
        ));
        assert_eq!(html.matches("<object").count(), 2);
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn file_names_are_escaped_in_attributes() {
        let mut m = map(1999);
        m.file = "a\"b&c.svg".into();
        let html = render_index(&[m]).into_string();
        assert!(html.contains("data=\"a&quot;b&amp;c.svg\""));
    }
}
