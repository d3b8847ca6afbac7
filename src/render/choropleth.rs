// src/render/choropleth.rs
use anyhow::{Context, Result};
use maud::{html, Markup, Render};
use std::{fs, path::Path};

use super::outlines::{outline, DRAW_ORDER};
use crate::dataset::YearData;

const WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 600.0;
const MAP_X: f64 = 20.0;
const MAP_Y: f64 = 60.0;
const MAP_W: f64 = 960.0;
const MAP_H: f64 = 480.0;

const OCEAN: &str = "#eaf2f8";
const GRID: &str = "#c5d5e4";
const NO_DATA: &str = "#d9d9d9";
const LOW: (u8, u8, u8) = (255, 237, 160);
const HIGH: (u8, u8, u8) = (189, 0, 38);

/// Equirectangular projection into the map frame.
pub fn project(lat: f64, lon: f64) -> (f64, f64) {
    let x = MAP_X + (lon + 180.0) / 360.0 * MAP_W;
    let y = MAP_Y + (90.0 - lat) / 180.0 * MAP_H;
    (x, y)
}

/// SVG path data for a (lon, lat) ring.
pub fn path_data(ring: &[(f64, f64)]) -> String {
    let mut d = String::with_capacity(ring.len() * 14);
    for (i, &(lon, lat)) in ring.iter().enumerate() {
        let (x, y) = project(lat, lon);
        d.push_str(&format!("{}{:.1},{:.1}", if i == 0 { 'M' } else { 'L' }, x, y));
    }
    d.push('Z');
    d
}

/// Linear colour for `t` in `[0, 1]` between the low and high ends.
pub fn color_at(t: f64) -> String {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        mix(LOW.0, HIGH.0),
        mix(LOW.1, HIGH.1),
        mix(LOW.2, HIGH.2)
    )
}

/// Smallest and largest value, `None` for an empty year.
pub fn value_range(data: &YearData) -> Option<(f64, f64)> {
    data.values().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn num(v: f64) -> String {
    format!("{:.1}", v)
}

/// A world map whose country regions are shaded by one series of values.
pub struct Choropleth<'a> {
    title: String,
    series_label: String,
    data: &'a YearData,
}

impl<'a> Choropleth<'a> {
    pub fn new(
        title: impl Into<String>,
        series_label: impl Into<String>,
        data: &'a YearData,
    ) -> Self {
        Self {
            title: title.into(),
            series_label: series_label.into(),
            data,
        }
    }

    fn scale(&self, value: f64) -> String {
        match value_range(self.data) {
            Some((lo, hi)) if hi > lo => color_at((value - lo) / (hi - lo)),
            _ => color_at(0.5),
        }
    }

    pub fn render_to_file(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render().into_string())
            .with_context(|| format!("writing {}", path.display()))
    }
}

impl Render for Choropleth<'_> {
    fn render(&self) -> Markup {
        let meridians: Vec<f64> = (-180..=180)
            .step_by(30)
            .map(|lon| project(0.0, lon as f64).0)
            .collect();
        let parallels: Vec<f64> = (-90..=90)
            .step_by(30)
            .map(|lat| project(lat as f64, 0.0).1)
            .collect();
        let legend_y = MAP_Y + MAP_H + 24.0;

        html! {
            svg xmlns="http://www.w3.org/2000/svg" viewBox=(format!("0 0 {WIDTH} {HEIGHT}"))
                width=(num(WIDTH)) height=(num(HEIGHT)) font-family="sans-serif" {
                defs {
                    linearGradient id="scale" {
                        stop offset="0" stop-color=(color_at(0.0)) {}
                        stop offset="1" stop-color=(color_at(1.0)) {}
                    }
                }
                text x=(num(WIDTH / 2.0)) y="36" font-size="22" text-anchor="middle" { (self.title) }

                rect x=(num(MAP_X)) y=(num(MAP_Y)) width=(num(MAP_W)) height=(num(MAP_H)) fill=(OCEAN) {}
                g stroke=(GRID) stroke-width="0.5" {
                    @for x in &meridians {
                        line x1=(num(*x)) y1=(num(MAP_Y)) x2=(num(*x)) y2=(num(MAP_Y + MAP_H)) {}
                    }
                    @for y in &parallels {
                        line x1=(num(MAP_X)) y1=(num(*y)) x2=(num(MAP_X + MAP_W)) y2=(num(*y)) {}
                    }
                }

                g stroke="#ffffff" stroke-width="0.4" {
                    @for country in DRAW_ORDER.iter() {
                        @if let Some(ring) = outline(country.code) {
                            @match self.data.get(country.code) {
                                Some(v) => {
                                    path id=(country.code) class="country" d=(path_data(ring))
                                        fill=(self.scale(*v)) {
                                        title { (country.name) ": " (format!("{:.2}", v)) }
                                    }
                                }
                                None => {
                                    path id=(country.code) class="country nodata" d=(path_data(ring))
                                        fill=(NO_DATA) {
                                        title { (country.name) ": no data" }
                                    }
                                }
                            }
                        }
                    }
                }

                text x=(num(MAP_X)) y=(num(legend_y + 10.0)) font-size="13" { (self.series_label) }
                rect x=(num(MAP_X + 120.0)) y=(num(legend_y)) width="240" height="12" fill="url(#scale)" {}
                @if let Some((lo, hi)) = value_range(self.data) {
                    text x=(num(MAP_X + 120.0)) y=(num(legend_y + 28.0)) font-size="11" text-anchor="middle" {
                        (format!("{:.2}", lo))
                    }
                    text x=(num(MAP_X + 360.0)) y=(num(legend_y + 28.0)) font-size="11" text-anchor="middle" {
                        (format!("{:.2}", hi))
                    }
                }
                rect x=(num(MAP_X + 400.0)) y=(num(legend_y)) width="12" height="12" fill=(NO_DATA) {}
                text x=(num(MAP_X + 418.0)) y=(num(legend_y + 10.0)) font-size="11" { "no data" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::world::COUNTRIES;

    fn data(pairs: &[(&'static str, f64)]) -> YearData {
        pairs.iter().copied().collect()
    }

    fn svg_for(title: &str, label: &str, d: &YearData) -> String {
        Choropleth::new(title, label, d).render().into_string()
    }

    #[test]
    fn projection_corners() {
        assert_eq!(project(90.0, -180.0), (MAP_X, MAP_Y));
        assert_eq!(project(-90.0, 180.0), (MAP_X + MAP_W, MAP_Y + MAP_H));
        assert_eq!(project(0.0, 0.0), (MAP_X + MAP_W / 2.0, MAP_Y + MAP_H / 2.0));
    }

    #[test]
    fn path_data_is_closed() {
        let d = path_data(&[(-180.0, 90.0), (180.0, 90.0), (0.0, 0.0)]);
        assert_eq!(d, "M20.0,60.0L980.0,60.0L500.0,300.0Z");
    }

    #[test]
    fn color_scale_endpoints() {
        assert_eq!(color_at(0.0), "#ffeda0");
        assert_eq!(color_at(1.0), "#bd0026");
        assert_eq!(color_at(7.0), color_at(1.0));
    }

    #[test]
    fn range_of_values() {
        assert_eq!(value_range(&data(&[])), None);
        assert_eq!(
            value_range(&data(&[("fr", 4.5), ("us", 14.0), ("in", 1.9)])),
            Some((1.9, 14.0))
        );
    }

    #[test]
    fn countries_are_shaded_regions() {
        let d = data(&[("fr", 4.5), ("us", 14.0)]);
        let svg = svg_for("CO₂ per capita - 2020", "tCO₂/person", &d);

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<path ").count(), COUNTRIES.len());
        assert!(!svg.contains("<circle"));
        assert!(svg.contains("<path id=\"us\" class=\"country\" d=\"M"));
        assert!(svg.contains("fill=\"#bd0026\"><title>United States: 14.00</title></path>"));
        assert!(svg.contains("fill=\"#ffeda0\"><title>France: 4.50</title></path>"));
        assert!(svg.contains("<path id=\"de\" class=\"country nodata\""));
        assert!(svg.contains("<title>Germany: no data</title>"));
        assert!(svg.contains("CO₂ per capita - 2020"));
    }

    #[test]
    fn text_is_escaped() {
        let d = data(&[("ci", 0.4)]);
        let svg = svg_for("a < b", "x & y", &d);
        assert!(svg.contains("a &lt; b"));
        assert!(svg.contains("x &amp; y"));
        assert!(svg.contains("Cote d'Ivoire: 0.40"));
    }
}
