// src/render/outlines.rs
//
// Simplified country regions. Each country starts as an ellipse of its land
// area around its centroid (widened by 1/cos(lat) for the equirectangular
// frame) and is clipped against the power bisector of every other country,
// so neighbouring regions meet instead of overlapping. Countries swallowed
// by a larger neighbour keep their ellipse and are painted on top.
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    f64::consts::{PI, TAU},
};

use super::world::{Country, COUNTRIES};

/// Closed polygon in (lon, lat) degrees.
pub type Ring = Vec<(f64, f64)>;

const KM_PER_DEG: f64 = 111.32;
const MIN_RADIUS_DEG: f64 = 0.8;
const MIN_COS_LAT: f64 = 0.2;
const VERTICES: usize = 32;
const MIN_KEPT_SHARE: f64 = 0.1;

// lon <= 180, lon >= -180, lat <= 90, lat >= -90
const FRAME: [((f64, f64), f64); 4] = [
    ((1.0, 0.0), 180.0),
    ((-1.0, 0.0), 180.0),
    ((0.0, 1.0), 90.0),
    ((0.0, -1.0), 90.0),
];

/// Country code → region outline.
pub static OUTLINES: Lazy<HashMap<&'static str, Ring>> =
    Lazy::new(|| COUNTRIES.iter().map(|c| (c.code, region(c))).collect());

/// Largest first, so enclaves and micro-states end up on top.
pub static DRAW_ORDER: Lazy<Vec<&'static Country>> = Lazy::new(|| {
    let mut order: Vec<&'static Country> = COUNTRIES.iter().collect();
    order.sort_by(|a, b| b.area_km2.total_cmp(&a.area_km2));
    order
});

pub fn outline(code: &str) -> Option<&'static Ring> {
    OUTLINES.get(code)
}

fn radius_deg(c: &Country) -> f64 {
    ((c.area_km2 / PI).sqrt() / KM_PER_DEG).max(MIN_RADIUS_DEG)
}

fn ellipse(c: &Country) -> Ring {
    let ry = radius_deg(c);
    let rx = (ry / c.lat.to_radians().cos().max(MIN_COS_LAT)).min(180.0);
    (0..VERTICES)
        .map(|i| {
            let t = i as f64 / VERTICES as f64 * TAU;
            (c.lon + rx * t.cos(), c.lat + ry * t.sin())
        })
        .collect()
}

fn side(a: (f64, f64), b: f64, p: (f64, f64)) -> f64 {
    a.0 * p.0 + a.1 * p.1 - b
}

/// Keep the part of `ring` where `a · p <= b` (one Sutherland-Hodgman pass).
pub fn clip(ring: &[(f64, f64)], a: (f64, f64), b: f64) -> Ring {
    let mut out = Vec::with_capacity(ring.len() + 1);
    for (i, &cur) in ring.iter().enumerate() {
        let prev = ring[(i + ring.len() - 1) % ring.len()];
        let (sp, sc) = (side(a, b, prev), side(a, b, cur));
        if (sp <= 0.0) != (sc <= 0.0) {
            let t = sp / (sp - sc);
            out.push((prev.0 + (cur.0 - prev.0) * t, prev.1 + (cur.1 - prev.1) * t));
        }
        if sc <= 0.0 {
            out.push(cur);
        }
    }
    out
}

/// Shoelace area, always non-negative.
pub fn area(ring: &[(f64, f64)]) -> f64 {
    let n = ring.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let (p, q) = (ring[i], ring[(i + 1) % n]);
            p.0 * q.1 - q.0 * p.1
        })
        .sum();
    twice.abs() / 2.0
}

fn region(c: &Country) -> Ring {
    let mut base = ellipse(c);
    for (a, b) in FRAME {
        base = clip(&base, a, b);
    }

    let (p, rp) = ((c.lon, c.lat), radius_deg(c));
    let mut cell = base.clone();
    for other in COUNTRIES.iter().filter(|o| o.code != c.code) {
        let (q, rq) = ((other.lon, other.lat), radius_deg(other));
        if q == p {
            continue;
        }
        // |x-p|² - rp² <= |x-q|² - rq²
        let a = (2.0 * (q.0 - p.0), 2.0 * (q.1 - p.1));
        let b = (q.0 * q.0 + q.1 * q.1) - (p.0 * p.0 + p.1 * p.1) + rp * rp - rq * rq;
        cell = clip(&cell, a, b);
        if cell.len() < 3 {
            break;
        }
    }

    if cell.len() < 3 || area(&cell) < MIN_KEPT_SHARE * area(&base) {
        base
    } else {
        cell
    }
}
