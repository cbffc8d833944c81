use crate::domain::StatusMetric;
use serde_json::{json, Value};

// ColorBrewer sequential ramps, light to dark.

pub const REDS: [&str; 9] = [
    "rgb(255,245,240)",
    "rgb(254,224,210)",
    "rgb(252,187,161)",
    "rgb(252,146,114)",
    "rgb(251,106,74)",
    "rgb(239,59,44)",
    "rgb(203,24,29)",
    "rgb(165,15,21)",
    "rgb(103,0,13)",
];

pub const BLUES: [&str; 9] = [
    "rgb(247,251,255)",
    "rgb(222,235,247)",
    "rgb(198,219,239)",
    "rgb(158,202,225)",
    "rgb(107,174,214)",
    "rgb(66,146,198)",
    "rgb(33,113,181)",
    "rgb(8,81,156)",
    "rgb(8,48,107)",
];

pub const GREENS: [&str; 9] = [
    "rgb(247,252,245)",
    "rgb(229,245,224)",
    "rgb(199,233,192)",
    "rgb(161,217,155)",
    "rgb(116,196,118)",
    "rgb(65,171,93)",
    "rgb(35,139,69)",
    "rgb(0,109,44)",
    "rgb(0,68,27)",
];

pub const GREYS: [&str; 9] = [
    "rgb(255,255,255)",
    "rgb(240,240,240)",
    "rgb(217,217,217)",
    "rgb(189,189,189)",
    "rgb(150,150,150)",
    "rgb(115,115,115)",
    "rgb(82,82,82)",
    "rgb(37,37,37)",
    "rgb(0,0,0)",
];

/// Active, Recovered, Deceased slices of the donut.
pub const DONUT_COLORS: [&str; 3] = ["#66b3ff", "#02bf47", "#db1200"];

pub const POSITIVITY_COLOR: &str = "#ff4714";

pub fn ramp(metric: StatusMetric) -> &'static [&'static str; 9] {
    match metric {
        StatusMetric::Confirmed => &REDS,
        StatusMetric::Active => &BLUES,
        StatusMetric::Recovered => &GREENS,
        StatusMetric::Deaths => &GREYS,
    }
}

/// Plotly colorscale: `[[0.0, c0], [0.125, c1], ..., [1.0, c8]]`.
pub fn color_scale(metric: StatusMetric) -> Value {
    let colors = ramp(metric);
    let last = (colors.len() - 1) as f64;
    let stops: Vec<Value> = colors
        .iter()
        .enumerate()
        .map(|(i, c)| json!([i as f64 / last, c]))
        .collect();
    Value::Array(stops)
}
