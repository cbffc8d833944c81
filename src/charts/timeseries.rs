// src/charts/timeseries.rs

use crate::charts::colors::{DONUT_COLORS, POSITIVITY_COLOR};
use crate::charts::Figure;
use crate::domain::{daily_deltas, DailyRow, SeriesMetric, SeriesRow};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{json, Value};

/// Metrics shown as headline numbers, left to right.
const INDICATOR_METRICS: [SeriesMetric; 4] = [
    SeriesMetric::Confirmed,
    SeriesMetric::Recovered,
    SeriesMetric::Deceased,
    SeriesMetric::Active,
];

/// A headline number and the value it is compared against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indicator {
    pub title: &'static str,
    pub value: Option<i64>,
    pub reference: Option<i64>,
}

impl Indicator {
    pub fn delta(&self) -> Option<i64> {
        Some(self.value? - self.reference?)
    }
}

/// The four figures driven by the state selector.
#[derive(Debug, Clone, Serialize)]
pub struct StateCharts {
    pub state: String,
    pub indicators: Figure,
    pub composite: Figure,
    pub cumulative: Figure,
    pub daily: Figure,
}

/// Latest value per metric with the second-latest as reference.
pub fn indicators(rows: &[SeriesRow]) -> Vec<Indicator> {
    let latest = rows.last();
    let previous = rows.len().checked_sub(2).map(|i| &rows[i]);

    INDICATOR_METRICS
        .iter()
        .map(|&m| Indicator {
            title: m.label(),
            value: latest.map(|r| r.value(m)),
            reference: previous.map(|r| r.value(m)),
        })
        .collect()
}

/// Rebuild every state-driven figure. `rows` are the state's rows in date
/// order; all derived columns go into fresh allocations.
pub fn build_state_charts(state: &str, rows: &[SeriesRow]) -> StateCharts {
    let daily = daily_deltas(rows);
    let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();

    StateCharts {
        state: state.to_string(),
        indicators: indicator_figure(&indicators(rows)),
        composite: composite_figure(state, rows, &daily),
        cumulative: cumulative_figure(state, rows, &dates),
        daily: daily_figure(state, &daily, &dates),
    }
}

fn indicator_figure(indicators: &[Indicator]) -> Figure {
    let width = 1.0 / indicators.len().max(1) as f64;

    let data = indicators
        .iter()
        .enumerate()
        .map(|(i, ind)| {
            let x0 = i as f64 * width;
            let mut trace = json!({
                "type": "indicator",
                "mode": if ind.delta().is_some() { "number+delta" } else { "number" },
                "value": ind.value,
                "title": { "text": ind.title },
                "domain": { "x": [x0, x0 + width], "y": [0, 1] },
            });
            if let Some(reference) = ind.reference {
                trace["delta"] = json!({ "position": "bottom", "reference": reference });
            }
            trace
        })
        .collect();

    Figure::new(data, json!({ "paper_bgcolor": "lightgray", "height": 250 }))
}

fn composite_figure(state: &str, rows: &[SeriesRow], daily: &[DailyRow]) -> Figure {
    let values: Vec<i64> = rows
        .last()
        .map(|r| vec![r.active, r.recovered, r.deceased])
        .unwrap_or_default();
    let dates: Vec<NaiveDate> = daily.iter().map(|d| d.date).collect();
    let positivity: Vec<f64> = daily.iter().map(|d| d.positivity).collect();

    let donut = json!({
        "type": "pie",
        "name": "Current Status",
        "labels": ["Active", "Recovered", "Deceased"],
        "values": values,
        "hole": 0.4,
        "hoverinfo": "label+percent",
        "marker": { "colors": DONUT_COLORS, "line": { "color": "#ffffff", "width": 2 } },
        "domain": { "x": [0.0, 0.45], "y": [0.0, 1.0] },
    });

    let line = json!({
        "type": "scatter",
        "mode": "lines",
        "name": "Positivity Ratio",
        "x": dates,
        "y": positivity,
        "marker": { "color": POSITIVITY_COLOR },
        "xaxis": "x",
        "yaxis": "y",
    });

    let layout = json!({
        "showlegend": false,
        "title": { "text": format!("Current Status in {state}"), "x": 0.2 },
        "xaxis": { "domain": [0.55, 1.0] },
        "yaxis": { "anchor": "x" },
        "annotations": [
            {
                "text": state,
                "x": 0.225, "y": 0.46,
                "xref": "paper", "yref": "paper",
                "font": { "size": 16 },
                "showarrow": false,
            },
            {
                "text": format!("Test Positivity Ratio of {state}"),
                "x": 0.775, "y": 1.0,
                "xref": "paper", "yref": "paper",
                "font": { "size": 17 },
                "showarrow": false,
            },
        ],
    });

    Figure::new(vec![donut, line], layout)
}

fn cumulative_figure(state: &str, rows: &[SeriesRow], dates: &[NaiveDate]) -> Figure {
    let data = SeriesMetric::ALL
        .iter()
        .map(|&m| {
            let y: Vec<i64> = rows.iter().map(|r| r.value(m)).collect();
            json!({
                "type": "scatter",
                "mode": "lines",
                "name": m.label(),
                "x": dates,
                "y": y,
                "marker": { "color": m.line_color() },
            })
        })
        .collect();

    Figure::new(data, time_axis_layout(format!("Cumulative Graph of {state}")))
}

fn daily_figure(state: &str, daily: &[DailyRow], dates: &[NaiveDate]) -> Figure {
    let data = SeriesMetric::ALL
        .iter()
        .map(|&m| {
            let y: Vec<Option<i64>> = daily.iter().map(|d| d.value(m)).collect();
            json!({
                "type": "bar",
                "name": m.label(),
                "x": dates,
                "y": y,
                "marker": { "color": m.line_color() },
            })
        })
        .collect();

    let mut layout = time_axis_layout(format!("Daily Graph of {state}"));
    layout["plot_bgcolor"] = json!("#000000");
    Figure::new(data, layout)
}

fn time_axis_layout(title: String) -> Value {
    json!({
        "title": { "text": title, "x": 0.5 },
        "xaxis": { "title": { "text": "Date" } },
        "yaxis": { "title": { "text": "No of cases" } },
        "font": { "size": 14 },
    })
}
