// src/domain/series.rs

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// The four cumulative counters plotted for a state, in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesMetric {
    Confirmed,
    Active,
    Recovered,
    Deceased,
}

impl SeriesMetric {
    pub const ALL: [SeriesMetric; 4] = [
        SeriesMetric::Confirmed,
        SeriesMetric::Active,
        SeriesMetric::Recovered,
        SeriesMetric::Deceased,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SeriesMetric::Confirmed => "Confirmed",
            SeriesMetric::Active => "Active",
            SeriesMetric::Recovered => "Recovered",
            SeriesMetric::Deceased => "Deceased",
        }
    }

    pub fn line_color(self) -> &'static str {
        match self {
            SeriesMetric::Confirmed => "Red",
            SeriesMetric::Active => "Blue",
            SeriesMetric::Recovered => "Green",
            SeriesMetric::Deceased => "Grey",
        }
    }
}

/// One dated row of cumulative counters for a single state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesRow {
    pub date: NaiveDate,
    pub confirmed: i64,
    pub recovered: i64,
    pub deceased: i64,
    pub other: i64,
    pub tested: Option<i64>,
    pub active: i64,
}

impl SeriesRow {
    pub fn new(
        date: NaiveDate,
        confirmed: i64,
        recovered: i64,
        deceased: i64,
        other: i64,
        tested: Option<i64>,
    ) -> Self {
        Self {
            date,
            confirmed,
            recovered,
            deceased,
            other,
            tested,
            active: confirmed - recovered - deceased - other,
        }
    }

    pub fn value(&self, metric: SeriesMetric) -> i64 {
        match metric {
            SeriesMetric::Confirmed => self.confirmed,
            SeriesMetric::Active => self.active,
            SeriesMetric::Recovered => self.recovered,
            SeriesMetric::Deceased => self.deceased,
        }
    }
}

/// Day-over-day differences for one date. `None` means there is no earlier
/// row (or an operand was missing), never zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRow {
    pub date: NaiveDate,
    pub confirmed: Option<i64>,
    pub active: Option<i64>,
    pub recovered: Option<i64>,
    pub deceased: Option<i64>,
    pub tested: Option<i64>,
    /// Daily confirmed over daily tested, in percent. Non-finite when the
    /// denominator is zero or unknown.
    pub positivity: f64,
}

impl DailyRow {
    pub fn value(&self, metric: SeriesMetric) -> Option<i64> {
        match metric {
            SeriesMetric::Confirmed => self.confirmed,
            SeriesMetric::Active => self.active,
            SeriesMetric::Recovered => self.recovered,
            SeriesMetric::Deceased => self.deceased,
        }
    }
}

/// Compute daily deltas into a fresh vector. `rows` must be sorted by date.
pub fn daily_deltas(rows: &[SeriesRow]) -> Vec<DailyRow> {
    let mut out = Vec::with_capacity(rows.len());
    let mut prev: Option<&SeriesRow> = None;

    for row in rows {
        let daily = match prev {
            None => DailyRow {
                date: row.date,
                confirmed: None,
                active: None,
                recovered: None,
                deceased: None,
                tested: None,
                positivity: f64::NAN,
            },
            Some(p) => {
                let confirmed = Some(row.confirmed - p.confirmed);
                let tested = match (row.tested, p.tested) {
                    (Some(t), Some(pt)) => Some(t - pt),
                    _ => None,
                };
                DailyRow {
                    date: row.date,
                    confirmed,
                    active: Some(row.active - p.active),
                    recovered: Some(row.recovered - p.recovered),
                    deceased: Some(row.deceased - p.deceased),
                    tested,
                    positivity: positivity(confirmed, tested),
                }
            }
        };
        out.push(daily);
        prev = Some(row);
    }

    out
}

fn positivity(confirmed: Option<i64>, tested: Option<i64>) -> f64 {
    match (confirmed, tested) {
        (Some(c), Some(t)) => c as f64 / t as f64 * 100.0,
        _ => f64::NAN,
    }
}

/// All loaded rows grouped by state, each group sorted by date.
#[derive(Debug, Default)]
pub struct StateTimeSeries {
    by_state: BTreeMap<String, Vec<SeriesRow>>,
}

impl StateTimeSeries {
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (String, SeriesRow)>,
    {
        let mut by_state: BTreeMap<String, Vec<SeriesRow>> = BTreeMap::new();
        for (state, row) in rows {
            by_state.entry(state).or_default().push(row);
        }
        for rows in by_state.values_mut() {
            rows.sort_by_key(|r| r.date);
        }
        Self { by_state }
    }

    /// Rows for `state`, empty if the state is unknown.
    pub fn rows_for(&self, state: &str) -> &[SeriesRow] {
        self.by_state.get(state).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, state: &str) -> bool {
        self.by_state.contains_key(state)
    }

    /// Distinct state names, ascending.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.by_state.keys().map(String::as_str)
    }

    pub fn state_count(&self) -> usize {
        self.by_state.len()
    }

    pub fn row_count(&self) -> usize {
        self.by_state.values().map(Vec::len).sum()
    }
}
