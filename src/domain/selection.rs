use crate::domain::dataset::CovidData;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_STATE: &str = "India";

/// Status columns the map can be colored by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusMetric {
    #[default]
    Confirmed,
    Recovered,
    Deaths,
    Active,
}

impl StatusMetric {
    /// Radio order on the page: the snapshot's column order.
    pub const ALL: [StatusMetric; 4] = [
        StatusMetric::Confirmed,
        StatusMetric::Recovered,
        StatusMetric::Deaths,
        StatusMetric::Active,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StatusMetric::Confirmed => "Confirmed",
            StatusMetric::Recovered => "Recovered",
            StatusMetric::Deaths => "Deaths",
            StatusMetric::Active => "Active",
        }
    }
}

impl fmt::Display for StatusMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown status metric: {0}")]
pub struct UnknownMetric(pub String);

impl FromStr for StatusMetric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusMetric::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownMetric(s.to_string()))
    }
}

/// What the user has chosen on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub state: String,
    pub metric: StatusMetric,
}

impl SelectionState {
    /// Read `state` and `metric` from decoded query parameters, falling back
    /// to the defaults. An unknown state is kept as-is (it renders empty).
    pub fn from_params(
        params: &HashMap<String, String>,
        data: &CovidData,
    ) -> Result<Self, UnknownMetric> {
        let state = match params.get("state").map(|s| s.trim()) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => default_state(data),
        };

        let metric = match params.get("metric").map(|s| s.trim()) {
            Some(m) if !m.is_empty() => m.parse()?,
            _ => StatusMetric::default(),
        };

        Ok(Self { state, metric })
    }
}

/// "India" when present, otherwise the first state in sort order.
pub fn default_state(data: &CovidData) -> String {
    if data.series().contains(DEFAULT_STATE) {
        return DEFAULT_STATE.to_string();
    }
    data.series()
        .state_names()
        .next()
        .unwrap_or(DEFAULT_STATE)
        .to_string()
}
