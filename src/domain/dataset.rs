use crate::domain::geo::GeoBoundary;
use crate::domain::series::StateTimeSeries;
use crate::domain::snapshot::StateSnapshot;
use chrono::{DateTime, Utc};

/// Everything loaded at startup. Read-only once built; requests only borrow it.
#[derive(Debug)]
pub struct CovidData {
    series: StateTimeSeries,
    snapshot: StateSnapshot,
    boundaries: GeoBoundary,
    loaded_at: DateTime<Utc>,
}

impl CovidData {
    pub fn new(series: StateTimeSeries, snapshot: StateSnapshot, boundaries: GeoBoundary) -> Self {
        Self {
            series,
            snapshot,
            boundaries,
            loaded_at: Utc::now(),
        }
    }

    pub fn series(&self) -> &StateTimeSeries {
        &self.series
    }

    pub fn snapshot(&self) -> &StateSnapshot {
        &self.snapshot
    }

    pub fn boundaries(&self) -> &GeoBoundary {
        &self.boundaries
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Options for the state selector, sorted ascending.
    pub fn state_options(&self) -> Vec<String> {
        self.series.state_names().map(str::to_string).collect()
    }
}
