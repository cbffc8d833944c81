pub mod dataset;
pub mod geo;
pub mod selection;
pub mod series;
pub mod snapshot;

pub use dataset::CovidData;
pub use geo::GeoBoundary;
pub use selection::{SelectionState, StatusMetric};
pub use series::{daily_deltas, DailyRow, SeriesMetric, SeriesRow, StateTimeSeries};
pub use snapshot::{normalize_snapshot, SnapshotRow, StateSnapshot};
