mod loader_error;
mod models;
mod parse;
mod source;

pub use loader_error::LoadError;
pub use parse::{parse_geojson, parse_snapshot_csv, parse_timeseries_csv};
use source::SourceClient;

use crate::config::DashboardConfig;
use crate::domain::CovidData;

/// Fetch and normalize all three sources. Any failure is fatal to startup.
pub fn load_all(config: &DashboardConfig) -> Result<CovidData, LoadError> {
    let client = SourceClient::new()?;

    let series = parse_timeseries_csv(&client.fetch_bytes(&config.sources.timeseries)?)?;
    tracing::info!(
        states = series.state_count(),
        rows = series.row_count(),
        "loaded state time series"
    );

    let snapshot = parse_snapshot_csv(
        &client.fetch_bytes(&config.sources.snapshot)?,
        &config.state_renames,
        &config.aggregate_rows,
    )?;
    tracing::info!(rows = snapshot.len(), "loaded state snapshot");

    let boundaries = parse_geojson(&client.fetch_bytes(&config.sources.geojson)?)?;
    tracing::info!(features = boundaries.feature_count(), "loaded boundary features");

    let unmatched: Vec<&str> = snapshot
        .rows()
        .iter()
        .map(|r| r.state.as_str())
        .filter(|name| !boundaries.contains(name))
        .collect();
    if !unmatched.is_empty() {
        tracing::warn!(?unmatched, "snapshot states without a boundary feature will not be mapped");
    }

    Ok(CovidData::new(series, snapshot, boundaries))
}
