// parse.rs
use crate::config::StateRename;
use crate::domain::geo::FEATURE_NAME_KEY;
use crate::domain::{normalize_snapshot, GeoBoundary, SeriesRow, SnapshotRow, StateSnapshot, StateTimeSeries};
use crate::loader::models::{RawSeriesRow, RawSnapshotRow};
use crate::loader::LoadError;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeSet;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse the national time-series CSV into per-state series with `Active` derived.
pub fn parse_timeseries_csv(bytes: &[u8]) -> Result<StateTimeSeries, LoadError> {
    let raw: Vec<RawSeriesRow> = read_csv(bytes)?;

    let mut rows = Vec::with_capacity(raw.len());
    for (i, r) in raw.into_iter().enumerate() {
        let date = NaiveDate::parse_from_str(&r.date, DATE_FORMAT).map_err(|e| {
            // +2: one for the header, one for 1-based lines
            LoadError::CsvParse(format!("line {}: bad date '{}': {e}", i + 2, r.date))
        })?;

        let row = SeriesRow::new(
            date,
            r.confirmed,
            r.recovered,
            r.deceased,
            r.other.unwrap_or(0),
            r.tested,
        );
        rows.push((r.state, row));
    }

    Ok(StateTimeSeries::from_rows(rows))
}

/// Parse the state-wise snapshot CSV and normalize it for the map join.
pub fn parse_snapshot_csv(
    bytes: &[u8],
    renames: &[StateRename],
    aggregates: &[String],
) -> Result<StateSnapshot, LoadError> {
    let raw: Vec<RawSnapshotRow> = read_csv(bytes)?;

    let rows = raw
        .into_iter()
        .map(|r| SnapshotRow {
            state: r.state,
            confirmed: r.confirmed,
            recovered: r.recovered,
            deaths: r.deaths,
            active: r.active,
        })
        .collect();

    Ok(normalize_snapshot(rows, renames, aggregates))
}

/// Parse a GeoJSON FeatureCollection and index its `properties.NAME_1` values.
pub fn parse_geojson(bytes: &[u8]) -> Result<GeoBoundary, LoadError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| LoadError::JsonParse(e.to_string()))?;
    boundary_from_value(value)
}

pub fn boundary_from_value(value: Value) -> Result<GeoBoundary, LoadError> {
    if value["type"].as_str() != Some("FeatureCollection") {
        return Err(LoadError::UnexpectedShape(
            "GeoJSON root is not a FeatureCollection".into(),
        ));
    }

    let features = value["features"]
        .as_array()
        .ok_or_else(|| LoadError::UnexpectedShape("GeoJSON has no features array".into()))?;

    let mut names = BTreeSet::new();
    for (i, feature) in features.iter().enumerate() {
        match feature["properties"][FEATURE_NAME_KEY].as_str() {
            Some(name) => {
                names.insert(name.to_string());
            }
            None => tracing::debug!(feature = i, "skipping feature without {FEATURE_NAME_KEY}"),
        }
    }

    Ok(GeoBoundary::new(value, names))
}

fn read_csv<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut out = Vec::new();
    for result in reader.deserialize::<T>() {
        out.push(result.map_err(|e| LoadError::CsvParse(e.to_string()))?);
    }
    Ok(out)
}
