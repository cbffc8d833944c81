use crate::charts::colors::color_scale;
use crate::charts::Figure;
use crate::domain::geo::FEATURE_NAME_KEY;
use crate::domain::{GeoBoundary, SnapshotRow, StateSnapshot, StatusMetric};
use serde_json::json;

/// Where the shell serves the boundary FeatureCollection.
pub const GEOJSON_ROUTE: &str = "/geo/india.geojson";

const HOVER_TEMPLATE: &str = "<b>%{location}</b><br>\
Confirmed: %{customdata[0]}<br>\
Recovered: %{customdata[1]}<br>\
Deaths: %{customdata[2]}<br>\
Active: %{customdata[3]}<extra></extra>";

/// Snapshot rows that have a boundary feature. The rest are left off the map.
pub fn mapped_rows<'a>(snapshot: &'a StateSnapshot, boundaries: &GeoBoundary) -> Vec<&'a SnapshotRow> {
    snapshot
        .rows()
        .iter()
        .filter(|row| boundaries.contains(&row.state))
        .collect()
}

/// Full rebuild of the map, colored by `metric`.
pub fn build_choropleth(
    snapshot: &StateSnapshot,
    boundaries: &GeoBoundary,
    metric: StatusMetric,
    geojson_url: &str,
) -> Figure {
    let rows = mapped_rows(snapshot, boundaries);

    let locations: Vec<&str> = rows.iter().map(|r| r.state.as_str()).collect();
    let z: Vec<i64> = rows.iter().map(|r| r.value(metric)).collect();
    let customdata: Vec<[i64; 4]> = rows
        .iter()
        .map(|r| [r.confirmed, r.recovered, r.deaths, r.active])
        .collect();

    let trace = json!({
        "type": "choropleth",
        "geojson": geojson_url,
        "featureidkey": format!("properties.{FEATURE_NAME_KEY}"),
        "locations": locations,
        "z": z,
        "colorscale": color_scale(metric),
        "colorbar": { "title": { "text": metric.as_str() } },
        "customdata": customdata,
        "hovertemplate": HOVER_TEMPLATE,
        "marker": { "line": { "width": 0.5 } },
    });

    let layout = json!({
        "title": { "text": format!("India: Total {metric} cases per state") },
        "geo": {
            "fitbounds": "locations",
            "visible": false,
            "projection": { "type": "orthographic" },
        },
        "height": 600,
        "margin": { "r": 0, "t": 30, "l": 0, "b": 30 },
    });

    Figure::new(vec![trace], layout)
}
