use crate::config::StateRename;
use crate::domain::selection::StatusMetric;
use serde::Serialize;

/// Latest cumulative counts for one state, projected for the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotRow {
    pub state: String,
    pub confirmed: i64,
    pub recovered: i64,
    pub deaths: i64,
    pub active: i64,
}

impl SnapshotRow {
    pub fn value(&self, metric: StatusMetric) -> i64 {
        match metric {
            StatusMetric::Confirmed => self.confirmed,
            StatusMetric::Recovered => self.recovered,
            StatusMetric::Deaths => self.deaths,
            StatusMetric::Active => self.active,
        }
    }
}

#[derive(Debug, Default)]
pub struct StateSnapshot {
    rows: Vec<SnapshotRow>,
}

impl StateSnapshot {
    pub fn rows(&self) -> &[SnapshotRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Patch state names to the boundary spelling and drop aggregate rows.
pub fn normalize_snapshot(
    raw: Vec<SnapshotRow>,
    renames: &[StateRename],
    aggregates: &[String],
) -> StateSnapshot {
    let rows = raw
        .into_iter()
        .filter(|row| !aggregates.iter().any(|a| a == &row.state))
        .map(|row| SnapshotRow {
            state: patch_state_name(&row.state, renames),
            ..row
        })
        .collect();

    StateSnapshot { rows }
}

/// Each rename is a case-sensitive substring replacement, applied once in order.
pub fn patch_state_name(name: &str, renames: &[StateRename]) -> String {
    let mut out = name.to_string();
    for rename in renames {
        if out.contains(rename.from.as_str()) {
            out = out.replace(rename.from.as_str(), &rename.to);
        }
    }
    out
}
