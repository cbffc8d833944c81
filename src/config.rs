// config.rs
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_ADDR: &str = "127.0.0.1:8050";
pub const DEFAULT_WORKERS: usize = 8;

pub const DEFAULT_TIMESERIES_URL: &str = "https://api.covid19india.org/csv/latest/states.csv";
pub const DEFAULT_SNAPSHOT_URL: &str = "https://api.covid19india.org/csv/latest/state_wise.csv";
pub const DEFAULT_GEOJSON_URL: &str =
    "https://raw.githubusercontent.com/geohacker/india/master/state/india_telengana.geojson";

/// Snapshot spellings that differ from the boundary file's `NAME_1` values.
pub const DEFAULT_STATE_RENAMES: &[(&str, &str)] = &[
    ("Odisha", "Orissa"),
    ("Uttarakhand", "Uttaranchal"),
    ("Andaman and Nicobar Islands", "Andaman and Nicobar"),
];

/// Snapshot rows that are not a state or territory.
pub const DEFAULT_AGGREGATE_ROWS: &[&str] = &["Total", "State Unassigned"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not a valid socket address: {value}")]
    BadAddr { key: &'static str, value: String },
    #[error("{key} must be a positive integer, got {value}")]
    BadNumber { key: &'static str, value: String },
    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRename {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone)]
pub struct SourceUrls {
    pub timeseries: String,
    pub snapshot: String,
    pub geojson: String,
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub sources: SourceUrls,
    pub state_renames: Vec<StateRename>,
    pub aggregate_rows: Vec<String>,
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_raw = lookup("COVID_DASH_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_addr: SocketAddr = addr_raw.trim().parse().map_err(|_| ConfigError::BadAddr {
            key: "COVID_DASH_ADDR",
            value: addr_raw.clone(),
        })?;

        let max_workers = match lookup("COVID_DASH_WORKERS") {
            None => DEFAULT_WORKERS,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::BadNumber {
                        key: "COVID_DASH_WORKERS",
                        value: raw,
                    })
                }
            },
        };

        let sources = SourceUrls {
            timeseries: source(&lookup, "COVID_DASH_TIMESERIES_URL", DEFAULT_TIMESERIES_URL)?,
            snapshot: source(&lookup, "COVID_DASH_SNAPSHOT_URL", DEFAULT_SNAPSHOT_URL)?,
            geojson: source(&lookup, "COVID_DASH_GEOJSON_URL", DEFAULT_GEOJSON_URL)?,
        };

        Ok(Self {
            bind_addr,
            max_workers,
            sources,
            state_renames: default_state_renames(),
            aggregate_rows: DEFAULT_AGGREGATE_ROWS.iter().map(|s| s.to_string()).collect(),
        })
    }
}

pub fn default_state_renames() -> Vec<StateRename> {
    DEFAULT_STATE_RENAMES
        .iter()
        .map(|(from, to)| StateRename {
            from: from.to_string(),
            to: to.to_string(),
        })
        .collect()
}

fn source<F>(lookup: &F, key: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default.to_string()),
        Some(v) if v.trim().is_empty() => Err(ConfigError::Empty { key }),
        Some(v) => Ok(v.trim().to_string()),
    }
}
