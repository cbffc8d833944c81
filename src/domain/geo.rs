use serde_json::Value;
use std::collections::BTreeSet;

/// Feature property that carries the state name.
pub const FEATURE_NAME_KEY: &str = "NAME_1";

/// The boundary FeatureCollection as loaded, plus its feature names.
#[derive(Debug)]
pub struct GeoBoundary {
    collection: Value,
    names: BTreeSet<String>,
}

impl GeoBoundary {
    pub fn new(collection: Value, names: BTreeSet<String>) -> Self {
        Self { collection, names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn feature_count(&self) -> usize {
        self.names.len()
    }

    pub fn collection(&self) -> &Value {
        &self.collection
    }
}
