use serde::Serialize;
use serde_json::Value;

/// A plotly.js figure: a list of traces plus a layout object.
///
/// Non-finite numbers inside traces serialize as `null`, which plotly.js
/// treats as a gap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

impl Figure {
    pub fn new(data: Vec<Value>, layout: Value) -> Self {
        Self { data, layout }
    }
}
