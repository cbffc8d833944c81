mod choropleth;
mod colors;
mod figure;
mod timeseries;

pub use choropleth::{build_choropleth, GEOJSON_ROUTE};
pub use figure::Figure;
pub use timeseries::{build_state_charts, StateCharts};
