use crate::charts::{build_choropleth, build_state_charts, GEOJSON_ROUTE};
use crate::domain::{CovidData, SelectionState};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp};
use crate::spreadsheets::export_state_series_xlsx;
use crate::templates::pages::{self, DashboardVm};
use astra::Request;
use std::collections::HashMap;

pub fn handle(req: Request, data: &CovidData) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);

    tracing::debug!(method, path, ?params, "request");

    match (method, path) {
        ("GET", "/") => dashboard(&params, data),

        // htmx fragments
        ("GET", "/charts/state") => {
            let selection = SelectionState::from_params(&params, data)?;
            let charts = build_state_charts(&selection.state, data.series().rows_for(&selection.state));
            html_response(pages::state_charts_fragment(&charts)?)
        }
        ("GET", "/charts/map") => {
            let selection = SelectionState::from_params(&params, data)?;
            html_response(pages::map_fragment(&map_figure(&selection, data))?)
        }

        // JSON
        ("GET", "/api/states") => json_response(&data.state_options()),
        ("GET", "/api/state") => {
            let selection = SelectionState::from_params(&params, data)?;
            let charts = build_state_charts(&selection.state, data.series().rows_for(&selection.state));
            json_response(&charts)
        }
        ("GET", "/api/map") => {
            let selection = SelectionState::from_params(&params, data)?;
            json_response(&map_figure(&selection, data))
        }
        ("GET", GEOJSON_ROUTE) => json_response(data.boundaries().collection()),

        ("GET", "/export") => {
            let selection = SelectionState::from_params(&params, data)?;
            export_state_series_xlsx(&selection.state, data.series().rows_for(&selection.state))
        }

        _ => Err(ServerError::NotFound),
    }
}

fn dashboard(params: &HashMap<String, String>, data: &CovidData) -> ResultResp {
    let selection = SelectionState::from_params(params, data)?;

    let charts = build_state_charts(&selection.state, data.series().rows_for(&selection.state));
    let map = map_figure(&selection, data);

    let vm = DashboardVm {
        states: data.state_options(),
        loaded_at: data.loaded_at().format("%Y-%m-%d %H:%M UTC").to_string(),
        selection,
    };

    html_response(pages::dashboard_page(&vm, &charts, &map)?)
}

fn map_figure(selection: &SelectionState, data: &CovidData) -> crate::charts::Figure {
    build_choropleth(data.snapshot(), data.boundaries(), selection.metric, GEOJSON_ROUTE)
}

/// Decoded query parameters; later duplicates win.
fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
