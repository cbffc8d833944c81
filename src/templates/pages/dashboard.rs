use crate::charts::{Figure, StateCharts};
use crate::domain::{SelectionState, StatusMetric};
use crate::errors::ServerError;
use crate::templates::{card, chart, desktop_layout};
use maud::{html, Markup};

pub const PAGE_TITLE: &str = "COVID-19 India Dashboard";

pub struct DashboardVm {
    pub states: Vec<String>,
    pub selection: SelectionState,
    pub loaded_at: String,
}

/// The full page, with both chart groups rendered for the initial selection.
pub fn dashboard_page(
    vm: &DashboardVm,
    state_charts: &StateCharts,
    map: &Figure,
) -> Result<Markup, ServerError> {
    let state_section = html! {
        div class="controls" {
            label for="state" { "States & Union Territories:" }
            select
                name="state"
                id="state"
                hx-get="/charts/state"
                hx-target="#state-charts"
                hx-swap="innerHTML"
                hx-trigger="change"
            {
                @for name in &vm.states {
                    option value=(name) selected[*name == vm.selection.state] { (name) }
                }
            }
        }
        div id="state-charts" { (state_charts_fragment(state_charts)?) }
    };

    let map_section = html! {
        div class="controls radios" role="radiogroup" aria-label="Status" {
            strong { "Status:" }
            @for metric in StatusMetric::ALL {
                label {
                    input
                        type="radio"
                        name="metric"
                        value=(metric.as_str())
                        checked[metric == vm.selection.metric]
                        hx-get="/charts/map"
                        hx-target="#map-chart"
                        hx-swap="innerHTML"
                        hx-trigger="change";
                    " " (metric.as_str())
                }
            }
        }
        div id="map-chart" { (map_fragment(map)?) }
    };

    Ok(desktop_layout(
        PAGE_TITLE,
        html! {
            main {
                (card("Cases by state", state_section))
                (card("Status across India", map_section))
            }
            footer { "Data loaded " (vm.loaded_at) }
        },
    ))
}

/// Everything that changes with the state selector.
pub fn state_charts_fragment(charts: &StateCharts) -> Result<Markup, ServerError> {
    let export_href = format!(
        "/export?{}",
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("state", &charts.state)
            .finish()
    );

    Ok(html! {
        (chart("indicator", &charts.indicators)?)
        (chart("donut", &charts.composite)?)
        (chart("cumulative", &charts.cumulative)?)
        (chart("daily", &charts.daily)?)
        p { a href=(export_href) { "Download " (charts.state) " data (.xlsx)" } }
    })
}

/// Everything that changes with the status selector.
pub fn map_fragment(map: &Figure) -> Result<Markup, ServerError> {
    chart("choro", map)
}
