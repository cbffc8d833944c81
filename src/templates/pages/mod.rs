pub mod dashboard;

pub use dashboard::{dashboard_page, map_fragment, state_charts_fragment, DashboardVm, PAGE_TITLE};
