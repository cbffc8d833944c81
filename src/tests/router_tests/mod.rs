mod api_tests;
mod charts_tests;
mod dashboard_tests;
