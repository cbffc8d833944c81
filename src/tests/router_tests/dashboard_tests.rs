// src/tests/router_tests/dashboard_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::templates::html_error_response;
use crate::templates::pages::PAGE_TITLE;
use crate::tests::utils::{body_string, content_type, get, get_ok, test_data};
use astra::Body;
use http::{Method, Request};

#[test]
fn dashboard_lists_states_with_india_selected() {
    let data = test_data();

    let resp = get_ok(&data, "/");
    assert_eq!(resp.status(), 200);
    assert_eq!(content_type(&resp), "text/html; charset=utf-8");

    let body = body_string(resp);
    assert!(body.contains(PAGE_TITLE));
    assert!(body.contains(r#"<option value="India" selected>India</option>"#));
    assert!(body.contains(r#"<option value="Kerala">Kerala</option>"#));

    // options are sorted ascending
    let positions: Vec<usize> = ["Goa", "India", "Kerala", "Odisha", "Tamil Nadu"]
        .iter()
        .map(|s| {
            body.find(&format!(r#"<option value="{s}""#))
                .unwrap_or_else(|| panic!("missing option {s}"))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn dashboard_defaults_to_confirmed() {
    let data = test_data();
    let body = body_string(get_ok(&data, "/"));

    assert!(body.contains(r#"value="Confirmed" checked"#));
    assert!(!body.contains(r#"value="Deaths" checked"#));
    assert!(body.contains("India: Total Confirmed cases per state"));
    assert!(body.contains("Current Status in India"));
}

#[test]
fn dashboard_renders_all_chart_slots() {
    let data = test_data();
    let body = body_string(get_ok(&data, "/"));

    for id in ["indicator", "donut", "cumulative", "daily", "choro"] {
        assert!(
            body.contains(&format!(r#"<div id="{id}" class="chart"></div>"#)),
            "missing chart {id}"
        );
    }
    assert!(body.contains(r#"hx-get="/charts/state""#));
    assert!(body.contains(r#"hx-get="/charts/map""#));
}

#[test]
fn query_preselects_state_and_metric() {
    let data = test_data();
    let body = body_string(get_ok(&data, "/?state=Tamil%20Nadu&metric=Deaths"));

    assert!(body.contains(r#"<option value="Tamil Nadu" selected>"#));
    assert!(body.contains(r#"value="Deaths" checked"#));
    assert!(body.contains("Current Status in Tamil Nadu"));
    assert!(body.contains("India: Total Deaths cases per state"));
}

#[test]
fn unknown_metric_is_a_bad_request() {
    let data = test_data();

    let err = handle(get("/?metric=Deceased"), &data).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    let resp = html_error_response(err);
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("unknown status metric: Deceased"));
}

#[test]
fn unknown_routes_and_methods_are_not_found() {
    let data = test_data();

    let err = handle(get("/admin"), &data).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let post = Request::builder()
        .method(Method::POST)
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let err = handle(post, &data).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(html_error_response(err).status(), 404);
}

#[test]
fn error_pages_escape_their_message() {
    let resp = html_error_response(ServerError::BadRequest("<script>".into()));
    let body = body_string(resp);

    assert!(!body.contains("<script>"));
    assert!(body.contains("&lt;script&gt;"));
}
