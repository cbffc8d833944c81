use crate::tests::utils::{body_string, get_ok, test_data};

#[test]
fn state_fragment_redraws_the_four_state_charts() {
    let data = test_data();
    let resp = get_ok(&data, "/charts/state?state=Kerala");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(!body.contains("<html"), "fragment should not be a full page");
    for id in ["indicator", "donut", "cumulative", "daily"] {
        assert!(body.contains(&format!(r#"Plotly.react("{id}""#)), "missing {id}");
    }
    assert!(!body.contains(r#"Plotly.react("choro""#));
    assert!(body.contains("Cumulative Graph of Kerala"));
    assert!(body.contains("Daily Graph of Kerala"));
    assert!(body.contains(r#"href="/export?state=Kerala""#));
}

#[test]
fn state_fragment_encodes_the_export_link() {
    let data = test_data();
    let body = body_string(get_ok(&data, "/charts/state?state=Tamil+Nadu"));

    assert!(body.contains("Cumulative Graph of Tamil Nadu"));
    assert!(body.contains(r#"href="/export?state=Tamil+Nadu""#));
}

#[test]
fn unknown_state_still_renders() {
    let data = test_data();
    let resp = get_ok(&data, "/charts/state?state=Atlantis");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Cumulative Graph of Atlantis"));
}

#[test]
fn map_fragment_redraws_only_the_map() {
    let data = test_data();
    let body = body_string(get_ok(&data, "/charts/map?metric=Recovered"));

    assert!(body.contains(r#"Plotly.react("choro""#));
    assert!(!body.contains(r#"Plotly.react("daily""#));
    assert!(body.contains(r#""type":"choropleth""#));
    assert!(body.contains("India: Total Recovered cases per state"));
    // last stop of the green ramp
    assert!(body.contains("rgb(0,68,27)"));
}
