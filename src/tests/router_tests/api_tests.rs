use crate::charts::GEOJSON_ROUTE;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_json, content_type, get, get_ok, test_data};
use serde_json::{json, Value};
use std::collections::HashSet;

#[test]
fn states_endpoint_lists_sorted_names() {
    let data = test_data();
    let resp = get_ok(&data, "/api/states");
    assert_eq!(content_type(&resp), "application/json");

    assert_eq!(
        body_json(resp),
        json!(["Goa", "India", "Kerala", "Odisha", "Tamil Nadu"])
    );
}

#[test]
fn state_charts_match_the_worked_example() {
    let data = test_data();
    let charts = body_json(get_ok(&data, "/api/state?state=Kerala"));

    assert_eq!(charts["state"], "Kerala");

    let confirmed = &charts["indicators"]["data"][0];
    assert_eq!(confirmed["title"]["text"], "Confirmed");
    assert_eq!(confirmed["value"], 150);
    assert_eq!(confirmed["delta"]["reference"], 100);

    let active = &charts["indicators"]["data"][3];
    assert_eq!(active["title"]["text"], "Active");
    assert_eq!(active["value"], 87);

    let daily_confirmed = &charts["daily"]["data"][0];
    assert_eq!(daily_confirmed["y"], json!([null, 50]));

    let positivity = &charts["composite"]["data"][1];
    assert_eq!(positivity["y"], json!([null, 25.0]));
}

#[test]
fn every_state_gets_four_figures_over_its_own_dates() {
    let data = test_data();

    for state in data.state_options() {
        let uri = format!(
            "/api/state?{}",
            url::form_urlencoded::Serializer::new(String::new())
                .append_pair("state", &state)
                .finish()
        );
        let charts = body_json(get_ok(&data, &uri));

        let rows = data.series().rows_for(&state);
        let dates: HashSet<String> = rows
            .iter()
            .map(|r| r.date.format("%Y-%m-%d").to_string())
            .collect();

        for name in ["indicators", "composite", "cumulative", "daily"] {
            assert!(charts[name]["data"].is_array(), "{state}: missing {name}");
        }

        for name in ["cumulative", "daily"] {
            for trace in charts[name]["data"].as_array().unwrap() {
                for x in trace["x"].as_array().unwrap() {
                    assert!(dates.contains(x.as_str().unwrap()), "{state}: stray date {x}");
                }
            }
        }

        // Active line is always Confirmed - Recovered - Deceased - Other
        let active_line = &charts["cumulative"]["data"][1]["y"];
        for (i, row) in rows.iter().enumerate() {
            let expected = row.confirmed - row.recovered - row.deceased - row.other;
            assert_eq!(active_line[i], json!(expected));
        }
    }
}

#[test]
fn zero_daily_tests_give_a_gap_in_positivity() {
    let data = test_data();
    let charts = body_json(get_ok(&data, "/api/state?state=Odisha"));

    // Odisha's tested count does not move between its two days
    assert_eq!(charts["composite"]["data"][1]["y"], json!([null, null]));
    assert_eq!(charts["daily"]["data"][0]["y"], json!([null, 5]));
}

#[test]
fn single_day_state_has_no_indicator_delta() {
    let data = test_data();
    let charts = body_json(get_ok(&data, "/api/state?state=Goa"));

    let confirmed = &charts["indicators"]["data"][0];
    assert_eq!(confirmed["value"], 5);
    assert_eq!(confirmed["mode"], "number");
    assert_eq!(confirmed.get("delta"), None);
}

#[test]
fn missing_state_defaults_to_india() {
    let data = test_data();
    let charts = body_json(get_ok(&data, "/api/state"));

    assert_eq!(charts["state"], "India");
    assert_eq!(charts["indicators"]["data"][0]["value"], 1500);
}

#[test]
fn map_keeps_only_joined_states() {
    let data = test_data();
    let map = body_json(get_ok(&data, "/api/map?metric=Active"));
    let trace = &map["data"][0];

    // Odisha is renamed to the boundary spelling; Lakshadweep has no feature;
    // the aggregate rows never reach the map.
    assert_eq!(
        trace["locations"],
        json!(["Kerala", "Orissa", "Tamil Nadu", "Goa"])
    );
    assert_eq!(trace["z"], json!([87, 32, 49, 4]));
    assert_eq!(trace["colorscale"][8], json!([1.0, "rgb(8,48,107)"]));
    assert_eq!(trace["geojson"], GEOJSON_ROUTE);
}

#[test]
fn map_defaults_to_confirmed() {
    let data = test_data();
    let map = body_json(get_ok(&data, "/api/map"));

    assert_eq!(map["data"][0]["z"], json!([150, 45, 70, 5]));
    assert_eq!(map["layout"]["title"]["text"], "India: Total Confirmed cases per state");
}

#[test]
fn map_rejects_unknown_metrics() {
    let data = test_data();
    let err = handle(get("/api/map?metric=Tested"), &data).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn geojson_is_served_as_loaded() {
    let data = test_data();
    let geo: Value = body_json(get_ok(&data, GEOJSON_ROUTE));

    assert_eq!(geo["type"], "FeatureCollection");
    assert_eq!(geo["features"].as_array().unwrap().len(), 4);
    assert_eq!(geo["features"][1]["properties"]["NAME_1"], "Orissa");
}
