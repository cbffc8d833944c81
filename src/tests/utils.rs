use crate::config::{default_state_renames, DEFAULT_AGGREGATE_ROWS};
use crate::domain::CovidData;
use crate::loader::{parse_geojson, parse_snapshot_csv, parse_timeseries_csv};
use crate::router::handle;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

pub const STATES_CSV: &str = "\
Date,State,Confirmed,Recovered,Deceased,Other,Tested
2021-01-01,India,1000,500,20,0,10000
2021-01-02,India,1200,600,25,1,12000
2021-01-03,India,1500,700,30,1,15000
2021-01-02,Kerala,150,60,3,0,1200
2021-01-01,Kerala,100,50,2,0,1000
2021-01-01,Odisha,40,10,1,0,500
2021-01-02,Odisha,45,12,1,0,500
2021-01-01,Tamil Nadu,70,20,1,0,
2021-01-03,Goa,5,1,0,0,50
";

pub const STATE_WISE_CSV: &str = "\
State,Confirmed,Recovered,Deaths,Active,Last_Updated_Time,Migrated_Other,State_code
Total,1500,700,30,769,03/01/2021 10:00:00,1,TT
Kerala,150,60,3,87,03/01/2021 10:00:00,0,KL
Odisha,45,12,1,32,03/01/2021 10:00:00,0,OR
Tamil Nadu,70,20,1,49,03/01/2021 10:00:00,0,TN
Goa,5,1,0,4,03/01/2021 10:00:00,0,GA
Lakshadweep,0,0,0,0,03/01/2021 10:00:00,0,LD
State Unassigned,0,0,0,0,03/01/2021 10:00:00,0,UN
";

pub const GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "properties": {"NAME_1": "Kerala"},
     "geometry": {"type": "Polygon", "coordinates": [[[76.0, 10.0], [77.0, 10.0], [77.0, 11.0], [76.0, 10.0]]]}},
    {"type": "Feature", "properties": {"NAME_1": "Orissa"},
     "geometry": {"type": "Polygon", "coordinates": [[[84.0, 20.0], [85.0, 20.0], [85.0, 21.0], [84.0, 20.0]]]}},
    {"type": "Feature", "properties": {"NAME_1": "Tamil Nadu"},
     "geometry": {"type": "Polygon", "coordinates": [[[78.0, 11.0], [79.0, 11.0], [79.0, 12.0], [78.0, 11.0]]]}},
    {"type": "Feature", "properties": {"NAME_1": "Goa"},
     "geometry": {"type": "Polygon", "coordinates": [[[73.8, 15.0], [74.2, 15.0], [74.2, 15.5], [73.8, 15.0]]]}}
  ]
}"#;

/// The dataset every router test runs against. No network involved.
pub fn test_data() -> CovidData {
    let aggregates: Vec<String> = DEFAULT_AGGREGATE_ROWS.iter().map(|s| s.to_string()).collect();

    let series = parse_timeseries_csv(STATES_CSV.as_bytes())
        .unwrap_or_else(|e| panic!("fixture time series failed to parse: {e}"));
    let snapshot =
        parse_snapshot_csv(STATE_WISE_CSV.as_bytes(), &default_state_renames(), &aggregates)
            .unwrap_or_else(|e| panic!("fixture snapshot failed to parse: {e}"));
    let boundaries = parse_geojson(GEOJSON.as_bytes())
        .unwrap_or_else(|e| panic!("fixture geojson failed to parse: {e}"));

    CovidData::new(series, snapshot, boundaries)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Route a GET through `handle` and expect success.
pub fn get_ok(data: &CovidData, uri: &str) -> Response {
    handle(get(uri), data).unwrap_or_else(|e| panic!("GET {uri} failed: {e}"))
}

pub fn body_bytes(mut resp: Response) -> Vec<u8> {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    bytes
}

pub fn body_string(resp: Response) -> String {
    String::from_utf8(body_bytes(resp)).unwrap()
}

pub fn body_json(resp: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(resp)).unwrap()
}

pub fn content_type(resp: &Response) -> &str {
    resp.headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
