use serde::Deserialize;

// states.csv
//  Date,State,Confirmed,Recovered,Deceased,Other,Tested
//  2020-03-14,Kerala,19,3,0,0,
//
// Tested is blank for early dates. Other occasionally is too.

#[derive(Debug, Deserialize)]
pub struct RawSeriesRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Confirmed")]
    pub confirmed: i64,
    #[serde(rename = "Recovered")]
    pub recovered: i64,
    #[serde(rename = "Deceased")]
    pub deceased: i64,
    #[serde(rename = "Other")]
    pub other: Option<i64>,
    #[serde(rename = "Tested")]
    pub tested: Option<i64>,
}

// state_wise.csv
//  State,Confirmed,Recovered,Deaths,Active,Last_Updated_Time,Migrated_Other,State_code,...
//
// Only the first five columns are kept.

#[derive(Debug, Deserialize)]
pub struct RawSnapshotRow {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Confirmed")]
    pub confirmed: i64,
    #[serde(rename = "Recovered")]
    pub recovered: i64,
    #[serde(rename = "Deaths")]
    pub deaths: i64,
    #[serde(rename = "Active")]
    pub active: i64,
}
