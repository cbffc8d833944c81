use crate::domain::{daily_deltas, SeriesRow};
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Workbook, Worksheet};

const HEADERS: [&str; 13] = [
    "Date",
    "Confirmed",
    "Recovered",
    "Deceased",
    "Other",
    "Tested",
    "Active",
    "Daily Confirmed",
    "Daily Active",
    "Daily Recovered",
    "Daily Deceased",
    "Daily Tested",
    "Positivity",
];

/// Workbook with one row per date: cumulative counters, then the daily
/// deltas. Missing and non-finite values are left blank.
pub fn export_state_series_xlsx(state: &str, rows: &[SeriesRow]) -> ResultResp {
    let daily = daily_deltas(rows);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, (row, d)) in rows.iter().zip(daily.iter()).enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, row.date.format("%Y-%m-%d").to_string())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write date: {}", e)))?;

        let cells: [Option<f64>; 12] = [
            Some(row.confirmed as f64),
            Some(row.recovered as f64),
            Some(row.deceased as f64),
            Some(row.other as f64),
            row.tested.map(|t| t as f64),
            Some(row.active as f64),
            d.confirmed.map(|v| v as f64),
            d.active.map(|v| v as f64),
            d.recovered.map(|v| v as f64),
            d.deceased.map(|v| v as f64),
            d.tested.map(|v| v as f64),
            Some(d.positivity).filter(|p| p.is_finite()),
        ];

        for (offset, cell) in cells.iter().enumerate() {
            write_cell(worksheet, r, (offset + 1) as u16, *cell)?;
        }
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))?;

    xlsx_response(buffer, &export_filename(state))
}

fn write_cell(ws: &mut Worksheet, row: u32, col: u16, value: Option<f64>) -> Result<(), ServerError> {
    if let Some(v) = value {
        ws.write_number(row, col, v).map_err(|e| {
            ServerError::XlsxError(format!("Failed to write {}: {}", HEADERS[col as usize], e))
        })?;
    }
    Ok(())
}

/// `covid_<state>.xlsx`, with anything but ASCII alphanumerics turned into `_`.
pub fn export_filename(state: &str) -> String {
    let safe: String = state
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("covid_{safe}.xlsx")
}
