use chrono::{Days, NaiveDate};

use crate::domain::column_map::MappedTable;
use crate::domain::entities::entry::JournalEntry;
use crate::domain::entities::language::{day_name, Language};
use crate::domain::entities::table::RawCell;
use crate::domain::time_codec::fractional_hours_to_clock_text;

/// Only tried when the text starts with a four-digit year, since `%Y` also
/// accepts one or two digits and would swallow `01-02-24`.
const YEAR_FIRST_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
/// Day-first forms are tried before the month-first fallback. `%y` comes
/// before `%Y` so two-digit years are not read as the first century.
const DAY_FIRST_FORMATS: [&str; 6] = [
    "%d/%m/%y",
    "%d/%m/%Y",
    "%d-%m-%y",
    "%d-%m-%Y",
    "%d.%m.%y",
    "%d.%m.%Y",
];
const MONTH_FIRST_FORMATS: [&str; 2] = ["%m/%d/%y", "%m/%d/%Y"];

/// Largest serial Excel accepts (9999-12-31).
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("no valid 'date' or 'Temps' column found in the table")]
    NoDateColumn,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRows {
    pub entries: Vec<JournalEntry>,
    /// Rows skipped because their date did not parse.
    pub dropped: usize,
}

pub fn parse_day_first_date(cell: &RawCell) -> Option<NaiveDate> {
    match cell {
        RawCell::Empty => None,
        RawCell::Number(serial) => excel_serial_to_date(*serial),
        RawCell::Text(text) => parse_date_text(text),
    }
}

fn starts_with_full_year(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() > 4
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && matches!(bytes[4], b'-' | b'/')
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let date_part = text.trim().split([' ', 'T']).next()?;
    let formats: &[&str] = if starts_with_full_year(date_part) {
        &YEAR_FIRST_FORMATS
    } else {
        &DAY_FIRST_FORMATS
    };
    formats
        .iter()
        .chain(MONTH_FIRST_FORMATS.iter())
        .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
}

fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 || serial > MAX_EXCEL_SERIAL {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_days(Days::new(serial.trunc() as u64))
}

/// A column counts as numeric when every non-blank value parses as a number.
fn is_numeric_column(column: &[RawCell]) -> bool {
    column
        .iter()
        .filter(|cell| !cell.is_blank())
        .all(|cell| cell.as_number().is_some())
}

fn clock_column(column: &[RawCell]) -> Vec<Option<String>> {
    if is_numeric_column(column) {
        column
            .iter()
            .map(|cell| cell.as_number().and_then(fractional_hours_to_clock_text))
            .collect()
    } else {
        column.iter().map(RawCell::as_text).collect()
    }
}

fn int_or_zero(cell: &RawCell) -> i64 {
    cell.as_number().map(|value| value.trunc() as i64).unwrap_or(0)
}

fn float_or_zero(cell: &RawCell) -> f64 {
    cell.as_number().unwrap_or(0.0)
}

/// Coerces every mapped row to a [`JournalEntry`]. Rows whose date does not
/// parse are dropped; if none parses the whole table is rejected. Any other
/// malformed value falls back to its default instead of failing.
pub fn normalize_rows(
    mapped: &MappedTable,
    language: Language,
) -> Result<NormalizedRows, NormalizeError> {
    let wake_times = clock_column(mapped.column("wake_time"));
    let sleep_times = clock_column(mapped.column("sleep_time"));

    let mut entries = Vec::with_capacity(mapped.row_count);
    let mut dropped = 0_usize;
    for row_idx in 0..mapped.row_count {
        let cell = |field: &str| mapped.cell(field, row_idx);

        let Some(date) = parse_day_first_date(cell("date")) else {
            dropped += 1;
            continue;
        };

        let day_label = cell("day_name")
            .as_text()
            .unwrap_or_else(|| day_name(date, language).to_string());

        entries.push(JournalEntry {
            date,
            day_name: day_label,
            nico: cell("nico").as_number(),
            water_l: float_or_zero(cell("water_l")),
            coffee: int_or_zero(cell("coffee")),
            beer_l: float_or_zero(cell("beer_l")),
            alcool_cl: float_or_zero(cell("alcool_cl")),
            wine_cl: float_or_zero(cell("wine_cl")),
            soda_l: float_or_zero(cell("soda_l")),
            soiree: int_or_zero(cell("soiree")) != 0,
            soiree_name: cell("soiree_name").as_text(),
            wake_time: wake_times.get(row_idx).cloned().flatten(),
            sleep_time: sleep_times.get(row_idx).cloned().flatten(),
            sleep_hours: float_or_zero(cell("sleep_hours")),
            ran: int_or_zero(cell("ran")) != 0,
            run_km: float_or_zero(cell("run_km")),
            weight: cell("weight").as_number(),
        });
    }

    if entries.is_empty() {
        return Err(NormalizeError::NoDateColumn);
    }

    Ok(NormalizedRows { entries, dropped })
}
