use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};

use crate::domain::entities::table::{RawCell, RawTable};

/// Keeps workbook typing: numbers stay numbers so fractional-hour columns and
/// serial dates are recognised downstream.
pub fn cell_to_raw(cell: &Data) -> RawCell {
    match cell {
        Data::String(v) => RawCell::text(v.as_str()),
        Data::Float(v) => RawCell::Number(*v),
        Data::Int(v) => RawCell::Number(*v as f64),
        Data::Bool(v) => RawCell::Number(if *v { 1.0 } else { 0.0 }),
        Data::DateTime(v) => {
            let serial = v.as_f64();
            // Bare time-of-day cells are a fraction of a day; express them in hours.
            if serial < 1.0 {
                RawCell::Number(serial * 24.0)
            } else {
                RawCell::Number(serial)
            }
        }
        Data::DateTimeIso(v) => RawCell::text(v.as_str()),
        Data::DurationIso(v) => RawCell::text(v.as_str()),
        Data::Error(_) | Data::Empty => RawCell::Empty,
    }
}

fn range_to_table(range: &Range<Data>) -> RawTable {
    let mut rows = range.rows();
    let headers = rows
        .next()
        .map(|header| {
            header
                .iter()
                .map(|cell| cell_to_raw(cell).as_text().unwrap_or_default())
                .collect()
        })
        .unwrap_or_default();
    let rows = rows
        .map(|row| row.iter().map(cell_to_raw).collect())
        .collect();
    RawTable::new(headers, rows)
}

/// Reads `sheet` if given, otherwise the first sheet that has any cells.
pub fn read_xlsx_table(xlsx_path: &Path, sheet: Option<&str>) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(xlsx_path)
        .with_context(|| format!("failed to open xlsx: {}", xlsx_path.display()))?;

    if let Some(sheet) = sheet {
        let range = workbook
            .worksheet_range(sheet)
            .with_context(|| format!("failed to read sheet: {sheet}"))?;
        return Ok(range_to_table(&range));
    }

    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .with_context(|| format!("failed to read sheet: {name}"))?;
        if !range.is_empty() {
            tracing::debug!(sheet = %name, "using first non-empty sheet");
            return Ok(range_to_table(&range));
        }
    }

    anyhow::bail!("workbook has no sheet with data: {}", xlsx_path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{ExcelDateTime, ExcelDateTimeType};
    use chrono::NaiveDate;

    use crate::domain::column_map::map_columns;
    use crate::domain::entities::language::Language;
    use crate::domain::normalize::normalize_rows;

    #[test]
    fn cells_keep_their_numeric_type() {
        assert_eq!(cell_to_raw(&Data::Float(6.5)), RawCell::Number(6.5));
        assert_eq!(cell_to_raw(&Data::Int(3)), RawCell::Number(3.0));
        assert_eq!(cell_to_raw(&Data::Bool(true)), RawCell::Number(1.0));
        assert_eq!(
            cell_to_raw(&Data::String("Jeudi".to_string())),
            RawCell::text("Jeudi")
        );
        assert_eq!(cell_to_raw(&Data::Empty), RawCell::Empty);
    }

    fn serial(value: f64) -> Data {
        Data::DateTime(ExcelDateTime::new(value, ExcelDateTimeType::DateTime, false))
    }

    #[test]
    fn time_cells_become_hours_and_date_cells_stay_serials() {
        let wake = serial(6.5 / 24.0);
        let date = serial(45323.0);

        let RawCell::Number(hours) = cell_to_raw(&wake) else {
            panic!("time cell should be numeric");
        };
        assert!((hours - 6.5).abs() < 1e-9, "expected 6.5 hours, got {hours}");
        assert_eq!(cell_to_raw(&date), RawCell::Number(45323.0));
    }

    #[test]
    fn range_keeps_header_and_pads_rows() {
        let mut range = Range::new((0, 0), (2, 2));
        range.set_value((0, 0), Data::String("Temps".to_string()));
        range.set_value((0, 1), Data::String(" V_poids ".to_string()));
        range.set_value((0, 2), Data::String("V_debout".to_string()));
        range.set_value((1, 0), Data::Float(45323.0));
        range.set_value((1, 1), Data::Float(70.5));
        range.set_value((1, 2), serial(6.5 / 24.0));
        range.set_value((2, 0), Data::Float(45324.0));

        let table = range_to_table(&range);

        assert_eq!(table.headers, vec!["Temps", "V_poids", "V_debout"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0][1], RawCell::Number(70.5));
        assert_eq!(table.rows[1].len(), 3, "unset cells should come back empty");
        assert_eq!(table.rows[1][1], RawCell::Empty);

        let mapped = map_columns(&table);
        let rows = normalize_rows(&mapped, Language::Fr).expect("rows should normalize");
        assert_eq!(
            rows.entries[0].date,
            NaiveDate::from_ymd_opt(2024, 2, 1).expect("should build date")
        );
        assert_eq!(rows.entries[0].wake_time.as_deref(), Some("06:30"));
        assert_eq!(rows.entries[1].day_name, "Vendredi");
        assert_eq!(rows.entries[1].weight, None);
    }

    #[test]
    fn header_only_range_has_no_rows() {
        let mut range = Range::new((0, 0), (0, 1));
        range.set_value((0, 0), Data::String("Temps".to_string()));
        range.set_value((0, 1), Data::String("V_poids".to_string()));

        let table = range_to_table(&range);

        assert_eq!(table.headers, vec!["Temps", "V_poids"]);
        assert_eq!(table.row_count(), 0);
    }
}
