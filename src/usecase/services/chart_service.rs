use chrono::NaiveDate;

use crate::domain::entities::entry::JournalEntry;

pub const LIQUID_FIELDS: [&str; 5] = ["water_l", "beer_l", "wine_cl", "alcool_cl", "soda_l"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Nulls and zeros are gaps; the y axis hugs the data with 10% padding.
    Dynamic,
    /// Only nulls are gaps; the y axis spans min..max.
    Basic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub field: &'static str,
    pub points: Vec<(NaiveDate, f64)>,
    pub y_min: f64,
    pub y_max: f64,
}

/// `None` means there is nothing worth plotting for `field`.
pub fn series(entries: &[JournalEntry], field: &'static str, kind: ChartKind) -> Option<ChartSeries> {
    let points = entries
        .iter()
        .filter_map(|entry| entry.metric(field).map(|value| (entry.date, value)))
        .filter(|(_, value)| kind == ChartKind::Basic || *value != 0.0)
        .collect::<Vec<_>>();
    if points.is_empty() {
        return None;
    }

    let mut y_min = points.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
    let mut y_max = points.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);
    if kind == ChartKind::Dynamic {
        if y_min == y_max {
            y_min -= 1.0;
            y_max += 1.0;
        }
        let padding = (y_max - y_min) * 0.1;
        y_min -= padding;
        y_max += padding;
    }

    Some(ChartSeries {
        field,
        points,
        y_min,
        y_max,
    })
}

/// One basic series per selected liquid that has data.
pub fn liquid_series(entries: &[JournalEntry], selected: &[&'static str]) -> Vec<ChartSeries> {
    selected
        .iter()
        .filter(|field| LIQUID_FIELDS.contains(*field))
        .filter_map(|field| series(entries, *field, ChartKind::Basic))
        .collect()
}
