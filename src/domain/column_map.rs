use crate::domain::entities::table::{RawCell, RawTable};

/// Persisted column order; also the header row of an export.
pub const CANONICAL_FIELDS: [&str; 17] = [
    "date",
    "day_name",
    "nico",
    "water_l",
    "coffee",
    "beer_l",
    "alcool_cl",
    "wine_cl",
    "soda_l",
    "soiree",
    "soiree_name",
    "wake_time",
    "sleep_time",
    "sleep_hours",
    "ran",
    "run_km",
    "weight",
];

/// Headers of the spreadsheet's `DB_DATA_SCADA` sheet.
const SPREADSHEET_ALIASES: [(&str, &str); 18] = [
    ("Temps", "date"),
    ("V_jour", "day_name"),
    ("%nico", "nico"),
    ("L_eau", "water_l"),
    ("T_coffee", "coffee"),
    ("L_bière", "beer_l"),
    ("L_biere", "beer_l"),
    ("cl_alcool", "alcool_cl"),
    ("cl_vin", "wine_cl"),
    ("L_soda", "soda_l"),
    ("B_soiree", "soiree"),
    ("N_soiree", "soiree_name"),
    ("V_debout", "wake_time"),
    ("V_couche", "sleep_time"),
    ("V_somm", "sleep_hours"),
    ("B_courrir", "ran"),
    ("V_courrir", "run_km"),
    ("V_poids", "weight"),
];

static EMPTY_CELL: RawCell = RawCell::Empty;

pub fn canonical_index(field: &str) -> Option<usize> {
    CANONICAL_FIELDS.iter().position(|name| *name == field)
}

/// Canonical field a header stands for, if any.
pub fn resolve_header(header: &str) -> Option<&'static str> {
    let header = header.trim().trim_start_matches('\u{feff}').trim();
    SPREADSHEET_ALIASES
        .iter()
        .find(|(alias, _)| *alias == header)
        .map(|(_, field)| *field)
        .or_else(|| CANONICAL_FIELDS.iter().copied().find(|name| *name == header))
}

/// A table reshaped onto [`CANONICAL_FIELDS`]: `columns[i]` holds every value
/// of `CANONICAL_FIELDS[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedTable {
    pub columns: Vec<Vec<RawCell>>,
    pub row_count: usize,
}

impl MappedTable {
    pub fn column(&self, field: &str) -> &[RawCell] {
        canonical_index(field)
            .and_then(|idx| self.columns.get(idx))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn cell(&self, field: &str, row_idx: usize) -> &RawCell {
        self.column(field).get(row_idx).unwrap_or(&EMPTY_CELL)
    }
}

/// Unknown headers are dropped, absent canonical fields come back all-empty,
/// and when two headers resolve to the same field the leftmost one is used.
pub fn map_columns(table: &RawTable) -> MappedTable {
    let mut sources: [Option<usize>; CANONICAL_FIELDS.len()] = [None; CANONICAL_FIELDS.len()];
    for (col_idx, header) in table.headers.iter().enumerate() {
        let Some(field_idx) = resolve_header(header).and_then(canonical_index) else {
            continue;
        };
        if sources[field_idx].is_none() {
            sources[field_idx] = Some(col_idx);
        }
    }

    let row_count = table.row_count();
    let columns = sources
        .iter()
        .map(|source| match source {
            Some(col_idx) => table
                .rows
                .iter()
                .map(|row| row.get(*col_idx).cloned().unwrap_or(RawCell::Empty))
                .collect(),
            None => vec![RawCell::Empty; row_count],
        })
        .collect();

    MappedTable { columns, row_count }
}
