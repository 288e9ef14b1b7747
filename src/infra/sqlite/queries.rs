use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{named_params, types::Type, Row};

use crate::domain::entities::entry::JournalEntry;
use crate::infra::sqlite::schema::open_connection;

const DATE_FORMAT: &str = "%Y-%m-%d";

const SELECT_COLUMNS: &str = "date, day_name, nico, water_l, coffee, beer_l, alcool_cl, wine_cl,
     soda_l, soiree, soiree_name, wake_time, sleep_time, sleep_hours, ran, run_km, weight";

fn flag(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

/// Columns may be NULL in rows written by older versions of the journal, so
/// non-nullable fields fall back to their defaults here.
fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<JournalEntry> {
    let date_text: String = row.get(0)?;
    let date = NaiveDate::parse_from_str(&date_text, DATE_FORMAT)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(err)))?;

    Ok(JournalEntry {
        date,
        day_name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        nico: row.get(2)?,
        water_l: row.get::<_, Option<f64>>(3)?.unwrap_or(0.0),
        coffee: row.get::<_, Option<i64>>(4)?.unwrap_or(0),
        beer_l: row.get::<_, Option<f64>>(5)?.unwrap_or(0.0),
        alcool_cl: row.get::<_, Option<f64>>(6)?.unwrap_or(0.0),
        wine_cl: row.get::<_, Option<f64>>(7)?.unwrap_or(0.0),
        soda_l: row.get::<_, Option<f64>>(8)?.unwrap_or(0.0),
        soiree: row.get::<_, Option<i64>>(9)?.unwrap_or(0) != 0,
        soiree_name: row.get(10)?,
        wake_time: row.get(11)?,
        sleep_time: row.get(12)?,
        sleep_hours: row.get::<_, Option<f64>>(13)?.unwrap_or(0.0),
        ran: row.get::<_, Option<i64>>(14)?.unwrap_or(0) != 0,
        run_km: row.get::<_, Option<f64>>(15)?.unwrap_or(0.0),
        weight: row.get(16)?,
    })
}

pub fn get_entry(db_path: &Path, date: NaiveDate) -> Result<Option<JournalEntry>> {
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM journal WHERE date = ?1"
        ))
        .context("failed to prepare entry lookup")?;

    let mut rows = stmt
        .query([date.format(DATE_FORMAT).to_string()])
        .context("failed to query entry")?;

    match rows.next().context("failed to read entry row")? {
        Some(row) => Ok(Some(
            entry_from_row(row).with_context(|| format!("failed to decode entry for {date}"))?,
        )),
        None => Ok(None),
    }
}

pub fn upsert_entry(db_path: &Path, entry: &JournalEntry) -> Result<()> {
    let conn = open_connection(db_path)?;
    conn.execute(
        "INSERT INTO journal (
            date, day_name, nico, water_l, coffee, beer_l,
            alcool_cl, wine_cl, soda_l,
            soiree, soiree_name,
            wake_time, sleep_time, sleep_hours,
            ran, run_km, weight
        ) VALUES (
            :date, :day_name, :nico, :water_l, :coffee, :beer_l,
            :alcool_cl, :wine_cl, :soda_l,
            :soiree, :soiree_name,
            :wake_time, :sleep_time, :sleep_hours,
            :ran, :run_km, :weight
        )
        ON CONFLICT(date) DO UPDATE SET
            day_name = excluded.day_name,
            nico = excluded.nico,
            water_l = excluded.water_l,
            coffee = excluded.coffee,
            beer_l = excluded.beer_l,
            alcool_cl = excluded.alcool_cl,
            wine_cl = excluded.wine_cl,
            soda_l = excluded.soda_l,
            soiree = excluded.soiree,
            soiree_name = excluded.soiree_name,
            wake_time = excluded.wake_time,
            sleep_time = excluded.sleep_time,
            sleep_hours = excluded.sleep_hours,
            ran = excluded.ran,
            run_km = excluded.run_km,
            weight = excluded.weight",
        named_params! {
            ":date": entry.date.format(DATE_FORMAT).to_string(),
            ":day_name": entry.day_name,
            ":nico": entry.nico,
            ":water_l": entry.water_l,
            ":coffee": entry.coffee,
            ":beer_l": entry.beer_l,
            ":alcool_cl": entry.alcool_cl,
            ":wine_cl": entry.wine_cl,
            ":soda_l": entry.soda_l,
            ":soiree": flag(entry.soiree),
            ":soiree_name": entry.soiree_name,
            ":wake_time": entry.wake_time,
            ":sleep_time": entry.sleep_time,
            ":sleep_hours": entry.sleep_hours,
            ":ran": flag(entry.ran),
            ":run_km": entry.run_km,
            ":weight": entry.weight,
        },
    )
    .with_context(|| format!("failed to upsert entry for {}", entry.date))?;
    Ok(())
}

pub fn load_all(db_path: &Path) -> Result<Vec<JournalEntry>> {
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM journal ORDER BY date ASC"
        ))
        .context("failed to prepare journal scan")?;

    let entries = stmt
        .query_map([], entry_from_row)
        .context("failed to scan journal")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to collect journal entries")?;

    Ok(entries)
}
