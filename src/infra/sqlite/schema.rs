use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn open_connection(db_path: &Path) -> Result<Connection> {
    Connection::open(db_path).with_context(|| format!("failed to open db: {}", db_path.display()))
}

pub fn init_db(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create parent dir: {}", parent.display()))?;
    }

    let conn = open_connection(db_path)?;

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS journal (
            date        TEXT PRIMARY KEY,
            day_name    TEXT,
            nico        REAL,
            water_l     REAL,
            coffee      INT,
            beer_l      REAL,
            alcool_cl   REAL,
            wine_cl     REAL,
            soda_l      REAL,
            soiree      INTEGER,
            soiree_name TEXT,
            wake_time   TEXT,
            sleep_time  TEXT,
            sleep_hours REAL,
            ran         INTEGER,
            run_km      REAL,
            weight      REAL
        );
        ",
    )
    .context("failed to initialize schema")?;

    Ok(())
}
