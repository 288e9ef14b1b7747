use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::domain::column_map::CANONICAL_FIELDS;
use crate::domain::entities::entry::JournalEntry;
use crate::usecase::ports::repo::JournalRepository;

/// Shortest text that parses back to the same `f64`.
fn number(value: f64) -> String {
    value.to_string()
}

fn optional_number(value: Option<f64>) -> String {
    value.map(number).unwrap_or_default()
}

fn flag(value: bool) -> String {
    let text = if value { "1" } else { "0" };
    text.to_string()
}

/// One CSV record in [`CANONICAL_FIELDS`] order; nulls become empty cells.
pub fn entry_record(entry: &JournalEntry) -> Vec<String> {
    vec![
        entry.date.format("%Y-%m-%d").to_string(),
        entry.day_name.clone(),
        optional_number(entry.nico),
        number(entry.water_l),
        entry.coffee.to_string(),
        number(entry.beer_l),
        number(entry.alcool_cl),
        number(entry.wine_cl),
        number(entry.soda_l),
        flag(entry.soiree),
        entry.soiree_name.clone().unwrap_or_default(),
        entry.wake_time.clone().unwrap_or_default(),
        entry.sleep_time.clone().unwrap_or_default(),
        number(entry.sleep_hours),
        flag(entry.ran),
        number(entry.run_km),
        optional_number(entry.weight),
    ]
}

pub struct ExportService {
    repo: Arc<dyn JournalRepository>,
}

impl ExportService {
    pub fn new(repo: Arc<dyn JournalRepository>) -> Self {
        Self { repo }
    }

    /// Writes the whole journal, ascending by date, with canonical headers.
    /// Returns the number of data rows written.
    pub fn export_csv<W: Write>(&self, out: W) -> Result<usize> {
        let entries = self.repo.scan_all()?;

        let mut writer = csv::Writer::from_writer(out);
        writer
            .write_record(CANONICAL_FIELDS)
            .context("failed to write csv header")?;
        for entry in &entries {
            writer
                .write_record(entry_record(entry))
                .with_context(|| format!("failed to write csv row for {}", entry.date))?;
        }
        writer.flush().context("failed to flush csv export")?;

        tracing::info!(rows = entries.len(), "export finished");
        Ok(entries.len())
    }

    pub fn export_csv_path(&self, path: &Path) -> Result<usize> {
        let file = File::create(path)
            .with_context(|| format!("failed to create csv: {}", path.display()))?;
        self.export_csv(file)
    }
}
