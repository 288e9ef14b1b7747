use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::domain::column_map::map_columns;
use crate::domain::entities::language::Language;
use crate::domain::entities::table::RawTable;
use crate::domain::normalize::{normalize_rows, NormalizeError};
use crate::infra::import::csv::read_csv_table;
use crate::infra::import::xlsx::read_xlsx_table;
use crate::usecase::ports::repo::{JournalRepository, RepoError};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("no valid 'date' or 'Temps' column found in the table")]
    NoDateColumn,

    #[error("failed to read table: {0:#}")]
    Read(#[from] anyhow::Error),

    #[error("failed to store entry: {0}")]
    Store(#[from] RepoError),
}

impl From<NormalizeError> for ImportError {
    fn from(err: NormalizeError) -> Self {
        match err {
            NormalizeError::NoDateColumn => ImportError::NoDateColumn,
        }
    }
}

/// Column-map, normalize, then upsert row by row. Rows written before a
/// store failure stay committed.
pub struct ImportService {
    repo: Arc<dyn JournalRepository>,
    language: Language,
}

impl ImportService {
    /// Day names missing from the table are derived in French, the
    /// spreadsheet's language.
    pub fn new(repo: Arc<dyn JournalRepository>) -> Self {
        Self {
            repo,
            language: Language::Fr,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn import_table(&self, table: &RawTable) -> Result<usize, ImportError> {
        let mapped = map_columns(table);
        let normalized = normalize_rows(&mapped, self.language)?;
        if normalized.dropped > 0 {
            tracing::warn!(
                dropped = normalized.dropped,
                "skipped rows with an unparseable date"
            );
        }

        let mut written = 0_usize;
        for entry in &normalized.entries {
            self.repo.put(entry)?;
            written += 1;
        }

        tracing::info!(rows = written, "import finished");
        Ok(written)
    }

    pub fn import_csv_reader<R: Read>(&self, input: R) -> Result<usize, ImportError> {
        let table = read_csv_table(input)?;
        tracing::debug!(rows = table.row_count(), columns = table.headers.len(), "read csv table");
        self.import_table(&table)
    }

    pub fn import_csv(&self, path: &Path) -> Result<usize, ImportError> {
        let file = File::open(path).with_context(|| format!("failed to open csv: {}", path.display()))?;
        self.import_csv_reader(file)
    }

    pub fn import_xlsx(&self, path: &Path, sheet: Option<&str>) -> Result<usize, ImportError> {
        let table = read_xlsx_table(path, sheet)?;
        self.import_table(&table)
    }

    /// Dispatches on the file extension; anything that is not a workbook is
    /// read as delimited text.
    pub fn import_path(&self, path: &Path) -> Result<usize, ImportError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "xlsx" | "xlsm" | "xls" | "ods" => self.import_xlsx(path, None),
            _ => self.import_csv(path),
        }
    }
}
