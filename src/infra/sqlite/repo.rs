use std::path::PathBuf;

use chrono::NaiveDate;

use crate::domain::entities::entry::JournalEntry;
use crate::infra::sqlite::queries::{get_entry, load_all, upsert_entry};
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::repo::{JournalRepository, RepoError};

/// Opens a fresh connection per call; every `put` commits on its own.
pub struct SqliteRepo {
    pub db_path: PathBuf,
}

impl SqliteRepo {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

impl JournalRepository for SqliteRepo {
    fn init(&self) -> Result<(), RepoError> {
        init_db(&self.db_path).map_err(RepoError::from)
    }

    fn get(&self, date: NaiveDate) -> Result<Option<JournalEntry>, RepoError> {
        get_entry(&self.db_path, date).map_err(RepoError::from)
    }

    fn put(&self, entry: &JournalEntry) -> Result<(), RepoError> {
        upsert_entry(&self.db_path, entry).map_err(RepoError::from)
    }

    fn scan_all(&self) -> Result<Vec<JournalEntry>, RepoError> {
        load_all(&self.db_path).map_err(RepoError::from)
    }
}
