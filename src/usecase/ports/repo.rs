use chrono::NaiveDate;

use crate::domain::entities::entry::JournalEntry;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoError {
    #[error("{0}")]
    Message(String),
}

impl From<anyhow::Error> for RepoError {
    fn from(err: anyhow::Error) -> Self {
        // `{:#}` keeps the context chain on one line.
        RepoError::Message(format!("{err:#}"))
    }
}

/// Store keyed by calendar date. `put` replaces a whole row; there is no
/// delete.
pub trait JournalRepository: Send + Sync {
    fn init(&self) -> Result<(), RepoError>;

    fn get(&self, date: NaiveDate) -> Result<Option<JournalEntry>, RepoError>;
    fn put(&self, entry: &JournalEntry) -> Result<(), RepoError>;
    /// Every entry, ascending by date.
    fn scan_all(&self) -> Result<Vec<JournalEntry>, RepoError>;
}
