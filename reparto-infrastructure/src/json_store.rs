use reparto_application::{ExpenseRecord, ExpenseStore, StoreError};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use uuid::Uuid;

pub const DEFAULT_STORE_FILE: &str = "expenses_storage_v1.json";

/// Keeps the whole expense list as one JSON array in a file.
///
/// The file is read once on [`open`](Self::open); every mutation rewrites it
/// through a temporary sibling and a rename, so a crash leaves either the old
/// or the new list on disk. The in-memory copy only changes once the write
/// succeeded.
#[derive(Debug)]
pub struct JsonFileExpenseStore {
    path: PathBuf,
    records: Vec<ExpenseRecord>,
}

impl JsonFileExpenseStore {
    /// Opens `path`; a missing or blank file is an empty list.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records: Vec<ExpenseRecord> = match fs::read(&path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|err| {
                tracing::error!(path = %path.display(), error = %err, "Expense file is corrupt");
                StoreError::corrupt(err)
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(StoreError::unavailable(err)),
        };

        tracing::debug!(
            path = %path.display(),
            record_count = records.len(),
            "Expense store opened"
        );

        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, records: &[ExpenseRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            fs::create_dir_all(parent).map_err(StoreError::unavailable)?;
        }

        let json = serde_json::to_vec_pretty(records).map_err(StoreError::corrupt)?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, json).map_err(StoreError::unavailable)?;
        fs::rename(&staging, &self.path).map_err(StoreError::unavailable)?;

        tracing::debug!(
            path = %self.path.display(),
            record_count = records.len(),
            "Expense store written"
        );
        Ok(())
    }
}

impl ExpenseStore for JsonFileExpenseStore {
    fn list(&self) -> Result<Vec<ExpenseRecord>, StoreError> {
        Ok(self.records.clone())
    }

    fn insert(&mut self, record: ExpenseRecord) -> Result<(), StoreError> {
        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.push(record);
        records.extend(self.records.iter().cloned());

        self.persist(&records)?;
        self.records = records;
        Ok(())
    }

    fn remove(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let Some(position) = self.records.iter().position(|record| record.id == id) else {
            return Ok(false);
        };

        let mut records = self.records.clone();
        records.remove(position);

        self.persist(&records)?;
        self.records = records;
        Ok(true)
    }
}
