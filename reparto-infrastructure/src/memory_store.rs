use reparto_application::{ExpenseRecord, ExpenseStore, StoreError};
use uuid::Uuid;

/// Volatile store, mostly for tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct InMemoryExpenseStore {
    records: Vec<ExpenseRecord>,
}

impl InMemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store; `records` must already be newest first.
    pub fn with_records(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ExpenseStore for InMemoryExpenseStore {
    fn list(&self) -> Result<Vec<ExpenseRecord>, StoreError> {
        Ok(self.records.clone())
    }

    fn insert(&mut self, record: ExpenseRecord) -> Result<(), StoreError> {
        self.records.insert(0, record);
        Ok(())
    }

    fn remove(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        Ok(self.records.len() != before)
    }
}
