use crate::{
    error::StoreError,
    model::{ExpenseRecord, SettlementReport},
    report::PeriodSummary,
};
use uuid::Uuid;

/// Persisted, id-keyed list of expenses.
pub trait ExpenseStore: Send {
    /// All records, newest first.
    fn list(&self) -> Result<Vec<ExpenseRecord>, StoreError>;

    /// Adds a record in front of the existing ones.
    fn insert(&mut self, record: ExpenseRecord) -> Result<(), StoreError>;

    /// Deletes the record with `id`. Returns `false` when there was none.
    fn remove(&mut self, id: Uuid) -> Result<bool, StoreError>;
}

/// Turns ledger results into something a person can read.
pub trait ReportRenderer: Send + Sync {
    fn render_settlement(&self, report: &SettlementReport) -> String;

    fn render_expenses(&self, expenses: &[ExpenseRecord]) -> String;

    /// Every stored field of one record, receipt included.
    fn render_expense(&self, expense: &ExpenseRecord) -> String;

    /// Records that carry a receipt.
    fn render_receipts(&self, expenses: &[ExpenseRecord]) -> String;

    fn render_period(&self, summary: &PeriodSummary) -> String;
}
