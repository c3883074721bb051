use chrono::NaiveDate;
use reparto_domain::{Money, SettlementError};
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Failure reported by an [`ExpenseStore`](crate::ExpenseStore) backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("expense storage is unavailable")]
    Unavailable(#[source] BoxError),
    #[error("stored expenses could not be decoded")]
    Corrupt(#[source] BoxError),
}

impl StoreError {
    pub fn unavailable(err: impl Into<BoxError>) -> Self {
        StoreError::Unavailable(err.into())
    }

    pub fn corrupt(err: impl Into<BoxError>) -> Self {
        StoreError::Corrupt(err.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpenseValidationError {
    #[error("expense title must not be empty")]
    EmptyTitle,
    #[error("expense amount must be greater than zero (got {0})")]
    NonPositiveAmount(Money),
    #[error("payer '{0}' is not a member of the group")]
    UnknownPayer(String),
    #[error("participant '{0}' is not a member of the group")]
    UnknownParticipant(String),
    #[error("participant '{0}' is listed more than once")]
    DuplicateParticipant(String),
    #[error("adding {0} would push the group's total past the supported range")]
    TotalOutOfRange(Money),
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ExpenseValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Settlement(#[from] SettlementError),
    #[error("period start {start} is after period end {end}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },
}
