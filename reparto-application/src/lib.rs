#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod ledger;
pub mod model;
pub mod ports;
pub mod report;

pub use error::{ExpenseValidationError, LedgerError, StoreError};
pub use ledger::LedgerService;
pub use model::{ExpenseRecord, MemberBalance, NewExpense, PendingTransfer, SettlementReport};
pub use ports::{ExpenseStore, ReportRenderer};
pub use report::{CategoryTotal, ExpenseCategory, PeriodSummary};
