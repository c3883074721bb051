#![warn(clippy::uninlined_format_args)]

pub mod expense_presenter;
pub mod period_presenter;
pub mod renderer;
pub mod settlement_presenter;
pub mod text_table;

pub use expense_presenter::ExpensePresenter;
pub use period_presenter::PeriodPresenter;
pub use renderer::TextReportRenderer;
pub use settlement_presenter::SettlementPresenter;
pub use text_table::{Alignment, TextTableBuilder};
