use crate::{
    expense_presenter::ExpensePresenter, period_presenter::PeriodPresenter,
    settlement_presenter::SettlementPresenter,
};
use reparto_application::{ExpenseRecord, PeriodSummary, ReportRenderer, SettlementReport};

/// Plain-text tables for terminals and logs.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextReportRenderer;

impl ReportRenderer for TextReportRenderer {
    fn render_settlement(&self, report: &SettlementReport) -> String {
        SettlementPresenter::render(report)
    }

    fn render_expenses(&self, expenses: &[ExpenseRecord]) -> String {
        ExpensePresenter::render(expenses)
    }

    fn render_expense(&self, expense: &ExpenseRecord) -> String {
        ExpensePresenter::render_detail(expense)
    }

    fn render_receipts(&self, expenses: &[ExpenseRecord]) -> String {
        ExpensePresenter::render_receipts(expenses)
    }

    fn render_period(&self, summary: &PeriodSummary) -> String {
        PeriodPresenter::render(summary)
    }
}
