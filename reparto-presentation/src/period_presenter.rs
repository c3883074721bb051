use crate::{
    expense_presenter::ExpensePresenter,
    text_table::{Alignment, TextTableBuilder},
};
use reparto_application::{CategoryTotal, ExpenseCategory, PeriodSummary};
use reparto_i18n as i18n;
use std::{borrow::Cow, fmt::Write as _};

pub struct PeriodPresenter;

impl PeriodPresenter {
    pub fn render(summary: &PeriodSummary) -> String {
        let mut out = String::with_capacity(1024);

        let _ = writeln!(out, "{}", i18n::PERIOD_HEADING);
        let _ = writeln!(out, "{}", i18n::period(summary.start, summary.end));
        let _ = writeln!(out, "{}: ${}", i18n::TOTAL, summary.total);
        let _ = writeln!(out, "{}: {}", i18n::DAYS, summary.days);
        let _ = writeln!(out, "{}: ${}", i18n::DAILY_AVERAGE, summary.daily_average);

        out.push('\n');
        let _ = writeln!(out, "{}", i18n::CATEGORIES_HEADING);
        out.push_str(&Self::build_category_table(&summary.categories));

        out.push('\n');
        if summary.expenses.is_empty() {
            let _ = writeln!(out, "{}", i18n::NO_EXPENSES);
        } else {
            out.push_str(&ExpensePresenter::build_expense_table(&summary.expenses));
        }

        out
    }

    pub fn build_category_table(categories: &[CategoryTotal]) -> String {
        let headers = [
            Cow::Borrowed(i18n::CATEGORY),
            Cow::Borrowed(i18n::COUNT),
            Cow::Borrowed(i18n::AMOUNT),
        ];
        TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right, Alignment::Right])
            .headers(&headers)
            .rows(categories.iter().map(|entry| {
                [
                    Cow::Borrowed(category_label(entry.category)),
                    Cow::Owned(entry.count.to_string()),
                    Cow::Owned(format!("${}", entry.total)),
                ]
            }))
            .build()
    }
}

pub fn category_label(category: ExpenseCategory) -> &'static str {
    match category {
        ExpenseCategory::Food => i18n::CATEGORY_FOOD,
        ExpenseCategory::Restaurants => i18n::CATEGORY_RESTAURANTS,
        ExpenseCategory::Transport => i18n::CATEGORY_TRANSPORT,
        ExpenseCategory::Other => i18n::CATEGORY_OTHER,
    }
}
