use crate::text_table::{Alignment, TextTableBuilder};
use reparto_application::ExpenseRecord;
use reparto_domain::Money;
use reparto_i18n as i18n;
use std::{borrow::Cow, fmt::Write as _};

pub struct ExpensePresenter;

impl ExpensePresenter {
    pub fn render(expenses: &[ExpenseRecord]) -> String {
        let mut out = String::with_capacity(512);
        let _ = writeln!(out, "{}", i18n::EXPENSES_HEADING);

        if expenses.is_empty() {
            let _ = writeln!(out, "{}", i18n::NO_EXPENSES);
            return out;
        }

        if let Some(total) = Money::checked_sum(expenses.iter().map(|record| record.amount)) {
            let _ = writeln!(out, "{}: ${total}", i18n::TOTAL);
        }
        out.push('\n');
        out.push_str(&Self::build_expense_table(expenses));
        out
    }

    pub fn render_detail(record: &ExpenseRecord) -> String {
        let participants = if record.participants.is_empty() {
            Cow::Borrowed(i18n::EVERYONE)
        } else {
            Cow::Owned(record.participants.join(", "))
        };

        let mut out = String::with_capacity(256);
        let _ = writeln!(out, "{}", i18n::EXPENSE_HEADING);
        let _ = writeln!(out, "{}: {}", i18n::TITLE, record.title);
        let _ = writeln!(out, "{}: ${}", i18n::AMOUNT, record.amount);
        let _ = writeln!(out, "{}: {}", i18n::PAYER, record.payer);
        let _ = writeln!(out, "{}: {participants}", i18n::PARTICIPANTS);
        let _ = writeln!(out, "{}: {}", i18n::DATE, record.day());
        let _ = writeln!(
            out,
            "{}: {}",
            i18n::RECEIPT,
            record.receipt_uri.as_deref().unwrap_or(i18n::NO_RECEIPT)
        );
        let _ = writeln!(out, "{}: {}", i18n::ID, record.id);
        out
    }

    /// Lists the records that carry a receipt; others are skipped.
    pub fn render_receipts(expenses: &[ExpenseRecord]) -> String {
        let with_receipt: Vec<(&ExpenseRecord, &str)> = expenses
            .iter()
            .filter_map(|record| Some((record, record.receipt_uri.as_deref()?)))
            .collect();

        let mut out = String::with_capacity(512);
        let _ = writeln!(out, "{}", i18n::RECEIPTS_HEADING);
        if with_receipt.is_empty() {
            let _ = writeln!(out, "{}", i18n::NO_RECEIPTS);
            return out;
        }
        let _ = writeln!(out, "{}", i18n::receipt_count(with_receipt.len()));
        out.push('\n');

        let headers = [
            Cow::Borrowed(i18n::TITLE),
            Cow::Borrowed(i18n::DATE),
            Cow::Borrowed(i18n::AMOUNT),
            Cow::Borrowed(i18n::RECEIPT),
        ];
        let table = TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Left,
                Alignment::Right,
                Alignment::Left,
            ])
            .headers(&headers)
            .rows(with_receipt.iter().map(|&(record, receipt)| {
                [
                    Cow::Borrowed(record.title.as_str()),
                    Cow::Owned(record.day().to_string()),
                    Cow::Owned(format!("${}", record.amount)),
                    Cow::Borrowed(receipt),
                ]
            }))
            .build();
        out.push_str(&table);
        out
    }

    pub fn build_expense_table(expenses: &[ExpenseRecord]) -> String {
        let headers = [
            Cow::Borrowed(i18n::TITLE),
            Cow::Borrowed(i18n::PAYER),
            Cow::Borrowed(i18n::AMOUNT),
            Cow::Borrowed(i18n::DATE),
            Cow::Borrowed(i18n::ID),
        ];
        TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Left,
                Alignment::Right,
                Alignment::Left,
                Alignment::Left,
            ])
            .headers(&headers)
            .rows(expenses.iter().map(|record| {
                [
                    Cow::Borrowed(record.title.as_str()),
                    Cow::Borrowed(record.payer.as_str()),
                    Cow::Owned(format!("${}", record.amount)),
                    Cow::Owned(record.day().to_string()),
                    Cow::Owned(record.id.to_string()),
                ]
            }))
            .build()
    }
}
