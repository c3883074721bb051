use crate::model::ExpenseRecord;
use chrono::NaiveDate;
use reparto_domain::{Money, SettlementError};

/// Spending category inferred from an expense title.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    Food,
    Restaurants,
    Transport,
    Other,
}

const FOOD_KEYWORDS: &[&str] = &["comida", "supermercado"];
const RESTAURANT_KEYWORDS: &[&str] = &["restaurante", "cena"];
const TRANSPORT_KEYWORDS: &[&str] = &["uber", "transporte"];

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 4] = [
        ExpenseCategory::Food,
        ExpenseCategory::Restaurants,
        ExpenseCategory::Transport,
        ExpenseCategory::Other,
    ];

    /// Case-insensitive keyword match on the title; the first matching
    /// category wins.
    pub fn classify(title: &str) -> Self {
        let title = title.to_lowercase();
        let matches = |keywords: &[&str]| keywords.iter().any(|keyword| title.contains(keyword));

        if matches(FOOD_KEYWORDS) {
            ExpenseCategory::Food
        } else if matches(RESTAURANT_KEYWORDS) {
            ExpenseCategory::Restaurants
        } else if matches(TRANSPORT_KEYWORDS) {
            ExpenseCategory::Transport
        } else {
            ExpenseCategory::Other
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: Money,
    pub count: usize,
}

/// Spending over an inclusive date range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeriodSummary {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub expenses: Vec<ExpenseRecord>,
    pub total: Money,
    /// `end - start` in days, at least one.
    pub days: u32,
    pub daily_average: Money,
    /// One entry per category, in [`ExpenseCategory::ALL`] order.
    pub categories: Vec<CategoryTotal>,
}

impl PeriodSummary {
    /// Callers guarantee `start <= end`.
    pub(crate) fn build(
        start: NaiveDate,
        end: NaiveDate,
        records: Vec<ExpenseRecord>,
    ) -> Result<Self, SettlementError> {
        let expenses: Vec<ExpenseRecord> = records
            .into_iter()
            .filter(|record| (start..=end).contains(&record.day()))
            .collect();

        let total = Money::checked_sum(expenses.iter().map(|record| record.amount))
            .ok_or(SettlementError::Overflow)?;
        let days = u32::try_from((end - start).num_days())
            .unwrap_or(u32::MAX)
            .max(1);
        let daily_average = total.div_rounded(days as usize).unwrap_or(Money::ZERO);

        let mut categories: Vec<CategoryTotal> = ExpenseCategory::ALL
            .into_iter()
            .map(|category| CategoryTotal {
                category,
                total: Money::ZERO,
                count: 0,
            })
            .collect();
        for record in &expenses {
            let category = ExpenseCategory::classify(&record.title);
            if let Some(entry) = categories.iter_mut().find(|entry| entry.category == category) {
                entry.total = entry
                    .total
                    .checked_add(record.amount)
                    .ok_or(SettlementError::Overflow)?;
                entry.count += 1;
            }
        }

        Ok(Self {
            start,
            end,
            expenses,
            total,
            days,
            daily_average,
            categories,
        })
    }

    pub fn category_total(&self, category: ExpenseCategory) -> Money {
        self.categories
            .iter()
            .find(|entry| entry.category == category)
            .map_or(Money::ZERO, |entry| entry.total)
    }
}
