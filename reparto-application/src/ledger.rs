use crate::{
    error::{ExpenseValidationError, LedgerError},
    model::{ExpenseRecord, NewExpense, SettlementReport},
    ports::ExpenseStore,
    report::PeriodSummary,
};
use chrono::{DateTime, NaiveDate, Utc};
use fxhash::FxHashSet;
use reparto_domain::{Expense, MemberRoster, Money, SettlementCalculator, SplitPolicy};
use uuid::Uuid;

/// Expense bookkeeping for one group: validates input, keeps the store, and
/// derives settlements from whatever the store currently holds.
pub struct LedgerService<S> {
    roster: MemberRoster,
    calculator: SettlementCalculator,
    store: S,
}

impl<S: ExpenseStore> LedgerService<S> {
    pub fn new(roster: MemberRoster, policy: SplitPolicy, store: S) -> Self {
        Self {
            roster,
            calculator: SettlementCalculator::with_policy(policy),
            store,
        }
    }

    pub fn roster(&self) -> &MemberRoster {
        &self.roster
    }

    pub fn policy(&self) -> SplitPolicy {
        self.calculator.policy()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn add_expense(&mut self, expense: NewExpense) -> Result<ExpenseRecord, LedgerError> {
        self.add_expense_at(expense, Utc::now())
    }

    pub fn add_expense_at(
        &mut self,
        expense: NewExpense,
        date: DateTime<Utc>,
    ) -> Result<ExpenseRecord, LedgerError> {
        self.validate(&expense)?;

        let stored = self.store.list()?;
        let amounts = stored.iter().map(|record| record.amount);
        if Money::checked_sum(amounts.chain([expense.amount])).is_none() {
            return Err(ExpenseValidationError::TotalOutOfRange(expense.amount).into());
        }

        let record = expense.into_record(Uuid::new_v4(), date);
        self.store.insert(record.clone())?;

        tracing::info!(
            id = %record.id,
            payer = %record.payer,
            amount = %record.amount,
            participant_count = record.participants.len(),
            "Expense recorded"
        );

        Ok(record)
    }

    pub fn remove_expense(&mut self, id: Uuid) -> Result<bool, LedgerError> {
        let removed = self.store.remove(id)?;
        if removed {
            tracing::info!(%id, "Expense removed");
        } else {
            tracing::warn!(%id, "No expense with this id");
        }
        Ok(removed)
    }

    pub fn expenses(&self) -> Result<Vec<ExpenseRecord>, LedgerError> {
        Ok(self.store.list()?)
    }

    /// The stored record with this id, if any.
    pub fn expense(&self, id: Uuid) -> Result<Option<ExpenseRecord>, LedgerError> {
        let records = self.store.list()?;
        Ok(records.into_iter().find(|record| record.id == id))
    }

    /// Records with a receipt attached, newest first.
    pub fn receipts(&self) -> Result<Vec<ExpenseRecord>, LedgerError> {
        let mut records = self.store.list()?;
        records.retain(|record| record.receipt_uri.is_some());
        Ok(records)
    }

    /// Balances and transfers for everything currently in the store.
    pub fn settlement(&self) -> Result<SettlementReport, LedgerError> {
        let records = self.store.list()?;
        self.settle_records(&records)
    }

    /// Balances and transfers for an explicit list of records.
    pub fn settle_records(
        &self,
        records: &[ExpenseRecord],
    ) -> Result<SettlementReport, LedgerError> {
        let expenses: Vec<Expense<'_>> = records.iter().map(ExpenseRecord::as_expense).collect();
        let settlement = self.calculator.calculate(&expenses, &self.roster)?;
        Ok(SettlementReport::from(&settlement))
    }

    /// Spending between `start` and `end`, both days included.
    pub fn period_summary(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PeriodSummary, LedgerError> {
        if start > end {
            return Err(LedgerError::InvalidPeriod { start, end });
        }
        let records = self.store.list()?;
        Ok(PeriodSummary::build(start, end, records)?)
    }

    fn validate(&self, expense: &NewExpense) -> Result<(), ExpenseValidationError> {
        if expense.title.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyTitle);
        }
        if !expense.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(expense.amount));
        }
        if !self.roster.contains(&expense.payer) {
            return Err(ExpenseValidationError::UnknownPayer(expense.payer.clone()));
        }

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for participant in &expense.participants {
            if !self.roster.contains(participant) {
                return Err(ExpenseValidationError::UnknownParticipant(
                    participant.clone(),
                ));
            }
            if !seen.insert(participant.as_str()) {
                return Err(ExpenseValidationError::DuplicateParticipant(
                    participant.clone(),
                ));
            }
        }

        Ok(())
    }
}
