use crate::{
    error::SettlementError,
    model::{Expense, MemberBalances, MemberRoster, Money, Settlement, SplitPolicy, Transfer},
    services::BalanceCalculator,
};

/// Settlement calculation service
#[derive(Clone, Copy, Debug, Default)]
pub struct SettlementCalculator {
    balances: BalanceCalculator,
}

impl SettlementCalculator {
    pub fn with_policy(policy: SplitPolicy) -> Self {
        Self {
            balances: BalanceCalculator::new(policy),
        }
    }

    pub fn policy(&self) -> SplitPolicy {
        self.balances.policy()
    }

    /// Calculate balances and the transfers that settle them.
    ///
    /// Pure: identical input always yields identical output.
    ///
    /// # Arguments
    /// * `expenses` - Expenses to settle, in any order
    /// * `roster` - The closed member set; balances are keyed by its names
    ///
    /// # Returns
    /// Per-member paid amounts and balances (roster order) and a transfer list
    /// that brings every balance to zero. The list is empty when nothing is owed.
    pub fn calculate<'r>(
        &self,
        expenses: &[Expense<'_>],
        roster: &'r MemberRoster,
    ) -> Result<Settlement<'r>, SettlementError> {
        let sheet = self.balances.calculate(expenses, roster)?;
        let transfers = Self::match_transfers(&sheet.balances);

        tracing::debug!(
            member_count = roster.len(),
            expense_count = expenses.len(),
            transfer_count = transfers.len(),
            total = %sheet.total,
            policy = %self.policy(),
            "Settlement calculated"
        );

        let settlement = Settlement {
            total: sheet.total,
            share: sheet.share,
            paid: sheet.paid,
            balances: sheet.balances,
            transfers,
        };
        debug_assert!(
            settlement
                .balances_after_transfers()
                .values()
                .all(|balance| balance.is_zero())
        );

        Ok(settlement)
    }

    /// Pairs debtors with creditors greedily.
    ///
    /// Both sides keep the order of `balances`. Each step moves
    /// `min(owed, due)` from the first open debtor to the first open creditor
    /// and closes whichever side reaches zero, so a zero-sum table is settled in
    /// at most `debtors + creditors - 1` transfers. This does not search for the
    /// fewest possible transfers.
    pub fn match_transfers<'a>(balances: &MemberBalances<'a>) -> Vec<Transfer<'a>> {
        let mut debtors: Vec<(&'a str, Money)> = balances
            .iter()
            .filter(|(_, balance)| balance.is_negative())
            .map(|(&member, &balance)| (member, -balance))
            .collect();
        let mut creditors: Vec<(&'a str, Money)> = balances
            .iter()
            .filter(|(_, balance)| balance.is_positive())
            .map(|(&member, &balance)| (member, balance))
            .collect();

        let mut transfers = Vec::with_capacity(debtors.len() + creditors.len());
        let (mut debtor_idx, mut creditor_idx) = (0, 0);

        while debtor_idx < debtors.len() && creditor_idx < creditors.len() {
            let (from, owed) = debtors[debtor_idx];
            let (to, due) = creditors[creditor_idx];
            let amount = owed.min(due);

            transfers.push(Transfer { from, to, amount });
            debtors[debtor_idx].1 -= amount;
            creditors[creditor_idx].1 -= amount;

            if debtors[debtor_idx].1.is_zero() {
                debtor_idx += 1;
            }
            if creditors[creditor_idx].1.is_zero() {
                creditor_idx += 1;
            }
        }

        transfers
    }
}
