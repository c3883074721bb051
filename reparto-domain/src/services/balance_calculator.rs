use crate::{
    error::SettlementError,
    model::{BalanceSheet, Expense, MemberRoster, Money, SplitPolicy, distribute_share},
};
use fxhash::FxHashSet;

/// Computes what each member paid and how far that is from their share.
#[derive(Clone, Copy, Debug, Default)]
pub struct BalanceCalculator {
    policy: SplitPolicy,
}

impl BalanceCalculator {
    pub fn new(policy: SplitPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SplitPolicy {
        self.policy
    }

    /// Builds the balance sheet for `expenses` over `roster`.
    ///
    /// Every member appears in the result, in roster order, including members
    /// who never paid. Balances sum to exactly zero.
    ///
    /// # Errors
    /// * [`SettlementError::InvalidPayer`] for the first payer outside the roster
    /// * [`SettlementError::InvalidParticipant`] for an unknown participant,
    ///   only under [`SplitPolicy::Participants`]
    /// * [`SettlementError::Overflow`] when a total or balance leaves the `i64`
    ///   cent range
    pub fn calculate<'r>(
        &self,
        expenses: &[Expense<'_>],
        roster: &'r MemberRoster,
    ) -> Result<BalanceSheet<'r>, SettlementError> {
        let everyone: Vec<&'r str> = roster.iter().collect();
        let mut paid = roster.zero_balances();
        let mut balances = roster.zero_balances();
        let mut total = Money::ZERO;

        for expense in expenses {
            let payer = roster
                .resolve(expense.payer)
                .ok_or_else(|| SettlementError::InvalidPayer(expense.payer.to_string()))?;

            let paid_by_payer = paid.entry(payer).or_insert(Money::ZERO);
            *paid_by_payer = paid_by_payer
                .checked_add(expense.amount)
                .ok_or(SettlementError::Overflow)?;
            total = total
                .checked_add(expense.amount)
                .ok_or(SettlementError::Overflow)?;

            if self.policy == SplitPolicy::Participants {
                let sharers = sharers(expense, roster, &everyone)?;
                distribute_share(&mut balances, &sharers, expense.amount)?;
            }
        }

        if self.policy == SplitPolicy::Roster {
            distribute_share(&mut balances, &everyone, total)?;
        }

        for (&member, &amount) in &paid {
            let balance = balances.entry(member).or_insert(Money::ZERO);
            // Debts are negated when matching transfers, so `i64::MIN` is out too.
            *balance = balance
                .checked_add(amount)
                .and_then(|sum| sum.checked_neg().map(|_| sum))
                .ok_or(SettlementError::Overflow)?;
        }

        debug_assert_eq!(
            balances
                .values()
                .map(|balance| i128::from(balance.cents()))
                .sum::<i128>(),
            0
        );

        Ok(BalanceSheet {
            total,
            share: total.div_rounded(roster.len()).unwrap_or(Money::ZERO),
            paid,
            balances,
        })
    }
}

/// Members sharing `expense`, in roster order.
fn sharers<'r>(
    expense: &Expense<'_>,
    roster: &'r MemberRoster,
    everyone: &[&'r str],
) -> Result<Vec<&'r str>, SettlementError> {
    if expense.participants.is_empty() {
        return Ok(everyone.to_vec());
    }

    let mut listed: FxHashSet<&'r str> = FxHashSet::default();
    for name in &expense.participants {
        let member = roster
            .resolve(name)
            .ok_or_else(|| SettlementError::InvalidParticipant((*name).to_string()))?;
        listed.insert(member);
    }

    Ok(everyone
        .iter()
        .copied()
        .filter(|member| listed.contains(member))
        .collect())
}
