use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use indexmap::IndexMap;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, RosterError, SettlementError};

/// Number of decimal places carried by [`Money`].
pub const MONEY_SCALE: u32 = 2;

/// Balance table in roster order.
pub type MemberBalances<'a> = IndexMap<&'a str, Money>;

/// Fixed-point amount in minor units (cents).
///
/// Arithmetic is exact; decimal values are rounded half away from zero to two
/// places when they enter the type.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(i64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Whole currency units, e.g. `Money::from_major(30)` is `30.00`.
    pub fn from_major(units: i64) -> Self {
        Self(units.saturating_mul(10_i64.pow(MONEY_SCALE)))
    }

    pub fn from_decimal(value: Decimal) -> Result<Self, MoneyError> {
        let rounded =
            value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .map(Self)
            .ok_or(MoneyError::OutOfRange(value))
    }

    pub fn as_decimal(self) -> Decimal {
        Decimal::new(self.0, MONEY_SCALE)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn signum(self) -> i64 {
        self.0.signum()
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    pub fn checked_neg(self) -> Option<Self> {
        self.0.checked_neg().map(Self)
    }

    /// Sum of `amounts`, or `None` as soon as a partial sum leaves the `i64`
    /// cent range.
    pub fn checked_sum<I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, |acc, amount| acc.checked_add(amount))
    }

    /// Divides by `parts`, rounding half away from zero to the nearest cent.
    ///
    /// Returns `None` when `parts` is zero.
    pub fn div_rounded(self, parts: usize) -> Option<Self> {
        if parts == 0 {
            return None;
        }
        let quotient = self.as_decimal() / Decimal::from(parts as u64);
        Self::from_decimal(quotient).ok()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_decimal())
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim()).map_err(|_| MoneyError::Invalid(s.to_string()))?;
        Self::from_decimal(value)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.as_decimal()
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// The closed set of people sharing expenses. Order is significant: it drives
/// balance table order and which members absorb leftover cents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberRoster {
    members: Vec<String>,
}

impl MemberRoster {
    pub fn try_new<I, S>(members: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut validated: Vec<String> = Vec::new();
        for member in members {
            let member: String = member.into();
            let name = member.trim();
            if name.is_empty() {
                return Err(RosterError::BlankName);
            }
            if validated.iter().any(|existing| existing == name) {
                return Err(RosterError::Duplicate(name.to_string()));
            }
            validated.push(name.to_string());
        }

        if validated.is_empty() {
            return Err(RosterError::Empty);
        }

        Ok(Self { members: validated })
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.members.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Returns the roster's own copy of `name`, so results can borrow from the
    /// roster rather than from the caller's input.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.iter().find(|member| *member == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.iter().position(|member| member == name)
    }

    /// A balance table with every member at zero.
    pub fn zero_balances(&self) -> MemberBalances<'_> {
        self.iter().map(|member| (member, Money::ZERO)).collect()
    }
}

/// How an expense is divided between members.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitPolicy {
    /// Every expense is shared by the whole roster.
    #[default]
    Roster,
    /// Every expense is shared by its listed participants, or by the whole
    /// roster when it lists none.
    Participants,
}

impl SplitPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            SplitPolicy::Roster => "roster",
            SplitPolicy::Participants => "participants",
        }
    }
}

impl fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplitPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "roster" | "all" => Ok(SplitPolicy::Roster),
            "participants" => Ok(SplitPolicy::Participants),
            other => Err(format!(
                "unknown split policy '{other}' (expected 'roster' or 'participants')"
            )),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense<'a> {
    pub amount: Money,
    pub payer: &'a str,
    /// Only read under [`SplitPolicy::Participants`].
    pub participants: Vec<&'a str>,
}

impl<'a> Expense<'a> {
    pub fn new(amount: Money, payer: &'a str) -> Self {
        Self {
            amount,
            payer,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.participants = participants.into_iter().collect();
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub amount: Money,
}

/// Per-member totals before any transfer is proposed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalanceSheet<'a> {
    pub total: Money,
    /// Nominal per-member share (`total / members`, rounded to cents).
    pub share: Money,
    pub paid: MemberBalances<'a>,
    pub balances: MemberBalances<'a>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement<'a> {
    pub total: Money,
    pub share: Money,
    pub paid: MemberBalances<'a>,
    pub balances: MemberBalances<'a>,
    pub transfers: Vec<Transfer<'a>>,
}

impl<'a> Settlement<'a> {
    /// Balances after applying every transfer; all zero for a complete settlement.
    pub fn balances_after_transfers(&self) -> MemberBalances<'a> {
        let mut remaining = self.balances.clone();
        for transfer in &self.transfers {
            if let Some(balance) = remaining.get_mut(transfer.from) {
                *balance += transfer.amount;
            }
            if let Some(balance) = remaining.get_mut(transfer.to) {
                *balance -= transfer.amount;
            }
        }
        remaining
    }
}

/// Splits `amount` evenly over `members`, subtracting each share from
/// `balances`. Leftover cents go one each to the first members.
///
/// # Errors
/// [`SettlementError::Overflow`] when a balance leaves the `i64` cent range.
pub fn distribute_share<'a>(
    balances: &mut MemberBalances<'a>,
    members: &[&'a str],
    amount: Money,
) -> Result<(), SettlementError> {
    if members.is_empty() {
        return Ok(());
    }

    let member_count = members.len() as i64;
    let total = amount.cents();
    let base = total / member_count;
    let remainder = (total % member_count).unsigned_abs() as usize;
    let step = total.signum();

    for (idx, &member) in members.iter().enumerate() {
        let mut share = base;
        if idx < remainder {
            share += step;
        }
        let balance = balances.entry(member).or_insert(Money::ZERO);
        *balance = balance
            .checked_sub(Money::from_cents(share))
            .ok_or(SettlementError::Overflow)?;
    }

    Ok(())
}
