#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod services;

pub use error::{MoneyError, RosterError, SettlementError};
pub use model::{
    BalanceSheet, Expense, MONEY_SCALE, MemberBalances, MemberRoster, Money, Settlement,
    SplitPolicy, Transfer, distribute_share,
};
pub use services::{BalanceCalculator, SettlementCalculator};
