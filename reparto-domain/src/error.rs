use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettlementError {
    #[error("payer '{0}' is not a member of the group")]
    InvalidPayer(String),
    #[error("participant '{0}' is not a member of the group")]
    InvalidParticipant(String),
    #[error("expense amounts add up to more than can be represented")]
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("the group needs at least one member")]
    Empty,
    #[error("member names must not be blank")]
    BlankName,
    #[error("member '{0}' is listed more than once")]
    Duplicate(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    #[error("'{0}' is not a valid amount")]
    Invalid(String),
    #[error("amount {0} is out of range")]
    OutOfRange(Decimal),
}
