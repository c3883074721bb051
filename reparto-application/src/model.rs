use chrono::{DateTime, NaiveDate, Utc};
use reparto_domain::{Expense, Money, Settlement};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted expense.
///
/// Field names follow the camelCase layout of the stored JSON blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub title: String,
    pub amount: Money,
    pub payer: String,
    #[serde(default)]
    pub participants: Vec<String>,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_uri: Option<String>,
}

impl ExpenseRecord {
    /// Borrowed view used by the settlement services.
    pub fn as_expense(&self) -> Expense<'_> {
        Expense::new(self.amount, &self.payer)
            .with_participants(self.participants.iter().map(String::as_str))
    }

    /// Calendar day of the expense in UTC.
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

/// An expense as entered, before it gets an id and a timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub title: String,
    pub amount: Money,
    pub payer: String,
    pub participants: Vec<String>,
    pub receipt_uri: Option<String>,
}

impl NewExpense {
    pub fn new(title: impl Into<String>, amount: Money, payer: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            amount,
            payer: payer.into(),
            participants: Vec::new(),
            receipt_uri: None,
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_receipt(mut self, receipt_uri: impl Into<String>) -> Self {
        self.receipt_uri = Some(receipt_uri.into());
        self
    }

    pub(crate) fn into_record(self, id: Uuid, date: DateTime<Utc>) -> ExpenseRecord {
        ExpenseRecord {
            id,
            title: self.title.trim().to_string(),
            amount: self.amount,
            payer: self.payer,
            participants: self.participants,
            date,
            receipt_uri: self.receipt_uri,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberBalance {
    pub member: String,
    pub paid: Money,
    /// Positive: the member is owed money. Negative: the member owes money.
    pub balance: Money,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransfer {
    pub from: String,
    pub to: String,
    pub amount: Money,
}

/// Owned snapshot of a settlement, ready to hand to a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementReport {
    pub total: Money,
    pub share: Money,
    pub members: Vec<MemberBalance>,
    pub transfers: Vec<PendingTransfer>,
}

impl SettlementReport {
    pub fn is_settled(&self) -> bool {
        self.transfers.is_empty()
    }
}

impl From<&Settlement<'_>> for SettlementReport {
    fn from(settlement: &Settlement<'_>) -> Self {
        let members = settlement
            .balances
            .iter()
            .map(|(&member, &balance)| MemberBalance {
                member: member.to_string(),
                paid: settlement
                    .paid
                    .get(member)
                    .copied()
                    .unwrap_or(Money::ZERO),
                balance,
            })
            .collect();

        let transfers = settlement
            .transfers
            .iter()
            .map(|transfer| PendingTransfer {
                from: transfer.from.to_string(),
                to: transfer.to.to_string(),
                amount: transfer.amount,
            })
            .collect();

        Self {
            total: settlement.total,
            share: settlement.share,
            members,
            transfers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_record() -> ExpenseRecord {
        NewExpense::new("  Cena  ", Money::from_cents(4550), "María")
            .with_participants(["María", "Pedro"])
            .with_receipt("file:///recibos/cena.jpg")
            .into_record(
                Uuid::nil(),
                Utc.with_ymd_and_hms(2025, 10, 3, 21, 30, 0).unwrap(),
            )
    }

    #[test]
    fn into_record_trims_title() {
        assert_eq!(sample_record().title, "Cena");
    }

    #[test]
    fn record_uses_camel_case_json() {
        let json = serde_json::to_value(sample_record()).unwrap();

        assert_eq!(json["amount"], "45.50");
        assert_eq!(json["receiptUri"], "file:///recibos/cena.jpg");
        assert_eq!(json["participants"][1], "Pedro");
    }

    #[test]
    fn record_accepts_numeric_amounts_and_missing_optionals() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000000",
            "title": "Uber",
            "amount": 12.5,
            "payer": "Juan",
            "date": "2025-10-05T08:00:00Z"
        }"#;

        let record: ExpenseRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.amount, Money::from_cents(1250));
        assert!(record.participants.is_empty());
        assert_eq!(record.receipt_uri, None);
    }

    #[test]
    fn as_expense_borrows_payer_and_participants() {
        let record = sample_record();
        let expense = record.as_expense();

        assert_eq!(expense.payer, "María");
        assert_eq!(expense.participants, ["María", "Pedro"]);
        assert_eq!(expense.amount, Money::from_cents(4550));
    }
}
