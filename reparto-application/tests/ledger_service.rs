use chrono::{NaiveDate, TimeZone, Utc};
use reparto_application::{
    ExpenseCategory, ExpenseRecord, ExpenseStore, ExpenseValidationError, LedgerError,
    LedgerService, NewExpense, StoreError,
};
use reparto_domain::{MemberRoster, Money, SettlementError, SplitPolicy};
use rstest::{fixture, rstest};
use uuid::Uuid;

#[derive(Default)]
struct VecStore {
    records: Vec<ExpenseRecord>,
}

impl ExpenseStore for VecStore {
    fn list(&self) -> Result<Vec<ExpenseRecord>, StoreError> {
        Ok(self.records.clone())
    }

    fn insert(&mut self, record: ExpenseRecord) -> Result<(), StoreError> {
        self.records.insert(0, record);
        Ok(())
    }

    fn remove(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        Ok(self.records.len() != before)
    }
}

struct BrokenStore;

impl ExpenseStore for BrokenStore {
    fn list(&self) -> Result<Vec<ExpenseRecord>, StoreError> {
        Err(StoreError::unavailable("disk unplugged"))
    }

    fn insert(&mut self, _record: ExpenseRecord) -> Result<(), StoreError> {
        Err(StoreError::unavailable("disk unplugged"))
    }

    fn remove(&mut self, _id: Uuid) -> Result<bool, StoreError> {
        Err(StoreError::unavailable("disk unplugged"))
    }
}

#[fixture]
fn ledger() -> LedgerService<VecStore> {
    let roster = MemberRoster::try_new(["Juan", "María", "Pedro"]).unwrap();
    LedgerService::new(roster, SplitPolicy::Roster, VecStore::default())
}

fn money(value: &str) -> Money {
    value.parse().unwrap()
}

#[rstest]
fn added_expenses_are_listed_newest_first(mut ledger: LedgerService<VecStore>) {
    let first = ledger
        .add_expense(NewExpense::new("Supermercado", money("30"), "Juan"))
        .unwrap();
    let second = ledger
        .add_expense(NewExpense::new("Uber", money("12.40"), "Pedro"))
        .unwrap();

    let listed = ledger.expenses().unwrap();

    assert_eq!(listed, vec![second, first]);
}

#[rstest]
#[case::blank_title(
    NewExpense::new("   ", Money::from_major(10), "Juan"),
    ExpenseValidationError::EmptyTitle
)]
#[case::zero_amount(
    NewExpense::new("Cena", Money::ZERO, "Juan"),
    ExpenseValidationError::NonPositiveAmount(Money::ZERO)
)]
#[case::negative_amount(
    NewExpense::new("Cena", Money::from_major(-5), "Juan"),
    ExpenseValidationError::NonPositiveAmount(Money::from_major(-5))
)]
#[case::unknown_payer(
    NewExpense::new("Cena", Money::from_major(10), "Dani"),
    ExpenseValidationError::UnknownPayer("Dani".to_string())
)]
#[case::unknown_participant(
    NewExpense::new("Cena", Money::from_major(10), "Juan").with_participants(["Juan", "Dani"]),
    ExpenseValidationError::UnknownParticipant("Dani".to_string())
)]
#[case::duplicate_participant(
    NewExpense::new("Cena", Money::from_major(10), "Juan").with_participants(["Pedro", "Pedro"]),
    ExpenseValidationError::DuplicateParticipant("Pedro".to_string())
)]
fn invalid_expenses_are_rejected_before_storing(
    mut ledger: LedgerService<VecStore>,
    #[case] expense: NewExpense,
    #[case] expected: ExpenseValidationError,
) {
    match ledger.add_expense(expense) {
        Err(LedgerError::Validation(err)) => assert_eq!(err, expected),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(ledger.expenses().unwrap().is_empty());
}

#[rstest]
fn remove_reports_whether_record_existed(mut ledger: LedgerService<VecStore>) {
    let record = ledger
        .add_expense(NewExpense::new("Cena", money("45"), "María"))
        .unwrap();

    assert!(ledger.remove_expense(record.id).unwrap());
    assert!(!ledger.remove_expense(record.id).unwrap());
    assert!(ledger.expenses().unwrap().is_empty());
}

#[rstest]
fn settlement_matches_single_payer_scenario(mut ledger: LedgerService<VecStore>) {
    ledger
        .add_expense(NewExpense::new("Supermercado", money("90"), "Juan"))
        .unwrap();

    let report = ledger.settlement().unwrap();

    assert_eq!(report.total, money("90"));
    assert_eq!(report.share, money("30"));
    let balances: Vec<(&str, Money, Money)> = report
        .members
        .iter()
        .map(|line| (line.member.as_str(), line.paid, line.balance))
        .collect();
    assert_eq!(
        balances,
        [
            ("Juan", money("90"), money("60")),
            ("María", Money::ZERO, money("-30")),
            ("Pedro", Money::ZERO, money("-30")),
        ]
    );
    let transfers: Vec<(&str, &str, Money)> = report
        .transfers
        .iter()
        .map(|transfer| (transfer.from.as_str(), transfer.to.as_str(), transfer.amount))
        .collect();
    assert_eq!(
        transfers,
        [("María", "Juan", money("30")), ("Pedro", "Juan", money("30"))]
    );
}

#[rstest]
fn empty_ledger_is_settled(ledger: LedgerService<VecStore>) {
    let report = ledger.settlement().unwrap();

    assert!(report.is_settled());
    assert!(report.members.iter().all(|line| line.balance.is_zero()));
}

#[test]
fn participants_policy_changes_the_split() {
    let roster = MemberRoster::try_new(["Juan", "María", "Pedro"]).unwrap();
    let mut ledger = LedgerService::new(roster, SplitPolicy::Participants, VecStore::default());
    ledger
        .add_expense(
            NewExpense::new("Cena", money("60"), "Juan").with_participants(["Juan", "María"]),
        )
        .unwrap();

    let report = ledger.settlement().unwrap();

    assert_eq!(report.transfers.len(), 1);
    assert_eq!(report.transfers[0].from, "María");
    assert_eq!(report.transfers[0].to, "Juan");
    assert_eq!(report.transfers[0].amount, money("30"));
}

#[test]
fn stored_record_with_unknown_payer_fails_settlement() {
    let roster = MemberRoster::try_new(["Ana", "Beto"]).unwrap();
    let mut store = VecStore::default();
    store
        .insert(ExpenseRecord {
            id: Uuid::new_v4(),
            title: "Taxi".to_string(),
            amount: Money::from_major(20),
            payer: "Dani".to_string(),
            participants: Vec::new(),
            date: Utc::now(),
            receipt_uri: None,
        })
        .unwrap();
    let ledger = LedgerService::new(roster, SplitPolicy::Roster, store);

    match ledger.settlement() {
        Err(LedgerError::Settlement(err)) => {
            assert_eq!(err, SettlementError::InvalidPayer("Dani".to_string()))
        }
        other => panic!("expected settlement error, got {other:?}"),
    }
}

#[rstest]
fn period_summary_uses_stored_dates(mut ledger: LedgerService<VecStore>) {
    let at = |day| Utc.with_ymd_and_hms(2025, 10, day, 18, 0, 0).unwrap();
    ledger
        .add_expense_at(NewExpense::new("Supermercado", money("40"), "Juan"), at(2))
        .unwrap();
    ledger
        .add_expense_at(NewExpense::new("Cena", money("60"), "María"), at(9))
        .unwrap();
    ledger
        .add_expense_at(NewExpense::new("Uber", money("15"), "Pedro"), at(20))
        .unwrap();

    let summary = ledger
        .period_summary(
            NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 10, 11).unwrap(),
        )
        .unwrap();

    assert_eq!(summary.expenses.len(), 2);
    assert_eq!(summary.total, money("100"));
    assert_eq!(summary.days, 10);
    assert_eq!(summary.daily_average, money("10"));
    assert_eq!(
        summary.category_total(ExpenseCategory::Restaurants),
        money("60")
    );
}

#[rstest]
fn reversed_period_is_rejected(ledger: LedgerService<VecStore>) {
    let start = NaiveDate::from_ymd_opt(2025, 10, 17).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();

    assert!(matches!(
        ledger.period_summary(start, end),
        Err(LedgerError::InvalidPeriod { .. })
    ));
}

#[test]
fn store_failures_surface_as_ledger_errors() {
    let roster = MemberRoster::try_new(["Ana"]).unwrap();
    let mut ledger = LedgerService::new(roster, SplitPolicy::Roster, BrokenStore);

    assert!(matches!(ledger.settlement(), Err(LedgerError::Store(_))));
    assert!(matches!(
        ledger.add_expense(NewExpense::new("Pan", Money::from_major(2), "Ana")),
        Err(LedgerError::Store(_))
    ));
}

#[test]
fn expenses_that_would_overflow_the_total_are_rejected() {
    let roster = MemberRoster::try_new(["Ana", "Beto"]).unwrap();
    let mut ledger = LedgerService::new(roster, SplitPolicy::Roster, VecStore::default());
    let huge = money("50000000000000000");

    ledger
        .add_expense(NewExpense::new("Casa", huge, "Ana"))
        .unwrap();
    let err = ledger
        .add_expense(NewExpense::new("Casa", huge, "Beto"))
        .unwrap_err();

    assert!(matches!(
        err,
        LedgerError::Validation(ExpenseValidationError::TotalOutOfRange(amount)) if amount == huge
    ));
    assert_eq!(ledger.expenses().unwrap().len(), 1);

    let report = ledger.settlement().unwrap();
    assert_eq!(report.total, huge);
    assert_eq!(report.transfers.len(), 1);
    assert_eq!(report.transfers[0].amount, money("25000000000000000"));
}

#[test]
fn stored_totals_past_the_cent_range_fail_settlement() {
    let roster = MemberRoster::try_new(["Ana", "Beto"]).unwrap();
    let mut store = VecStore::default();
    for payer in ["Ana", "Beto"] {
        store
            .insert(ExpenseRecord {
                id: Uuid::new_v4(),
                title: "Casa".to_string(),
                amount: money("50000000000000000"),
                payer: payer.to_string(),
                participants: Vec::new(),
                date: Utc::now(),
                receipt_uri: None,
            })
            .unwrap();
    }
    let ledger = LedgerService::new(roster, SplitPolicy::Roster, store);

    assert!(matches!(
        ledger.settlement(),
        Err(LedgerError::Settlement(SettlementError::Overflow))
    ));
}

#[rstest]
fn expense_looks_up_one_record(mut ledger: LedgerService<VecStore>) {
    let stored = ledger
        .add_expense(
            NewExpense::new("Cena", money("45.50"), "María")
                .with_participants(["María", "Pedro"])
                .with_receipt("file:///recibos/cena.jpg"),
        )
        .unwrap();
    ledger
        .add_expense(NewExpense::new("Uber", money("8"), "Juan"))
        .unwrap();

    assert_eq!(ledger.expense(stored.id).unwrap(), Some(stored));
    assert_eq!(ledger.expense(Uuid::nil()).unwrap(), None);
}
