use crate::text_table::{Alignment, TextTableBuilder};
use reparto_application::{MemberBalance, PendingTransfer, SettlementReport};
use reparto_domain::Money;
use reparto_i18n as i18n;
use std::{borrow::Cow, fmt::Write as _};

pub struct SettlementPresenter;

impl SettlementPresenter {
    pub fn render(report: &SettlementReport) -> String {
        let mut out = String::with_capacity(512);

        let _ = writeln!(out, "{}", i18n::BALANCES_HEADING);
        let _ = writeln!(out, "{}: ${}", i18n::TOTAL, report.total);
        let _ = writeln!(out, "{}: ${}", i18n::AVERAGE_PER_MEMBER, report.share);
        out.push('\n');
        out.push_str(&Self::build_balance_table(&report.members));

        out.push('\n');
        let _ = writeln!(out, "{}", i18n::DEBTS_HEADING);
        if report.transfers.is_empty() {
            let _ = writeln!(out, "{}", i18n::NO_DEBTS);
        } else {
            out.push_str(&Self::build_transfer_table(&report.transfers));
        }

        out
    }

    pub fn build_balance_table(members: &[MemberBalance]) -> String {
        let headers = [
            Cow::Borrowed(i18n::MEMBER),
            Cow::Borrowed(i18n::PAID),
            Cow::Borrowed(i18n::BALANCE),
            Cow::Borrowed(i18n::STATUS),
        ];
        let mut builder = TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Right,
                Alignment::Right,
                Alignment::Left,
            ])
            .headers(&headers);

        for line in members {
            builder = builder.row([
                Cow::Borrowed(line.member.as_str()),
                Cow::Owned(format!("${}", line.paid)),
                Cow::Owned(format_signed(line.balance)),
                Cow::Owned(balance_status(line.balance)),
            ]);
        }

        builder.build()
    }

    pub fn build_transfer_table(transfers: &[PendingTransfer]) -> String {
        let headers = [
            Cow::Borrowed(i18n::FROM),
            Cow::Borrowed(i18n::TO),
            Cow::Borrowed(i18n::AMOUNT),
        ];
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&headers);

        for transfer in transfers {
            builder = builder.row([
                Cow::Borrowed(transfer.from.as_str()),
                Cow::Borrowed(transfer.to.as_str()),
                Cow::Owned(format!("${}", transfer.amount)),
            ]);
        }

        builder.build()
    }
}

fn format_signed(amount: Money) -> String {
    if amount.is_negative() {
        amount.to_string()
    } else {
        format!("+{amount}")
    }
}

fn balance_status(balance: Money) -> String {
    if balance.is_positive() {
        i18n::is_owed(balance)
    } else if balance.is_negative() {
        i18n::owes(balance.abs())
    } else {
        i18n::SETTLED.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_report() -> SettlementReport {
        SettlementReport {
            total: Money::from_major(90),
            share: Money::from_major(30),
            members: vec![
                MemberBalance {
                    member: "Ana".to_string(),
                    paid: Money::from_major(90),
                    balance: Money::from_major(60),
                },
                MemberBalance {
                    member: "Beto".to_string(),
                    paid: Money::ZERO,
                    balance: Money::from_major(-30),
                },
                MemberBalance {
                    member: "Cata".to_string(),
                    paid: Money::ZERO,
                    balance: Money::from_major(-30),
                },
            ],
            transfers: vec![
                PendingTransfer {
                    from: "Beto".to_string(),
                    to: "Ana".to_string(),
                    amount: Money::from_major(30),
                },
                PendingTransfer {
                    from: "Cata".to_string(),
                    to: "Ana".to_string(),
                    amount: Money::from_major(30),
                },
            ],
        }
    }

    #[test]
    fn render_lists_balances_and_transfers() {
        let text = SettlementPresenter::render(&sample_report());

        assert!(text.contains("$90.00"));
        assert!(text.contains("$30.00"));
        assert!(text.contains("+60.00"));
        assert!(text.contains("-30.00"));
        assert!(text.contains(&i18n::is_owed(Money::from_major(60))));
        assert!(text.contains(&i18n::owes(Money::from_major(30))));
        assert!(!text.contains(i18n::NO_DEBTS));

        let transfer_table = SettlementPresenter::build_transfer_table(&sample_report().transfers);
        let rows: Vec<&str> = transfer_table.lines().skip(2).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("Beto"));
        assert!(rows[0].ends_with("$30.00"));
        assert!(rows[1].starts_with("Cata"));
    }

    #[test]
    fn render_says_when_nothing_is_owed() {
        let report = SettlementReport {
            total: Money::ZERO,
            share: Money::ZERO,
            members: vec![MemberBalance {
                member: "Ana".to_string(),
                paid: Money::ZERO,
                balance: Money::ZERO,
            }],
            transfers: Vec::new(),
        };

        let text = SettlementPresenter::render(&report);

        assert!(text.contains(i18n::NO_DEBTS));
        assert!(text.contains(i18n::SETTLED));
        assert!(text.contains("+0.00"));
    }

    #[rstest]
    #[case::creditor(Money::from_major(60), "+60.00", i18n::is_owed(Money::from_major(60)))]
    #[case::debtor(Money::from_cents(-3333), "-33.33", i18n::owes(Money::from_cents(3333)))]
    #[case::settled(Money::ZERO, "+0.00", i18n::SETTLED.to_string())]
    fn balance_cells(#[case] balance: Money, #[case] signed: &str, #[case] status: String) {
        assert_eq!(format_signed(balance), signed);
        assert_eq!(balance_status(balance), status);
    }

    #[test]
    fn paid_column_carries_currency_sign() {
        let table = SettlementPresenter::build_balance_table(&sample_report().members);
        let ana = table
            .lines()
            .find(|line| line.starts_with("Ana"))
            .unwrap();

        assert!(ana.contains("$90.00"));
        assert!(ana.contains("+60.00"));
    }
}
