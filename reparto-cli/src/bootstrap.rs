use crate::cli::{Cli, Command};
use anyhow::Context as _;
use reparto_application::{ExpenseStore, LedgerService, NewExpense, ReportRenderer};
use reparto_domain::{MemberRoster, SplitPolicy};
use reparto_i18n as i18n;
use reparto_infrastructure::{DEFAULT_STORE_FILE, JsonFileExpenseStore};
use reparto_presentation::TextReportRenderer;
use std::{env, path::PathBuf};
use tracing_subscriber::EnvFilter;

const STORE_PATH_VAR: &str = "REPARTO_STORE_PATH";
const MEMBERS_VAR: &str = "REPARTO_MEMBERS";
const SPLIT_POLICY_VAR: &str = "REPARTO_SPLIT_POLICY";
const DEFAULT_MEMBERS: &str = "Juan,María,Pedro";

/// Resolved settings: command-line flags over environment over defaults.
#[derive(Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub store_path: PathBuf,
    pub roster: MemberRoster,
    pub policy: SplitPolicy,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let store_path = lookup(STORE_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE));
        let roster = parse_members(lookup(MEMBERS_VAR).as_deref().unwrap_or(DEFAULT_MEMBERS))
            .with_context(|| format!("{MEMBERS_VAR} is not a valid member list"))?;
        let policy = match lookup(SPLIT_POLICY_VAR) {
            Some(raw) => raw
                .parse::<SplitPolicy>()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("{SPLIT_POLICY_VAR} is not a valid split policy"))?,
            None => SplitPolicy::default(),
        };

        Ok(Self {
            store_path,
            roster,
            policy,
        })
    }

    pub fn with_overrides(mut self, cli: &Cli) -> anyhow::Result<Self> {
        if let Some(path) = &cli.store {
            self.store_path = path.clone();
        }
        if let Some(members) = &cli.members {
            self.roster = parse_members(members).context("--members is not a valid member list")?;
        }
        if let Some(policy) = cli.split {
            self.policy = policy;
        }
        Ok(self)
    }
}

fn parse_members(raw: &str) -> anyhow::Result<MemberRoster> {
    Ok(MemberRoster::try_new(raw.split(','))?)
}

/// Initialize logging and tracing
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::from_env()?.with_overrides(&cli)?;
    tracing::debug!(
        store = %config.store_path.display(),
        members = config.roster.len(),
        policy = %config.policy,
        "Configuration loaded"
    );

    let store = JsonFileExpenseStore::open(&config.store_path)
        .with_context(|| format!("Failed to open '{}'", config.store_path.display()))?;
    let mut ledger = LedgerService::new(config.roster, config.policy, store);

    let output = execute(cli.command, &mut ledger, &TextReportRenderer)?;
    println!("{output}");
    Ok(())
}

/// Runs one command against the ledger and returns the text to print.
pub fn execute<S: ExpenseStore>(
    command: Command,
    ledger: &mut LedgerService<S>,
    renderer: &impl ReportRenderer,
) -> anyhow::Result<String> {
    let output = match command {
        Command::Add {
            title,
            amount,
            payer,
            participants,
            receipt,
        } => {
            let mut expense = NewExpense::new(title, amount, payer).with_participants(participants);
            if let Some(receipt) = receipt {
                expense = expense.with_receipt(receipt);
            }
            let record = ledger
                .add_expense(expense)
                .context("Failed to record the expense")?;
            i18n::expense_added(record.id)
        }
        Command::Remove { id } => {
            if ledger.remove_expense(id)? {
                i18n::expense_removed(id)
            } else {
                i18n::expense_not_found(id)
            }
        }
        Command::Show { id } => match ledger.expense(id)? {
            Some(record) => renderer.render_expense(&record),
            None => i18n::expense_not_found(id),
        },
        Command::List => renderer.render_expenses(&ledger.expenses()?),
        Command::Receipts => renderer.render_receipts(&ledger.receipts()?),
        Command::Balance => renderer.render_settlement(&ledger.settlement()?),
        Command::Report { from, to } => renderer.render_period(&ledger.period_summary(from, to)?),
    };
    Ok(output)
}
