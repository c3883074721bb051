use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use reparto_domain::{Money, SplitPolicy};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "reparto")]
#[command(about = "Shared expense ledger: who paid, who owes, and how to settle")]
pub struct Cli {
    /// JSON file holding the expense list
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Comma-separated group members, in display order
    #[arg(long, global = true)]
    pub members: Option<String>,

    /// How each expense is shared: `roster` or `participants`
    #[arg(long, global = true)]
    pub split: Option<SplitPolicy>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record a new expense
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        amount: Money,
        #[arg(long)]
        payer: String,
        /// Repeat for each member sharing the expense
        #[arg(long = "participant")]
        participants: Vec<String>,
        /// Location of a receipt photo
        #[arg(long)]
        receipt: Option<String>,
    },
    /// Delete an expense by id
    Remove { id: Uuid },
    /// Show one expense with its participants and receipt
    Show { id: Uuid },
    /// Show every expense, newest first
    List,
    /// Show the expenses that have a receipt attached
    Receipts,
    /// Show balances and the transfers that settle them
    Balance,
    /// Summarize spending between two dates, both included
    Report {
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
    },
}
