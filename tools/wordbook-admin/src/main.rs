//! Operator CLI for the dictionary database.
//!
//! # Usage
//!
//! ```bash
//! # Most-queried words of one user
//! cargo run -p wordbook-admin -- records --user alice --limit 10
//!
//! # Block a user from logging in
//! cargo run -p wordbook-admin -- disable alice
//! ```
//!
//! Reads `DATABASE_URL` from the environment (or `.env`) unless `--database-url` is given.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use sea_orm::Database;

use wordbook_dictionary::domain::repository::{UserRepository, WordRecordRepository};
use wordbook_dictionary::domain::types::HistoryEntry;
use wordbook_dictionary::infra::db::{DbUserRepository, DbWordRecordRepository};
use wordbook_dictionary::usecase::user::SetUserActiveUseCase;
use wordbook_domain::history::{DEFAULT_HISTORY_LIMIT, HistoryLimit};

mod report;

#[derive(Parser)]
#[command(about = "Inspect and manage the wordbook dictionary database")]
struct Args {
    /// Database connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Most-queried words, anonymous lookups unless --user is given
    Records {
        #[arg(long)]
        user: Option<String>,
        #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: u64,
    },
    /// List registered accounts
    Users,
    /// Refuse further logins for a user
    Disable { username: String },
    /// Re-allow logins for a user
    Enable { username: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let db = Database::connect(&args.database_url)
        .await
        .context("connect to database")?;
    let users = DbUserRepository { db: db.clone() };
    let records = DbWordRecordRepository { db };

    match args.command {
        Command::Records { user, limit } => {
            let owner = match user {
                Some(name) => match users.find_by_username(&name).await? {
                    Some(found) => Some(found.id),
                    None => bail!("no user named {name}"),
                },
                None => None,
            };
            let entries: Vec<HistoryEntry> = records
                .ranked(owner, HistoryLimit(limit))
                .await?
                .into_iter()
                .map(HistoryEntry::from)
                .collect();
            if entries.is_empty() {
                eprintln!("No records.");
            }
            for line in report::history_lines(&entries) {
                println!("{line}");
            }
        }
        Command::Users => {
            for line in report::user_lines(&users.list().await?) {
                println!("{line}");
            }
        }
        Command::Disable { username } => {
            SetUserActiveUseCase { users }
                .execute(&username, false)
                .await?;
            println!("disabled {username}");
        }
        Command::Enable { username } => {
            SetUserActiveUseCase { users }
                .execute(&username, true)
                .await?;
            println!("enabled {username}");
        }
    }

    Ok(())
}
