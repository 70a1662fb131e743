use anyhow::{Context, Result};
use rusqlite::Connection;
use serde::Serialize;
use std::io::Write;
use tracing::debug;

use super::{render_account, DEMO_BALANCE, DEMO_HOLDER, SAVING_MESSAGE};
use crate::console;
use crate::db::{self, AccountRecord};
use crate::error::{validate_account_fields, AccountError};

// ============================================================================
// DOMAIN
// ============================================================================

/// Bank account responsible only for its own business rules
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BankAccount {
    id: String,
    holder: String,
    balance: f64,
}

impl BankAccount {
    pub fn new(holder: &str, balance: f64) -> Self {
        BankAccount {
            id: uuid::Uuid::new_v4().to_string(),
            holder: holder.to_string(),
            balance,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn validate_account(&self) -> Result<(), AccountError> {
        validate_account_fields(&self.holder, self.balance)
    }
}

// ============================================================================
// PERSISTENCE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
}

impl SaveOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SaveOutcome::Saved => SAVING_MESSAGE,
            SaveOutcome::AlreadySaved => "Account already saved",
        }
    }
}

pub trait BankAccountRepository {
    fn save(&self, account: &BankAccount) -> Result<SaveOutcome>;
}

/// Repository backed by an in-memory SQLite database
pub struct SqliteBankAccountRepository {
    conn: Connection,
}

impl SqliteBankAccountRepository {
    pub fn new(conn: Connection) -> Self {
        SqliteBankAccountRepository { conn }
    }

    pub fn in_memory() -> Result<Self> {
        Ok(Self::new(db::open_in_memory()?))
    }

    pub fn count(&self) -> Result<i64> {
        db::count_accounts(&self.conn)
    }

    #[cfg(test)]
    fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl BankAccountRepository for SqliteBankAccountRepository {
    fn save(&self, account: &BankAccount) -> Result<SaveOutcome> {
        let record = AccountRecord::new(account.id(), account.holder(), account.balance());
        let inserted = db::insert_account(&self.conn, &record, "bank_account_repository")
            .with_context(|| format!("failed to save account {}", account.id()))?;

        debug!(account = %account.id(), inserted, "repository save");

        if inserted {
            Ok(SaveOutcome::Saved)
        } else {
            Ok(SaveOutcome::AlreadySaved)
        }
    }
}

// ============================================================================
// PRESENTATION
// ============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct BankViewer;

impl BankViewer {
    pub fn print_account(&self, account: &BankAccount) -> String {
        render_account(account.holder(), account.balance())
    }
}

pub fn register_account(
    account: &BankAccount,
    repository: &dyn BankAccountRepository,
    viewer: &BankViewer,
    out: &mut dyn Write,
) -> Result<()> {
    account.validate_account()?;
    let summary = viewer.print_account(account);
    let outcome = repository.save(account)?;
    console::labelled(out, "BankAccount", &[summary.as_str(), outcome.message()])
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let repository = SqliteBankAccountRepository::in_memory()?;
    let viewer = BankViewer;
    let account = BankAccount::new(DEMO_HOLDER, DEMO_BALANCE);

    register_account(&account, &repository, &viewer, out)?;
    // Second registration of the same account hits the idempotency hash
    register_account(&account, &repository, &viewer, out)?;

    Ok(())
}
