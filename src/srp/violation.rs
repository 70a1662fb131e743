use anyhow::Result;
use rusqlite::Connection;
use std::io::Write;
use tracing::debug;

use super::{render_account, DEMO_BALANCE, DEMO_HOLDER, SAVING_MESSAGE};
use crate::console;
use crate::db::{self, AccountRecord};
use crate::error::{validate_account_fields, AccountError};

/// Account that also knows how to print and store itself
pub struct BankAccount {
    id: String,
    holder: String,
    balance: f64,
    conn: Connection,
}

impl BankAccount {
    pub fn new(holder: &str, balance: f64, conn: Connection) -> Self {
        BankAccount {
            id: uuid::Uuid::new_v4().to_string(),
            holder: holder.to_string(),
            balance,
            conn,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn print_account(&self) -> String {
        render_account(&self.holder, self.balance)
    }

    pub fn validate_account(&self) -> Result<(), AccountError> {
        validate_account_fields(&self.holder, self.balance)
    }

    /// Storage details leak into the domain type
    pub fn save(&self) -> Result<&'static str> {
        let record = AccountRecord::new(&self.id, &self.holder, self.balance);
        let inserted = db::insert_account(&self.conn, &record, "bank_account")?;
        debug!(account = %self.id, inserted, "account saved itself");
        Ok(SAVING_MESSAGE)
    }

    #[cfg(test)]
    fn connection(&self) -> &Connection {
        &self.conn
    }
}

pub fn register_account(account: &BankAccount, out: &mut dyn Write) -> Result<()> {
    account.validate_account()?;
    let summary = account.print_account();
    let saved = account.save()?;
    console::labelled(out, "BankAccount", &[summary.as_str(), saved])
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let account = BankAccount::new(DEMO_HOLDER, DEMO_BALANCE, db::open_in_memory()?);
    register_account(&account, out)
}
