use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Unit separator between hashed fields, so ("Ann", 12) and ("Ann1", 2) differ
const HASH_FIELD_SEPARATOR: char = '\u{1f}';

/// Row stored for a bank account
/// Identity (id) and values (holder, balance) are kept apart from the dedup hash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Stable identity (UUID)
    pub id: String,

    pub holder: String,

    pub balance: f64,

    /// When this record was handed to storage
    pub saved_at: DateTime<Utc>,
}

impl AccountRecord {
    pub fn new(id: &str, holder: &str, balance: f64) -> Self {
        AccountRecord {
            id: id.to_string(),
            holder: holder.to_string(),
            balance,
            saved_at: Utc::now(),
        }
    }

    /// Compute idempotency hash for duplicate detection
    /// NOTE: saved_at is excluded, saving the same account twice must collide
    pub fn compute_idempotency_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(format!(
            "{}{sep}{}{sep}{}",
            self.id,
            self.holder,
            self.balance,
            sep = HASH_FIELD_SEPARATOR
        ));
        format!("{:x}", hasher.finalize())
    }

    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            holder: self.holder.clone(),
            balance: self.balance,
        }
    }
}

// ============================================================================
// AUDIT TRAIL
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountEventKind {
    /// A new account row was written
    Saved,
}

impl AccountEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountEventKind::Saved => "account_saved",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "account_saved" => Ok(AccountEventKind::Saved),
            other => Err(anyhow!("unknown account event kind: {}", other)),
        }
    }
}

/// Account values as they were when the event happened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub holder: String,
    pub balance: f64,
}

/// One entry in an account's history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountEvent {
    pub event_id: String,
    pub account_id: String,
    pub kind: AccountEventKind,
    pub snapshot: AccountSnapshot,
    pub recorded_at: DateTime<Utc>,
    /// Component that wrote the row (repository, or the account itself)
    pub actor: String,
}

impl AccountEvent {
    pub fn saved(record: &AccountRecord, actor: &str) -> Self {
        AccountEvent {
            event_id: uuid::Uuid::new_v4().to_string(),
            account_id: record.id.clone(),
            kind: AccountEventKind::Saved,
            snapshot: record.snapshot(),
            recorded_at: record.saved_at,
            actor: actor.to_string(),
        }
    }
}

pub fn setup_database(conn: &Connection) -> Result<()> {
    // ==========================================================================
    // Accounts Table
    // ==========================================================================
    conn.execute(
        "CREATE TABLE IF NOT EXISTS accounts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            idempotency_hash TEXT UNIQUE NOT NULL,
            account_uuid TEXT NOT NULL,
            holder TEXT NOT NULL,
            balance REAL NOT NULL,
            saved_at TEXT NOT NULL,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;

    // ==========================================================================
    // Account History
    // ==========================================================================
    conn.execute(
        "CREATE TABLE IF NOT EXISTS account_events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            event_id TEXT UNIQUE NOT NULL,
            account_uuid TEXT NOT NULL,
            kind TEXT NOT NULL,
            snapshot TEXT NOT NULL,
            recorded_at TEXT NOT NULL,
            actor TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_account_events_account ON account_events(account_uuid)",
        [],
    )?;

    Ok(())
}

/// Open a fresh in-memory database with the schema in place
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
    setup_database(&conn).context("failed to create schema")?;
    Ok(conn)
}

/// Insert one account
/// Returns false only when the idempotency hash is already stored; any other
/// constraint failure (e.g. a NaN balance bound as NULL) is an error
pub fn insert_account(conn: &Connection, record: &AccountRecord, actor: &str) -> Result<bool> {
    let hash = record.compute_idempotency_hash();

    let result = conn.execute(
        "INSERT INTO accounts (idempotency_hash, account_uuid, holder, balance, saved_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            hash,
            record.id,
            record.holder,
            record.balance,
            record.saved_at.to_rfc3339(),
        ],
    );

    match result {
        Ok(_) => {
            insert_account_event(conn, &AccountEvent::saved(record, actor))?;
            Ok(true)
        }
        Err(rusqlite::Error::SqliteFailure(err, _))
            if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            Ok(false)
        }
        Err(e) => Err(e).with_context(|| format!("failed to insert account {}", record.id)),
    }
}

pub fn insert_account_event(conn: &Connection, event: &AccountEvent) -> Result<()> {
    let snapshot_json = serde_json::to_string(&event.snapshot)?;

    conn.execute(
        "INSERT INTO account_events (event_id, account_uuid, kind, snapshot, recorded_at, actor)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            event.event_id,
            event.account_id,
            event.kind.as_str(),
            snapshot_json,
            event.recorded_at.to_rfc3339(),
            event.actor,
        ],
    )?;

    Ok(())
}

pub fn get_account_history(conn: &Connection, account_id: &str) -> Result<Vec<AccountEvent>> {
    let mut stmt = conn.prepare(
        "SELECT event_id, account_uuid, kind, snapshot, recorded_at, actor
         FROM account_events
         WHERE account_uuid = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map(params![account_id], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, String>(5)?,
        ))
    })?;

    let mut events = Vec::new();
    for row in rows {
        let (event_id, account_id, kind, snapshot, recorded_at, actor) = row?;
        events.push(AccountEvent {
            event_id,
            account_id,
            kind: AccountEventKind::parse(&kind)?,
            snapshot: serde_json::from_str(&snapshot).context("invalid account snapshot")?,
            recorded_at: DateTime::parse_from_rfc3339(&recorded_at)
                .context("invalid event timestamp")?
                .with_timezone(&Utc),
            actor,
        });
    }

    Ok(events)
}

pub fn count_accounts(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM accounts", [], |row| row.get(0))?;

    Ok(count)
}
