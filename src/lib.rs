// SOLID Payments - Core Library
// One module per principle, each with a violation and a fix demo

pub mod config;
pub mod console;
pub mod db;
pub mod demo;
pub mod error;

pub mod srp; // Single Responsibility
pub mod ocp; // Open-Closed
pub mod lsp; // Liskov Substitution
pub mod isp; // Interface Segregation
pub mod dip; // Dependency Inversion

// Re-export commonly used types
pub use config::Config;
pub use db::{
    AccountRecord, AccountEvent, AccountEventKind, AccountSnapshot,
    setup_database, open_in_memory, insert_account, insert_account_event,
    get_account_history, count_accounts,
};
pub use demo::{Principle, Variant, run_all, run_principle};
pub use error::AccountError;
