// S - Single Responsibility
// A type should have only one reason to change.
//
// violation: the account validates, renders and persists itself
// fix:       validation stays on the account, rendering moves to BankViewer,
//            persistence moves behind BankAccountRepository

pub mod fix;
pub mod violation;

pub use fix::run as run_fix;
pub use violation::run as run_violation;

pub const SAVING_MESSAGE: &str = "Saving data into Database...";

pub const DEMO_HOLDER: &str = "Maria Silva";
pub const DEMO_BALANCE: f64 = 1200.00;

pub(crate) fn render_account(holder: &str, balance: f64) -> String {
    format!("Account {}: {:.2}", holder, balance)
}
