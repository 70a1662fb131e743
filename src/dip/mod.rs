// D - Dependency Inversion
// Depend on abstractions, not on implementations.
//
// The fix is split in layers. Domain, data, infra and presenter each depend
// only on traits; run_fix is the single place that couples concrete types
// (dependency injection happens there, and only there).

pub mod data;
pub mod domain;
pub mod infra;
pub mod presenter;
pub mod violation;

use anyhow::Result;
use std::io::Write;
use tracing::debug;

pub use data::{ApiXptoClient, TransactionBrokerRequest, TransactionService};
pub use domain::{PaymentEntity, TransactionBrokerAccountUseCase};
pub use infra::ClientHttp;
pub use presenter::PresenterTransactionBroker;
pub use violation::run as run_violation;

pub const DEMO_VALUE: f64 = 1200.0;

pub fn run_fix(out: &mut dyn Write) -> Result<()> {
    let client_http = ClientHttp::new(out);
    let service = TransactionService::new(Box::new(client_http));
    let mut presenter = PresenterTransactionBroker::new(Box::new(service));
    debug!("broker transaction stack wired");

    let transaction_value = PaymentEntity::new(DEMO_VALUE);
    presenter.transaction_broker_controller(transaction_value)
}
