// 🎛️ Presenter layer
// Entry point for incoming broker transactions.

use anyhow::Result;
use tracing::info;

use super::domain::{PaymentEntity, TransactionBrokerAccountUseCase};

pub struct PresenterTransactionBroker<'a> {
    transaction_broker_account: Box<dyn TransactionBrokerAccountUseCase + 'a>,
}

impl<'a> PresenterTransactionBroker<'a> {
    pub fn new(transaction_broker_account: Box<dyn TransactionBrokerAccountUseCase + 'a>) -> Self {
        PresenterTransactionBroker {
            transaction_broker_account,
        }
    }

    pub fn transaction_broker_controller(&mut self, params: PaymentEntity) -> Result<()> {
        info!(value = params.value(), "broker transaction received");
        self.transaction_broker_account.execute(&params)
    }
}
