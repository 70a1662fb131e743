// 🏛️ Domain layer
// Entities and the use case contract.

use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentEntity {
    value: f64,
}

impl PaymentEntity {
    pub fn new(value: f64) -> Self {
        PaymentEntity { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Sends a payment to the broker account
pub trait TransactionBrokerAccountUseCase {
    fn execute(&mut self, payment: &PaymentEntity) -> Result<()>;
}
