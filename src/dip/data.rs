// 🗂️ Data layer
// Implements the use case against an abstract API client.

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use super::domain::{PaymentEntity, TransactionBrokerAccountUseCase};

/// Payload sent to the broker API
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransactionBrokerRequest {
    pub value: f64,
}

impl From<&PaymentEntity> for TransactionBrokerRequest {
    fn from(payment: &PaymentEntity) -> Self {
        TransactionBrokerRequest {
            value: payment.value(),
        }
    }
}

/// Port owned by the data layer; infra provides the implementation
pub trait ApiXptoClient {
    fn execute_transaction_value(&mut self, request: &TransactionBrokerRequest) -> Result<()>;
}

pub struct TransactionService<'a> {
    api_xpto_client: Box<dyn ApiXptoClient + 'a>,
}

impl<'a> TransactionService<'a> {
    pub fn new(api_xpto_client: Box<dyn ApiXptoClient + 'a>) -> Self {
        TransactionService { api_xpto_client }
    }
}

impl TransactionBrokerAccountUseCase for TransactionService<'_> {
    fn execute(&mut self, payment: &PaymentEntity) -> Result<()> {
        let payload = TransactionBrokerRequest::from(payment);
        debug!(value = payload.value, "executing broker transaction");
        self.api_xpto_client.execute_transaction_value(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Stand-in client that records payloads instead of sending them
    struct RecordingClient {
        requests: Rc<RefCell<Vec<TransactionBrokerRequest>>>,
    }

    impl ApiXptoClient for RecordingClient {
        fn execute_transaction_value(&mut self, request: &TransactionBrokerRequest) -> Result<()> {
            self.requests.borrow_mut().push(*request);
            Ok(())
        }
    }

    #[test]
    fn test_service_forwards_payment_value() {
        let requests = Rc::new(RefCell::new(Vec::new()));
        let client = RecordingClient {
            requests: Rc::clone(&requests),
        };

        let mut service = TransactionService::new(Box::new(client));
        service.execute(&PaymentEntity::new(1200.0)).unwrap();
        service.execute(&PaymentEntity::new(35.5)).unwrap();

        assert_eq!(
            *requests.borrow(),
            vec![
                TransactionBrokerRequest { value: 1200.0 },
                TransactionBrokerRequest { value: 35.5 },
            ]
        );
    }

    #[test]
    fn test_client_failure_propagates() {
        struct FailingClient;

        impl ApiXptoClient for FailingClient {
            fn execute_transaction_value(&mut self, _: &TransactionBrokerRequest) -> Result<()> {
                anyhow::bail!("broker offline")
            }
        }

        let mut service = TransactionService::new(Box::new(FailingClient));
        let err = service.execute(&PaymentEntity::new(1.0)).unwrap_err();
        assert_eq!(err.to_string(), "broker offline");
    }
}
