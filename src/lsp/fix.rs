use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use super::{DEMO_VALUE, OPERATION_NOT_SUPPORTED, TRANSFER_BROKER, TRANSFER_PIX, TRANSFER_TED};
use crate::console;

/// Basic operations available to every payment
pub trait Transaction {
    fn transfer_pix(&self) -> &'static str;
    fn transfer_ted(&self) -> &'static str;
}

/// Transaction plus broker access
pub trait BrokerTransaction: Transaction {
    fn transfer_broker(&self) -> &'static str;
}

/// Payment that supports every transfer, broker included
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Payment {
    value: f64,
}

impl Payment {
    pub fn new(value: f64) -> Self {
        Payment { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Transaction for Payment {
    fn transfer_pix(&self) -> &'static str {
        TRANSFER_PIX
    }

    fn transfer_ted(&self) -> &'static str {
        TRANSFER_TED
    }
}

impl BrokerTransaction for Payment {
    fn transfer_broker(&self) -> &'static str {
        TRANSFER_BROKER
    }
}

/// Payment limited to the basic contract
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentWithoutBroker {
    payment: Payment,
}

impl PaymentWithoutBroker {
    pub fn new(value: f64) -> Self {
        PaymentWithoutBroker {
            payment: Payment::new(value),
        }
    }

    pub fn value(&self) -> f64 {
        self.payment.value()
    }

    /// Not part of any contract: callers holding the concrete type get an
    /// explicit refusal instead of a broker transfer
    pub fn transfer_broker(&self) -> &'static str {
        OPERATION_NOT_SUPPORTED
    }
}

impl Transaction for PaymentWithoutBroker {
    fn transfer_pix(&self) -> &'static str {
        self.payment.transfer_pix()
    }

    fn transfer_ted(&self) -> &'static str {
        self.payment.transfer_ted()
    }
}

pub fn checking_account(t: &dyn BrokerTransaction, out: &mut dyn Write) -> Result<()> {
    console::labelled(
        out,
        "CheckingAccount",
        &[t.transfer_pix(), t.transfer_ted(), t.transfer_broker()],
    )
}

pub fn saving_account(t: &dyn Transaction, out: &mut dyn Write) -> Result<()> {
    console::labelled(out, "SavingAccount", &[t.transfer_pix(), t.transfer_ted()])
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    // Supports every transaction
    let payment = Payment::new(DEMO_VALUE);
    checking_account(&payment, out)?;

    // Only pix and ted
    let payment_without_broker = PaymentWithoutBroker::new(DEMO_VALUE);
    saving_account(&payment_without_broker, out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::captured_lines;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    assert_impl_all!(Payment: Transaction, BrokerTransaction);
    assert_impl_all!(PaymentWithoutBroker: Transaction);
    assert_not_impl_any!(PaymentWithoutBroker: BrokerTransaction);

    #[test]
    fn test_capabilities_return_literals() {
        let payment = Payment::new(DEMO_VALUE);
        assert_eq!(payment.transfer_pix(), "transferPix...");
        assert_eq!(payment.transfer_ted(), "transferTed...");
        assert_eq!(payment.transfer_broker(), "transferBroker...");
    }

    #[test]
    fn test_payment_without_broker_rejects_broker() {
        let payment = PaymentWithoutBroker::new(DEMO_VALUE);
        assert_eq!(payment.transfer_broker(), "operation not supported");
        assert_eq!(payment.value(), 1200.0);
    }

    #[test]
    fn test_both_payments_substitute_for_transaction() {
        let payments: Vec<Box<dyn Transaction>> = vec![
            Box::new(Payment::new(10.0)),
            Box::new(PaymentWithoutBroker::new(10.0)),
        ];

        for payment in &payments {
            let mut buf = Vec::new();
            saving_account(payment.as_ref(), &mut buf).unwrap();
            assert_eq!(
                captured_lines(&buf),
                vec!["SavingAccount", "transferPix...", "transferTed..."]
            );
        }
    }

    #[test]
    fn test_run_output() {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();

        assert_eq!(
            captured_lines(&buf),
            vec![
                "CheckingAccount",
                "transferPix...",
                "transferTed...",
                "transferBroker...",
                "SavingAccount",
                "transferPix...",
                "transferTed...",
            ]
        );
    }
}
