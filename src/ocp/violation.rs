use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::console;

/// Cashback granted by crypto payments
pub const CRYPTO_CASHBACK: f64 = 5.0;

/// Single payment struct that grows with every new payment method
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Payment {
    value: f64,
    // Added for crypto only, every other method carries it too
    cashback: f64,
}

impl Payment {
    pub fn new(value: f64) -> Self {
        Payment {
            value,
            cashback: 0.0,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn cashback(&self) -> f64 {
        self.cashback
    }

    pub fn pay_credit_card(&mut self, value: f64) -> &'static str {
        self.value = value;
        "payCreditCard..."
    }

    pub fn pay_ticket(&mut self) -> &'static str {
        "payTicket..."
    }

    /// New business demand bolted onto the existing type
    pub fn pay_crypto(&mut self) -> &'static str {
        self.cashback = CRYPTO_CASHBACK;
        "payCrypto..."
    }
}

pub fn checkout(payment: &mut Payment, out: &mut dyn Write) -> Result<()> {
    let value = payment.value();
    let results = [
        payment.pay_credit_card(value),
        payment.pay_ticket(),
        payment.pay_crypto(),
    ];
    console::labelled(out, "Payment", &results)
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut payment = Payment::new(100.0);
    checkout(&mut payment, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::captured_lines;

    #[test]
    fn test_pay_crypto_mutates_shared_struct() {
        let mut payment = Payment::new(100.0);
        assert_eq!(payment.cashback(), 0.0);

        assert_eq!(payment.pay_crypto(), "payCrypto...");
        assert_eq!(payment.cashback(), CRYPTO_CASHBACK);
    }

    #[test]
    fn test_pay_credit_card_overwrites_value() {
        let mut payment = Payment::default();
        assert_eq!(payment.pay_credit_card(42.0), "payCreditCard...");
        assert_eq!(payment.value(), 42.0);
    }

    #[test]
    fn test_run_output() {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();

        assert_eq!(
            captured_lines(&buf),
            vec!["Payment", "payCreditCard...", "payTicket...", "payCrypto..."]
        );
    }
}
