use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::console;

/// Shared base: new payment methods wrap it, they never add fields to it
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
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

/// Extension point for payment methods
pub trait PaymentMethod {
    /// Lines describing the executed payment
    fn execute(&self) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentCreditCard {
    payment: Payment,
}

impl PaymentCreditCard {
    pub fn new(value: f64) -> Self {
        PaymentCreditCard {
            payment: Payment::new(value),
        }
    }
}

impl PaymentMethod for PaymentCreditCard {
    fn execute(&self) -> Vec<String> {
        vec![format!("PayCreditCard... {}", self.payment.value())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentTicket {
    payment: Payment,
}

impl PaymentTicket {
    pub fn new(value: f64) -> Self {
        PaymentTicket {
            payment: Payment::new(value),
        }
    }
}

impl PaymentMethod for PaymentTicket {
    fn execute(&self) -> Vec<String> {
        vec![format!("PayTicket... {}", self.payment.value())]
    }
}

/// Cashback belongs to crypto alone
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentCrypto {
    payment: Payment,
    cashback: f64,
}

impl PaymentCrypto {
    pub fn new(value: f64, cashback: f64) -> Self {
        PaymentCrypto {
            payment: Payment::new(value),
            cashback,
        }
    }
}

impl PaymentMethod for PaymentCrypto {
    fn execute(&self) -> Vec<String> {
        vec![
            format!("PayCrypto... {}", self.payment.value()),
            format!("PayCrypto... Cashback {}", self.cashback),
        ]
    }
}

pub fn process_payment(method: &dyn PaymentMethod, out: &mut dyn Write) -> Result<()> {
    for line in method.execute() {
        console::line(out, &line)?;
    }
    Ok(())
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let methods: [Box<dyn PaymentMethod>; 3] = [
        Box::new(PaymentCreditCard::new(100.0)),
        Box::new(PaymentTicket::new(23.0)),
        Box::new(PaymentCrypto::new(250.0, 0.80)),
    ];

    for method in &methods {
        process_payment(method.as_ref(), out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::captured_lines;

    /// Added without touching Payment or any existing method
    struct PaymentPix {
        payment: Payment,
    }

    impl PaymentMethod for PaymentPix {
        fn execute(&self) -> Vec<String> {
            vec![format!("PayPix... {}", self.payment.value())]
        }
    }

    #[test]
    fn test_new_method_extends_without_modification() {
        let pix = PaymentPix {
            payment: Payment::new(12.5),
        };

        let mut buf = Vec::new();
        process_payment(&pix, &mut buf).unwrap();
        assert_eq!(captured_lines(&buf), vec!["PayPix... 12.5"]);
    }

    #[test]
    fn test_crypto_reports_cashback() {
        let crypto = PaymentCrypto::new(250.0, 0.80);
        assert_eq!(
            crypto.execute(),
            vec!["PayCrypto... 250", "PayCrypto... Cashback 0.8"]
        );
    }

    #[test]
    fn test_run_output() {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();

        assert_eq!(
            captured_lines(&buf),
            vec![
                "PayCreditCard... 100",
                "PayTicket... 23",
                "PayCrypto... 250",
                "PayCrypto... Cashback 0.8",
            ]
        );
    }
}
