use anyhow::Result;
use std::io::Write;

use crate::console;

#[derive(Debug, Clone, Copy, PartialEq)]
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

pub trait InvestmentTransaction {
    fn transfer_broker(&self) -> &'static str;
}

impl InvestmentTransaction for Payment {
    fn transfer_broker(&self) -> &'static str {
        "transferBroker..."
    }
}

/// Account logic, payment type and transfer live side by side, no layers
pub fn checking_account(i: &dyn InvestmentTransaction, out: &mut dyn Write) -> Result<()> {
    console::labelled(out, "CheckingAccount", &[i.transfer_broker()])
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let payment = Payment::new(super::DEMO_VALUE);
    checking_account(&payment, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::captured_lines;

    #[test]
    fn test_transfer_broker_literal() {
        let payment = Payment::new(1.0);
        assert_eq!(payment.transfer_broker(), "transferBroker...");
        assert_eq!(payment.value(), 1.0);
    }

    #[test]
    fn test_run_output() {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();

        assert_eq!(
            captured_lines(&buf),
            vec!["CheckingAccount", "transferBroker..."]
        );
    }
}
