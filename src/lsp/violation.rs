use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use super::{DEMO_VALUE, TRANSFER_BROKER, TRANSFER_PIX, TRANSFER_TED};
use crate::console;

/// Generic payment transaction
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

/// Every payment is assumed to support every transfer
pub trait Transaction {
    fn transfer_pix(&self) -> &'static str;
    fn transfer_ted(&self) -> &'static str;
    fn transfer_broker(&self) -> &'static str;
}

impl Transaction for Payment {
    fn transfer_pix(&self) -> &'static str {
        TRANSFER_PIX
    }

    fn transfer_ted(&self) -> &'static str {
        TRANSFER_TED
    }

    fn transfer_broker(&self) -> &'static str {
        TRANSFER_BROKER
    }
}

pub fn checking_account(t: &dyn Transaction, out: &mut dyn Write) -> Result<()> {
    console::labelled(
        out,
        "CheckingAccount",
        &[t.transfer_pix(), t.transfer_ted(), t.transfer_broker()],
    )
}

/// A saving account must not reach the broker, but the contract still hands it
/// transfer_broker
pub fn saving_account(t: &dyn Transaction, out: &mut dyn Write) -> Result<()> {
    console::labelled(out, "SavingAccount", &[t.transfer_pix(), t.transfer_ted()])
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let payment = Payment::new(DEMO_VALUE);
    checking_account(&payment, out)?;
    saving_account(&payment, out)?;
    Ok(())
}
