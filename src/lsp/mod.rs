// L - Liskov Substitution
// A subtype must be usable wherever its base contract is expected.
//
// violation: one Transaction contract that every payment must fully honour,
//            so a payment without broker access has nothing valid to return
// fix:       broker transfers live in a supertrait-extended contract

pub mod fix;
pub mod violation;

pub use fix::run as run_fix;
pub use violation::run as run_violation;

/// Value used by every payment in the demos
pub const DEMO_VALUE: f64 = 1200.00;

pub const TRANSFER_PIX: &str = "transferPix...";
pub const TRANSFER_TED: &str = "transferTed...";
pub const TRANSFER_BROKER: &str = "transferBroker...";

/// Placeholder returned by a payment asked for a capability it does not have
pub const OPERATION_NOT_SUPPORTED: &str = "operation not supported";
