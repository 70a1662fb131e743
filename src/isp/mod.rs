// I - Interface Segregation
// Clients must not be forced to depend on methods they do not use.

pub mod fix;
pub mod violation;

pub use fix::run as run_fix;
pub use violation::run as run_violation;

/// Timer used by the demos, in minutes
pub const DEMO_TIMER_MINUTES: u32 = 30;
