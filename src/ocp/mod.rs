// O - Open-Closed
// Open for extension, closed for modification.

pub mod fix;
pub mod violation;

pub use fix::run as run_fix;
pub use violation::run as run_violation;
