pub mod checker;

// Re-export main types
pub use checker::{check_packages, is_disallowed, CheckOptions, CheckOutcome, Violation};
