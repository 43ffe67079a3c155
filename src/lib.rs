pub mod config;
pub mod license;
pub mod policy;
pub mod uv_lock;

// Re-export main types for easy access
pub use license::{Classifier, Identify, Library, LibrarySource, LicenseType, UvLibraries};
pub use policy::{check_packages, CheckOptions, CheckOutcome, Violation};
