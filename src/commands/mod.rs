pub mod check;
pub mod config;

pub use check::handle_check;
pub use config::handle_config;
