pub mod config;
pub mod core;
pub mod errors;

// Re-export commonly used items for convenience
pub use config::{AppConfig, ClientConfig};
pub use core::*;
pub use errors::app_error::{AppError, AppResult};
