pub mod app_error;

// Re-export public types
pub use app_error::{AppError, AppResult};
