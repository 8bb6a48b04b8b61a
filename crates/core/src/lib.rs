//! lineprompt core library
//!
//! This crate provides the foundational utilities shared by the lineprompt
//! workspace:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Configuration management, including the prompt `FormattingPolicy`

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, FormattingPolicy};
pub use error::{AppError, AppResult};
