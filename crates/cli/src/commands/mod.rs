//! Command handlers for the lineprompt CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod ask;
pub mod confirm;
pub mod demo;
pub mod select;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use confirm::{ConfirmCommand, RemoveDatabaseCommand};
pub use demo::DemoCommand;
pub use select::SelectCommand;

use std::io::{self, Stderr, StdinLock};

use lineprompt_core::config::AppConfig;
use lineprompt_prompt::Prompt;

/// Session for the scripting commands.
///
/// Prompts go to stderr so that `$(lineprompt ask ...)` captures only the
/// answer printed on stdout.
pub(crate) fn script_prompt(config: &AppConfig) -> Prompt<StdinLock<'static>, Stderr> {
    Prompt::new(io::stdin().lock(), io::stderr(), config.formatting)
}
