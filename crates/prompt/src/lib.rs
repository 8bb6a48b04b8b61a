//! Line prompts for lineprompt.
//!
//! This crate asks an operator questions over any line-based reader and
//! writer and returns typed answers:
//! - `ask` for free text, with defaults and validation
//! - `confirm` for yes/no questions
//! - `select` for picking one entry of a numbered list
//!
//! How a question is decorated is decided by the session's
//! [`FormattingPolicy`]; see [`format`] for the exact rules.
//!
//! # Example
//! ```no_run
//! use lineprompt_prompt::{stdio, validators, FormattingPolicy, InputOptions};
//!
//! # fn example() -> lineprompt_core::AppResult<()> {
//! let mut prompt = stdio(FormattingPolicy::standard());
//! let answer = prompt.ask(
//!     "what is the meaning of life",
//!     Some(&InputOptions::new()
//!         .with_default("42")
//!         .with_validator(validators::exact("42", "the answer must be 42"))),
//! )?;
//! println!("answered: {}", answer);
//! # Ok(())
//! # }
//! ```

pub mod format;
pub mod session;
pub mod types;
pub mod validator;
pub mod validators;

// Re-export main types
pub use lineprompt_core::FormattingPolicy;
pub use session::{is_affirmative, stdio, Prompt};
pub use types::{InputOptions, SelectOptions, Selection};
pub use validator::{Validate, Validator};
