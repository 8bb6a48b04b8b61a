//! Option and result types for prompts.

use serde::Serialize;
use std::fmt;

use crate::validator::{Validate, Validator};

/// Per-call options for [`ask`](crate::Prompt::ask) and
/// [`confirm`](crate::Prompt::confirm).
#[derive(Default)]
pub struct InputOptions {
    /// Answer used when the operator enters nothing; empty means no default
    pub default: String,

    /// Check applied to typed answers
    pub validator: Option<Validator>,

    /// Force a `?` after the question even when the policy disables it.
    ///
    /// This override is additive: `true` adds the question mark, `false`
    /// does NOT remove one that the session's policy adds.
    pub append_question_mark: bool,
}

impl InputOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the answer used for empty input.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    /// Set the validator for typed answers.
    pub fn with_validator(mut self, validator: impl Validate + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Always append `?` to this question. See [`InputOptions::append_question_mark`].
    pub fn with_question_mark(mut self) -> Self {
        self.append_question_mark = true;
        self
    }

    pub fn has_default(&self) -> bool {
        !self.default.is_empty()
    }
}

impl fmt::Debug for InputOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputOptions")
            .field("default", &self.default)
            .field("validator", &self.validator.as_ref().map(|_| ".."))
            .field("append_question_mark", &self.append_question_mark)
            .finish()
    }
}

/// Per-call options for [`select`](crate::Prompt::select).
#[derive(Default)]
pub struct SelectOptions {
    /// 1-based position chosen on empty input; `0` means no default
    pub default: usize,

    /// Check applied to the typed text before it is parsed as a number
    pub validator: Option<Validator>,

    /// Force a `?` after the question; additive like
    /// [`InputOptions::append_question_mark`].
    pub append_question_mark: bool,
}

impl SelectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the 1-based position chosen on empty input.
    pub fn with_default(mut self, position: usize) -> Self {
        self.default = position;
        self
    }

    pub fn with_validator(mut self, validator: impl Validate + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn with_question_mark(mut self) -> Self {
        self.append_question_mark = true;
        self
    }

    pub fn has_default(&self) -> bool {
        self.default != 0
    }
}

impl fmt::Debug for SelectOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectOptions")
            .field("default", &self.default)
            .field("validator", &self.validator.as_ref().map(|_| ".."))
            .field("append_question_mark", &self.append_question_mark)
            .finish()
    }
}

/// The choice picked in a [`select`](crate::Prompt::select) prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Text of the chosen entry
    pub text: String,

    /// 0-based index into the choice list
    pub index: usize,
}
