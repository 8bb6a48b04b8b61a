//! The validator contract.
//!
//! A validator inspects a candidate answer and either accepts it or rejects
//! it with a human-readable reason. Any `Fn(&str) -> Result<(), String>`
//! is a validator, so most callers just pass a closure.

/// Accepts or rejects a candidate answer.
pub trait Validate {
    /// Return `Err(reason)` to reject `value`.
    fn validate(&self, value: &str) -> Result<(), String>;
}

impl<F> Validate for F
where
    F: Fn(&str) -> Result<(), String>,
{
    fn validate(&self, value: &str) -> Result<(), String> {
        self(value)
    }
}

/// Owned validator as stored in prompt options.
pub type Validator = Box<dyn Validate>;
