//! Ready-made validators for common answer checks.

use crate::validator::Validate;

/// Accepts only `expected`; rejects everything else with `message`.
pub fn exact(expected: impl Into<String>, message: impl Into<String>) -> Exact {
    Exact {
        expected: expected.into(),
        message: message.into(),
    }
}

/// Accepts only one of `values` (exact, case-sensitive).
pub fn one_of<I, S>(values: I) -> OneOf
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    OneOf {
        values: values.into_iter().map(Into::into).collect(),
    }
}

/// Accepts answers of at most `max` characters.
pub fn max_length(max: usize) -> MaxLength {
    MaxLength { max }
}

/// Rejects answers made only of whitespace.
pub fn not_blank() -> NotBlank {
    NotBlank
}

#[derive(Debug, Clone)]
pub struct Exact {
    expected: String,
    message: String,
}

impl Validate for Exact {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value == self.expected {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }
}

#[derive(Debug, Clone)]
pub struct OneOf {
    values: Vec<String>,
}

impl Validate for OneOf {
    fn validate(&self, value: &str) -> Result<(), String> {
        if self.values.iter().any(|v| v == value) {
            return Ok(());
        }
        Err(format!(
            "{:?} is not one of: {}",
            value,
            self.values.join(", ")
        ))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MaxLength {
    max: usize,
}

impl Validate for MaxLength {
    fn validate(&self, value: &str) -> Result<(), String> {
        let len = value.chars().count();
        if len > self.max {
            return Err(format!(
                "answer is {} characters long, the limit is {}",
                len, self.max
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NotBlank;

impl Validate for NotBlank {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            Err("answer must not be blank".to_string())
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact() {
        let v = exact("42", "the answer must be 42");
        assert!(v.validate("42").is_ok());
        assert_eq!(v.validate("41"), Err("the answer must be 42".to_string()));
    }

    #[test]
    fn test_one_of() {
        let v = one_of(["dev", "prod"]);
        assert!(v.validate("prod").is_ok());
        let err = v.validate("Prod").unwrap_err();
        assert!(err.contains("dev, prod"));
    }

    #[test]
    fn test_max_length_counts_chars() {
        let v = max_length(3);
        assert!(v.validate("äöü").is_ok());
        assert!(v.validate("abcd").is_err());
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank().validate("x").is_ok());
        assert!(not_blank().validate("   ").is_err());
    }
}
