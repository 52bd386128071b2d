//! Request validation helpers.
//!
//! Validators collect every failed rule so one 400 response lists all of them.

use crate::server::error::AppError;

/// Accumulates validation failures for a single request body.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks that the trimmed value has between `min` and `max` characters.
    pub fn length(&mut self, field: &str, value: &str, min: usize, max: usize) -> &mut Self {
        let len = value.trim().chars().count();
        if len < min {
            if min == 1 {
                self.errors.push(format!("{} must not be empty", field));
            } else {
                self.errors
                    .push(format!("{} must be at least {} characters", field, min));
            }
        } else if len > max {
            self.errors
                .push(format!("{} must be at most {} characters", field, max));
        }
        self
    }

    /// Same as [`Validator::length`] for optional fields; `None` passes.
    pub fn optional_length(
        &mut self,
        field: &str,
        value: Option<&str>,
        max: usize,
    ) -> &mut Self {
        if let Some(value) = value {
            self.length(field, value, 0, max);
        }
        self
    }

    pub fn email(&mut self, field: &str, value: &str) -> &mut Self {
        if !is_valid_email(value) {
            self.errors.push(format!("{} must be a valid email", field));
        }
        self
    }

    /// Checks volume numbers are positive and not repeated.
    pub fn volume_numbers(&mut self, numbers: impl IntoIterator<Item = i32>) -> &mut Self {
        let mut seen = std::collections::HashSet::new();
        for number in numbers {
            if number < 1 {
                self.errors
                    .push(format!("Volume number {} must be positive", number));
            } else if !seen.insert(number) {
                self.errors
                    .push(format!("Volume number {} is repeated", number));
            }
        }
        self
    }

    /// Adds a failure when `condition` is false.
    pub fn check(&mut self, condition: bool, message: impl Into<String>) -> &mut Self {
        if !condition {
            self.errors.push(message.into());
        }
        self
    }

    /// Consumes the collected failures.
    ///
    /// # Returns
    /// - `Ok(())` - Every rule passed
    /// - `Err(AppError::Validation)` - One message per failed rule
    pub fn finish(&mut self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(std::mem::take(&mut self.errors)))
        }
    }
}

/// Loose email shape check: one `@`, non-empty local part, dotted domain, no spaces.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split('.')
                    .filter(|part| !part.is_empty())
                    .count()
                    >= 2
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_emails() {
        assert!(is_valid_email("reader@example.com"));
        assert!(is_valid_email("first.last+manga@mail.co.jp"));
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["", "reader", "reader@", "@example.com", "a@b", "a b@c.com", "a@@b.com", "a@b.com."] {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
    }

    #[test]
    fn collects_every_failure() {
        let result = Validator::new()
            .length("name", " ", 2, 100)
            .email("email", "nope")
            .length("password", "123", 6, 128)
            .volume_numbers([1, 0, 1])
            .finish();

        match result {
            Err(AppError::Validation(errors)) => assert_eq!(errors.len(), 5),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn passes_valid_input() {
        assert!(Validator::new()
            .length("name", "Kaito", 2, 100)
            .optional_length("genre", None, 100)
            .volume_numbers([1, 2, 3])
            .finish()
            .is_ok());
    }
}
