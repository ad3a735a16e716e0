//! Validator builder for fluent validation API.

use regex::Regex;

use super::result::ValidationResult;
use crate::error::FieldValidationError;

/// Builder for validating multiple form fields.
///
/// Rules run eagerly as they are added. Each field reports at most one
/// error: the first rule it fails.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldValidationError>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add a field to validate.
    pub fn field<'a>(self, name: impl Into<String>, value: &'a str) -> FieldBuilder<'a> {
        FieldBuilder {
            validator: self,
            name: name.into(),
            value,
            error: None,
        }
    }

    /// Record an error detected outside the field rules, such as a check
    /// against other rows.
    pub fn error(mut self, error: FieldValidationError) -> Self {
        self.errors.push(error);
        self
    }

    /// Finish and return the collected result.
    pub fn validate(self) -> ValidationResult {
        if self.errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(self.errors)
        }
    }
}

/// Builder for adding validation rules to a single field.
#[derive(Debug)]
pub struct FieldBuilder<'a> {
    validator: Validator,
    name: String,
    value: &'a str,
    error: Option<String>,
}

impl<'a> FieldBuilder<'a> {
    /// Add a custom validation rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: FnOnce(&str) -> bool,
    {
        if self.error.is_none() && !f(self.value) {
            self.error = Some(msg.into());
        }
        self
    }

    /// Require the field to be non-empty.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() >= min, msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() <= max, msg)
    }

    /// Require the trimmed value to match a regex pattern.
    ///
    /// Empty is valid; use `required()` for non-empty.
    pub fn pattern(self, re: &Regex, msg: impl Into<String>) -> Self {
        self.rule(|v| v.trim().is_empty() || re.is_match(v.trim()), msg)
    }

    /// Require a valid email address.
    ///
    /// Empty is valid; use `required()` for non-empty.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(
            |v| v.trim().is_empty() || email_address::EmailAddress::is_valid(v.trim()),
            msg,
        )
    }

    /// Require the value to equal another value.
    pub fn equals(self, other: &str, msg: impl Into<String>) -> Self {
        self.rule(|v| v == other, msg)
    }

    /// Require the value to differ from another value.
    pub fn not_equals(self, other: &str, msg: impl Into<String>) -> Self {
        self.rule(|v| v != other, msg)
    }

    /// Continue to the next field.
    pub fn field<'b>(self, name: impl Into<String>, value: &'b str) -> FieldBuilder<'b> {
        self.finalize().field(name, value)
    }

    /// Finalize and return the collected result.
    pub fn validate(self) -> ValidationResult {
        self.finalize().validate()
    }

    /// Finalize this field and return the validator.
    pub fn finalize(self) -> Validator {
        let mut validator = self.validator;
        if let Some(message) = self.error {
            validator
                .errors
                .push(FieldValidationError::new(self.name, message));
        }
        validator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_failing_rule_wins() {
        let result = Validator::new()
            .field("name", "")
            .required("Name is required")
            .min_length(3, "Too short")
            .validate();

        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].message, "Name is required");
    }

    #[test]
    fn test_fields_report_in_order() {
        let result = Validator::new()
            .field("a", "ok")
            .required("a required")
            .field("b", "")
            .required("b required")
            .field("c", "")
            .required("c required")
            .validate();

        let fields: Vec<&str> = result.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["b", "c"]);
    }

    #[test]
    fn test_pattern_and_email_allow_empty() {
        let digits = Regex::new(r"^\d+$").unwrap();
        let result = Validator::new()
            .field("pin", "")
            .pattern(&digits, "digits only")
            .field("email", "")
            .email("bad email")
            .validate();
        assert!(result.is_valid());

        let result = Validator::new()
            .field("pin", "12a")
            .pattern(&digits, "digits only")
            .field("email", "not-an-email")
            .email("bad email")
            .validate();
        assert_eq!(result.errors().len(), 2);
    }

    #[test]
    fn test_into_result() {
        let err = Validator::new()
            .field("x", "a")
            .equals("b", "must match")
            .validate()
            .into_result()
            .unwrap_err();
        assert!(err.contains("x"));
        assert_eq!(err.to_string(), "1 field(s) failed validation: x: must match");
    }

    #[test]
    fn test_external_error_keeps_code() {
        let result = Validator::new()
            .field("name", "")
            .required("Name is required")
            .finalize()
            .error(FieldValidationError::with_code("id", "Already taken", "duplicate"))
            .validate();

        assert_eq!(result.errors().len(), 2);
        assert_eq!(result.errors()[1].code.as_deref(), Some("duplicate"));
        assert_eq!(result.errors()[1].to_string(), "id: Already taken (duplicate)");
    }
}
