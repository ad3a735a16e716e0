use crate::error::FieldValidationError;
use crate::error::ValidationErrors;

/// Result of validating one or more fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// All fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation.
    Invalid(Vec<FieldValidationError>),
}

impl ValidationResult {
    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all validation errors.
    pub fn errors(&self) -> &[FieldValidationError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&FieldValidationError> {
        self.errors().first()
    }

    /// Convert into a `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(errors) => Err(ValidationErrors::new(errors)),
        }
    }
}
