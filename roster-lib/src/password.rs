//! Password change form

use crate::error::ValidationErrors;
use crate::validation::Validator;

/// Strength rules for new passwords.
///
/// # Example
///
/// ```
/// use roster_lib::password::PasswordPolicy;
///
/// let policy = PasswordPolicy::default().with_min_length(12).require_symbol(true);
/// assert!(!policy.is_satisfied_by("Short1!"));
/// assert!(policy.is_satisfied_by("Longer-Passw0rd"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Minimum length in characters.
    ///
    /// Default: 8
    pub min_length: usize,

    /// Require an uppercase letter.
    ///
    /// Default: true
    pub require_uppercase: bool,

    /// Require a lowercase letter.
    ///
    /// Default: true
    pub require_lowercase: bool,

    /// Require a digit.
    ///
    /// Default: true
    pub require_digit: bool,

    /// Require a character that is neither a letter nor a digit.
    ///
    /// Default: false
    pub require_symbol: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_symbol: false,
        }
    }
}

impl PasswordPolicy {
    /// Creates a new policy with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// A policy that only requires a non-empty password.
    pub fn lenient() -> Self {
        Self {
            min_length: 1,
            require_uppercase: false,
            require_lowercase: false,
            require_digit: false,
            require_symbol: false,
        }
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn require_uppercase(mut self, required: bool) -> Self {
        self.require_uppercase = required;
        self
    }

    pub fn require_lowercase(mut self, required: bool) -> Self {
        self.require_lowercase = required;
        self
    }

    pub fn require_digit(mut self, required: bool) -> Self {
        self.require_digit = required;
        self
    }

    pub fn require_symbol(mut self, required: bool) -> Self {
        self.require_symbol = required;
        self
    }

    /// Returns `true` if `password` meets every rule.
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        self.violation(password).is_none()
    }

    /// The message for the first rule `password` breaks.
    fn violation(&self, password: &str) -> Option<String> {
        if password.chars().count() < self.min_length {
            return Some(format!(
                "Password must be at least {} characters",
                self.min_length
            ));
        }
        if self.require_uppercase && !password.chars().any(char::is_uppercase) {
            return Some("Password must contain an uppercase letter".into());
        }
        if self.require_lowercase && !password.chars().any(char::is_lowercase) {
            return Some("Password must contain a lowercase letter".into());
        }
        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            return Some("Password must contain a digit".into());
        }
        if self.require_symbol && password.chars().all(char::is_alphanumeric) {
            return Some("Password must contain a symbol".into());
        }
        None
    }
}

/// The change-password form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangePassword {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ChangePassword {
    pub fn new(
        current_password: impl Into<String>,
        new_password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            current_password: current_password.into(),
            new_password: new_password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Checks the form against `policy`.
    ///
    /// Every field is required, the new password must satisfy the policy
    /// and differ from the current one, and the confirmation must match.
    pub fn validate(&self, policy: &PasswordPolicy) -> Result<(), ValidationErrors> {
        let violation = policy.violation(&self.new_password);

        Validator::new()
            .field("current_password", &self.current_password)
            .required("Current password is required")
            .field("new_password", &self.new_password)
            .required("New password is required")
            .rule(|_| violation.is_none(), violation.clone().unwrap_or_default())
            .not_equals(
                &self.current_password,
                "New password must differ from the current password",
            )
            .field("confirm_password", &self.confirm_password)
            .required("Please confirm the new password")
            .equals(&self.new_password, "Passwords do not match")
            .validate()
            .into_result()
    }

    /// Empties every field, as after a successful change.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_change() {
        let form = ChangePassword::new("OldPass1", "NewPass22", "NewPass22");
        assert_eq!(form.validate(&PasswordPolicy::default()), Ok(()));
    }

    #[test]
    fn test_all_fields_required() {
        let err = ChangePassword::default()
            .validate(&PasswordPolicy::default())
            .unwrap_err();
        let fields: Vec<&str> = err.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["current_password", "new_password", "confirm_password"]);
    }

    #[test]
    fn test_mismatched_confirmation() {
        let err = ChangePassword::new("OldPass1", "NewPass22", "NewPass23")
            .validate(&PasswordPolicy::default())
            .unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.get("confirm_password").unwrap().message, "Passwords do not match");
    }

    #[test]
    fn test_new_must_differ_from_current() {
        let err = ChangePassword::new("SamePass1", "SamePass1", "SamePass1")
            .validate(&PasswordPolicy::default())
            .unwrap_err();
        assert!(err.contains("new_password"));
    }

    #[test]
    fn test_policy_rules() {
        let policy = PasswordPolicy::default();
        let message = |password: &str| {
            ChangePassword::new("Current1", password, password)
                .validate(&policy)
                .unwrap_err()
                .get("new_password")
                .unwrap()
                .message
                .clone()
        };
        assert_eq!(message("Ab1"), "Password must be at least 8 characters");
        assert_eq!(message("abcdefg1"), "Password must contain an uppercase letter");
        assert_eq!(message("ABCDEFG1"), "Password must contain a lowercase letter");
        assert_eq!(message("Abcdefgh"), "Password must contain a digit");

        assert!(PasswordPolicy::lenient().is_satisfied_by("a"));
        assert!(!PasswordPolicy::lenient().is_satisfied_by(""));
    }

    #[test]
    fn test_clear() {
        let mut form = ChangePassword::new("a", "b", "b");
        form.clear();
        assert_eq!(form, ChangePassword::default());
    }
}
