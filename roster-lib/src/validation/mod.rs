//! Form validation.
//!
//! A fluent validator over plain string field values, shared by the master
//! data forms, the onboarding wizard and the change-password form.
//!
//! # Example
//!
//! ```
//! use roster_lib::validation::Validator;
//!
//! let result = Validator::new()
//!     .field("bankName", "  ")
//!         .required("Please enter a bank name")
//!     .field("email", "jane@example.com")
//!         .required("Email is required")
//!         .email("Please enter a valid email")
//!     .validate();
//!
//! assert!(result.is_invalid());
//! assert_eq!(result.first_error().unwrap().field, "bankName");
//! ```

mod result;
mod validator;

pub use result::ValidationResult;
pub use validator::{FieldBuilder, Validator};
