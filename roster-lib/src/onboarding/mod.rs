//! Employee onboarding
//!
//! A three-step wizard (basic details, bank documents, review) over an
//! [`EmployeeForm`], with per-step validation and resumable drafts.

pub mod draft;
mod form;
mod step;
mod wizard;

pub use draft::Draft;
pub use draft::DraftStore;
pub use form::Dependent;
pub use form::EmployeeForm;
pub use form::Gender;
pub use form::MaritalStatus;
pub use step::Step;
pub use step::StepProgress;
pub use step::StepStatus;
pub use wizard::Wizard;
