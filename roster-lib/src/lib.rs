//! Roster core library
//!
//! The view-model layer of an employee management system: a generic
//! filter/sort/paginate engine over record snapshots, CSV export of the
//! filtered view, typed master data, the employee onboarding wizard with
//! draft storage, and password change validation.

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod onboarding;
pub mod password;
pub mod validation;
pub mod view;

pub use config::ViewConfig;
pub use view::Snapshot;
pub use view::TableView;
