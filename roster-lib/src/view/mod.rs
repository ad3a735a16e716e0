//! Table view engine
//!
//! Rows flow through three pure stages, always in this order:
//!
//! 1. [`filter::apply`] keeps the rows matching the global query and the
//!    column filters.
//! 2. [`sort::apply`] orders them by at most one column.
//! 3. [`page::apply`] cuts out the current page.
//!
//! [`TableView`] owns the rows and the [`ViewState`] and composes the stages.

pub mod filter;
pub mod page;
pub mod sort;
mod state;
mod store;
mod table;

pub use page::Page;
pub use state::*;
pub use store::RecordStore;
pub use table::Snapshot;
pub use table::TableView;
