//! Typed models

mod column;
pub mod entity;
mod record;
mod record_serde;
mod value;

pub use column::*;
pub use entity::IntoRecord;
pub use record::*;
pub use record_serde::load_rows_json;
pub use record_serde::read_rows_json;
pub use value::*;
