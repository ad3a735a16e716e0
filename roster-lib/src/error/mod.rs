//! Error types

mod draft;
mod export;
mod field;
mod load;
mod validation;

pub use draft::*;
pub use export::*;
pub use field::*;
pub use load::*;
pub use validation::*;
