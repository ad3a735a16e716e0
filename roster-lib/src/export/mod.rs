//! Export of the filtered view

mod csv;

pub use self::csv::CsvExporter;
pub use self::csv::HeaderStyle;
