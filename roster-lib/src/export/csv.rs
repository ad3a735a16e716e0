//! CSV export.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ExportError;
use crate::model::Column;
use crate::model::Record;
use crate::model::Value;

/// What goes into the header row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderStyle {
    /// Column labels, falling back to the key for unlabeled columns.
    #[default]
    Labels,
    /// Column keys.
    Keys,
    /// No header row.
    None,
}

/// Writes rows as CSV, one line per record and one field per column.
///
/// Cells are written in their display form; null and missing cells are
/// written empty. With no columns, the columns are inferred from the rows.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    columns: Vec<Column>,
    header: HeaderStyle,
    delimiter: u8,
}

impl CsvExporter {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            header: HeaderStyle::default(),
            delimiter: b',',
        }
    }

    /// Sets the header style.
    pub fn with_header(mut self, header: HeaderStyle) -> Self {
        self.header = header;
        self
    }

    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Writes `rows` to `writer`. Returns the number of data rows written.
    pub fn write<W: Write>(&self, rows: &[Record], writer: W) -> Result<usize, ExportError> {
        let inferred;
        let columns = if self.columns.is_empty() {
            inferred = Column::infer(rows);
            &inferred
        } else {
            &self.columns
        };

        let mut csv_writer = ::csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(writer);

        match self.header {
            HeaderStyle::Labels => csv_writer.write_record(columns.iter().map(|c| {
                if c.label.is_empty() {
                    c.key.as_str()
                } else {
                    c.label.as_str()
                }
            }))?,
            HeaderStyle::Keys => csv_writer.write_record(columns.iter().map(|c| c.key.as_str()))?,
            HeaderStyle::None => {}
        }

        for record in rows {
            csv_writer.write_record(columns.iter().map(|c| cell(record.get(&c.key))))?;
        }
        csv_writer.flush()?;

        log::debug!("[export] wrote {} rows x {} columns", rows.len(), columns.len());
        Ok(rows.len())
    }

    /// Writes `rows` to a new file at `path`, replacing any existing file.
    pub fn write_to_path(&self, rows: &[Record], path: impl AsRef<Path>) -> Result<usize, ExportError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let written = self.write(rows, file)?;
        log::info!("[export] {} rows written to {}", written, path.display());
        Ok(written)
    }

    /// Renders `rows` to a CSV string.
    pub fn to_csv_string(&self, rows: &[Record]) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        self.write(rows, &mut buffer)?;
        // The writer only receives UTF-8 fields.
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(value) => value.to_string(),
    }
}
