use serde::Deserialize;
use serde::Serialize;

use super::IntoRecord;
use crate::model::Column;
use crate::model::Record;

/// A bank from the bank master.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    pub bank_id: i64,
    pub bank_name: String,
}

impl Bank {
    pub fn new(bank_id: i64, bank_name: impl Into<String>) -> Self {
        Self {
            bank_id,
            bank_name: bank_name.into(),
        }
    }
}

impl IntoRecord for Bank {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("bankId", "Bank ID"),
            Column::new("bankName", "Bank Name"),
        ]
    }

    fn into_record(self) -> Record {
        Record::with_id(self.bank_id.to_string())
            .set("bankId", self.bank_id)
            .set("bankName", self.bank_name)
    }
}
