use serde::Deserialize;
use serde::Serialize;

use super::IntoRecord;
use super::STATUS_BADGE;
use super::Status;
use crate::model::Column;
use crate::model::Record;

/// An employee as listed on the employee management screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Employee code, e.g. `EMP001`.
    pub id: String,
    pub name: String,
    pub department: String,
    pub designation: String,
    pub location: String,
    pub status: Status,
}

impl IntoRecord for Employee {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("id", "Employee ID"),
            Column::new("name", "Name"),
            Column::new("department", "Department"),
            Column::new("designation", "Designation"),
            Column::new("location", "Location"),
            Column::new("status", "Status").render(STATUS_BADGE),
        ]
    }

    fn into_record(self) -> Record {
        Record::with_id(self.id.clone())
            .set("id", self.id)
            .set("name", self.name)
            .set("department", self.department)
            .set("designation", self.designation)
            .set("location", self.location)
            .set("status", self.status.as_str())
    }
}
