use serde::Deserialize;
use serde::Serialize;

use super::Bank;
use super::IntoRecord;
use super::STATUS_BADGE;
use super::Status;
use crate::error::FieldValidationError;
use crate::error::ValidationErrors;
use crate::model::Column;
use crate::model::Record;
use crate::validation::Validator;

/// The master lists that share the name/description/status shape, plus banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MasterKind {
    Bank,
    Role,
    Location,
    Designation,
}

impl MasterKind {
    /// Lowercase noun used in messages.
    pub fn noun(self) -> &'static str {
        match self {
            MasterKind::Bank => "bank",
            MasterKind::Role => "role",
            MasterKind::Location => "location",
            MasterKind::Designation => "designation",
        }
    }

    /// Form field key of the name input.
    pub fn name_field(self) -> &'static str {
        match self {
            MasterKind::Bank => "bankName",
            MasterKind::Role => "roleName",
            MasterKind::Location => "locationName",
            MasterKind::Designation => "designationName",
        }
    }

    /// Header label of the name column.
    pub fn name_label(self) -> &'static str {
        match self {
            MasterKind::Bank => "Bank Name",
            MasterKind::Role => "Role Name",
            MasterKind::Location => "Location Name",
            MasterKind::Designation => "Designation Name",
        }
    }
}

/// A role, location or designation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterEntry {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Status,
}

impl MasterEntry {
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>, active: bool) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            status: Status::from_active(active),
        }
    }

    /// Column layout for a master list of the given kind.
    pub fn columns_for(kind: MasterKind) -> Vec<Column> {
        vec![
            Column::new("id", "ID"),
            Column::new("name", kind.name_label()),
            Column::new("description", "Description"),
            Column::new("status", "Status").render(STATUS_BADGE),
        ]
    }
}

impl IntoRecord for MasterEntry {
    fn columns() -> Vec<Column> {
        Self::columns_for(MasterKind::Role)
    }

    fn into_record(self) -> Record {
        Record::with_id(self.id.to_string())
            .set("id", self.id)
            .set("name", self.name)
            .set("description", self.description)
            .set("status", self.status.as_str())
    }
}

/// An item of a master list that can be looked up by id and name.
pub trait MasterItem {
    fn item_id(&self) -> String;
    fn item_name(&self) -> &str;
}

impl MasterItem for Bank {
    fn item_id(&self) -> String {
        self.bank_id.to_string()
    }

    fn item_name(&self) -> &str {
        &self.bank_name
    }
}

impl MasterItem for MasterEntry {
    fn item_id(&self) -> String {
        self.id.to_string()
    }

    fn item_name(&self) -> &str {
        &self.name
    }
}

/// Error code attached when a master name is already taken.
pub const DUPLICATE_NAME: &str = "duplicate";

/// Validates the name typed into a master form.
///
/// The name is required after trimming, and must not match (trimmed,
/// case-insensitively) another entry of `existing`. The entry with id
/// `editing` is skipped so an unchanged save does not collide with itself.
/// A collision is reported with the [`DUPLICATE_NAME`] code.
pub fn validate_master_name<T: MasterItem>(
    kind: MasterKind,
    name: &str,
    existing: &[T],
    editing: Option<&str>,
) -> Result<(), ValidationErrors> {
    let wanted = name.trim().to_lowercase();
    let duplicate = !wanted.is_empty()
        && existing
            .iter()
            .filter(|item| editing != Some(item.item_id().as_str()))
            .any(|item| item.item_name().trim().to_lowercase() == wanted);

    let validator = Validator::new()
        .field(kind.name_field(), name)
        .required(format!("Please enter a {} name", kind.noun()))
        .finalize();

    let validator = if duplicate {
        validator.error(FieldValidationError::with_code(
            kind.name_field(),
            format!("A {} named '{}' already exists", kind.noun(), name.trim()),
            DUPLICATE_NAME,
        ))
    } else {
        validator
    };
    validator.validate().into_result()
}

/// Inline edit state of a master table row.
///
/// Tracks which row is being edited, the text in its input and the name it
/// had when editing started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MasterEdit {
    editing: Option<String>,
    name: String,
    original_name: String,
}

impl MasterEdit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing `item`, seeding the input with its name.
    pub fn begin<T: MasterItem>(&mut self, item: &T) {
        self.editing = Some(item.item_id());
        self.name = item.item_name().to_string();
        self.original_name = self.name.clone();
    }

    /// Update the input text.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Leave edit mode and clear the input.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Id of the row under edit.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Returns `true` if the row with `id` is under edit.
    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.as_deref() == Some(id)
    }

    /// The current input text.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether saving would change anything.
    ///
    /// For a new entry this is any input at all.
    pub fn has_changed(&self) -> bool {
        if self.editing.is_some() {
            self.name != self.original_name
        } else {
            !self.name.is_empty()
        }
    }

    /// Validate the input against `existing`.
    pub fn validate<T: MasterItem>(&self, kind: MasterKind, existing: &[T]) -> Result<(), ValidationErrors> {
        validate_master_name(kind, &self.name, existing, self.editing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banks() -> Vec<Bank> {
        vec![
            Bank::new(1, "Indian Bank"),
            Bank::new(2, "Union Bank"),
            Bank::new(3, "State Bank of India"),
        ]
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = validate_master_name(MasterKind::Bank, "   ", &banks(), None).unwrap_err();
        assert_eq!(err.first().unwrap().field, "bankName");
        assert_eq!(err.first().unwrap().message, "Please enter a bank name");
        assert_eq!(err.first().unwrap().code, None);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = validate_master_name(MasterKind::Bank, " union bank ", &banks(), None).unwrap_err();
        assert_eq!(err.first().unwrap().message, "A bank named 'union bank' already exists");
        assert_eq!(err.first().unwrap().code.as_deref(), Some(DUPLICATE_NAME));
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn test_editing_row_does_not_collide_with_itself() {
        assert!(validate_master_name(MasterKind::Bank, "Union Bank", &banks(), Some("2")).is_ok());
        assert!(validate_master_name(MasterKind::Bank, "Indian Bank", &banks(), Some("2")).is_err());
    }

    #[test]
    fn test_edit_tracks_changes() {
        let banks = banks();
        let mut edit = MasterEdit::new();
        assert!(!edit.has_changed());

        edit.begin(&banks[1]);
        assert!(edit.is_editing("2"));
        assert!(!edit.has_changed());

        edit.set_name("Union Bank of India");
        assert!(edit.has_changed());
        assert!(edit.validate(MasterKind::Bank, &banks).is_ok());

        edit.cancel();
        assert_eq!(edit.editing(), None);
        assert_eq!(edit.name(), "");
    }

    #[test]
    fn test_master_entry_record() {
        let role = MasterEntry::new(1, "Admin", "Full system access", true);
        let record = role.into_record();
        assert_eq!(record.id(), Some("1"));
        assert_eq!(record.get_string("status").unwrap(), Some("Active"));

        let labels: Vec<String> = MasterEntry::columns_for(MasterKind::Location)
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(labels, ["ID", "Location Name", "Description", "Status"]);
    }
}
