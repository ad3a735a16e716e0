//! The new-employee form and its validation rules.

use std::sync::OnceLock;

use chrono::Local;
use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

use super::Step;
use crate::model::entity::Employee;
use crate::model::entity::Status;
use crate::validation::ValidationResult;
use crate::validation::Validator;

/// Date format of [`EmployeeForm::date_of_birth`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Single-letter code: `M`, `F` or `O`.
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Other => "O",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "M" | "m" => Some(Gender::Male),
            "F" | "f" => Some(Gender::Female),
            "O" | "o" => Some(Gender::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

/// A family member listed as a dependent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependent {
    pub name: String,
    pub relation: String,
    pub age: Option<u8>,
}

/// Everything entered in the onboarding wizard.
///
/// Text fields hold what the user typed; they are checked by the
/// `validate_*` methods rather than on assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeForm {
    // Personal
    pub full_name: String,
    pub alias_name: String,
    pub father_name: String,
    pub mother_name: String,
    /// `YYYY-MM-DD`.
    pub date_of_birth: String,
    pub gender: Option<Gender>,
    pub marital_status: Option<MaritalStatus>,
    pub qualification: String,

    // Contact
    pub mobile1: String,
    pub mobile2: String,
    pub email: String,

    // Address
    pub permanent_address: String,
    pub permanent_pin_code: String,
    pub correspondence_address: String,
    pub correspondence_pin_code: String,
    pub post_office: String,
    pub district: String,

    // Professional
    pub location: String,
    pub department: String,
    pub designation: String,

    // Identity
    pub aadhaar_no: String,
    pub pan_no: String,

    // Bank
    pub bank_name: String,
    pub branch_name: String,
    pub account_no: String,
    pub ifsc_code: String,

    pub dependents: Vec<Dependent>,
}

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("valid regex"))
}

fn pin_code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"^\d{6}$")
}

fn mobile_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"^\d{10}$")
}

fn aadhaar_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"^\d{4}\s?\d{4}\s?\d{4}$")
}

fn pan_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"^[A-Z]{5}[0-9]{4}[A-Z]$")
}

fn ifsc_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"^[A-Z]{4}0[A-Z0-9]{6}$")
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

impl EmployeeForm {
    /// Returns `true` if any bank field has been filled in.
    pub fn has_bank_details(&self) -> bool {
        [&self.bank_name, &self.branch_name, &self.account_no, &self.ifsc_code]
            .iter()
            .any(|v| !v.trim().is_empty())
    }

    /// Empties the bank fields.
    pub fn clear_bank_details(&mut self) {
        self.bank_name.clear();
        self.branch_name.clear();
        self.account_no.clear();
        self.ifsc_code.clear();
    }

    /// Parsed date of birth, if it is a valid date.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date_of_birth)
    }

    /// Validates the fields shown on `step`, using today's local date.
    pub fn validate_step(&self, step: Step) -> ValidationResult {
        self.validate_step_at(step, Local::now().date_naive())
    }

    /// Validates the fields shown on `step` as of `today`.
    ///
    /// The review step validates the whole form.
    pub fn validate_step_at(&self, step: Step, today: NaiveDate) -> ValidationResult {
        match step {
            Step::BasicDetails => self.validate_basic_details(today),
            Step::Documents => self.validate_bank_details(),
            Step::Review => {
                let mut errors = self.validate_basic_details(today).errors().to_vec();
                errors.extend_from_slice(self.validate_bank_details().errors());
                if errors.is_empty() {
                    ValidationResult::Valid
                } else {
                    ValidationResult::Invalid(errors)
                }
            }
        }
    }

    /// Personal, contact, address, professional and identity fields, plus
    /// dependents.
    pub fn validate_basic_details(&self, today: NaiveDate) -> ValidationResult {
        let mut validator = Validator::new()
            .field("full_name", &self.full_name)
            .required("Full name is required")
            .max_length(100, "Full name must be at most 100 characters")
            .field("father_name", &self.father_name)
            .required("Father's name is required")
            .field("mother_name", &self.mother_name)
            .required("Mother's name is required")
            .field("date_of_birth", &self.date_of_birth)
            .required("Date of birth is required")
            .rule(|v| parse_date(v).is_some(), "Date of birth must be a date (YYYY-MM-DD)")
            .rule(
                |v| parse_date(v).is_none_or(|d| d <= today),
                "Date of birth cannot be in the future",
            )
            .field("gender", self.gender.map(Gender::code).unwrap_or_default())
            .required("Please select a gender")
            .field("qualification", &self.qualification)
            .required("Qualification is required")
            .field("mobile1", &self.mobile1)
            .required("Mobile number is required")
            .pattern(mobile_re(), "Mobile number must be 10 digits")
            .field("mobile2", &self.mobile2)
            .pattern(mobile_re(), "Mobile number must be 10 digits")
            .field("email", &self.email)
            .required("Email address is required")
            .email("Please enter a valid email address")
            .field("permanent_address", &self.permanent_address)
            .required("Permanent address is required")
            .field("permanent_pin_code", &self.permanent_pin_code)
            .required("Permanent pin code is required")
            .pattern(pin_code_re(), "Pin code must be 6 digits")
            .field("correspondence_pin_code", &self.correspondence_pin_code)
            .pattern(pin_code_re(), "Pin code must be 6 digits")
            .field("post_office", &self.post_office)
            .required("Post office is required")
            .field("district", &self.district)
            .required("District is required")
            .field("location", &self.location)
            .required("Location is required")
            .field("department", &self.department)
            .required("Department is required")
            .field("designation", &self.designation)
            .required("Designation is required")
            .field("aadhaar_no", &self.aadhaar_no)
            .required("Aadhaar number is required")
            .pattern(aadhaar_re(), "Aadhaar number must be 12 digits")
            .field("pan_no", &self.pan_no)
            .required("PAN is required")
            .pattern(pan_re(), "PAN must look like ABCDE1234F")
            .finalize();

        for (index, dependent) in self.dependents.iter().enumerate() {
            validator = validator
                .field(format!("dependents[{index}].name"), &dependent.name)
                .required("Dependent name is required")
                .field(format!("dependents[{index}].relation"), &dependent.relation)
                .required("Dependent relation is required")
                .finalize();
        }

        validator.validate()
    }

    /// Bank fields. All empty is valid; otherwise all four are required.
    pub fn validate_bank_details(&self) -> ValidationResult {
        if !self.has_bank_details() {
            return ValidationResult::Valid;
        }

        Validator::new()
            .field("bank_name", &self.bank_name)
            .required("Bank name is required")
            .field("branch_name", &self.branch_name)
            .required("Branch name is required")
            .field("account_no", &self.account_no)
            .required("Account number is required")
            .rule(
                |v| v.trim().chars().all(|c| c.is_ascii_digit()),
                "Account number must contain digits only",
            )
            .field("ifsc_code", &self.ifsc_code)
            .required("IFSC code is required")
            .pattern(ifsc_re(), "IFSC code must look like ABCD0123456")
            .validate()
    }

    /// The employee-list row for this form under the given employee code.
    pub fn to_employee(&self, id: impl Into<String>) -> Employee {
        Employee {
            id: id.into(),
            name: self.full_name.trim().to_string(),
            department: self.department.trim().to_string(),
            designation: self.designation.trim().to_string(),
            location: self.location.trim().to_string(),
            status: Status::Active,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    pub(crate) fn complete_form() -> EmployeeForm {
        EmployeeForm {
            full_name: "John Doe".into(),
            father_name: "Richard Doe".into(),
            mother_name: "Jane Doe".into(),
            date_of_birth: "1990-04-12".into(),
            gender: Some(Gender::Male),
            marital_status: Some(MaritalStatus::Single),
            qualification: "B.Tech".into(),
            mobile1: "9876543210".into(),
            email: "john.doe@example.com".into(),
            permanent_address: "12 MG Road".into(),
            permanent_pin_code: "560001".into(),
            post_office: "MG Road".into(),
            district: "Bengaluru".into(),
            location: "Bengaluru".into(),
            department: "IT".into(),
            designation: "Developer".into(),
            aadhaar_no: "1234 5678 9012".into(),
            pan_no: "ABCDE1234F".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_form_is_valid() {
        let form = complete_form();
        assert!(form.validate_basic_details(today()).is_valid());
        assert!(form.validate_step_at(Step::Review, today()).is_valid());
    }

    #[test]
    fn test_empty_form_reports_required_fields_in_order() {
        let result = EmployeeForm::default().validate_basic_details(today());
        let fields: Vec<&str> = result.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields[0], "full_name");
        assert!(fields.contains(&"gender"));
        assert!(fields.contains(&"pan_no"));
        assert!(!fields.contains(&"alias_name"));
        assert!(!fields.contains(&"mobile2"));
    }

    #[test]
    fn test_format_checks() {
        let form = EmployeeForm {
            mobile1: "98765".into(),
            email: "john.doe".into(),
            permanent_pin_code: "5600".into(),
            aadhaar_no: "1234".into(),
            pan_no: "abcde1234f".into(),
            ..complete_form()
        };
        let err = form.validate_basic_details(today()).into_result().unwrap_err();
        for field in ["mobile1", "email", "permanent_pin_code", "aadhaar_no", "pan_no"] {
            assert!(err.contains(field), "{field} should fail");
        }
        assert_eq!(err.len(), 5);
    }

    #[test]
    fn test_date_of_birth() {
        let mut form = complete_form();
        form.date_of_birth = "12/04/1990".into();
        let err = form.validate_basic_details(today()).into_result().unwrap_err();
        assert_eq!(
            err.get("date_of_birth").unwrap().message,
            "Date of birth must be a date (YYYY-MM-DD)"
        );

        form.date_of_birth = "2024-06-02".into();
        let err = form.validate_basic_details(today()).into_result().unwrap_err();
        assert_eq!(
            err.get("date_of_birth").unwrap().message,
            "Date of birth cannot be in the future"
        );

        form.date_of_birth = "2024-06-01".into();
        assert!(form.validate_basic_details(today()).is_valid());
        assert_eq!(form.birth_date(), Some(today()));
    }

    #[test]
    fn test_dependents_need_name_and_relation() {
        let mut form = complete_form();
        form.dependents.push(Dependent {
            name: "Ann".into(),
            relation: String::new(),
            age: Some(8),
        });
        let err = form.validate_basic_details(today()).into_result().unwrap_err();
        assert!(err.contains("dependents[0].relation"));
        assert!(!err.contains("dependents[0].name"));
    }

    #[test]
    fn test_bank_details_all_or_nothing() {
        let mut form = complete_form();
        assert!(form.validate_bank_details().is_valid());

        form.bank_name = "State Bank".into();
        let err = form.validate_bank_details().into_result().unwrap_err();
        let fields: Vec<&str> = err.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["branch_name", "account_no", "ifsc_code"]);

        form.branch_name = "MG Road".into();
        form.account_no = "00112233445".into();
        form.ifsc_code = "SBIN0001234".into();
        assert!(form.validate_bank_details().is_valid());

        form.ifsc_code = "SBIN1001234".into();
        assert!(form.validate_bank_details().is_invalid());
    }

    #[test]
    fn test_review_combines_steps() {
        let mut form = complete_form();
        form.full_name.clear();
        form.ifsc_code = "SBIN0001234".into();
        let result = form.validate_step_at(Step::Review, today());
        let fields: Vec<&str> = result.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["full_name", "bank_name", "branch_name", "account_no"]);
    }

    #[test]
    fn test_to_employee() {
        let employee = complete_form().to_employee("EMP004");
        assert_eq!(employee.id, "EMP004");
        assert_eq!(employee.name, "John Doe");
        assert_eq!(employee.status, Status::Active);
    }

    #[test]
    fn test_gender_codes() {
        assert_eq!(Gender::from_code("f"), Some(Gender::Female));
        assert_eq!(Gender::Other.code(), "O");
        assert_eq!(Gender::from_code("X"), None);
    }
}
