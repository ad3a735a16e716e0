//! The onboarding wizard state machine.

use chrono::Local;
use chrono::NaiveDate;
use chrono::Utc;
use uuid::Uuid;

use super::Draft;
use super::EmployeeForm;
use super::Step;
use super::StepProgress;
use super::StepStatus;
use crate::error::ValidationErrors;

/// Walks a user through [`Step::ALL`] while they fill in an [`EmployeeForm`].
///
/// Moving forward validates the current step; moving back never does. The
/// review step validates the whole form and, once it passes, marks the
/// wizard complete.
#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    id: Uuid,
    step: Step,
    form: EmployeeForm,
    complete: bool,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    /// A fresh wizard on the first step with an empty form.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            step: Step::BasicDetails,
            form: EmployeeForm::default(),
            complete: false,
        }
    }

    /// Resumes a wizard from a saved draft.
    pub fn from_draft(draft: Draft) -> Self {
        Self {
            id: draft.id,
            step: draft.step,
            form: draft.form,
            complete: false,
        }
    }

    /// Identifier shared with the wizard's drafts.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    /// Mutable access to the form. Editing reopens a completed wizard.
    pub fn form_mut(&mut self) -> &mut EmployeeForm {
        self.complete = false;
        &mut self.form
    }

    /// Returns `true` once the review step has been confirmed.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Validates the current step and advances.
    ///
    /// On the review step a successful call completes the wizard and the
    /// step stays on review. Returns the step the wizard is now on.
    pub fn next(&mut self) -> Result<Step, ValidationErrors> {
        self.next_at(Local::now().date_naive())
    }

    /// [`next`](Self::next) with an explicit current date.
    pub fn next_at(&mut self, today: NaiveDate) -> Result<Step, ValidationErrors> {
        self.form.validate_step_at(self.step, today).into_result()?;

        match self.step.next() {
            Some(next) => {
                log::debug!("[wizard] {} -> {}", self.step, next);
                self.step = next;
            }
            None => {
                log::debug!("[wizard] {} complete", self.id);
                self.complete = true;
            }
        }
        Ok(self.step)
    }

    /// Goes back one step, keeping everything entered.
    ///
    /// Returns `None` on the first step.
    pub fn previous(&mut self) -> Option<Step> {
        let previous = self.step.previous()?;
        self.step = previous;
        self.complete = false;
        Some(previous)
    }

    /// Skips an optional step without validating it.
    ///
    /// Skipping the bank details step discards any partially entered bank
    /// fields. Returns `None` if the current step cannot be skipped.
    pub fn skip(&mut self) -> Option<Step> {
        if !self.step.is_skippable() {
            return None;
        }
        let next = self.step.next()?;
        if self.step == Step::Documents && self.form.has_bank_details() {
            log::debug!("[wizard] discarding bank details on skip");
            self.form.clear_bank_details();
        }
        self.step = next;
        Some(next)
    }

    /// Step indicator state for every step.
    pub fn progress(&self) -> Vec<StepProgress> {
        Step::ALL
            .into_iter()
            .map(|step| {
                let status = if step < self.step || self.complete {
                    StepStatus::Completed
                } else if step == self.step {
                    StepStatus::Current
                } else {
                    StepStatus::Upcoming
                };
                StepProgress { step, status }
            })
            .collect()
    }

    /// Snapshot of the wizard for the draft store.
    pub fn to_draft(&self) -> Draft {
        Draft {
            id: self.id,
            step: self.step,
            form: self.form.clone(),
            saved_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::form::tests::complete_form;
    use crate::onboarding::form::tests::today;

    fn statuses(wizard: &Wizard) -> Vec<StepStatus> {
        wizard.progress().iter().map(|p| p.status).collect()
    }

    #[test]
    fn test_cannot_advance_with_missing_fields() {
        let mut wizard = Wizard::new();
        let err = wizard.next_at(today()).unwrap_err();
        assert!(err.contains("full_name"));
        assert_eq!(wizard.step(), Step::BasicDetails);
    }

    #[test]
    fn test_walks_all_steps() {
        let mut wizard = Wizard::new();
        *wizard.form_mut() = complete_form();

        assert_eq!(wizard.next_at(today()), Ok(Step::Documents));
        assert_eq!(wizard.next_at(today()), Ok(Step::Review));
        assert!(!wizard.is_complete());
        assert_eq!(wizard.next_at(today()), Ok(Step::Review));
        assert!(wizard.is_complete());
        assert_eq!(statuses(&wizard), [StepStatus::Completed; 3]);
    }

    #[test]
    fn test_partial_bank_details_block_documents() {
        let mut wizard = Wizard::new();
        *wizard.form_mut() = complete_form();
        wizard.next_at(today()).unwrap();

        wizard.form_mut().bank_name = "State Bank".into();
        let err = wizard.next_at(today()).unwrap_err();
        assert!(err.contains("ifsc_code"));
        assert_eq!(wizard.step(), Step::Documents);
    }

    #[test]
    fn test_skip_only_on_documents() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.skip(), None);

        *wizard.form_mut() = complete_form();
        wizard.next_at(today()).unwrap();
        wizard.form_mut().bank_name = "State Bank".into();

        assert_eq!(wizard.skip(), Some(Step::Review));
        assert!(!wizard.form().has_bank_details());
        assert_eq!(wizard.skip(), None);
    }

    #[test]
    fn test_previous_keeps_form() {
        let mut wizard = Wizard::new();
        *wizard.form_mut() = complete_form();
        wizard.next_at(today()).unwrap();

        assert_eq!(wizard.previous(), Some(Step::BasicDetails));
        assert_eq!(wizard.previous(), None);
        assert_eq!(wizard.form().full_name, "John Doe");
    }

    #[test]
    fn test_progress() {
        let mut wizard = Wizard::new();
        assert_eq!(
            statuses(&wizard),
            [StepStatus::Current, StepStatus::Upcoming, StepStatus::Upcoming]
        );

        *wizard.form_mut() = complete_form();
        wizard.next_at(today()).unwrap();
        assert_eq!(
            statuses(&wizard),
            [StepStatus::Completed, StepStatus::Current, StepStatus::Upcoming]
        );
    }

    #[test]
    fn test_draft_resumes_step_and_form() {
        let mut wizard = Wizard::new();
        *wizard.form_mut() = complete_form();
        wizard.next_at(today()).unwrap();

        let resumed = Wizard::from_draft(wizard.to_draft());
        assert_eq!(resumed, wizard);
    }
}
