//! Wizard steps and the step indicator.

use serde::Deserialize;
use serde::Serialize;

/// A step of the onboarding wizard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Step {
    BasicDetails,
    /// Bank details. Optional.
    Documents,
    Review,
}

impl Step {
    /// All steps in order.
    pub const ALL: [Step; 3] = [Step::BasicDetails, Step::Documents, Step::Review];

    /// One-based position shown in the step indicator.
    pub fn number(self) -> u8 {
        match self {
            Step::BasicDetails => 1,
            Step::Documents => 2,
            Step::Review => 3,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.number() == number)
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::BasicDetails => "Basic Details",
            Step::Documents => "Documents",
            Step::Review => "Review",
        }
    }

    /// The following step, or `None` on the last one.
    pub fn next(self) -> Option<Self> {
        match self {
            Step::BasicDetails => Some(Step::Documents),
            Step::Documents => Some(Step::Review),
            Step::Review => None,
        }
    }

    /// The preceding step, or `None` on the first one.
    pub fn previous(self) -> Option<Self> {
        match self {
            Step::BasicDetails => None,
            Step::Documents => Some(Step::BasicDetails),
            Step::Review => Some(Step::Documents),
        }
    }

    /// Whether the user may move past this step without filling it in.
    pub fn is_skippable(self) -> bool {
        matches!(self, Step::Documents)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// State of one circle in the step indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

/// A step together with its indicator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepProgress {
    pub step: Step,
    pub status: StepStatus,
}
