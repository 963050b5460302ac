//! Step sequencer for the two-step onboarding wizard.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::error_map::ErrorMap;
use super::form::FormState;

/// Wizard step.
///
/// 向导步骤。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    /// Account type, names, phone, links.
    BasicInfo,
    /// Website verification and submission.
    Verification,
}

impl Step {
    pub const FIRST: Step = Step::BasicInfo;

    /// One-based position, as shown in the progress indicator.
    pub fn index(&self) -> u8 {
        match self {
            Step::BasicInfo => 1,
            Step::Verification => 2,
        }
    }

    pub fn from_index(index: u8) -> Option<Step> {
        match index {
            1 => Some(Step::BasicInfo),
            2 => Some(Step::Verification),
            _ => None,
        }
    }

    fn next(&self) -> Option<Step> {
        Step::from_index(self.index() + 1)
    }

    fn previous(&self) -> Option<Step> {
        self.index().checked_sub(1).and_then(Step::from_index)
    }
}

/// Result of an `advance` attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Advanced { from: Step, to: Step },
    /// Validation failed; the step did not change.
    Blocked { errors: ErrorMap },
    /// Already on the last step. Submission is not the sequencer's job.
    AtLastStep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequencer {
    current: Step,
    completed: BTreeSet<Step>,
}

impl Default for StepSequencer {
    fn default() -> Self {
        Self {
            current: Step::FIRST,
            completed: BTreeSet::new(),
        }
    }
}

impl StepSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Step {
        self.current
    }

    pub fn is_completed(&self, step: Step) -> bool {
        self.completed.contains(&step)
    }

    pub fn completed(&self) -> impl Iterator<Item = Step> + '_ {
        self.completed.iter().copied()
    }

    /// Validate the current step and move forward when it passes.
    pub fn advance(&mut self, form: &mut FormState) -> AdvanceOutcome {
        let Some(next) = self.current.next() else {
            return AdvanceOutcome::AtLastStep;
        };

        let valid = match self.current {
            Step::BasicInfo => form.validate_basic_info(),
            Step::Verification => true,
        };
        if !valid {
            return AdvanceOutcome::Blocked {
                errors: form.errors().clone(),
            };
        }

        let from = self.current;
        self.completed.insert(from);
        self.current = next;
        AdvanceOutcome::Advanced { from, to: next }
    }

    /// Go back one step, never before the first. No validation.
    pub fn retreat(&mut self) -> Step {
        if let Some(previous) = self.current.previous() {
            self.current = previous;
        }
        self.current
    }
}
