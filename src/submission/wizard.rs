//! Step-wizard state machine for profile submissions.
//!
//! [`reduce`] is the pure transition function; [`SubmissionWizard`] owns the state and the
//! draft for one session and performs the final hand-off to a [`SubmissionHandler`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::draft::SubmissionDraft;
use super::handler::{SubmissionError, SubmissionHandler, SubmissionReceipt};
use super::schema::{SubmissionSchema, ValidationErrors};
use super::steps::WizardStep;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WizardState {
    InProgress { step: WizardStep },
    /// Terminal; no event is accepted afterwards.
    Submitted { receipt: SubmissionReceipt },
}

impl Default for WizardState {
    fn default() -> Self {
        Self::InProgress {
            step: WizardStep::first(),
        }
    }
}

impl WizardState {
    pub fn step(&self) -> Option<WizardStep> {
        match self {
            Self::InProgress { step } => Some(*step),
            Self::Submitted { .. } => None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardEvent {
    Next,
    Back,
    Submit,
}

/// What the reducer decided for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advance { from: WizardStep, to: WizardStep },
    Retreat { from: WizardStep, to: WizardStep },
    /// `Back` on the first step.
    Stay { step: WizardStep },
    /// The full draft is valid and must be handed to the submission handler.
    Submit,
}

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("{step:?} step is incomplete: {errors}")]
    Invalid {
        step: WizardStep,
        errors: ValidationErrors,
    },
    #[error("profile already submitted")]
    AlreadySubmitted,
    #[error("submit is only available on the review step (currently {step:?})")]
    NotOnFinalStep { step: WizardStep },
    #[error("draft update rejected: {0}")]
    Draft(#[from] serde_json::Error),
    #[error(transparent)]
    Handler(#[from] SubmissionError),
}

impl WizardError {
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Invalid { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

/// Pure transition function: decides the effect of `event` without mutating anything.
///
/// `Next` validates only the current step; on the review step it validates the whole draft
/// and requests submission. `Back` never validates.
pub fn reduce(
    state: &WizardState,
    event: WizardEvent,
    draft: &SubmissionDraft,
    schema: &SubmissionSchema,
) -> Result<Transition, WizardError> {
    let step = match state {
        WizardState::InProgress { step } => *step,
        WizardState::Submitted { .. } => return Err(WizardError::AlreadySubmitted),
    };

    match event {
        WizardEvent::Back => Ok(retreat(step)),
        WizardEvent::Next => {
            schema
                .validate_step(step, draft)
                .map_err(|errors| WizardError::Invalid { step, errors })?;
            match step.next() {
                Some(to) => Ok(Transition::Advance { from: step, to }),
                None => submit_transition(step, draft, schema),
            }
        }
        WizardEvent::Submit if step.is_last() => submit_transition(step, draft, schema),
        WizardEvent::Submit => Err(WizardError::NotOnFinalStep { step }),
    }
}

fn retreat(step: WizardStep) -> Transition {
    match step.previous() {
        Some(to) => Transition::Retreat { from: step, to },
        None => Transition::Stay { step },
    }
}

fn submit_transition(
    step: WizardStep,
    draft: &SubmissionDraft,
    schema: &SubmissionSchema,
) -> Result<Transition, WizardError> {
    schema
        .validate(draft)
        .map_err(|errors| WizardError::Invalid { step, errors })?;
    Ok(Transition::Submit)
}

/// One submission session: current state plus the accumulated draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionWizard {
    state: WizardState,
    draft: SubmissionDraft,
}

impl SubmissionWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft(draft: SubmissionDraft) -> Self {
        Self {
            state: WizardState::default(),
            draft,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn draft(&self) -> &SubmissionDraft {
        &self.draft
    }

    pub fn step(&self) -> Option<WizardStep> {
        self.state.step()
    }

    /// Merges field values into the draft without validating them.
    pub fn update_draft(&mut self, patch: Map<String, Value>) -> Result<(), WizardError> {
        if self.state.is_submitted() {
            return Err(WizardError::AlreadySubmitted);
        }
        self.draft.merge(patch)?;
        Ok(())
    }

    pub fn next<H>(
        &mut self,
        schema: &SubmissionSchema,
        handler: &H,
    ) -> Result<Transition, WizardError>
    where
        H: SubmissionHandler + ?Sized,
    {
        self.dispatch(WizardEvent::Next, schema, handler)
    }

    pub fn back(&mut self) -> Result<Transition, WizardError> {
        let step = self.state.step().ok_or(WizardError::AlreadySubmitted)?;
        let transition = retreat(step);
        self.apply(transition, None);
        Ok(transition)
    }

    pub fn submit<H>(
        &mut self,
        schema: &SubmissionSchema,
        handler: &H,
    ) -> Result<Transition, WizardError>
    where
        H: SubmissionHandler + ?Sized,
    {
        self.dispatch(WizardEvent::Submit, schema, handler)
    }

    /// Runs the reducer and applies its outcome. A failing handler leaves the wizard on the
    /// review step so the submission can be retried.
    pub fn dispatch<H>(
        &mut self,
        event: WizardEvent,
        schema: &SubmissionSchema,
        handler: &H,
    ) -> Result<Transition, WizardError>
    where
        H: SubmissionHandler + ?Sized,
    {
        let transition = reduce(&self.state, event, &self.draft, schema)?;
        let receipt = match transition {
            Transition::Submit => Some(handler.submit(&self.draft)?),
            _ => None,
        };
        self.apply(transition, receipt);
        Ok(transition)
    }

    fn apply(&mut self, transition: Transition, receipt: Option<SubmissionReceipt>) {
        match (transition, receipt) {
            (Transition::Advance { to, .. }, _) | (Transition::Retreat { to, .. }, _) => {
                self.state = WizardState::InProgress { step: to };
            }
            (Transition::Submit, Some(receipt)) => {
                self.state = WizardState::Submitted { receipt };
            }
            (Transition::Stay { .. }, _) | (Transition::Submit, None) => {}
        }
    }

    /// Receipt of the completed submission, once submitted.
    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        match &self.state {
            WizardState::Submitted { receipt } => Some(receipt),
            WizardState::InProgress { .. } => None,
        }
    }
}
