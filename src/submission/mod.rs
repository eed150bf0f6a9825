//! Multi-step artist profile submission: step schemas, the wizard state machine, the
//! submission hand-off boundary, and the HTTP session surface.

pub mod draft;
pub mod handler;
pub mod preview;
pub mod repository;
pub mod router;
pub mod schema;
pub mod service;
pub mod steps;
pub mod wizard;

pub use draft::SubmissionDraft;
pub use handler::{
    LoggingSubmissionHandler, SubmissionError, SubmissionHandler, SubmissionId, SubmissionReceipt,
};
pub use preview::{preview_artist, preview_card};
pub use repository::{WizardId, WizardRecord, WizardRepository};
pub use router::submission_router;
pub use schema::{FieldError, SchemaError, StepSchema, SubmissionSchema, ValidationErrors};
pub use service::{SubmissionService, SubmissionServiceError, WizardView};
pub use steps::WizardStep;
pub use wizard::{reduce, SubmissionWizard, Transition, WizardError, WizardEvent, WizardState};
