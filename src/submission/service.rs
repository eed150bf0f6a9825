use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::draft::SubmissionDraft;
use super::handler::{SubmissionHandler, SubmissionReceipt};
use super::preview::preview_card;
use super::repository::{WizardId, WizardRecord, WizardRepository};
use super::schema::SubmissionSchema;
use super::steps::WizardStep;
use super::wizard::{SubmissionWizard, Transition, WizardError};
use crate::directory::views::ArtistCardView;
use crate::repository::RepositoryError;

/// Service composing the session store, the combined schema, and the submission handler.
///
/// Changes to one session run one at a time: each holds that session's lock from the
/// read through the handler call to the write.
pub struct SubmissionService<R, H> {
    repository: Arc<R>,
    handler: Arc<H>,
    schema: Arc<SubmissionSchema>,
    sessions: Mutex<HashMap<WizardId, Arc<Mutex<()>>>>,
}

static WIZARD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_wizard_id() -> WizardId {
    let id = WIZARD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    WizardId(format!("wiz-{id:06}"))
}

impl<R, H> SubmissionService<R, H>
where
    R: WizardRepository + 'static,
    H: SubmissionHandler + 'static,
{
    pub fn new(repository: Arc<R>, handler: Arc<H>) -> Self {
        Self::with_schema(repository, handler, SubmissionSchema::standard())
    }

    pub fn with_schema(repository: Arc<R>, handler: Arc<H>, schema: SubmissionSchema) -> Self {
        Self {
            repository,
            handler,
            schema: Arc::new(schema),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Opens a new session on the first step with an empty draft.
    pub fn start(&self) -> Result<WizardRecord, SubmissionServiceError> {
        let record = WizardRecord {
            id: next_wizard_id(),
            wizard: SubmissionWizard::new(),
        };
        let stored = self.repository.insert(record)?;
        debug!(wizard_id = %stored.id.0, "submission wizard started");
        Ok(stored)
    }

    pub fn get(&self, id: &WizardId) -> Result<WizardRecord, SubmissionServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn update_draft(
        &self,
        id: &WizardId,
        patch: Map<String, Value>,
    ) -> Result<WizardRecord, SubmissionServiceError> {
        self.mutate(id, |wizard, _, _| wizard.update_draft(patch).map(|_| None))
    }

    pub fn next(&self, id: &WizardId) -> Result<WizardRecord, SubmissionServiceError> {
        self.mutate(id, |wizard, schema, handler| {
            wizard.next(schema, handler).map(Some)
        })
    }

    pub fn back(&self, id: &WizardId) -> Result<WizardRecord, SubmissionServiceError> {
        self.mutate(id, |wizard, _, _| wizard.back().map(Some))
    }

    pub fn preview(&self, id: &WizardId) -> Result<ArtistCardView, SubmissionServiceError> {
        let record = self.get(id)?;
        Ok(preview_card(record.wizard.draft()))
    }

    /// Loads the session, applies `change`, and persists the result only on success.
    fn mutate<F>(&self, id: &WizardId, change: F) -> Result<WizardRecord, SubmissionServiceError>
    where
        F: FnOnce(
            &mut SubmissionWizard,
            &SubmissionSchema,
            &H,
        ) -> Result<Option<Transition>, WizardError>,
    {
        // Unknown ids fail here without allocating a lock.
        self.get(id)?;
        let session = self.session_lock(id);
        let _held = session.lock().unwrap_or_else(PoisonError::into_inner);

        let mut record = self.get(id)?;
        let transition = change(&mut record.wizard, &*self.schema, &*self.handler)?;
        if let Some(transition) = transition {
            debug!(wizard_id = %id.0, ?transition, "submission wizard transition");
        }
        self.repository.update(record.clone())?;
        Ok(record)
    }

    fn session_lock(&self, id: &WizardId) -> Arc<Mutex<()>> {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        sessions.entry(id.clone()).or_default().clone()
    }
}

/// Error raised by the submission service.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionServiceError {
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Client-facing snapshot of a wizard session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    pub wizard_id: WizardId,
    pub submitted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<WizardStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_index: Option<usize>,
    pub total_steps: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub is_first_step: bool,
    pub is_last_step: bool,
    pub draft: SubmissionDraft,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<SubmissionReceipt>,
}

impl From<&WizardRecord> for WizardView {
    fn from(record: &WizardRecord) -> Self {
        let step = record.wizard.step();
        Self {
            wizard_id: record.id.clone(),
            submitted: record.wizard.state().is_submitted(),
            step,
            step_index: step.map(WizardStep::index),
            total_steps: WizardStep::COUNT,
            title: step.map(WizardStep::title),
            description: step.map(WizardStep::description),
            is_first_step: step == Some(WizardStep::first()),
            is_last_step: step == Some(WizardStep::last()),
            draft: record.wizard.draft().clone(),
            receipt: record.wizard.receipt().cloned(),
        }
    }
}
