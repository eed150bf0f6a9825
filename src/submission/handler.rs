use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::draft::SubmissionDraft;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(pub String);

/// Acknowledgement returned once a validated profile has been handed off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub submission_id: SubmissionId,
    pub artist_name: String,
}

/// Boundary receiving fully validated submissions.
pub trait SubmissionHandler: Send + Sync {
    fn submit(&self, submission: &SubmissionDraft) -> Result<SubmissionReceipt, SubmissionError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("submission handler unavailable: {0}")]
    Unavailable(String),
}

/// Logs each submission and keeps it in memory for review.
#[derive(Debug)]
pub struct LoggingSubmissionHandler {
    sequence: AtomicU64,
    received: Mutex<Vec<(SubmissionId, SubmissionDraft)>>,
}

impl Default for LoggingSubmissionHandler {
    fn default() -> Self {
        Self {
            sequence: AtomicU64::new(1),
            received: Mutex::new(Vec::new()),
        }
    }
}

impl LoggingSubmissionHandler {
    pub fn received(&self) -> Vec<(SubmissionId, SubmissionDraft)> {
        match self.received.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl SubmissionHandler for LoggingSubmissionHandler {
    fn submit(&self, submission: &SubmissionDraft) -> Result<SubmissionReceipt, SubmissionError> {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        let submission_id = SubmissionId(format!("sub-{id:06}"));

        info!(
            submission_id = %submission_id.0,
            artist_name = %submission.name,
            types = submission.types.len(),
            "artist profile submitted for review"
        );

        let mut guard = self
            .received
            .lock()
            .map_err(|_| SubmissionError::Unavailable("submission log poisoned".to_string()))?;
        guard.push((submission_id.clone(), submission.clone()));

        Ok(SubmissionReceipt {
            submission_id,
            artist_name: submission.name.clone(),
        })
    }
}
