use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use super::domain::{
    ReviewDecision, TransitionError, VerificationForm, VerificationRequest,
    VerificationRequestId, VerificationStatus,
};
use super::repository::VerificationRepository;
use crate::repository::RepositoryError;
use crate::roster::ArtistSource;
use crate::submission::schema::ValidationErrors;

/// Service behind the "request verification" form and the admin review panel.
pub struct VerificationService<R, S> {
    repository: Arc<R>,
    artists: Arc<S>,
    sequence: AtomicU64,
}

impl<R, S> VerificationService<R, S>
where
    R: VerificationRepository + 'static,
    S: ArtistSource + 'static,
{
    pub fn new(repository: Arc<R>, artists: Arc<S>) -> Self {
        Self {
            repository,
            artists,
            sequence: AtomicU64::new(1),
        }
    }

    /// Loads pre-existing requests, keeping their ids and statuses.
    pub fn seed(&self, requests: &[VerificationRequest]) -> Result<usize, VerificationError> {
        for request in requests {
            self.repository.insert(request.clone())?;
            if let Some(number) = request
                .id
                .0
                .strip_prefix("req-")
                .and_then(|suffix| suffix.parse::<u64>().ok())
            {
                self.sequence.fetch_max(number + 1, Ordering::Relaxed);
            }
        }
        Ok(requests.len())
    }

    /// Validates the form and files a new `Pending` request dated `today`.
    pub fn request(
        &self,
        form: VerificationForm,
        today: NaiveDate,
    ) -> Result<VerificationRequest, VerificationError> {
        form.validate()?;

        let artist = self.artists.find_by_name(&form.artist_name).ok_or_else(|| {
            let mut errors = ValidationErrors::default();
            errors.push("artistName", "No artist profile matches this name.");
            VerificationError::Validation(errors)
        })?;

        let template = VerificationRequest {
            id: VerificationRequestId(String::new()),
            artist_id: artist.id.clone(),
            artist_name: artist.name.clone(),
            request_date: today,
            status: VerificationStatus::Pending,
            justification: Some(form.justification),
        };

        let attempts = self.repository.list()?.len() + 1;
        for _ in 0..attempts {
            let mut request = template.clone();
            request.id = self.next_id();
            match self.repository.insert(request) {
                Ok(stored) => {
                    info!(
                        request_id = %stored.id.0,
                        artist_id = %stored.artist_id.0,
                        "verification request filed"
                    );
                    return Ok(stored);
                }
                Err(RepositoryError::Conflict) => continue,
                Err(other) => return Err(other.into()),
            }
        }

        Err(RepositoryError::Conflict.into())
    }

    pub fn approve(
        &self,
        id: &VerificationRequestId,
    ) -> Result<VerificationRequest, VerificationError> {
        self.review(id, ReviewDecision::Approve)
    }

    pub fn deny(
        &self,
        id: &VerificationRequestId,
    ) -> Result<VerificationRequest, VerificationError> {
        self.review(id, ReviewDecision::Deny)
    }

    /// Applies an admin decision to a pending request. The stored request only
    /// changes if it is still in the status it was read in, so of two
    /// concurrent decisions exactly one lands.
    pub fn review(
        &self,
        id: &VerificationRequestId,
        decision: ReviewDecision,
    ) -> Result<VerificationRequest, VerificationError> {
        let mut request = self.get(id)?;

        let from = match request.decide(decision) {
            Ok(from) => from,
            Err(source) => return Err(rejected(id, decision, source)),
        };

        match self.repository.update_if(request.clone(), from) {
            Ok(()) => {}
            Err(RepositoryError::Conflict) => {
                let current = self.get(id)?;
                let source = TransitionError {
                    from: current.status,
                    to: decision.target(),
                };
                return Err(rejected(id, decision, source));
            }
            Err(other) => return Err(other.into()),
        }

        info!(
            request_id = %id.0,
            artist_id = %request.artist_id.0,
            status = request.status.label(),
            "verification request reviewed"
        );
        Ok(request)
    }

    pub fn get(
        &self,
        id: &VerificationRequestId,
    ) -> Result<VerificationRequest, VerificationError> {
        self.repository
            .fetch(id)?
            .ok_or_else(|| VerificationError::NotFound(id.0.clone()))
    }

    pub fn list(&self) -> Result<Vec<VerificationRequest>, VerificationError> {
        Ok(self.repository.list()?)
    }

    fn next_id(&self) -> VerificationRequestId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        VerificationRequestId(format!("req-{id:03}"))
    }
}

fn rejected(
    id: &VerificationRequestId,
    decision: ReviewDecision,
    source: TransitionError,
) -> VerificationError {
    warn!(
        request_id = %id.0,
        ?decision,
        status = source.from.label(),
        "rejected review action"
    );
    VerificationError::InvalidTransition {
        id: id.0.clone(),
        source,
    }
}

/// Error raised by the verification service.
#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("verification request {0} not found")]
    NotFound(String),
    #[error("verification request {id}: {source}")]
    InvalidTransition {
        id: String,
        #[source]
        source: TransitionError,
    },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
