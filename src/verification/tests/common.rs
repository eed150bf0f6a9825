use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use chrono::NaiveDate;

use crate::repository::RepositoryError;
use crate::roster::Roster;
use crate::verification::domain::{
    VerificationForm, VerificationRequest, VerificationRequestId, VerificationStatus,
};
use crate::verification::repository::VerificationRepository;
use crate::verification::service::VerificationService;

#[derive(Default)]
pub(super) struct MemoryRequests {
    records: Mutex<Vec<VerificationRequest>>,
}

impl VerificationRepository for MemoryRequests {
    fn insert(&self, request: VerificationRequest) -> Result<VerificationRequest, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == request.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(request.clone());
        Ok(request)
    }

    fn update_if(
        &self,
        request: VerificationRequest,
        expected: VerificationStatus,
    ) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let slot = guard
            .iter_mut()
            .find(|existing| existing.id == request.id)
            .ok_or(RepositoryError::NotFound)?;
        if slot.status != expected {
            return Err(RepositoryError::Conflict);
        }
        *slot = request;
        Ok(())
    }

    fn fetch(
        &self,
        id: &VerificationRequestId,
    ) -> Result<Option<VerificationRequest>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|existing| &existing.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<VerificationRequest>, RepositoryError> {
        Ok(self.records.lock().expect("repository mutex poisoned").clone())
    }
}

pub(super) struct UnavailableRequests;

impl VerificationRepository for UnavailableRequests {
    fn insert(&self, _: VerificationRequest) -> Result<VerificationRequest, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn update_if(
        &self,
        _: VerificationRequest,
        _: VerificationStatus,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn fetch(
        &self,
        _: &VerificationRequestId,
    ) -> Result<Option<VerificationRequest>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn list(&self) -> Result<Vec<VerificationRequest>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

/// Memory store whose reads stall, so concurrent reviews overlap.
pub(super) struct SlowRequests {
    pub(super) inner: MemoryRequests,
    pub(super) delay: Duration,
}

impl VerificationRepository for SlowRequests {
    fn insert(&self, request: VerificationRequest) -> Result<VerificationRequest, RepositoryError> {
        self.inner.insert(request)
    }

    fn update_if(
        &self,
        request: VerificationRequest,
        expected: VerificationStatus,
    ) -> Result<(), RepositoryError> {
        self.inner.update_if(request, expected)
    }

    fn fetch(
        &self,
        id: &VerificationRequestId,
    ) -> Result<Option<VerificationRequest>, RepositoryError> {
        thread::sleep(self.delay);
        self.inner.fetch(id)
    }

    fn list(&self) -> Result<Vec<VerificationRequest>, RepositoryError> {
        self.inner.list()
    }
}

pub(super) type SeededService = VerificationService<MemoryRequests, Roster>;

/// Service over the bundled roster with its requests already loaded.
pub(super) fn seeded_service() -> SeededService {
    let roster = Arc::new(Roster::seed().expect("seed roster is valid"));
    let service = VerificationService::new(Arc::new(MemoryRequests::default()), roster.clone());
    service
        .seed(roster.verification_requests())
        .expect("seed requests load");
    service
}

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

pub(super) fn form(artist_name: &str) -> VerificationForm {
    VerificationForm {
        artist_name: artist_name.to_string(),
        justification:
            "I have performed at three national festivals this year and have press coverage."
                .to_string(),
    }
}

pub(super) fn id(raw: &str) -> VerificationRequestId {
    VerificationRequestId(raw.to_string())
}
