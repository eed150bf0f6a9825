use artist_directory::error::AppError;
use artist_directory::repository::RepositoryError;
use artist_directory::roster::Roster;
use artist_directory::submission::{
    LoggingSubmissionHandler, SubmissionService, WizardId, WizardRecord, WizardRepository,
};
use artist_directory::verification::{
    VerificationRepository, VerificationRequest, VerificationRequestId, VerificationService,
    VerificationStatus,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type Submissions = SubmissionService<InMemoryWizardRepository, LoggingSubmissionHandler>;
pub(crate) type Verifications = VerificationService<InMemoryVerificationRepository, Roster>;

/// Shared services handed to the routers.
#[derive(Clone)]
pub(crate) struct Services {
    pub(crate) roster: Arc<Roster>,
    pub(crate) submissions: Arc<Submissions>,
    pub(crate) verifications: Arc<Verifications>,
}

impl Services {
    /// Wires the in-memory stores and seeds verification requests from the roster.
    pub(crate) fn build(roster: Roster) -> Result<Self, AppError> {
        let roster = Arc::new(roster);
        let submissions = Arc::new(SubmissionService::new(
            Arc::new(InMemoryWizardRepository::default()),
            Arc::new(LoggingSubmissionHandler::default()),
        ));
        let verifications = Arc::new(VerificationService::new(
            Arc::new(InMemoryVerificationRepository::default()),
            roster.clone(),
        ));
        verifications.seed(roster.verification_requests())?;

        Ok(Self {
            roster,
            submissions,
            verifications,
        })
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryWizardRepository {
    records: Arc<Mutex<HashMap<WizardId, WizardRecord>>>,
}

impl WizardRepository for InMemoryWizardRepository {
    fn insert(&self, record: WizardRecord) -> Result<WizardRecord, RepositoryError> {
        let mut guard = lock(&self.records)?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: WizardRecord) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.records)?;
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &WizardId) -> Result<Option<WizardRecord>, RepositoryError> {
        let guard = lock(&self.records)?;
        Ok(guard.get(id).cloned())
    }
}

/// Keeps requests in filing order for the admin listing.
#[derive(Default, Clone)]
pub(crate) struct InMemoryVerificationRepository {
    records: Arc<Mutex<Vec<VerificationRequest>>>,
}

impl VerificationRepository for InMemoryVerificationRepository {
    fn insert(&self, request: VerificationRequest) -> Result<VerificationRequest, RepositoryError> {
        let mut guard = lock(&self.records)?;
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
        let mut guard = lock(&self.records)?;
        match guard.iter_mut().find(|existing| existing.id == request.id) {
            Some(slot) if slot.status == expected => {
                *slot = request;
                Ok(())
            }
            Some(_) => Err(RepositoryError::Conflict),
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(
        &self,
        id: &VerificationRequestId,
    ) -> Result<Option<VerificationRequest>, RepositoryError> {
        let guard = lock(&self.records)?;
        Ok(guard.iter().find(|existing| &existing.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<VerificationRequest>, RepositoryError> {
        Ok(lock(&self.records)?.clone())
    }
}
