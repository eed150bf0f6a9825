use serde::{Deserialize, Serialize};

use super::wizard::SubmissionWizard;
use crate::repository::RepositoryError;

/// Identifier for one wizard session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WizardId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardRecord {
    pub id: WizardId,
    pub wizard: SubmissionWizard,
}

/// Session storage so the service can be exercised without a concrete store.
pub trait WizardRepository: Send + Sync {
    fn insert(&self, record: WizardRecord) -> Result<WizardRecord, RepositoryError>;
    fn update(&self, record: WizardRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &WizardId) -> Result<Option<WizardRecord>, RepositoryError>;
}
