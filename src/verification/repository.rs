use super::domain::{VerificationRequest, VerificationRequestId, VerificationStatus};
use crate::repository::RepositoryError;

/// Storage abstraction for verification requests, listed in creation order.
pub trait VerificationRepository: Send + Sync {
    fn insert(&self, request: VerificationRequest) -> Result<VerificationRequest, RepositoryError>;
    /// Replaces the stored request only while its status is still `expected`,
    /// otherwise returns `RepositoryError::Conflict` and leaves it untouched.
    fn update_if(
        &self,
        request: VerificationRequest,
        expected: VerificationStatus,
    ) -> Result<(), RepositoryError>;
    fn fetch(
        &self,
        id: &VerificationRequestId,
    ) -> Result<Option<VerificationRequest>, RepositoryError>;
    fn list(&self) -> Result<Vec<VerificationRequest>, RepositoryError>;
}
