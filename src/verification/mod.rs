//! Verification requests: the artist-facing form, request filing, and admin review.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{
    ReviewDecision, TransitionError, VerificationForm, VerificationRequest,
    VerificationRequestId, VerificationStatus,
};
pub use repository::VerificationRepository;
pub use router::verification_router;
pub use service::{VerificationError, VerificationService};

#[cfg(test)]
mod tests;
