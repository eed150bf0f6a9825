use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::directory::domain::ArtistId;
use crate::submission::schema::ValidationErrors;

pub const MIN_ARTIST_NAME_CHARS: usize = 2;
pub const MIN_JUSTIFICATION_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerificationRequestId(pub String);

/// Review state of a verification request. Only `Pending` can be decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationStatus {
    Pending,
    Approved,
    Denied,
}

impl VerificationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Denied => "Denied",
        }
    }
}

/// Admin decision applied to a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    Approve,
    Deny,
}

impl ReviewDecision {
    pub const fn target(self) -> VerificationStatus {
        match self {
            Self::Approve => VerificationStatus::Approved,
            Self::Deny => VerificationStatus::Denied,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    pub id: VerificationRequestId,
    pub artist_id: ArtistId,
    pub artist_name: String,
    pub request_date: NaiveDate,
    pub status: VerificationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

impl VerificationRequest {
    /// Applies an admin decision, returning the previous status.
    pub fn decide(
        &mut self,
        decision: ReviewDecision,
    ) -> Result<VerificationStatus, TransitionError> {
        let from = self.status;
        if from != VerificationStatus::Pending {
            return Err(TransitionError {
                from,
                to: decision.target(),
            });
        }
        self.status = decision.target();
        Ok(from)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot move a {} request to {}", .from.label(), .to.label())]
pub struct TransitionError {
    pub from: VerificationStatus,
    pub to: VerificationStatus,
}

/// Payload of the "request verification" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationForm {
    #[serde(default)]
    pub artist_name: String,
    #[serde(default)]
    pub justification: String,
}

impl VerificationForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.artist_name.chars().count() < MIN_ARTIST_NAME_CHARS {
            errors.push("artistName", "Please enter your artist name.");
        }
        if self.justification.chars().count() < MIN_JUSTIFICATION_CHARS {
            errors.push(
                "justification",
                "Please provide a justification of at least 50 characters.",
            );
        }
        errors.into_result()
    }
}
