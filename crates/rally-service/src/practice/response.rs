//! Caller-facing result of a practice creation.

use serde::{Deserialize, Serialize};

use super::types::{ConflictRecord, PracticeOccurrence};
use crate::error::{ServiceError, ServiceResult};

/// Serialized as `{ "success": true, "created": [...] }` or
/// `{ "success": false, "error": "...", "conflicts": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePracticeResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Vec<PracticeOccurrence>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflicts: Option<Vec<ConflictRecord>>,
}

impl CreatePracticeResponse {
    #[must_use]
    pub fn created(created: Vec<PracticeOccurrence>) -> Self {
        Self {
            success: true,
            created: Some(created),
            error: None,
            conflicts: None,
        }
    }

    #[must_use]
    pub fn failed(error: &ServiceError) -> Self {
        let conflicts = match error {
            ServiceError::Conflict(records) => Some(records.clone()),
            _ => None,
        };
        Self {
            success: false,
            created: None,
            error: Some(error_message(error)),
            conflicts,
        }
    }

    /// A failure that never reached the coordinator, such as an unreadable body.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            created: None,
            error: Some(message.into()),
            conflicts: None,
        }
    }
}

impl From<ServiceResult<Vec<PracticeOccurrence>>> for CreatePracticeResponse {
    fn from(result: ServiceResult<Vec<PracticeOccurrence>>) -> Self {
        match result {
            Ok(created) => Self::created(created),
            Err(error) => Self::failed(&error),
        }
    }
}

/// Message shown to the organizer for a failed creation.
fn error_message(error: &ServiceError) -> String {
    match error {
        ServiceError::Conflict(records) => format!(
            "{} practice(s) already booked at this location overlap the requested times",
            records.len()
        ),
        ServiceError::NotAuthenticated => "Sign in to create a practice".to_string(),
        other => other.to_string(),
    }
}
