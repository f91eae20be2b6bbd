//! Operation outcome type for the notification channel.
//!
//! Every orchestration operation ends in exactly one outcome: a success
//! message, an informational message, field-level validation errors, or a
//! generic error message. The presentation layer renders the outcome directly;
//! there is no session-based flash state.

use serde::Serialize;

use crate::validation::ValidationErrors;

/// Outcome of a single orchestration operation.
///
/// Exactly one category per call. Underlying executor and database error
/// details never appear in the carried message; they are logged server-side
/// and replaced with a generic message here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OpOutcome {
    /// The operation completed (or was accepted) as requested.
    Success { message: String },
    /// A disruptive long-running operation was started; not an ordinary success.
    Info { message: String },
    /// Input was rejected before any side effect took place.
    Invalid { errors: ValidationErrors },
    /// The operation failed; the message is generic and user-safe.
    Error { message: String },
}

impl OpOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }

    pub fn invalid(errors: ValidationErrors) -> Self {
        Self::Invalid { errors }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
