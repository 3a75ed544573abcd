//! Challenge Error Types
//!
//! This module provides challenge-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_objects::{RepoUrlError, Tier, UnknownTier};

/// Challenge-specific result type alias
pub type ChallengeResult<T> = Result<T, ChallengeError>;

/// Challenge-specific error variants
///
/// These are domain-specific errors that map to a recovery classification
/// and can be converted to `AppError` for unified error handling.
#[derive(Debug, Error)]
pub enum ChallengeError {
    /// Tier string does not name a known catalog key
    #[error("Unknown tier '{0}'")]
    UnknownTier(String),

    /// Catalog has no entries for the requested tier
    #[error("No challenges configured for tier '{0}'")]
    EmptyTier(Tier),

    /// Operation requires an active challenge
    #[error("No challenge is active")]
    NoChallengeActive,

    /// Extension budget is used up
    #[error("No extensions remaining")]
    NoExtensionsLeft,

    /// Submission without a repository URL
    #[error("A project repository URL is required")]
    MissingRepoUrl,

    /// Submission before the original timeline has elapsed
    #[error("The original timeline has not elapsed ({remaining_secs}s remaining)")]
    TimelineNotElapsed { remaining_secs: u64 },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ChallengeError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChallengeError::UnknownTier(_) | ChallengeError::MissingRepoUrl => ErrorKind::Validation,
            ChallengeError::EmptyTier(_) => ErrorKind::FailedPrecondition,
            ChallengeError::NoChallengeActive => ErrorKind::Conflict,
            ChallengeError::NoExtensionsLeft => ErrorKind::Exhausted,
            ChallengeError::TimelineNotElapsed { .. } => ErrorKind::FailedPrecondition,
            ChallengeError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            ChallengeError::Internal(msg) => {
                tracing::error!(message = %msg, "Challenge internal error");
            }
            ChallengeError::EmptyTier(tier) => {
                tracing::error!(tier = %tier, "Catalog tier is empty");
            }
            ChallengeError::TimelineNotElapsed { remaining_secs } => {
                tracing::warn!(remaining_secs, "Submission before timeline elapsed");
            }
            ChallengeError::NoExtensionsLeft => {
                tracing::warn!("Extension requested with none remaining");
            }
            _ => {
                tracing::debug!(error = %self, "Challenge operation rejected");
            }
        }
    }
}

impl From<ChallengeError> for AppError {
    fn from(err: ChallengeError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl From<UnknownTier> for ChallengeError {
    fn from(err: UnknownTier) -> Self {
        ChallengeError::UnknownTier(err.0)
    }
}

impl From<RepoUrlError> for ChallengeError {
    fn from(err: RepoUrlError) -> Self {
        match err {
            RepoUrlError::Empty => ChallengeError::MissingRepoUrl,
        }
    }
}
