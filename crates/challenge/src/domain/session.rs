//! Challenge Session State Machine
//!
//! The single mutable entity of the domain. One session exists per process;
//! it moves `Inactive -> Active -> Completed | Failed` and back to
//! `Inactive` on reset. All transitions are pure and synchronous here;
//! clocks, tickers, and persistence live in the application layer.
//!
//! ## Invariants
//! - A current challenge is present iff status is Active, Completed or Failed
//! - `extensions_used <= current.max_extensions`
//! - `time_remaining_secs` is floored at 0; hitting 0 transitions to Failed
//! - `original_remaining_secs` only counts down while Active and is never
//!   increased by extensions (submit eligibility is tied to the original
//!   timeline on purpose)

use chrono::{DateTime, Utc};
use kernel::id::SessionId;
use serde::Serialize;

use crate::domain::entities::{ChallengeDefinition, CompletionRecord};
use crate::domain::value_objects::{DeploymentId, RepoUrl, Tier};
use crate::error::{ChallengeError, ChallengeResult};

// ============================================================================
// Status and transition outputs
// ============================================================================

/// Lifecycle status of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeStatus {
    #[default]
    Inactive,
    Active,
    Completed,
    Failed,
}

impl ChallengeStatus {
    /// Capitalized form for the stats display
    #[inline]
    pub const fn display_name(&self) -> &'static str {
        match self {
            ChallengeStatus::Inactive => "Inactive",
            ChallengeStatus::Active => "Active",
            ChallengeStatus::Completed => "Completed",
            ChallengeStatus::Failed => "Failed",
        }
    }
}

/// Result of advancing the countdown by one second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to do (no active countdown)
    Idle,
    /// Countdown advanced and continues
    Running { remaining_secs: u64 },
    /// Countdown reached zero; the session transitioned to Failed
    Expired,
}

/// Result of a granted extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionGrant {
    pub granted_days: u32,
    pub extensions_left: u32,
    pub time_remaining_secs: u64,
}

// ============================================================================
// ChallengeSession
// ============================================================================

/// The one mutable session entity
#[derive(Debug, Clone, Default)]
pub struct ChallengeSession {
    session_id: Option<SessionId>,
    tier: Option<Tier>,
    current: Option<ChallengeDefinition>,
    status: ChallengeStatus,
    time_remaining_secs: u64,
    original_remaining_secs: u64,
    extensions_used: u32,
    selected_deployment: Option<DeploymentId>,
}

impl ChallengeSession {
    /// Create a fresh session in Inactive status
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn session_id(&self) -> Option<SessionId> {
        self.session_id
    }

    pub fn status(&self) -> ChallengeStatus {
        self.status
    }

    pub fn tier(&self) -> Option<Tier> {
        self.tier
    }

    pub fn current(&self) -> Option<&ChallengeDefinition> {
        self.current.as_ref()
    }

    pub fn time_remaining_secs(&self) -> u64 {
        self.time_remaining_secs
    }

    pub fn original_remaining_secs(&self) -> u64 {
        self.original_remaining_secs
    }

    pub fn extensions_used(&self) -> u32 {
        self.extensions_used
    }

    /// Extensions still available for the current challenge
    pub fn extensions_left(&self) -> u32 {
        self.current
            .as_ref()
            .map(|definition| definition.max_extensions.saturating_sub(self.extensions_used))
            .unwrap_or(0)
    }

    pub fn selected_deployment(&self) -> Option<DeploymentId> {
        self.selected_deployment
    }

    /// True once the original (non-extended) timeline has fully elapsed
    ///
    /// Extensions add to `time_remaining_secs` only; this gate is the
    /// authoritative submit check regardless of what a frontend disables.
    pub fn can_submit(&self) -> bool {
        self.status == ChallengeStatus::Active && self.original_remaining_secs == 0
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Start a challenge: Inactive/terminal -> Active
    ///
    /// Returns the id assigned to this run for log correlation.
    pub fn start(
        &mut self,
        tier: Tier,
        definition: ChallengeDefinition,
        seconds_per_day: u64,
    ) -> SessionId {
        let initial = definition.initial_seconds(seconds_per_day);
        let session_id = SessionId::new();

        self.session_id = Some(session_id);
        self.tier = Some(tier);
        self.current = Some(definition);
        self.status = ChallengeStatus::Active;
        self.time_remaining_secs = initial;
        self.original_remaining_secs = initial;
        self.extensions_used = 0;
        self.selected_deployment = None;

        session_id
    }

    /// Advance the countdown by one second
    ///
    /// The only clock-driven mutation. No-op unless Active with time left;
    /// extra ticks after expiry are ignored.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != ChallengeStatus::Active || self.time_remaining_secs == 0 {
            return TickOutcome::Idle;
        }

        self.time_remaining_secs -= 1;
        self.original_remaining_secs = self.original_remaining_secs.saturating_sub(1);

        if self.time_remaining_secs == 0 {
            self.status = ChallengeStatus::Failed;
            TickOutcome::Expired
        } else {
            TickOutcome::Running {
                remaining_secs: self.time_remaining_secs,
            }
        }
    }

    /// Grant an extension if the budget allows
    ///
    /// Rejection leaves the session untouched.
    pub fn request_extension(&mut self, seconds_per_day: u64) -> ChallengeResult<ExtensionGrant> {
        let definition = match (&self.status, &self.current) {
            (ChallengeStatus::Active, Some(definition)) => definition,
            _ => return Err(ChallengeError::NoChallengeActive),
        };

        if self.extensions_used >= definition.max_extensions {
            return Err(ChallengeError::NoExtensionsLeft);
        }

        let granted_days = definition.extension_days;
        self.time_remaining_secs += definition.extension_seconds(seconds_per_day);
        self.extensions_used += 1;

        Ok(ExtensionGrant {
            granted_days,
            extensions_left: self.extensions_left(),
            time_remaining_secs: self.time_remaining_secs,
        })
    }

    /// Record a pending deployment platform choice prior to submission
    pub fn select_deployment(&mut self, id: Option<DeploymentId>) {
        self.selected_deployment = id;
    }

    /// Submit the challenge: Active -> Completed
    ///
    /// The caller resolves the deployment platform name beforehand; the
    /// session only enforces the state gates and produces the record.
    pub fn complete(
        &mut self,
        completed_at: DateTime<Utc>,
        repo_url: RepoUrl,
        demo_url: Option<String>,
        deployment_platform: String,
    ) -> ChallengeResult<CompletionRecord> {
        let definition = match (&self.status, &self.current) {
            (ChallengeStatus::Active, Some(definition)) => definition.clone(),
            _ => return Err(ChallengeError::NoChallengeActive),
        };

        if !self.can_submit() {
            return Err(ChallengeError::TimelineNotElapsed {
                remaining_secs: self.original_remaining_secs,
            });
        }

        self.status = ChallengeStatus::Completed;

        Ok(CompletionRecord::new(
            definition,
            completed_at,
            deployment_platform,
            repo_url.into_inner(),
            demo_url,
        ))
    }

    /// Return to Inactive after the certificate or failure view is
    /// acknowledged
    ///
    /// The last selected tier is kept for the stats display; completion
    /// history lives outside the session and is not touched.
    pub fn reset(&mut self) {
        self.session_id = None;
        self.current = None;
        self.status = ChallengeStatus::Inactive;
        self.time_remaining_secs = 0;
        self.original_remaining_secs = 0;
        self.extensions_used = 0;
        self.selected_deployment = None;
    }
}
