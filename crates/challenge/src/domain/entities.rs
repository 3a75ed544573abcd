//! Domain Entities
//!
//! Core business entities for the challenge domain.

use chrono::{DateTime, Utc};
use kernel::id::CompletionId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ChallengeDefinition
// ============================================================================

/// Challenge definition - immutable reference data from the catalog
///
/// Never mutated; the active session and completion records hold clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDefinition {
    pub id: u32,
    pub title: String,
    pub language: String,
    pub description: String,
    /// Original deadline in days, before any extension
    pub timeline_days: u32,
    /// How many extensions may be granted for this challenge
    pub max_extensions: u32,
    /// Days added per granted extension
    pub extension_days: u32,
    pub skills: Vec<String>,
    /// Display label ("Beginner" / "Advanced")
    pub difficulty: String,
}

impl ChallengeDefinition {
    /// Countdown seconds for the original timeline
    pub fn initial_seconds(&self, seconds_per_day: u64) -> u64 {
        u64::from(self.timeline_days) * seconds_per_day
    }

    /// Countdown seconds granted by one extension
    pub fn extension_seconds(&self, seconds_per_day: u64) -> u64 {
        u64::from(self.extension_days) * seconds_per_day
    }
}

// ============================================================================
// CompletionRecord
// ============================================================================

/// Completion record - appended when a challenge is submitted successfully
///
/// Snapshot of the definition plus submission details; never mutated
/// or removed once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    pub id: CompletionId,
    pub challenge: ChallengeDefinition,
    pub completed_at: DateTime<Utc>,
    /// Resolved display name, `"Not specified"` when no platform was chosen
    pub deployment_platform: String,
    pub repo_url: String,
    pub demo_url: Option<String>,
}

impl CompletionRecord {
    pub fn new(
        challenge: ChallengeDefinition,
        completed_at: DateTime<Utc>,
        deployment_platform: String,
        repo_url: String,
        demo_url: Option<String>,
    ) -> Self {
        Self {
            id: CompletionId::new(),
            challenge,
            completed_at,
            deployment_platform,
            repo_url,
            demo_url,
        }
    }

    /// Calendar date of completion for certificate display
    pub fn completed_on(&self) -> String {
        self.completed_at.format("%Y-%m-%d").to_string()
    }
}
