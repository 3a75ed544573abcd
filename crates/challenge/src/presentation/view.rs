//! Session View Projection
//!
//! A full snapshot of everything a frontend needs to render the tracker.
//! Built fresh after every state change; adapters never reach into the
//! session entity directly.

use platform::duration::format_remaining;
use serde::Serialize;

use crate::domain::session::{ChallengeSession, ChallengeStatus};

/// Snapshot of the session state for rendering
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub status: ChallengeStatus,
    /// Capitalized status label for the stats display
    pub status_label: &'static str,
    /// Last selected tier key, kept across resets
    pub tier: Option<String>,
    pub title: Option<String>,
    pub language: Option<String>,
    pub difficulty: Option<String>,
    pub description: Option<String>,
    pub skills: Vec<String>,
    /// Formatted countdown, largest-unit-first with exactly three components
    pub time_remaining: String,
    pub time_remaining_secs: u64,
    /// Whether the submit gate is open (original timeline fully elapsed)
    pub can_submit: bool,
    pub extensions_left: u32,
    pub completed_count: usize,
}

impl SessionView {
    /// Project the session entity into a render-ready snapshot
    pub fn project(session: &ChallengeSession, completed_count: usize) -> Self {
        let current = session.current();
        Self {
            status: session.status(),
            status_label: session.status().display_name(),
            tier: session.tier().map(|tier| tier.as_str().to_string()),
            title: current.map(|c| c.title.clone()),
            language: current.map(|c| c.language.clone()),
            difficulty: current.map(|c| c.difficulty.clone()),
            description: current.map(|c| c.description.clone()),
            skills: current.map(|c| c.skills.clone()).unwrap_or_default(),
            time_remaining: format_remaining(session.time_remaining_secs()),
            time_remaining_secs: session.time_remaining_secs(),
            can_submit: session.can_submit(),
            extensions_left: session.extensions_left(),
            completed_count,
        }
    }

    /// True while a countdown is live
    pub fn is_active(&self) -> bool {
        self.status == ChallengeStatus::Active
    }
}
