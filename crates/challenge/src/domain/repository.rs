//! Repository Traits
//!
//! Interfaces for the completion history. The only implementation is
//! in-memory (state lives for the process lifetime only), but the seam
//! keeps the application layer storage-agnostic.

use crate::domain::entities::CompletionRecord;
use crate::error::ChallengeResult;

/// Completion log repository trait
///
/// Append-only: records are never mutated or removed.
#[trait_variant::make(CompletionLog: Send)]
pub trait LocalCompletionLog {
    /// Append a completion record
    async fn append(&self, record: &CompletionRecord) -> ChallengeResult<()>;

    /// Number of completions recorded so far
    async fn count(&self) -> ChallengeResult<usize>;

    /// All completion records, oldest first
    async fn list(&self) -> ChallengeResult<Vec<CompletionRecord>>;
}
