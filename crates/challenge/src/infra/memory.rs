//! In-memory Repository Implementations
//!
//! The completion log lives in process memory for the lifetime of the
//! application; there is deliberately no persistence layer behind it.

use tokio::sync::Mutex;

use crate::domain::entities::CompletionRecord;
use crate::domain::repository::CompletionLog;
use crate::error::ChallengeResult;

/// In-memory, append-only completion log
#[derive(Debug, Default)]
pub struct InMemoryCompletionLog {
    records: Mutex<Vec<CompletionRecord>>,
}

impl InMemoryCompletionLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CompletionLog for InMemoryCompletionLog {
    async fn append(&self, record: &CompletionRecord) -> ChallengeResult<()> {
        let mut records = self.records.lock().await;
        records.push(record.clone());
        tracing::debug!(
            completion_id = %record.id,
            total = records.len(),
            "Completion recorded"
        );
        Ok(())
    }

    async fn count(&self) -> ChallengeResult<usize> {
        Ok(self.records.lock().await.len())
    }

    async fn list(&self) -> ChallengeResult<Vec<CompletionRecord>> {
        Ok(self.records.lock().await.clone())
    }
}
