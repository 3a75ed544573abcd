//! Presentation Adapter Contract
//!
//! The seam a frontend implements to receive state snapshots. Called
//! synchronously under the service's notification path, so renders must
//! not block; anything slow belongs on the adapter's own task.

use crate::presentation::view::SessionView;

/// Receiver of session snapshots
///
/// The service pushes a fresh `SessionView` after every state change,
/// including each countdown tick. Implementations replace their whole
/// display from the snapshot rather than diffing.
pub trait PresentationAdapter: Send + Sync {
    fn render(&self, view: &SessionView);
}

/// Adapter that discards every snapshot
///
/// Useful headless, and as the default in tests that only assert on state.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAdapter;

impl PresentationAdapter for NullAdapter {
    fn render(&self, _view: &SessionView) {}
}
