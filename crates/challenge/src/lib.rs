//! Challenge Session Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, catalog, repository traits
//! - `application/` - Use cases, session service, countdown ticker
//! - `infra/` - In-memory implementations
//! - `presentation/` - View snapshots and the adapter contract
//!
//! ## Session Model
//! - A single in-process session moves inactive -> active -> completed/failed
//! - The countdown is one spawned ticker task at most; starting a new one
//!   always cancels its predecessor
//! - Submit eligibility is gated by the original timeline, never by the
//!   extended countdown
//! - Completions accumulate for the process lifetime; reset never drops them

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::SessionConfig;
pub use application::service::SessionService;
pub use domain::catalog::{ChallengeCatalog, DeploymentOption, NOT_SPECIFIED};
pub use error::{ChallengeError, ChallengeResult};
pub use infra::memory::InMemoryCompletionLog;
pub use presentation::adapter::{NullAdapter, PresentationAdapter};
pub use presentation::view::SessionView;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
