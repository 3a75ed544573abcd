//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (ChallengeDefinition, CompletionRecord)
//! - The session state machine (ChallengeSession)
//! - Domain value objects (Tier, DeploymentId, RepoUrl)
//! - Reference-data catalogs (challenges per tier, deployment platforms)
//! - Repository traits (interfaces)

pub mod catalog;
pub mod entities;
pub mod repository;
pub mod session;
pub mod value_objects;
