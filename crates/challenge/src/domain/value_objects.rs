//! Domain Value Objects
//!
//! Immutable value types for the challenge domain.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Tier
// ============================================================================

/// Difficulty bucket grouping challenge definitions
///
/// The catalog is keyed by tier; the two keys are fixed vocabulary
/// (`"beginner"` / `"advanced"`). Anything else is a validation error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Beginner,
    Advanced,
}

impl Tier {
    /// All known tiers, in catalog order
    pub const ALL: [Tier; 2] = [Tier::Beginner, Tier::Advanced];

    /// Catalog key for this tier
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Tier::Beginner => "beginner",
            Tier::Advanced => "advanced",
        }
    }

    /// Capitalized form for display (stats line, certificate)
    #[inline]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Tier::Beginner => "Beginner",
            Tier::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a tier string is not a known catalog key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTier(pub String);

impl fmt::Display for UnknownTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a known tier (beginner, advanced)", self.0)
    }
}

impl std::error::Error for UnknownTier {}

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Tier::Beginner),
            "advanced" => Ok(Tier::Advanced),
            _ => Err(UnknownTier(s.trim().to_string())),
        }
    }
}

// ============================================================================
// DeploymentId
// ============================================================================

/// Identifier of a deployment platform option in the static catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeploymentId(u32);

impl DeploymentId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DeploymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for DeploymentId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

// ============================================================================
// RepoUrl
// ============================================================================

/// Error returned when repository URL validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoUrlError {
    /// URL is empty after trimming
    Empty,
}

impl fmt::Display for RepoUrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Repository URL cannot be empty"),
        }
    }
}

impl std::error::Error for RepoUrlError {}

/// Validated project repository URL
///
/// # Invariants
/// - Non-empty after trimming
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoUrl(String);

impl RepoUrl {
    /// Create a new RepoUrl from raw input (trims surrounding whitespace)
    pub fn new(input: impl AsRef<str>) -> Result<Self, RepoUrlError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(RepoUrlError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RepoUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RepoUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RepoUrl {
    type Error = RepoUrlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RepoUrl> for String {
    fn from(url: RepoUrl) -> Self {
        url.0
    }
}

// ============================================================================
// Tests
// ============================================================================
