//! Reference-data Catalogs
//!
//! Static catalogs of challenge definitions (keyed by tier) and deployment
//! platform options. Built-in data ships with the crate; a JSON override
//! can be loaded at startup. Catalogs are validated once at startup and
//! never mutated afterwards.

use std::collections::BTreeMap;

use kernel::error::app_error::{AppError, AppResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::entities::ChallengeDefinition;
use crate::domain::value_objects::{DeploymentId, Tier};

/// Display fallback when no deployment platform was selected
pub const NOT_SPECIFIED: &str = "Not specified";

/// Deployment platform option - immutable reference data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentOption {
    pub id: DeploymentId,
    pub name: String,
    pub icon: String,
}

/// Catalog of challenge definitions per tier and deployment options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeCatalog {
    tiers: BTreeMap<Tier, Vec<ChallengeDefinition>>,
    deployments: Vec<DeploymentOption>,
}

impl ChallengeCatalog {
    /// Parse a catalog from JSON (startup override)
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let catalog: ChallengeCatalog = serde_json::from_str(json)?;
        Ok(catalog)
    }

    /// Validate catalog invariants
    ///
    /// Violations are configuration errors and fatal at startup:
    /// - every known tier has at least one entry
    /// - challenge ids are unique across tiers
    /// - every timeline is at least one day
    /// - extension grants with a zero day count are meaningless
    pub fn validate(&self) -> AppResult<()> {
        for tier in Tier::ALL {
            if self.entries(tier).is_empty() {
                return Err(AppError::failed_precondition(format!(
                    "Catalog tier '{tier}' has no challenges"
                )));
            }
        }

        let mut ids: Vec<u32> = self
            .tiers
            .values()
            .flatten()
            .map(|definition| definition.id)
            .collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        if ids.len() != before {
            return Err(AppError::failed_precondition(
                "Catalog contains duplicate challenge ids",
            ));
        }

        for definition in self.tiers.values().flatten() {
            if definition.timeline_days == 0 {
                return Err(AppError::failed_precondition(format!(
                    "Challenge {} has a zero-day timeline",
                    definition.id
                )));
            }
            if definition.max_extensions > 0 && definition.extension_days == 0 {
                return Err(AppError::failed_precondition(format!(
                    "Challenge {} grants extensions of zero days",
                    definition.id
                )));
            }
        }

        let mut deployment_ids: Vec<u32> =
            self.deployments.iter().map(|option| option.id.get()).collect();
        deployment_ids.sort_unstable();
        let before = deployment_ids.len();
        deployment_ids.dedup();
        if deployment_ids.len() != before {
            return Err(AppError::failed_precondition(
                "Catalog contains duplicate deployment ids",
            ));
        }

        Ok(())
    }

    /// Challenge definitions for a tier (empty slice when absent)
    pub fn entries(&self, tier: Tier) -> &[ChallengeDefinition] {
        self.tiers.get(&tier).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Pick one definition uniformly at random from a tier
    pub fn pick<R: Rng + ?Sized>(&self, tier: Tier, rng: &mut R) -> Option<&ChallengeDefinition> {
        platform::pick::pick_uniform(rng, self.entries(tier))
    }

    /// All deployment platform options
    pub fn deployments(&self) -> &[DeploymentOption] {
        &self.deployments
    }

    /// Look up a deployment option by id
    pub fn deployment(&self, id: DeploymentId) -> Option<&DeploymentOption> {
        self.deployments.iter().find(|option| option.id == id)
    }

    /// Resolve a deployment selection to its display name
    ///
    /// Absent or unknown ids resolve to the literal `"Not specified"`;
    /// that fallback is specified behavior, not a lookup failure.
    pub fn deployment_name(&self, id: Option<DeploymentId>) -> String {
        id.and_then(|id| self.deployment(id))
            .map(|option| option.name.clone())
            .unwrap_or_else(|| NOT_SPECIFIED.to_string())
    }

    /// Built-in catalog
    pub fn builtin() -> Self {
        let beginner = vec![
            definition(
                1,
                "Personal Portfolio Website",
                "HTML/CSS/JavaScript",
                "Create a responsive personal portfolio with about, projects, and contact sections",
                7,
                2,
                3,
                &["HTML", "CSS", "Responsive Design", "JavaScript"],
                "Beginner",
            ),
            definition(
                2,
                "Interactive Quiz App",
                "JavaScript",
                "Build a multiple-choice quiz with scoring, progress tracking, and a results screen",
                7,
                2,
                3,
                &["DOM Manipulation", "Events", "State Management", "CSS"],
                "Beginner",
            ),
            definition(
                3,
                "Weather Dashboard",
                "JavaScript/REST APIs",
                "Fetch and display current weather and a multi-day forecast for searched cities",
                10,
                2,
                3,
                &["Fetch API", "JSON", "Async/Await", "CSS Grid"],
                "Beginner",
            ),
            definition(
                4,
                "Markdown Note Taker",
                "JavaScript",
                "Write, preview, and organize markdown notes with local persistence",
                10,
                2,
                3,
                &["Text Processing", "LocalStorage", "UI Design"],
                "Beginner",
            ),
        ];

        let advanced = vec![
            definition(
                9,
                "E-commerce Platform",
                "React/Node.js",
                "Full-stack e-commerce with user auth, product catalog, and payment integration",
                21,
                3,
                7,
                &["React", "Node.js", "Database", "Authentication", "Payment APIs"],
                "Advanced",
            ),
            definition(
                10,
                "Real-time Chat Application",
                "React/WebSockets",
                "Multi-room chat with presence indicators, typing notifications, and history",
                14,
                3,
                7,
                &["WebSockets", "React", "Node.js", "Authentication"],
                "Advanced",
            ),
            definition(
                11,
                "Project Management Tool",
                "React/Node.js",
                "Kanban boards with drag-and-drop tasks, assignees, and due-date tracking",
                21,
                3,
                7,
                &["React", "State Management", "Database", "REST APIs"],
                "Advanced",
            ),
            definition(
                12,
                "Social Media Dashboard",
                "React/GraphQL",
                "Aggregate feeds and engagement analytics across accounts into one dashboard",
                21,
                3,
                7,
                &["GraphQL", "React", "OAuth", "Data Visualization"],
                "Advanced",
            ),
        ];

        let mut tiers = BTreeMap::new();
        tiers.insert(Tier::Beginner, beginner);
        tiers.insert(Tier::Advanced, advanced);

        let deployments = vec![
            deployment_option(1, "Vercel", "🚀"),
            deployment_option(2, "Netlify", "🌐"),
            deployment_option(3, "GitHub Pages", "📄"),
            deployment_option(4, "Render", "☁️"),
        ];

        Self { tiers, deployments }
    }
}

fn definition(
    id: u32,
    title: &str,
    language: &str,
    description: &str,
    timeline_days: u32,
    max_extensions: u32,
    extension_days: u32,
    skills: &[&str],
    difficulty: &str,
) -> ChallengeDefinition {
    ChallengeDefinition {
        id,
        title: title.to_string(),
        language: language.to_string(),
        description: description.to_string(),
        timeline_days,
        max_extensions,
        extension_days,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        difficulty: difficulty.to_string(),
    }
}

fn deployment_option(id: u32, name: &str, icon: &str) -> DeploymentOption {
    DeploymentOption {
        id: DeploymentId::new(id),
        name: name.to_string(),
        icon: icon.to_string(),
    }
}
