//! Session Service - the challenge session controller
//!
//! Single entry point for every state transition. All mutation funnels
//! through one async mutex around the session entity; the countdown is at
//! most one spawned ticker task, replaced (never duplicated) whenever a
//! new countdown cadence starts. The presentation adapter receives a full
//! view snapshot after every state change.

use std::sync::Arc;

use kernel::error::app_error::AppResult;
use platform::clock::Clock;
use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;

use crate::application::config::SessionConfig;
use crate::application::ticker::TickerHandle;
use crate::domain::catalog::ChallengeCatalog;
use crate::domain::entities::CompletionRecord;
use crate::domain::repository::CompletionLog;
use crate::domain::session::{ChallengeSession, ExtensionGrant, TickOutcome};
use crate::domain::value_objects::{DeploymentId, RepoUrl, Tier};
use crate::error::{ChallengeError, ChallengeResult};
use crate::presentation::adapter::PresentationAdapter;
use crate::presentation::view::SessionView;

/// Challenge session controller
pub struct SessionService<L>
where
    L: CompletionLog,
{
    session: Mutex<ChallengeSession>,
    catalog: Arc<ChallengeCatalog>,
    log: Arc<L>,
    config: Arc<SessionConfig>,
    clock: Arc<dyn Clock>,
    adapter: Arc<dyn PresentationAdapter>,
    ticker: TickerHandle,
}

impl<L> SessionService<L>
where
    L: CompletionLog + Send + Sync + 'static,
{
    /// Build the service, validating the catalog first
    ///
    /// Catalog violations are configuration errors and abort startup.
    pub fn new(
        catalog: ChallengeCatalog,
        log: Arc<L>,
        config: SessionConfig,
        clock: Arc<dyn Clock>,
        adapter: Arc<dyn PresentationAdapter>,
    ) -> AppResult<Self> {
        catalog.validate()?;
        Ok(Self {
            session: Mutex::new(ChallengeSession::new()),
            catalog: Arc::new(catalog),
            log,
            config: Arc::new(config),
            clock,
            adapter,
            ticker: TickerHandle::new(),
        })
    }

    /// The reference-data catalog in use
    pub fn catalog(&self) -> &ChallengeCatalog {
        &self.catalog
    }

    // ------------------------------------------------------------------
    // Inbound operations
    // ------------------------------------------------------------------

    /// Pick a random challenge from the tier and start its countdown
    pub async fn select_challenge(self: &Arc<Self>, tier: Tier) -> ChallengeResult<()> {
        let definition = {
            let mut rng = rand::rng();
            self.catalog.pick(tier, &mut rng).cloned()
        }
        .ok_or(ChallengeError::EmptyTier(tier))
        .inspect_err(|e| e.log())?;

        let session_id = {
            let mut session = self.session.lock().await;
            session.start(tier, definition.clone(), self.config.seconds_per_day)
        };

        tracing::info!(
            session_id = %session_id,
            challenge_id = definition.id,
            title = %definition.title,
            tier = %tier,
            timeline_days = definition.timeline_days,
            "Challenge selected"
        );

        self.notify().await;
        self.start_ticker();
        Ok(())
    }

    /// Grant an extension and restart the countdown cadence
    ///
    /// Restarting is idempotent: the previous ticker is always cancelled
    /// before its replacement is spawned.
    pub async fn request_extension(self: &Arc<Self>) -> ChallengeResult<ExtensionGrant> {
        let grant = {
            let mut session = self.session.lock().await;
            session.request_extension(self.config.seconds_per_day)
        }
        .inspect_err(|e| e.log())?;

        tracing::info!(
            granted_days = grant.granted_days,
            extensions_left = grant.extensions_left,
            time_remaining_secs = grant.time_remaining_secs,
            "Extension granted"
        );

        self.notify().await;
        self.start_ticker();
        Ok(grant)
    }

    /// Record a pending deployment platform choice prior to submission
    pub async fn select_deployment(&self, id: Option<DeploymentId>) {
        {
            let mut session = self.session.lock().await;
            session.select_deployment(id);
        }
        tracing::debug!(deployment_id = ?id, "Deployment selection updated");
        self.notify().await;
    }

    /// Submit the challenge and append a completion record
    ///
    /// An explicit deployment id overrides the pending selection; absent
    /// or unknown ids resolve to the `"Not specified"` display name.
    pub async fn complete_challenge(
        &self,
        repo_url: &str,
        demo_url: Option<&str>,
        deployment: Option<DeploymentId>,
    ) -> ChallengeResult<CompletionRecord> {
        let repo_url = RepoUrl::new(repo_url)
            .map_err(ChallengeError::from)
            .inspect_err(|e| e.log())?;
        let demo_url = demo_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        let record = {
            let mut session = self.session.lock().await;
            let chosen = deployment.or(session.selected_deployment());
            let platform_name = self.catalog.deployment_name(chosen);
            session.complete(self.clock.now(), repo_url, demo_url, platform_name)
        }
        .inspect_err(|e| e.log())?;

        self.ticker.stop();
        self.log.append(&record).await?;

        tracing::info!(
            completion_id = %record.id,
            challenge_id = record.challenge.id,
            deployment_platform = %record.deployment_platform,
            "Challenge completed"
        );

        self.notify().await;
        Ok(record)
    }

    /// Acknowledge the certificate or failure view and return to Inactive
    ///
    /// Completion history is cumulative and survives the reset.
    pub async fn reset(&self) {
        self.ticker.stop();
        {
            let mut session = self.session.lock().await;
            session.reset();
        }
        tracing::info!("Session reset");
        self.notify().await;
    }

    /// Whether the submit gate is currently open
    pub async fn can_submit(&self) -> bool {
        self.session.lock().await.can_submit()
    }

    /// Current state snapshot for rendering
    pub async fn view(&self) -> SessionView {
        let session = self.session.lock().await;
        let completed_count = match self.log.count().await {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(error = %e, "Completion count unavailable");
                0
            }
        };
        SessionView::project(&session, completed_count)
    }

    // ------------------------------------------------------------------
    // Countdown
    // ------------------------------------------------------------------

    /// Advance the countdown by one tick
    ///
    /// Driven by the ticker task; exposed for deterministic tests.
    pub async fn apply_tick(&self) -> TickOutcome {
        let outcome = {
            let mut session = self.session.lock().await;
            session.tick()
        };

        match outcome {
            TickOutcome::Expired => {
                tracing::warn!("Deadline expired, challenge failed");
                self.notify().await;
            }
            TickOutcome::Running { .. } => {
                self.notify().await;
            }
            TickOutcome::Idle => {}
        }

        outcome
    }

    /// Spawn the countdown task, cancelling any predecessor
    fn start_ticker(self: &Arc<Self>) {
        let service = Arc::clone(self);
        let period = self.config.tick_interval;

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick of a fresh interval completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                match service.apply_tick().await {
                    TickOutcome::Running { .. } => {}
                    TickOutcome::Expired | TickOutcome::Idle => break,
                }
            }
        });

        self.ticker.replace(handle);
    }

    /// Push a fresh snapshot to the presentation adapter
    async fn notify(&self) {
        let view = self.view().await;
        self.adapter.render(&view);
    }
}
