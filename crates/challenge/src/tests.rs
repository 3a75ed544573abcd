//! Unit tests for the challenge crate
//! Target: C0 coverage 100%, C1 coverage 80%

#[cfg(test)]
mod session_tests {
    use crate::domain::entities::ChallengeDefinition;
    use crate::domain::session::{ChallengeSession, ChallengeStatus, TickOutcome};
    use crate::domain::value_objects::{RepoUrl, Tier};
    use crate::error::ChallengeError;
    use chrono::{TimeZone, Utc};

    fn definition(timeline_days: u32, max_extensions: u32, extension_days: u32) -> ChallengeDefinition {
        ChallengeDefinition {
            id: 1,
            title: "Test Challenge".to_string(),
            language: "Rust".to_string(),
            description: "A test challenge".to_string(),
            timeline_days,
            max_extensions,
            extension_days,
            skills: vec!["Testing".to_string()],
            difficulty: "Beginner".to_string(),
        }
    }

    fn active_session(timeline_days: u32, max_extensions: u32, extension_days: u32, seconds_per_day: u64) -> ChallengeSession {
        let mut session = ChallengeSession::new();
        session.start(
            Tier::Beginner,
            definition(timeline_days, max_extensions, extension_days),
            seconds_per_day,
        );
        session
    }

    #[test]
    fn test_initial_state_inactive() {
        let session = ChallengeSession::new();
        assert_eq!(session.status(), ChallengeStatus::Inactive);
        assert!(session.session_id().is_none());
        assert!(session.current().is_none());
        assert_eq!(session.time_remaining_secs(), 0);
        assert!(!session.can_submit());
    }

    #[test]
    fn test_start_sets_active_and_seconds() {
        let session = active_session(7, 2, 3, 86_400);
        assert_eq!(session.status(), ChallengeStatus::Active);
        assert!(session.session_id().is_some());
        assert_eq!(session.time_remaining_secs(), 604_800);
        assert_eq!(session.original_remaining_secs(), 604_800);
        assert_eq!(session.extensions_left(), 2);
        assert!(!session.can_submit());
    }

    #[test]
    fn test_tick_decrements_both_counters() {
        let mut session = active_session(5, 2, 3, 1);

        let outcome = session.tick();
        assert_eq!(outcome, TickOutcome::Running { remaining_secs: 4 });
        assert_eq!(session.time_remaining_secs(), 4);
        assert_eq!(session.original_remaining_secs(), 4);
    }

    #[test]
    fn test_tick_expiry_transitions_to_failed() {
        let mut session = active_session(2, 2, 3, 1);

        assert_eq!(session.tick(), TickOutcome::Running { remaining_secs: 1 });
        assert_eq!(session.tick(), TickOutcome::Expired);
        assert_eq!(session.status(), ChallengeStatus::Failed);

        // Extra ticks after expiry are ignored
        assert_eq!(session.tick(), TickOutcome::Idle);
        assert_eq!(session.status(), ChallengeStatus::Failed);
        assert_eq!(session.time_remaining_secs(), 0);
    }

    #[test]
    fn test_tick_idle_when_inactive() {
        let mut session = ChallengeSession::new();
        assert_eq!(session.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_extension_adds_time_but_not_original() {
        let mut session = active_session(5, 2, 3, 1);

        let grant = session.request_extension(1).unwrap();
        assert_eq!(grant.granted_days, 3);
        assert_eq!(grant.extensions_left, 1);
        assert_eq!(grant.time_remaining_secs, 8);

        assert_eq!(session.time_remaining_secs(), 8);
        assert_eq!(session.original_remaining_secs(), 5);
    }

    #[test]
    fn test_extension_budget_is_cumulative() {
        let mut session = active_session(5, 2, 3, 1);

        session.request_extension(1).unwrap();
        let grant = session.request_extension(1).unwrap();
        assert_eq!(grant.extensions_left, 0);
        assert_eq!(session.time_remaining_secs(), 11);

        let err = session.request_extension(1).unwrap_err();
        assert!(matches!(err, ChallengeError::NoExtensionsLeft));
        // Rejection leaves the session untouched
        assert_eq!(session.time_remaining_secs(), 11);
        assert_eq!(session.extensions_used(), 2);
    }

    #[test]
    fn test_extension_rejected_without_active_challenge() {
        let mut session = ChallengeSession::new();
        let err = session.request_extension(1).unwrap_err();
        assert!(matches!(err, ChallengeError::NoChallengeActive));
    }

    #[test]
    fn test_can_submit_requires_elapsed_original_timeline() {
        let mut session = active_session(2, 2, 3, 1);
        session.request_extension(1).unwrap();
        assert!(!session.can_submit());

        session.tick();
        assert!(!session.can_submit());

        // Original timeline elapses while extended time remains
        session.tick();
        assert_eq!(session.original_remaining_secs(), 0);
        assert_eq!(session.status(), ChallengeStatus::Active);
        assert!(session.can_submit());
    }

    #[test]
    fn test_complete_before_timeline_rejected() {
        let mut session = active_session(5, 2, 3, 1);
        let url = RepoUrl::new("https://github.com/user/project").unwrap();

        let err = session
            .complete(Utc::now(), url, None, "Vercel".to_string())
            .unwrap_err();
        assert!(matches!(
            err,
            ChallengeError::TimelineNotElapsed { remaining_secs: 5 }
        ));
        assert_eq!(session.status(), ChallengeStatus::Active);
    }

    #[test]
    fn test_complete_success_after_original_elapsed() {
        let mut session = active_session(2, 2, 3, 1);
        session.request_extension(1).unwrap();
        session.tick();
        session.tick();
        assert!(session.can_submit());

        let completed_at = Utc.with_ymd_and_hms(2025, 3, 15, 10, 30, 0).unwrap();
        let url = RepoUrl::new("https://github.com/user/project").unwrap();
        let record = session
            .complete(
                completed_at,
                url,
                Some("https://demo.example.com".to_string()),
                "Netlify".to_string(),
            )
            .unwrap();

        assert_eq!(session.status(), ChallengeStatus::Completed);
        assert_eq!(record.challenge.id, 1);
        assert_eq!(record.completed_at, completed_at);
        assert_eq!(record.completed_on(), "2025-03-15");
        assert_eq!(record.deployment_platform, "Netlify");
        assert_eq!(record.repo_url, "https://github.com/user/project");
        assert_eq!(record.demo_url.as_deref(), Some("https://demo.example.com"));
    }

    #[test]
    fn test_complete_without_active_challenge_rejected() {
        let mut session = ChallengeSession::new();
        let url = RepoUrl::new("https://github.com/user/project").unwrap();
        let err = session
            .complete(Utc::now(), url, None, "Vercel".to_string())
            .unwrap_err();
        assert!(matches!(err, ChallengeError::NoChallengeActive));
    }

    #[test]
    fn test_complete_rejected_after_failure() {
        let mut session = active_session(1, 2, 3, 1);
        session.tick();
        assert_eq!(session.status(), ChallengeStatus::Failed);

        let url = RepoUrl::new("https://github.com/user/project").unwrap();
        let err = session
            .complete(Utc::now(), url, None, "Vercel".to_string())
            .unwrap_err();
        assert!(matches!(err, ChallengeError::NoChallengeActive));
    }

    #[test]
    fn test_reset_returns_to_inactive_and_keeps_tier() {
        let mut session = active_session(5, 2, 3, 1);
        session.select_deployment(Some(2.into()));
        session.reset();

        assert_eq!(session.status(), ChallengeStatus::Inactive);
        assert!(session.session_id().is_none());
        assert!(session.current().is_none());
        assert_eq!(session.time_remaining_secs(), 0);
        assert_eq!(session.extensions_used(), 0);
        assert!(session.selected_deployment().is_none());
        assert_eq!(session.tier(), Some(Tier::Beginner));
    }

    #[test]
    fn test_restart_after_failure_resets_counters() {
        let mut session = active_session(1, 2, 3, 1);
        session.request_extension(1).unwrap();
        session.tick();
        assert_eq!(session.original_remaining_secs(), 0);

        session.start(Tier::Advanced, definition(2, 3, 7), 1);
        assert_eq!(session.status(), ChallengeStatus::Active);
        assert_eq!(session.time_remaining_secs(), 2);
        assert_eq!(session.original_remaining_secs(), 2);
        assert_eq!(session.extensions_used(), 0);
        assert_eq!(session.tier(), Some(Tier::Advanced));
    }
}

#[cfg(test)]
mod catalog_tests {
    use crate::domain::catalog::{ChallengeCatalog, NOT_SPECIFIED};
    use crate::domain::value_objects::{DeploymentId, Tier};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_builtin_catalog_validates() {
        ChallengeCatalog::builtin().validate().unwrap();
    }

    #[test]
    fn test_builtin_tiers_populated() {
        let catalog = ChallengeCatalog::builtin();
        for tier in Tier::ALL {
            assert!(!catalog.entries(tier).is_empty());
        }
        assert_eq!(catalog.deployments().len(), 4);
    }

    #[test]
    fn test_pick_returns_tier_member() {
        let catalog = ChallengeCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let picked = catalog.pick(Tier::Advanced, &mut rng).unwrap();
            assert!(catalog.entries(Tier::Advanced).contains(picked));
        }
    }

    #[test]
    fn test_deployment_lookup_by_id() {
        let catalog = ChallengeCatalog::builtin();
        let option = catalog.deployment(DeploymentId::new(2)).unwrap();
        assert_eq!(option.name, "Netlify");
        assert!(catalog.deployment(DeploymentId::new(99)).is_none());
    }

    #[test]
    fn test_deployment_name_fallback() {
        let catalog = ChallengeCatalog::builtin();
        assert_eq!(catalog.deployment_name(None), NOT_SPECIFIED);
        assert_eq!(
            catalog.deployment_name(Some(DeploymentId::new(99))),
            NOT_SPECIFIED
        );
        assert_eq!(catalog.deployment_name(Some(DeploymentId::new(1))), "Vercel");
    }

    fn catalog_json(beginner: &str, advanced: &str) -> String {
        format!(
            r#"{{"tiers":{{"beginner":[{beginner}],"advanced":[{advanced}]}},"deployments":[]}}"#
        )
    }

    fn challenge_json(id: u32, timeline_days: u32) -> String {
        format!(
            r#"{{"id":{id},"title":"T","language":"JS","description":"D","timelineDays":{timeline_days},"maxExtensions":2,"extensionDays":3,"skills":[],"difficulty":"Beginner"}}"#
        )
    }

    #[test]
    fn test_duplicate_challenge_ids_rejected() {
        let json = catalog_json(&challenge_json(1, 7), &challenge_json(1, 21));
        let catalog = ChallengeCatalog::from_json_str(&json).unwrap();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_empty_tier_rejected() {
        // Empty entry lists parse but fail validation
        let json = r#"{"tiers":{"beginner":[],"advanced":[]},"deployments":[]}"#;
        let catalog = ChallengeCatalog::from_json_str(json).unwrap();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_zero_timeline_rejected() {
        let json = catalog_json(&challenge_json(1, 0), &challenge_json(2, 21));
        let catalog = ChallengeCatalog::from_json_str(&json).unwrap();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(ChallengeCatalog::from_json_str("not json").is_err());
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::SessionConfig;
    use platform::duration::SECS_PER_DAY;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.seconds_per_day, SECS_PER_DAY);
        assert_eq!(config.tick_interval, Duration::from_secs(1));
    }

    #[test]
    fn test_development_config_compresses_day() {
        let config = SessionConfig::development();
        assert_eq!(config.seconds_per_day, 60);
        assert_eq!(config.tick_interval, Duration::from_secs(1));
    }
}

#[cfg(test)]
mod view_tests {
    use crate::domain::entities::ChallengeDefinition;
    use crate::domain::session::{ChallengeSession, ChallengeStatus};
    use crate::domain::value_objects::Tier;
    use crate::presentation::view::SessionView;

    fn definition() -> ChallengeDefinition {
        ChallengeDefinition {
            id: 1,
            title: "Weather Dashboard".to_string(),
            language: "JavaScript".to_string(),
            description: "Fetch and display weather".to_string(),
            timeline_days: 7,
            max_extensions: 2,
            extension_days: 3,
            skills: vec!["Fetch API".to_string(), "JSON".to_string()],
            difficulty: "Beginner".to_string(),
        }
    }

    #[test]
    fn test_inactive_projection() {
        let session = ChallengeSession::new();
        let view = SessionView::project(&session, 0);

        assert_eq!(view.status, ChallengeStatus::Inactive);
        assert_eq!(view.status_label, "Inactive");
        assert!(view.title.is_none());
        assert!(view.skills.is_empty());
        assert_eq!(view.time_remaining, "0m 0s");
        assert!(!view.can_submit);
        assert!(!view.is_active());
    }

    #[test]
    fn test_active_projection_carries_definition() {
        let mut session = ChallengeSession::new();
        session.start(Tier::Beginner, definition(), 86_400);
        let view = SessionView::project(&session, 3);

        assert!(view.is_active());
        assert_eq!(view.tier.as_deref(), Some("beginner"));
        assert_eq!(view.title.as_deref(), Some("Weather Dashboard"));
        assert_eq!(view.time_remaining_secs, 604_800);
        assert_eq!(view.time_remaining, "7d 0h 0m");
        assert_eq!(view.extensions_left, 2);
        assert_eq!(view.completed_count, 3);
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let session = ChallengeSession::new();
        let view = SessionView::project(&session, 0);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["status"], "inactive");
        assert!(json.get("timeRemaining").is_some());
        assert!(json.get("timeRemainingSecs").is_some());
        assert!(json.get("canSubmit").is_some());
        assert!(json.get("extensionsLeft").is_some());
        assert!(json.get("completedCount").is_some());
    }
}

#[cfg(test)]
mod service_tests {
    use crate::application::config::SessionConfig;
    use crate::application::service::SessionService;
    use crate::domain::catalog::ChallengeCatalog;
    use crate::domain::session::ChallengeStatus;
    use crate::domain::value_objects::{DeploymentId, Tier};
    use crate::error::ChallengeError;
    use crate::infra::memory::InMemoryCompletionLog;
    use crate::presentation::adapter::PresentationAdapter;
    use crate::presentation::view::SessionView;
    use chrono::{TimeZone, Utc};
    use platform::clock::{Clock, ManualClock};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Adapter that records every pushed snapshot
    #[derive(Debug, Default)]
    struct CapturingAdapter {
        views: Mutex<Vec<SessionView>>,
    }

    impl CapturingAdapter {
        fn last(&self) -> Option<SessionView> {
            self.views.lock().unwrap().last().cloned()
        }

        fn len(&self) -> usize {
            self.views.lock().unwrap().len()
        }
    }

    impl PresentationAdapter for CapturingAdapter {
        fn render(&self, view: &SessionView) {
            self.views.lock().unwrap().push(view.clone());
        }
    }

    /// Single-entry catalog so the random pick is deterministic
    fn test_catalog() -> ChallengeCatalog {
        let json = r#"{
            "tiers": {
                "beginner": [{
                    "id": 1,
                    "title": "Portfolio",
                    "language": "HTML",
                    "description": "Build a portfolio",
                    "timelineDays": 2,
                    "maxExtensions": 2,
                    "extensionDays": 3,
                    "skills": ["HTML", "CSS"],
                    "difficulty": "Beginner"
                }],
                "advanced": [{
                    "id": 9,
                    "title": "Chat App",
                    "language": "React",
                    "description": "Build a chat app",
                    "timelineDays": 3,
                    "maxExtensions": 3,
                    "extensionDays": 7,
                    "skills": ["WebSockets"],
                    "difficulty": "Advanced"
                }]
            },
            "deployments": [
                {"id": 1, "name": "Vercel", "icon": "🚀"},
                {"id": 2, "name": "Netlify", "icon": "🌐"}
            ]
        }"#;
        let catalog = ChallengeCatalog::from_json_str(json).unwrap();
        catalog.validate().unwrap();
        catalog
    }

    fn setup() -> (
        Arc<SessionService<InMemoryCompletionLog>>,
        Arc<CapturingAdapter>,
        ManualClock,
    ) {
        let adapter = Arc::new(CapturingAdapter::default());
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 3, 15, 10, 30, 0).unwrap());
        let config = SessionConfig {
            seconds_per_day: 1,
            // Keep the background ticker out of the way; ticks are applied
            // manually for determinism
            tick_interval: Duration::from_secs(3600),
        };
        let service = SessionService::new(
            test_catalog(),
            Arc::new(InMemoryCompletionLog::new()),
            config,
            Arc::new(clock.clone()),
            adapter.clone(),
        )
        .unwrap();
        (Arc::new(service), adapter, clock)
    }

    /// Drive the session to the submit gate: one extension, then tick the
    /// original 2-day timeline away
    async fn elapse_original(service: &Arc<SessionService<InMemoryCompletionLog>>) {
        service.request_extension().await.unwrap();
        service.apply_tick().await;
        service.apply_tick().await;
        assert!(service.can_submit().await);
    }

    #[tokio::test]
    async fn test_select_challenge_activates() {
        let (service, adapter, _clock) = setup();

        service.select_challenge(Tier::Beginner).await.unwrap();

        let view = service.view().await;
        assert_eq!(view.status, ChallengeStatus::Active);
        assert_eq!(view.title.as_deref(), Some("Portfolio"));
        assert_eq!(view.time_remaining_secs, 2);
        assert!(!view.can_submit);

        let pushed = adapter.last().unwrap();
        assert_eq!(pushed.status, ChallengeStatus::Active);
    }

    #[tokio::test]
    async fn test_empty_repo_url_rejected_without_state_change() {
        let (service, _adapter, _clock) = setup();
        service.select_challenge(Tier::Beginner).await.unwrap();
        elapse_original(&service).await;

        let err = service
            .complete_challenge("   ", None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ChallengeError::MissingRepoUrl));

        let view = service.view().await;
        assert_eq!(view.status, ChallengeStatus::Active);
        assert!(view.can_submit);
        assert_eq!(view.completed_count, 0);
    }

    #[tokio::test]
    async fn test_submission_before_timeline_rejected() {
        let (service, _adapter, _clock) = setup();
        service.select_challenge(Tier::Beginner).await.unwrap();

        let err = service
            .complete_challenge("https://github.com/user/project", None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ChallengeError::TimelineNotElapsed { .. }));
    }

    #[tokio::test]
    async fn test_full_completion_flow() {
        let (service, adapter, clock) = setup();
        service.select_challenge(Tier::Beginner).await.unwrap();
        service.select_deployment(Some(DeploymentId::new(2))).await;
        elapse_original(&service).await;

        let record = service
            .complete_challenge(
                "https://github.com/user/portfolio",
                Some("https://portfolio.example.com"),
                None,
            )
            .await
            .unwrap();

        assert_eq!(record.challenge.id, 1);
        assert_eq!(record.deployment_platform, "Netlify");
        assert_eq!(record.completed_at, clock.now());
        assert_eq!(record.completed_on(), "2025-03-15");

        let view = service.view().await;
        assert_eq!(view.status, ChallengeStatus::Completed);
        assert_eq!(view.completed_count, 1);
        assert_eq!(adapter.last().unwrap().completed_count, 1);
    }

    #[tokio::test]
    async fn test_explicit_deployment_overrides_pending() {
        let (service, _adapter, _clock) = setup();
        service.select_challenge(Tier::Beginner).await.unwrap();
        service.select_deployment(Some(DeploymentId::new(2))).await;
        elapse_original(&service).await;

        let record = service
            .complete_challenge(
                "https://github.com/user/portfolio",
                None,
                Some(DeploymentId::new(1)),
            )
            .await
            .unwrap();
        assert_eq!(record.deployment_platform, "Vercel");
    }

    #[tokio::test]
    async fn test_unselected_deployment_falls_back() {
        let (service, _adapter, _clock) = setup();
        service.select_challenge(Tier::Beginner).await.unwrap();
        elapse_original(&service).await;

        let record = service
            .complete_challenge("https://github.com/user/portfolio", None, None)
            .await
            .unwrap();
        assert_eq!(record.deployment_platform, "Not specified");
        assert!(record.demo_url.is_none());
    }

    #[tokio::test]
    async fn test_reset_preserves_completion_count() {
        let (service, _adapter, _clock) = setup();
        service.select_challenge(Tier::Beginner).await.unwrap();
        elapse_original(&service).await;
        service
            .complete_challenge("https://github.com/user/portfolio", None, None)
            .await
            .unwrap();

        service.reset().await;

        let view = service.view().await;
        assert_eq!(view.status, ChallengeStatus::Inactive);
        assert!(view.title.is_none());
        assert_eq!(view.completed_count, 1);
        assert_eq!(view.tier.as_deref(), Some("beginner"));
    }

    #[tokio::test]
    async fn test_extension_budget_enforced() {
        let (service, _adapter, _clock) = setup();
        service.select_challenge(Tier::Beginner).await.unwrap();

        service.request_extension().await.unwrap();
        let grant = service.request_extension().await.unwrap();
        assert_eq!(grant.extensions_left, 0);

        let err = service.request_extension().await.unwrap_err();
        assert!(matches!(err, ChallengeError::NoExtensionsLeft));
    }

    #[tokio::test]
    async fn test_expiry_marks_failed() {
        let (service, adapter, _clock) = setup();
        service.select_challenge(Tier::Beginner).await.unwrap();

        service.apply_tick().await;
        service.apply_tick().await;

        let view = service.view().await;
        assert_eq!(view.status, ChallengeStatus::Failed);
        assert_eq!(view.time_remaining_secs, 0);
        assert_eq!(adapter.last().unwrap().status, ChallengeStatus::Failed);
    }

    #[tokio::test]
    async fn test_adapter_receives_snapshot_per_change() {
        let (service, adapter, _clock) = setup();

        service.select_challenge(Tier::Beginner).await.unwrap();
        let after_select = adapter.len();
        assert!(after_select >= 1);

        service.apply_tick().await;
        assert!(adapter.len() > after_select);
    }

    #[tokio::test]
    async fn test_reselect_replaces_running_challenge() {
        let (service, _adapter, _clock) = setup();
        service.select_challenge(Tier::Beginner).await.unwrap();
        service.apply_tick().await;

        service.select_challenge(Tier::Advanced).await.unwrap();

        let view = service.view().await;
        assert_eq!(view.status, ChallengeStatus::Active);
        assert_eq!(view.title.as_deref(), Some("Chat App"));
        assert_eq!(view.time_remaining_secs, 3);
        assert_eq!(view.extensions_left, 3);
    }
}
