//! Tracker Entry Point
//!
//! Interactive terminal frontend for the challenge session service.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::env;
use std::sync::Arc;

use challenge::domain::session::ChallengeStatus;
use challenge::domain::value_objects::{DeploymentId, Tier};
use challenge::{
    ChallengeCatalog, InMemoryCompletionLog, PresentationAdapter, SessionConfig, SessionService,
    SessionView,
};
use platform::clock::SystemClock;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable: path to a JSON catalog override
const ENV_CATALOG_PATH: &str = "TRACKER_CATALOG_PATH";

/// Terminal adapter
///
/// The service pushes a snapshot every tick; printing each one would
/// drown the prompt, so only transitions are announced. The full
/// snapshot is always available through the `status` command.
#[derive(Debug, Default)]
struct ConsoleAdapter {
    last: std::sync::Mutex<Option<(ChallengeStatus, bool)>>,
}

impl PresentationAdapter for ConsoleAdapter {
    fn render(&self, view: &SessionView) {
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        let current = (view.status, view.can_submit);
        if last.replace(current) == Some(current) {
            return;
        }

        match view.status {
            ChallengeStatus::Active if view.can_submit => {
                println!();
                println!("⏰ Original timeline elapsed. You can now submit your project.");
            }
            ChallengeStatus::Active => {
                println!();
                println!(
                    "🎯 Challenge started: {} ({})",
                    view.title.as_deref().unwrap_or("?"),
                    view.time_remaining
                );
            }
            ChallengeStatus::Failed => {
                println!();
                println!("💥 Time is up. The challenge was not completed in time.");
                println!("   Use 'reset' to return to the start screen.");
            }
            ChallengeStatus::Completed | ChallengeStatus::Inactive => {}
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tracker=info,challenge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SessionConfig::from_env()?;
    let catalog = load_catalog()?;

    let service = Arc::new(SessionService::new(
        catalog,
        Arc::new(InMemoryCompletionLog::new()),
        config,
        Arc::new(SystemClock),
        Arc::new(ConsoleAdapter::default()),
    )?);

    println!("Coding Challenge Tracker");
    println!("Type 'help' for the command list.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print_prompt();
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if !dispatch(&service, line.trim()).await {
            break;
        }
    }

    Ok(())
}

/// Load the catalog override if configured, otherwise the built-in one
fn load_catalog() -> anyhow::Result<ChallengeCatalog> {
    match env::var(ENV_CATALOG_PATH) {
        Ok(path) => {
            tracing::info!(path = %path, "Loading catalog override");
            let json = std::fs::read_to_string(&path)?;
            Ok(ChallengeCatalog::from_json_str(&json)?)
        }
        Err(_) => Ok(ChallengeCatalog::builtin()),
    }
}

fn print_prompt() {
    use std::io::Write;
    print!("> ");
    let _ = std::io::stdout().flush();
}

/// Handle one command line; returns false when the loop should exit
async fn dispatch(service: &Arc<SessionService<InMemoryCompletionLog>>, line: &str) -> bool {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return true;
    };
    let args: Vec<&str> = parts.collect();

    match command {
        "help" => print_help(),
        "tiers" => print_tiers(service),
        "platforms" => print_platforms(service),
        "status" => print_status(&service.view().await),
        "select" => select(service, &args).await,
        "extend" => extend(service).await,
        "deploy" => deploy(service, &args).await,
        "submit" => submit(service, &args).await,
        "reset" => service.reset().await,
        "quit" | "exit" => return false,
        other => println!("Unknown command '{other}'. Type 'help' for the command list."),
    }
    true
}

fn print_help() {
    println!("Commands:");
    println!("  tiers                    List difficulty tiers and their challenges");
    println!("  platforms                List deployment platform options");
    println!("  select <tier>            Start a random challenge from the tier");
    println!("  status                   Show the current session snapshot");
    println!("  extend                   Request a time extension");
    println!("  deploy <id|none>         Choose a deployment platform");
    println!("  submit <repo> [demo]     Submit the completed project");
    println!("  reset                    Acknowledge the result and start over");
    println!("  quit                     Exit");
}

fn print_tiers(service: &Arc<SessionService<InMemoryCompletionLog>>) {
    for tier in Tier::ALL {
        println!("{}:", tier.display_name());
        for entry in service.catalog().entries(tier) {
            println!(
                "  - {} [{}] ({} days, {} extensions of {} days)",
                entry.title,
                entry.language,
                entry.timeline_days,
                entry.max_extensions,
                entry.extension_days
            );
        }
    }
}

fn print_platforms(service: &Arc<SessionService<InMemoryCompletionLog>>) {
    for option in service.catalog().deployments() {
        println!("  {} {} {}", option.id, option.icon, option.name);
    }
}

fn print_status(view: &SessionView) {
    println!("Status:     {}", view.status_label);
    if let Some(tier) = &view.tier {
        println!("Tier:       {tier}");
    }
    if let Some(title) = &view.title {
        println!("Challenge:  {title}");
    }
    if let Some(language) = &view.language {
        println!("Language:   {language}");
    }
    if let Some(description) = &view.description {
        println!("Task:       {description}");
    }
    if !view.skills.is_empty() {
        println!("Skills:     {}", view.skills.join(", "));
    }
    if view.is_active() {
        println!("Remaining:  {} ({}s)", view.time_remaining, view.time_remaining_secs);
        println!("Extensions: {} left", view.extensions_left);
        println!(
            "Submit:     {}",
            if view.can_submit { "open" } else { "locked until the original timeline elapses" }
        );
    }
    println!("Completed:  {}", view.completed_count);
}

async fn select(service: &Arc<SessionService<InMemoryCompletionLog>>, args: &[&str]) {
    let Some(raw) = args.first() else {
        println!("Usage: select <beginner|advanced>");
        return;
    };
    let tier = match raw.parse::<Tier>() {
        Ok(tier) => tier,
        Err(e) => {
            println!("{e}");
            return;
        }
    };
    if let Err(e) = service.select_challenge(tier).await {
        println!("Could not start a challenge: {e}");
    }
}

async fn extend(service: &Arc<SessionService<InMemoryCompletionLog>>) {
    match service.request_extension().await {
        Ok(grant) => {
            println!(
                "⏳ Extension granted: +{} days ({} left). New remaining time: {}",
                grant.granted_days,
                grant.extensions_left,
                platform::duration::format_remaining(grant.time_remaining_secs)
            );
        }
        Err(e) => println!("Extension refused: {e}"),
    }
}

async fn deploy(service: &Arc<SessionService<InMemoryCompletionLog>>, args: &[&str]) {
    let Some(raw) = args.first() else {
        println!("Usage: deploy <id|none>  (see 'platforms')");
        return;
    };
    if raw.eq_ignore_ascii_case("none") {
        service.select_deployment(None).await;
        println!("Deployment platform cleared.");
        return;
    }
    match raw.parse::<u32>() {
        Ok(id) => {
            let id = DeploymentId::new(id);
            match service.catalog().deployment(id) {
                Some(option) => {
                    let name = option.name.clone();
                    service.select_deployment(Some(id)).await;
                    println!("Deployment platform set to {name}.");
                }
                None => println!("No platform with id {id}. See 'platforms'."),
            }
        }
        Err(_) => println!("Usage: deploy <id|none>  (see 'platforms')"),
    }
}

async fn submit(service: &Arc<SessionService<InMemoryCompletionLog>>, args: &[&str]) {
    let Some(repo_url) = args.first() else {
        println!("Usage: submit <repo-url> [demo-url]");
        return;
    };
    let demo_url = args.get(1).copied();

    match service.complete_challenge(repo_url, demo_url, None).await {
        Ok(record) => {
            println!();
            println!("🏆 ═══════════ CERTIFICATE OF COMPLETION ═══════════");
            println!("   Challenge:  {}", record.challenge.title);
            println!("   Difficulty: {}", record.challenge.difficulty);
            println!("   Completed:  {}", record.completed_on());
            println!("   Deployed:   {}", record.deployment_platform);
            println!("   Repository: {}", record.repo_url);
            if let Some(demo) = &record.demo_url {
                println!("   Live demo:  {demo}");
            }
            println!("   ═══════════════════════════════════════════════");
            println!("   Use 'reset' to pick your next challenge.");
        }
        Err(e) => println!("Submission rejected: {e}"),
    }
}
