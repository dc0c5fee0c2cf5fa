//! Agent Arena - a terminal dashboard for AI trading agents
//!
//! Shows an agent leaderboard and market board, each with a featured item
//! that rotates on a timer until the user picks one by hand.

use agent_arena::{App, Config, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log to a daily file; the terminal belongs to the UI.
///
/// Returns `None` when the log directory is unusable, in which case logging
/// is disabled rather than corrupting the screen.
fn init_logging() -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("agent_arena=info"));

    let log_dir = agent_arena::config::log_dir().ok()?;
    // rolling::daily panics if the directory cannot be created
    std::fs::create_dir_all(&log_dir).ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "arena.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(false),
        )
        .init();

    Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let _guard = init_logging();

    // Load configuration
    let config = Config::load_or_default()?;

    // Run the application
    let mut app = App::new(config).await?;
    app.run().await?;

    Ok(())
}
