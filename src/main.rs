//! Parenting Hub - Command Line Entry Point
//!
//! Boots a session from the user's config and prints the progress summary
//! in the saved language.

use parenting_hub::domain::config::HubConfig;
use parenting_hub::error::Result;
use parenting_hub::services::HubContext;
use tracing::{error, info};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting parenting hub...");

    if let Err(e) = run() {
        error!(error = %e, "Parenting hub failed");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = HubConfig::try_load().unwrap_or_else(|e| {
        error!(error = %e, "Falling back to default config");
        HubConfig::default()
    });

    let hub = HubContext::open(config)?;
    let summary = hub.progress_summary();
    info!(
        language = %hub.language(),
        percent = summary.percent,
        activities = summary.completed_activities,
        quizzes = summary.quizzes,
        diary_entries = summary.diary_entries,
        "Progress loaded"
    );

    let percent = summary.percent.to_string();
    println!("{} ({})", hub.t("progress.title"), hub.language().display_name());
    println!(
        "  {}: {}",
        hub.t("progress.overall"),
        hub.t_format("progress.percent", &[("percent", &percent)])
    );
    println!("  {}: {}", hub.t("progress.activities"), summary.completed_activities);
    println!("  {}: {}", hub.t("progress.quizzes"), summary.quizzes);
    println!("  {}: {}", hub.t("progress.diaryEntries"), summary.diary_entries);
    Ok(())
}
