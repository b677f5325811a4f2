use std::env;

use anyhow::{Context, bail};
use chrono::Local;

use socialcal::input::collect_event_details;
use socialcal::schedule::build_schedule;
use socialcal::storage::config::Config;
use socialcal::sync::{Publisher, check_or_setup_auth};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--help" => {
                println!("Usage: socialcal");
                println!("Interactively schedules social-media reminder posts for an event.");
                return Ok(());
            }
            other => bail!("Unknown argument: {}", other),
        }
    }

    if let Err(e) = check_or_setup_auth().await {
        tracing::error!("Authentication failed: {}", e);
        bail!("Authentication error: {}", e);
    }

    let config = Config::load_or_create().context("Failed to load config")?;

    let details = collect_event_details().context("Failed to collect event details")?;

    println!("Generating calendar...");
    let schedule = build_schedule(details.is_public, details.date, Local::now().naive_local());
    for entry in &schedule {
        println!("  {}", entry);
    }

    println!("Adding calendar entries to gcal...");
    let mut publisher = Publisher::new(config);
    let created = publisher
        .publish(&schedule, &details.name)
        .await
        .context("Failed to publish schedule")?;

    println!("Added {} events", created);
    Ok(())
}

fn setup_logging() {
    let log_dir = dirs::config_dir()
        .map(|d| d.join("socialcal"))
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "socialcal.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("socialcal started");
}
