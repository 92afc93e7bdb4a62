//! Simple test harness for the session orchestrator.
//!
//! This binary runs a canned listening history through the end-to-end
//! pipeline and logs the resulting session.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use catalog::{builtin_catalog, default_aliases};
use listening::AudioDescriptor;
use resolver::{CatalogSource, Resolver, ResolverConfig};
use server::{SessionConfig, SessionOrchestrator, StaticSource};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,server=debug,resolver=debug,listening=debug")
        .init();

    info!("Starting MoodFlix session harness");

    let catalog = Arc::new(builtin_catalog());
    info!(
        "Loaded builtin catalog: {} genres, {} entries",
        catalog.genre_count(),
        catalog.entry_count()
    );

    let resolver = Arc::new(Resolver::new(
        CatalogSource::new(catalog.clone()),
        catalog,
        default_aliases(),
        ResolverConfig::default(),
    )?);

    // A canned listener: mostly upbeat pop/rock with one unanalyzed track
    let source = Arc::new(StaticSource::new(
        vec![
            vec!["pop".to_string(), "dance pop".to_string()],
            vec!["classic rock".to_string(), "rock".to_string()],
            vec!["pop".to_string(), "latin pop".to_string()],
        ],
        vec![
            Some(AudioDescriptor::new(0.12, 0.84, 0.88, 0.05, 0.76, 148.0, 0.02)),
            None,
            Some(AudioDescriptor::new(0.25, 0.70, 0.81, 0.04, 0.69, 126.0, 0.11)),
        ],
    ));

    let orchestrator = SessionOrchestrator::new(
        source.clone(),
        source,
        resolver,
        SessionConfig::default(),
    );

    let session = orchestrator.build_session().await?;

    info!(
        "Listener mood: {} (degraded: {})",
        session.mood_name, session.degraded
    );
    info!("Audio summary: energy {}, tempo {}", session.audio_summary.energy, session.audio_summary.tempo);
    for score in &session.mood_scores {
        info!("  {:12} {:5.1}", score.name, score.score);
    }
    for group in session.recommendations.groups() {
        info!("Picks for '{}' ({}):", group.label, group.genre);
        for (i, entry) in group.entries.iter().enumerate() {
            info!(
                "  {}. {} ({}) - {}",
                i + 1,
                entry.title,
                entry.year.map(|y| y.to_string()).unwrap_or("????".to_string()),
                entry.short_desc
            );
        }
    }

    Ok(())
}
