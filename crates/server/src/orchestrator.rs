//! # Session Orchestrator
//!
//! Coordinates one listener session end to end:
//! 1. Fetch artist genre tags and track audio features (in parallel)
//! 2. Aggregate features into one averaged descriptor
//! 3. Classify the descriptor into a mood reading
//! 4. Rank raw genre tags by frequency
//! 5. Resolve ranked genres into movie recommendations
//! 6. Assemble the serializable session for the presentation layer
//!
//! Upstream failures never surface as errors: a failed feature batch
//! degrades to the default descriptor (flagged), a failed genre lookup
//! degrades to a stock genre list. The only errors `build_session` returns
//! are collaborator task panics.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::collaborators::{FeatureSource, GenreSource};
use listening::{
    aggregate, classify_descriptor, rank_genres, AudioDescriptor, Mood, MoodScore,
};
use resolver::{CatalogSource, RecommendationSet, Resolver};

/// Genres assumed when the artist genre lookup fails outright
const STOCK_GENRES: [&str; 5] = ["Pop", "Rock", "Hip-Hop", "Electronic", "Indie"];

/// Orchestrator configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// How many ranked genres to resolve recommendations for
    pub top_genre_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { top_genre_limit: 5 }
    }
}

/// Percent-formatted audio signals for direct display
#[derive(Debug, Clone, Serialize)]
pub struct AudioSummary {
    pub acousticness: String,
    pub danceability: String,
    pub energy: String,
    pub speechiness: String,
    pub valence: String,
    pub tempo: String,
    pub instrumentalness: String,
}

impl AudioSummary {
    pub fn from_descriptor(d: &AudioDescriptor) -> Self {
        fn percent(value: f64) -> String {
            format!("{:.1}%", value * 100.0)
        }
        Self {
            acousticness: percent(d.acousticness),
            danceability: percent(d.danceability),
            energy: percent(d.energy),
            speechiness: percent(d.speechiness),
            valence: percent(d.valence),
            tempo: format!("{:.0} BPM", d.tempo),
            instrumentalness: percent(d.instrumentalness),
        }
    }
}

/// Everything the presentation layer needs for one listener session
#[derive(Debug, Clone, Serialize)]
pub struct ListenerSession {
    /// Display name of the dominant mood, e.g. "Melancholic"
    pub mood_name: String,
    pub dominant_mood: Mood,
    /// All fifteen mood scores in canonical order
    pub mood_scores: Vec<MoodScore>,
    pub audio_summary: AudioSummary,
    /// The averaged descriptor the mood was computed from
    pub descriptor: AudioDescriptor,
    /// True when the mood was computed from default data because no usable
    /// audio features were available
    pub degraded: bool,
    /// Ranked raw genre labels the recommendations were resolved for
    pub top_genres: Vec<String>,
    pub recommendations: RecommendationSet,
}

/// Main orchestrator that coordinates one listener session
pub struct SessionOrchestrator {
    genre_source: Arc<dyn GenreSource>,
    feature_source: Arc<dyn FeatureSource>,
    resolver: Arc<Resolver<CatalogSource>>,
    config: SessionConfig,
}

impl SessionOrchestrator {
    pub fn new(
        genre_source: Arc<dyn GenreSource>,
        feature_source: Arc<dyn FeatureSource>,
        resolver: Arc<Resolver<CatalogSource>>,
        config: SessionConfig,
    ) -> Self {
        Self {
            genre_source,
            feature_source,
            resolver,
            config,
        }
    }

    /// Main entry point: build the session for the current listener.
    pub async fn build_session(&self) -> Result<ListenerSession> {
        let start_time = Instant::now();

        // Fetch both collaborator lookups in parallel
        let (genre_lists, features) = self.fetch_upstream_parallel().await?;
        info!(
            "Fetched {} artist tag lists and {} track feature slots",
            genre_lists.len(),
            features.len()
        );

        // Aggregate features into one descriptor
        let summary = aggregate(&features);
        if summary.degraded {
            warn!("audio features unavailable, mood will be computed from defaults");
        } else {
            info!("Averaged features over {} tracks", summary.sampled_tracks);
        }

        // Classify the averaged descriptor
        let reading = classify_descriptor(&summary.descriptor);
        info!(
            "Dominant mood: {} ({:.1})",
            reading.dominant.display_name(),
            reading.scores.get(reading.dominant)
        );

        // Rank raw genre tags
        let flattened: Vec<&str> = genre_lists
            .iter()
            .flat_map(|tags| tags.iter().map(String::as_str))
            .collect();
        let top_genres = rank_genres(flattened, self.config.top_genre_limit);
        info!("Top genres: {:?}", top_genres);

        // Resolve recommendations
        let recommendations = self.resolver.resolve(&top_genres);
        info!(
            "Resolved {} genre groups ({} unmatched, fallback: {})",
            recommendations.len(),
            recommendations.unmatched().len(),
            recommendations.used_fallback
        );

        let elapsed = start_time.elapsed();
        info!("Built listener session in {:.2?}", elapsed);

        Ok(ListenerSession {
            mood_name: reading.dominant.display_name().to_string(),
            dominant_mood: reading.dominant,
            mood_scores: reading.scores.to_scores(),
            audio_summary: AudioSummary::from_descriptor(&summary.descriptor),
            descriptor: summary.descriptor,
            degraded: summary.degraded,
            top_genres,
            recommendations,
        })
    }

    /// Run both collaborator lookups concurrently.
    ///
    /// Either lookup failing is a degraded condition, not an error: a failed
    /// genre fetch becomes the stock genre list, a failed feature batch
    /// becomes an empty slice for the aggregator to default on. Only a
    /// panicked task propagates as an error.
    async fn fetch_upstream_parallel(
        &self,
    ) -> Result<(Vec<Vec<String>>, Vec<Option<AudioDescriptor>>)> {
        let (genres_result, features_result) = tokio::join!(
            tokio::task::spawn_blocking({
                let source = self.genre_source.clone();
                move || source.artist_genres()
            }),
            tokio::task::spawn_blocking({
                let source = self.feature_source.clone();
                move || source.track_features()
            })
        );

        let genre_lists = match genres_result.context("genre lookup task panicked")? {
            Ok(lists) => lists,
            Err(err) => {
                warn!("artist genre lookup failed ({err:#}), using stock genres");
                STOCK_GENRES.iter().map(|g| vec![g.to_string()]).collect()
            }
        };

        let features = match features_result.context("feature lookup task panicked")? {
            Ok(features) => features,
            Err(err) => {
                warn!("audio feature lookup failed ({err:#}), degrading to defaults");
                Vec::new()
            }
        };

        Ok((genre_lists, features))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::StaticSource;
    use catalog::{builtin_catalog, default_aliases};
    use resolver::ResolverConfig;

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    fn upbeat_descriptor() -> AudioDescriptor {
        AudioDescriptor::new(0.1, 0.85, 0.9, 0.05, 0.8, 150.0, 0.05)
    }

    fn build_resolver() -> Arc<Resolver<CatalogSource>> {
        let catalog = Arc::new(builtin_catalog());
        Arc::new(
            Resolver::new(
                CatalogSource::new(catalog.clone()),
                catalog,
                default_aliases(),
                ResolverConfig {
                    max_per_genre: 5,
                    fallback_genre: "Pop".to_string(),
                },
            )
            .expect("default config is valid"),
        )
    }

    fn build_orchestrator(source: StaticSource) -> SessionOrchestrator {
        let source = Arc::new(source);
        SessionOrchestrator::new(
            source.clone(),
            source,
            build_resolver(),
            SessionConfig::default(),
        )
    }

    fn listening_fixture() -> StaticSource {
        StaticSource::new(
            vec![
                vec!["pop".to_string(), "dance pop".to_string()],
                vec!["pop".to_string(), "rock".to_string()],
                vec!["rock".to_string()],
            ],
            vec![
                Some(upbeat_descriptor()),
                None,
                Some(upbeat_descriptor()),
            ],
        )
    }

    // ============================================================================
    // Tests
    // ============================================================================

    #[tokio::test]
    async fn test_full_session() {
        let orchestrator = build_orchestrator(listening_fixture());
        let session = orchestrator.build_session().await.unwrap();

        assert!(!session.degraded);
        assert_eq!(session.mood_scores.len(), Mood::COUNT);
        assert_eq!(session.mood_name, session.dominant_mood.display_name());

        // "pop" appears twice, "rock" twice, "dance pop" once
        assert_eq!(session.top_genres[0], "pop");
        assert_eq!(session.top_genres[1], "rock");

        // Every ranked genre resolves against the builtin catalog
        assert_eq!(session.recommendations.len(), 3);
        assert!(!session.recommendations.used_fallback);
    }

    #[tokio::test]
    async fn test_feature_failure_degrades_but_succeeds() {
        let orchestrator = build_orchestrator(listening_fixture().with_feature_failure());
        let session = orchestrator.build_session().await.unwrap();

        assert!(session.degraded);
        // The default descriptor drives the mood
        assert_eq!(session.descriptor, listening::default_descriptor());
        // Recommendations are unaffected by the feature failure
        assert!(!session.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_genre_failure_uses_stock_genres() {
        let orchestrator = build_orchestrator(listening_fixture().with_genre_failure());
        let session = orchestrator.build_session().await.unwrap();

        assert_eq!(
            session.top_genres,
            vec!["Pop", "Rock", "Hip-Hop", "Electronic", "Indie"]
        );
        assert_eq!(session.recommendations.len(), 5);
        // Mood is still computed from the real features
        assert!(!session.degraded);
    }

    #[tokio::test]
    async fn test_everything_failing_still_yields_a_session() {
        let source = listening_fixture()
            .with_genre_failure()
            .with_feature_failure();
        let orchestrator = build_orchestrator(source);
        let session = orchestrator.build_session().await.unwrap();

        assert!(session.degraded);
        assert!(!session.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_empty_listener_falls_back() {
        let orchestrator = build_orchestrator(StaticSource::new(Vec::new(), Vec::new()));
        let session = orchestrator.build_session().await.unwrap();

        assert!(session.degraded);
        assert!(session.top_genres.is_empty());
        assert!(session.recommendations.used_fallback);
        assert_eq!(session.recommendations.groups()[0].label, "Pop");
    }

    #[tokio::test]
    async fn test_session_serializes_with_all_moods() {
        let orchestrator = build_orchestrator(listening_fixture());
        let session = orchestrator.build_session().await.unwrap();

        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["mood_scores"].as_array().unwrap().len(), Mood::COUNT);
        assert!(json["audio_summary"]["tempo"].as_str().unwrap().ends_with("BPM"));
        assert!(json["recommendations"]["groups"].is_array());
    }
}
