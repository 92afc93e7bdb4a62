//! Collaborator traits for the streaming-provider boundary.
//!
//! Authentication, HTTP calls and rate limiting all live behind these two
//! traits; the orchestrator only sees already-fetched data. Both lookups are
//! fallible at the batch level (expired token, missing permission scope) and
//! the orchestrator degrades on failure rather than surfacing an error.

use anyhow::{bail, Result};
use listening::AudioDescriptor;

/// Source of the listener's top-artist genre tags.
pub trait GenreSource: Send + Sync {
    /// Genre tags for the listener's top artists, most-played artist first.
    ///
    /// One inner list per artist, in the provider's free-text form. An
    /// artist without tags contributes an empty list.
    fn artist_genres(&self) -> Result<Vec<Vec<String>>>;
}

/// Source of per-track audio features for the listener's top tracks.
pub trait FeatureSource: Send + Sync {
    /// One element per track, most-played first; `None` where the provider
    /// has no analysis for the track.
    fn track_features(&self) -> Result<Vec<Option<AudioDescriptor>>>;
}

/// In-memory implementation of both collaborator traits.
///
/// Used by the harness binary, the CLI's snapshot mode, and tests. The
/// failure toggles simulate batch-level provider errors so the degraded
/// paths can be exercised without a network.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    artist_genres: Vec<Vec<String>>,
    track_features: Vec<Option<AudioDescriptor>>,
    fail_genres: bool,
    fail_features: bool,
}

impl StaticSource {
    pub fn new(
        artist_genres: Vec<Vec<String>>,
        track_features: Vec<Option<AudioDescriptor>>,
    ) -> Self {
        Self {
            artist_genres,
            track_features,
            fail_genres: false,
            fail_features: false,
        }
    }

    /// Make `artist_genres` fail, simulating a provider error
    pub fn with_genre_failure(mut self) -> Self {
        self.fail_genres = true;
        self
    }

    /// Make `track_features` fail, simulating a missing permission scope
    pub fn with_feature_failure(mut self) -> Self {
        self.fail_features = true;
        self
    }
}

impl GenreSource for StaticSource {
    fn artist_genres(&self) -> Result<Vec<Vec<String>>> {
        if self.fail_genres {
            bail!("artist genre lookup unavailable");
        }
        Ok(self.artist_genres.clone())
    }
}

impl FeatureSource for StaticSource {
    fn track_features(&self) -> Result<Vec<Option<AudioDescriptor>>> {
        if self.fail_features {
            bail!("audio feature lookup unavailable (HTTP 403)");
        }
        Ok(self.track_features.clone())
    }
}
