//! Core trait for movie data sources.
//!
//! The resolver does not care where entries come from: a static catalog
//! today, a remote discovery query tomorrow. Anything that can answer "which
//! movies for this canonical genre?" synchronously can back it; async
//! sources wrap themselves before reaching this seam.

use catalog::{MovieCatalog, RecommendationEntry};
use std::sync::Arc;

/// A source of recommendation entries, keyed by canonical genre.
///
/// ## Design Note
/// - `Send + Sync` allows one source to serve concurrent resolutions
/// - Lookups must be infallible: an unavailable genre is an empty list,
///   never an error
pub trait MovieSource: Send + Sync {
    /// Returns the name of this source (for logging/debugging)
    fn name(&self) -> &str;

    /// Entries for a canonical genre key, best first.
    ///
    /// Returns an empty Vec when the source has nothing for the genre.
    fn entries_for(&self, genre: &str) -> Vec<RecommendationEntry>;
}

/// Movie source backed by the static catalog.
#[derive(Clone)]
pub struct CatalogSource {
    catalog: Arc<MovieCatalog>,
}

impl CatalogSource {
    pub fn new(catalog: Arc<MovieCatalog>) -> Self {
        Self { catalog }
    }
}

impl MovieSource for CatalogSource {
    fn name(&self) -> &str {
        "CatalogSource"
    }

    fn entries_for(&self, genre: &str) -> Vec<RecommendationEntry> {
        self.catalog.entries_for(genre).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::builtin_catalog;

    #[test]
    fn test_catalog_source_lookup() {
        let source = CatalogSource::new(Arc::new(builtin_catalog()));

        assert!(!source.entries_for("Pop").is_empty());
        assert!(!source.entries_for("pop").is_empty());
        assert!(source.entries_for("Polka").is_empty());
    }
}
