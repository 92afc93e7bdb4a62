//! The recommendation resolver: ranked raw genres to per-genre movie lists.

use crate::normalize::normalize;
use crate::traits::MovieSource;
use anyhow::{ensure, Result};
use catalog::{AliasTable, GenreKey, MovieCatalog, RecommendationEntry};
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolver configuration, fixed at construction.
#[derive(Debug, Clone, Serialize)]
pub struct ResolverConfig {
    /// Upper bound on entries recorded per genre
    pub max_per_genre: usize,
    /// Genre inserted when nothing else matched; must name a canonical key
    /// for the fallback guarantee to hold
    pub fallback_genre: GenreKey,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_per_genre: 10,
            fallback_genre: "Pop".to_string(),
        }
    }
}

/// One resolved genre: the caller's raw label, the canonical key it
/// normalized to, and the entries recorded under it.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationGroup {
    /// The raw label as the caller supplied it, preserved for display
    pub label: String,
    /// Canonical catalog key the label normalized to
    pub genre: GenreKey,
    pub entries: Vec<RecommendationEntry>,
}

/// Ordered result of one resolution pass.
///
/// Groups appear in the caller's genre order. Raw labels are unique within
/// the set (first occurrence wins); unmatched genres are recorded for
/// diagnostics but carry no entries.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecommendationSet {
    groups: Vec<RecommendationGroup>,
    unmatched: Vec<String>,
    /// True when the configured fallback genre supplied the only group
    pub used_fallback: bool,
}

impl RecommendationSet {
    /// Resolved groups in input order
    pub fn groups(&self) -> &[RecommendationGroup] {
        &self.groups
    }

    /// Raw genres that matched nothing, in input order
    pub fn unmatched(&self) -> &[String] {
        &self.unmatched
    }

    /// Entries recorded under a raw label, if any
    pub fn get(&self, label: &str) -> Option<&RecommendationGroup> {
        self.groups.iter().find(|group| group.label == label)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when no group was produced, not even the fallback
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Resolves ranked raw genre labels against a movie data source.
///
/// ## Usage
/// ```ignore
/// let catalog = Arc::new(builtin_catalog());
/// let resolver = Resolver::new(
///     CatalogSource::new(catalog.clone()),
///     catalog,
///     default_aliases(),
///     ResolverConfig::default(),
/// )?;
///
/// let set = resolver.resolve(&listener_genres);
/// ```
pub struct Resolver<S: MovieSource> {
    source: S,
    catalog: Arc<MovieCatalog>,
    aliases: AliasTable,
    config: ResolverConfig,
}

impl<S: MovieSource> Resolver<S> {
    /// Create a resolver.
    ///
    /// Configuration problems (a zero entry cap, a blank fallback genre)
    /// fail here, loudly; `resolve` itself never fails.
    pub fn new(
        source: S,
        catalog: Arc<MovieCatalog>,
        aliases: AliasTable,
        config: ResolverConfig,
    ) -> Result<Self> {
        ensure!(config.max_per_genre > 0, "max_per_genre must be at least 1");
        ensure!(
            !config.fallback_genre.trim().is_empty(),
            "fallback_genre must not be blank"
        );
        Ok(Self {
            source,
            catalog,
            aliases,
            config,
        })
    }

    /// Resolve ranked raw genres into per-genre recommendation lists.
    ///
    /// ## Algorithm
    /// 1. Normalize and look up every raw genre (lookups run in parallel;
    ///    assembly stays in input order)
    /// 2. Record up to `max_per_genre` entries under the raw label; a label
    ///    seen before is skipped (first occurrence carries the higher
    ///    listener ranking)
    /// 3. A genre that fails to normalize, or whose canonical key has no
    ///    entries, is recorded as unmatched and logged
    /// 4. If nothing matched at all (including empty input), insert the
    ///    configured fallback genre's entries under its own label
    ///
    /// The output is only empty when the source has no data even for the
    /// fallback genre; no error or panic escapes for any input.
    pub fn resolve(&self, ranked_raw: &[String]) -> RecommendationSet {
        let looked_up: Vec<Option<(GenreKey, Vec<RecommendationEntry>)>> = ranked_raw
            .par_iter()
            .map(|raw| {
                let genre = normalize(raw, &self.aliases, &self.catalog)?;
                let entries = self.source.entries_for(&genre);
                if entries.is_empty() {
                    None
                } else {
                    Some((genre, entries))
                }
            })
            .collect();

        let mut set = RecommendationSet::default();
        for (raw, outcome) in ranked_raw.iter().zip(looked_up) {
            match outcome {
                Some((genre, mut entries)) => {
                    if set.get(raw).is_some() {
                        debug!(label = %raw, "duplicate raw genre label, keeping first");
                        continue;
                    }
                    entries.truncate(self.config.max_per_genre);
                    debug!(
                        label = %raw,
                        genre = %genre,
                        count = entries.len(),
                        source = self.source.name(),
                        "resolved genre"
                    );
                    set.groups.push(RecommendationGroup {
                        label: raw.clone(),
                        genre,
                        entries,
                    });
                }
                None => {
                    debug!(label = %raw, "genre matched nothing in the catalog");
                    if !set.unmatched.iter().any(|existing| existing == raw) {
                        set.unmatched.push(raw.clone());
                    }
                }
            }
        }

        if set.groups.is_empty() {
            self.insert_fallback(&mut set);
        }

        set
    }

    /// Insert the fallback genre's entries, if the source has any.
    fn insert_fallback(&self, set: &mut RecommendationSet) {
        let fallback = &self.config.fallback_genre;
        let label = self
            .catalog
            .canonical_key(fallback)
            .unwrap_or(fallback)
            .to_string();

        let mut entries = self.source.entries_for(fallback);
        if entries.is_empty() {
            // Total data unavailability: the one case allowed to yield an
            // empty set
            warn!(
                fallback = %fallback,
                source = self.source.name(),
                "fallback genre has no entries, returning empty set"
            );
            return;
        }

        entries.truncate(self.config.max_per_genre);
        debug!(fallback = %label, count = entries.len(), "no genre matched, using fallback");
        set.groups.push(RecommendationGroup {
            genre: label.clone(),
            label,
            entries,
        });
        set.used_fallback = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::CatalogSource;
    use catalog::{builtin_catalog, default_aliases};

    fn strings(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|label| label.to_string()).collect()
    }

    fn build_resolver(max_per_genre: usize) -> Resolver<CatalogSource> {
        let catalog = Arc::new(builtin_catalog());
        Resolver::new(
            CatalogSource::new(catalog.clone()),
            catalog,
            default_aliases(),
            ResolverConfig {
                max_per_genre,
                ..ResolverConfig::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_resolves_known_genres_in_order() {
        let resolver = build_resolver(5);
        let set = resolver.resolve(&strings(&["pop", "jazz"]));

        assert_eq!(set.len(), 2);
        assert_eq!(set.groups()[0].label, "pop");
        assert_eq!(set.groups()[0].genre, "Pop");
        assert_eq!(set.groups()[1].label, "jazz");
        assert!(!set.used_fallback);
        assert!(set.unmatched().is_empty());
    }

    #[test]
    fn test_entries_capped_at_max_per_genre() {
        let resolver = build_resolver(2);
        let set = resolver.resolve(&strings(&["rock"]));

        assert_eq!(set.groups()[0].entries.len(), 2);
    }

    #[test]
    fn test_raw_label_preserved_for_display() {
        let resolver = build_resolver(5);
        let set = resolver.resolve(&strings(&["Classic Rock"]));

        assert_eq!(set.groups()[0].label, "Classic Rock");
        assert_eq!(set.groups()[0].genre, "Rock");
    }

    #[test]
    fn test_duplicate_labels_keep_first() {
        let resolver = build_resolver(5);
        let set = resolver.resolve(&strings(&["pop", "rock", "rock"]));

        assert_eq!(set.len(), 2);
        assert_eq!(set.groups()[1].label, "rock");
    }

    #[test]
    fn test_unmatched_genre_is_skipped_and_recorded() {
        let resolver = build_resolver(5);
        let set = resolver.resolve(&strings(&["pop", "Nonexistent Genre XYZ"]));

        assert_eq!(set.len(), 1);
        assert_eq!(set.unmatched(), &["Nonexistent Genre XYZ".to_string()]);
        assert!(!set.used_fallback);
    }

    #[test]
    fn test_empty_input_falls_back() {
        let resolver = build_resolver(5);
        let set = resolver.resolve(&[]);

        assert_eq!(set.len(), 1);
        assert!(set.used_fallback);
        assert_eq!(set.groups()[0].label, "Pop");
        assert!(!set.groups()[0].entries.is_empty());
    }

    #[test]
    fn test_all_unmatched_falls_back() {
        let resolver = build_resolver(5);
        let set = resolver.resolve(&strings(&["Nonexistent Genre XYZ"]));

        assert_eq!(set.len(), 1);
        assert!(set.used_fallback);
        assert_eq!(set.groups()[0].genre, "Pop");
    }

    #[test]
    fn test_empty_catalog_yields_empty_set() {
        let catalog = Arc::new(MovieCatalog::new());
        let resolver = Resolver::new(
            CatalogSource::new(catalog.clone()),
            catalog,
            AliasTable::empty(),
            ResolverConfig::default(),
        )
        .unwrap();

        let set = resolver.resolve(&strings(&["pop"]));

        assert!(set.is_empty());
        assert!(!set.used_fallback);
    }

    #[test]
    fn test_configurable_fallback_genre() {
        let catalog = Arc::new(builtin_catalog());
        let resolver = Resolver::new(
            CatalogSource::new(catalog.clone()),
            catalog,
            default_aliases(),
            ResolverConfig {
                max_per_genre: 5,
                fallback_genre: "indie".to_string(),
            },
        )
        .unwrap();

        let set = resolver.resolve(&[]);

        assert!(set.used_fallback);
        // Display form comes from the catalog, not the config spelling
        assert_eq!(set.groups()[0].label, "Indie");
    }

    #[test]
    fn test_zero_cap_rejected_at_construction() {
        let catalog = Arc::new(builtin_catalog());
        let result = Resolver::new(
            CatalogSource::new(catalog.clone()),
            catalog,
            default_aliases(),
            ResolverConfig {
                max_per_genre: 0,
                fallback_genre: "Pop".to_string(),
            },
        );

        assert!(result.is_err());
    }
}
