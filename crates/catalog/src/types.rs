//! Core domain types for the movie catalog.
//!
//! The catalog is immutable configuration: it is assembled once (from the
//! built-in seed or a JSON file), validated, and then shared read-only for
//! the lifetime of the process. Nothing mutates it per request.

use crate::error::{CatalogError, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Canonical genre identifier, e.g. "Pop" or "Hip-Hop".
///
/// Keys are unique case-insensitively; the stored form is the display form.
pub type GenreKey = String;

// =============================================================================
// Recommendation Entry
// =============================================================================

/// One recommended movie.
///
/// `title` and `short_desc` are mandatory; everything else is optional and
/// modeled as `Option`/empty rather than sentinel strings, so missing-field
/// bugs surface at construction instead of display time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationEntry {
    /// Stable identifier within the catalog, e.g. "pop_001"
    pub id: String,
    pub title: String,
    /// Release year, if known
    pub year: Option<u16>,
    /// Poster/image URL, if any
    #[serde(default)]
    pub image: Option<String>,
    /// One-line description shown in list views
    pub short_desc: String,
    /// Longer synopsis for detail views; may be empty
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub director: Option<String>,
    /// Principal cast; empty means unknown
    #[serde(default)]
    pub cast: Vec<String>,
    /// Notable accolades, e.g. "Won 1 Oscar - Best Original Song"
    #[serde(default)]
    pub awards: Option<String>,
    /// Aggregate critic/user rating on a 0-10 scale
    #[serde(default)]
    pub rating: Option<f32>,
}

impl RecommendationEntry {
    /// Check the mandatory-field invariant for this entry.
    ///
    /// Returns a human-readable reason on failure; used by
    /// [`MovieCatalog::validate`] during construction.
    pub fn check(&self) -> std::result::Result<(), String> {
        if self.title.trim().is_empty() {
            return Err(format!("entry {} has an empty title", self.id));
        }
        if self.short_desc.trim().is_empty() {
            return Err(format!("entry {} ({}) has an empty description", self.id, self.title));
        }
        if let Some(rating) = self.rating {
            if !(0.0..=10.0).contains(&rating) {
                return Err(format!(
                    "entry {} ({}) has rating {} outside 0-10",
                    self.id, self.title, rating
                ));
            }
        }
        Ok(())
    }
}

// =============================================================================
// MovieCatalog - Ordered Genre Index
// =============================================================================

/// The closed set of canonical genres and their recommendation entries.
///
/// Genre iteration order is insertion order and is part of the contract:
/// substring-based normalization resolves to the first matching key, so the
/// same catalog always normalizes the same raw tag to the same genre.
/// Lookups are case-insensitive; display keys keep their original casing.
#[derive(Debug, Clone, Default)]
pub struct MovieCatalog {
    /// Canonical keys in insertion order (display form)
    genres: Vec<GenreKey>,
    /// Lowercased key -> position in `genres`/`entries`
    lookup: HashMap<String, usize>,
    /// Entries parallel to `genres`
    entries: Vec<Vec<RecommendationEntry>>,
}

impl MovieCatalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a genre section.
    ///
    /// Fails on an empty or duplicate key (case-insensitive). Entry-level
    /// invariants are checked separately by [`validate`](Self::validate) so
    /// loaders can report every problem against the finished catalog.
    pub fn insert_genre(
        &mut self,
        key: impl Into<GenreKey>,
        entries: Vec<RecommendationEntry>,
    ) -> Result<()> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(CatalogError::EmptyGenreKey { index: self.genres.len() });
        }
        let folded = key.to_lowercase();
        if self.lookup.contains_key(&folded) {
            return Err(CatalogError::DuplicateGenre { key });
        }
        self.lookup.insert(folded, self.genres.len());
        self.genres.push(key);
        self.entries.push(entries);
        Ok(())
    }

    /// Canonical genre keys in insertion order
    pub fn genres(&self) -> &[GenreKey] {
        &self.genres
    }

    /// Entries for a genre, looked up case-insensitively.
    ///
    /// Returns an empty slice for unknown genres.
    pub fn entries_for(&self, key: &str) -> &[RecommendationEntry] {
        self.lookup
            .get(&key.to_lowercase())
            .map(|&i| self.entries[i].as_slice())
            .unwrap_or(&[])
    }

    /// The display form of a key, looked up case-insensitively
    pub fn canonical_key(&self, key: &str) -> Option<&str> {
        self.lookup
            .get(&key.to_lowercase())
            .map(|&i| self.genres[i].as_str())
    }

    /// Whether the catalog has a genre under this key (case-insensitive)
    pub fn contains(&self, key: &str) -> bool {
        self.lookup.contains_key(&key.to_lowercase())
    }

    /// Number of genre sections
    pub fn genre_count(&self) -> usize {
        self.genres.len()
    }

    /// Total number of entries across all genres
    pub fn entry_count(&self) -> usize {
        self.entries.iter().map(|e| e.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    /// Validate every entry against the catalog invariants.
    ///
    /// Sections are checked in parallel; the first failing entry (in genre
    /// order) is reported. Loaders call this once after assembly.
    pub fn validate(&self) -> Result<()> {
        let mut failures: Vec<(usize, CatalogError)> = self
            .genres
            .par_iter()
            .zip(self.entries.par_iter())
            .enumerate()
            .filter_map(|(idx, (genre, entries))| {
                entries.iter().find_map(|entry| {
                    entry.check().err().map(|reason| {
                        (idx, CatalogError::InvalidEntry { genre: genre.clone(), reason })
                    })
                })
            })
            .collect();
        failures.sort_by_key(|(idx, _)| *idx);
        match failures.into_iter().next() {
            Some((_, err)) => Err(err),
            None => Ok(()),
        }
    }
}
