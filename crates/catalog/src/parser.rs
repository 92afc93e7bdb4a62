//! Loader for JSON catalog files.
//!
//! File format:
//!
//! ```json
//! {
//!   "genres": [
//!     {
//!       "name": "Pop",
//!       "movies": [
//!         { "id": "pop_001", "title": "...", "year": 2018, "short_desc": "..." }
//!       ]
//!     }
//!   ],
//!   "aliases": [
//!     { "pattern": "latin pop", "target": "Pop" }
//!   ]
//! }
//! ```
//!
//! The loader assembles the catalog through the same constructors as the
//! built-in seed, then validates the whole thing. Any problem is reported as
//! a `CatalogError` at load time; a catalog that loads successfully never
//! fails at lookup time.

use crate::alias::{AliasRule, AliasTable};
use crate::error::{CatalogError, Result};
use crate::types::{MovieCatalog, RecommendationEntry};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    genres: Vec<GenreRecord>,
    #[serde(default)]
    aliases: Vec<AliasRule>,
}

#[derive(Debug, Deserialize)]
struct GenreRecord {
    name: String,
    movies: Vec<RecommendationEntry>,
}

/// Load a catalog and its alias table from a JSON file
pub fn load_catalog(path: &Path) -> Result<(MovieCatalog, AliasTable)> {
    let raw = fs::read_to_string(path)?;
    parse_catalog_str(&raw, &path.display().to_string())
}

/// Parse catalog JSON from a string; `origin` names the source in errors
pub fn parse_catalog_str(raw: &str, origin: &str) -> Result<(MovieCatalog, AliasTable)> {
    let file: CatalogFile = serde_json::from_str(raw).map_err(|source| CatalogError::Json {
        file: origin.to_string(),
        source,
    })?;

    let mut catalog = MovieCatalog::new();
    for record in file.genres {
        catalog.insert_genre(record.name, record.movies)?;
    }
    catalog.validate()?;

    let aliases = AliasTable::new(file.aliases)?;

    Ok((catalog, aliases))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "genres": [
            {
                "name": "Pop",
                "movies": [
                    {
                        "id": "pop_001",
                        "title": "A Star Is Born",
                        "year": 2018,
                        "short_desc": "A rising singer falls for a fading rock legend."
                    }
                ]
            }
        ],
        "aliases": [
            { "pattern": "latin pop", "target": "Pop" }
        ]
    }"#;

    #[test]
    fn test_parse_minimal_catalog() {
        let (catalog, aliases) = parse_catalog_str(MINIMAL, "test").unwrap();

        assert_eq!(catalog.genre_count(), 1);
        assert_eq!(catalog.entries_for("pop").len(), 1);
        assert_eq!(catalog.entries_for("Pop")[0].year, Some(2018));
        // Optional fields default rather than erroring
        assert!(catalog.entries_for("Pop")[0].director.is_none());
        assert!(catalog.entries_for("Pop")[0].cast.is_empty());
        assert_eq!(aliases.resolve("LATIN POP"), Some("Pop"));
    }

    #[test]
    fn test_parse_rejects_bad_json() {
        let result = parse_catalog_str("{ not json", "bad.json");
        assert!(matches!(result, Err(CatalogError::Json { .. })));
    }

    #[test]
    fn test_parse_rejects_duplicate_genres() {
        let raw = r#"{
            "genres": [
                { "name": "Pop", "movies": [] },
                { "name": "pop", "movies": [] }
            ]
        }"#;
        let result = parse_catalog_str(raw, "test");
        assert!(matches!(result, Err(CatalogError::DuplicateGenre { .. })));
    }

    #[test]
    fn test_parse_rejects_empty_title() {
        let raw = r#"{
            "genres": [
                {
                    "name": "Pop",
                    "movies": [
                        { "id": "pop_001", "title": "  ", "year": 2018, "short_desc": "x" }
                    ]
                }
            ]
        }"#;
        let result = parse_catalog_str(raw, "test");
        assert!(matches!(result, Err(CatalogError::InvalidEntry { .. })));
    }
}
