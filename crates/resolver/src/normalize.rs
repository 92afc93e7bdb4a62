//! Genre normalization: free-text provider tags onto canonical catalog keys.

use catalog::{AliasTable, MovieCatalog};

/// Normalize a raw provider genre tag to a canonical catalog key.
///
/// ## Algorithm
/// 1. Exact case-insensitive match against the alias table, first rule wins
/// 2. Containment either direction against catalog keys, in catalog order
///    ("indie rock" matches the "Indie" section; "pop" matches "K-Pop" only
///    if no earlier key contains or is contained by it)
/// 3. `None` — the tag is unmatched and the caller decides what that means
///
/// An empty or whitespace-only tag never matches: a blank string is a
/// substring of every key, which would silently resolve it to the first
/// catalog section.
///
/// Deterministic for a fixed table and catalog.
pub fn normalize(raw: &str, aliases: &AliasTable, catalog: &MovieCatalog) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Step 1: alias table, exact match
    if let Some(target) = aliases.resolve(trimmed) {
        // Prefer the catalog's display casing when the target is a known key
        let key = catalog.canonical_key(target).unwrap_or(target);
        return Some(key.to_string());
    }

    // Step 2: catalog keys, containment either direction
    let folded = trimmed.to_lowercase();
    for key in catalog.genres() {
        let key_folded = key.to_lowercase();
        if key_folded.contains(&folded) || folded.contains(&key_folded) {
            return Some(key.clone());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{builtin_catalog, default_aliases, AliasRule, AliasTable};

    fn setup() -> (AliasTable, MovieCatalog) {
        (default_aliases(), builtin_catalog())
    }

    #[test]
    fn test_exact_catalog_key_resolves_via_containment() {
        let (aliases, catalog) = setup();

        assert_eq!(normalize("Pop", &aliases, &catalog), Some("Pop".to_string()));
        assert_eq!(normalize("rock", &aliases, &catalog), Some("Rock".to_string()));
    }

    #[test]
    fn test_alias_match_ignores_case() {
        let (aliases, catalog) = setup();

        assert_eq!(normalize("latin pop", &aliases, &catalog), Some("Pop".to_string()));
        assert_eq!(normalize("LATIN POP", &aliases, &catalog), Some("Pop".to_string()));
        assert_eq!(normalize("Latin Pop", &aliases, &catalog), Some("Pop".to_string()));
    }

    #[test]
    fn test_alias_wins_over_substring() {
        let (aliases, catalog) = setup();

        // "dream pop" contains "pop" but is aliased to Indie
        assert_eq!(normalize("dream pop", &aliases, &catalog), Some("Indie".to_string()));
    }

    #[test]
    fn test_containment_raw_in_key() {
        let (aliases, catalog) = setup();

        // "hip" is contained in "Hip-Hop"
        assert_eq!(normalize("hip", &aliases, &catalog), Some("Hip-Hop".to_string()));
    }

    #[test]
    fn test_containment_key_in_raw() {
        let (aliases, catalog) = setup();

        assert_eq!(
            normalize("classic rock", &aliases, &catalog),
            Some("Rock".to_string())
        );
        assert_eq!(
            normalize("indie rock", &aliases, &catalog),
            // "Rock" precedes "Indie" in catalog order and is contained first
            Some("Rock".to_string())
        );
    }

    #[test]
    fn test_unmatched_returns_none() {
        let (aliases, catalog) = setup();

        assert_eq!(normalize("Nonexistent Genre XYZ", &aliases, &catalog), None);
        assert_eq!(normalize("zydeco", &aliases, &catalog), None);
    }

    #[test]
    fn test_blank_tag_never_matches() {
        let (aliases, catalog) = setup();

        assert_eq!(normalize("", &aliases, &catalog), None);
        assert_eq!(normalize("   ", &aliases, &catalog), None);
    }

    #[test]
    fn test_alias_target_outside_catalog_passes_through() {
        let aliases =
            AliasTable::new(vec![AliasRule {
                pattern: "vaporwave".to_string(),
                target: "Synth".to_string(),
            }])
            .unwrap();
        let catalog = builtin_catalog();

        // The alias resolves even though the catalog has no such section;
        // the resolver will then find zero entries and treat it as unmatched
        assert_eq!(normalize("vaporwave", &aliases, &catalog), Some("Synth".to_string()));
    }

    #[test]
    fn test_deterministic() {
        let (aliases, catalog) = setup();

        let first = normalize("alternative hip hop", &aliases, &catalog);
        let second = normalize("alternative hip hop", &aliases, &catalog);
        assert_eq!(first, second);
        assert_eq!(first, Some("Hip-Hop".to_string()));
    }
}
