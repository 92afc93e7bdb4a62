//! Frequency ranking of raw genre tags.
//!
//! The streaming provider returns free-text genre tags per top artist. This
//! module flattens them into the listener's ranked genre list: most common
//! tag first, ties broken by first appearance so the ranking is stable for a
//! given artist order.

use std::collections::HashMap;

/// Rank raw genre tags by frequency.
///
/// ## Algorithm
/// 1. Count occurrences of each tag (exact string, case preserved)
/// 2. Sort by count descending, then by first-appearance index ascending
/// 3. Take the top `limit`
///
/// Tags keep their provider spelling; canonicalization happens later in the
/// resolver.
pub fn rank_genres<'a, I>(tags: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();

    for (position, tag) in tags.into_iter().enumerate() {
        let entry = counts.entry(tag).or_insert((0, position));
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(tag, (count, first))| (tag, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(limit)
        .map(|(tag, _, _)| tag.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_common_first() {
        let tags = ["rock", "pop", "rock", "jazz", "rock", "pop"];
        let ranked = rank_genres(tags, 5);

        assert_eq!(ranked, vec!["rock", "pop", "jazz"]);
    }

    #[test]
    fn test_ties_break_by_first_appearance() {
        let tags = ["indie", "metal", "metal", "indie"];
        let ranked = rank_genres(tags, 5);

        // Both appear twice; indie was seen first
        assert_eq!(ranked, vec!["indie", "metal"]);
    }

    #[test]
    fn test_limit_truncates() {
        let tags = ["a", "a", "a", "b", "b", "c", "d", "e"];
        let ranked = rank_genres(tags, 2);

        assert_eq!(ranked, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_input() {
        let ranked = rank_genres(std::iter::empty::<&str>(), 5);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_case_is_preserved_and_distinct() {
        // Display keeps the provider's spelling; "Rock" and "rock" count apart
        let tags = ["Rock", "rock", "Rock"];
        let ranked = rank_genres(tags, 5);

        assert_eq!(ranked, vec!["Rock", "rock"]);
    }

    #[test]
    fn test_deterministic() {
        let tags = ["pop", "rock", "pop", "indie", "rock", "pop"];
        assert_eq!(rank_genres(tags, 3), rank_genres(tags, 3));
    }
}
