//! Genre alias rules.
//!
//! Streaming providers tag artists with free-text genres ("alternative hip
//! hop", "latin pop"). An alias table maps those tags onto canonical catalog
//! keys ahead of substring matching. Rules are evaluated in table order and
//! the first exact (case-insensitive) match wins; ordering is therefore part
//! of the table's contract.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};

/// One alias rule: a provider tag pattern and the canonical key it maps to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AliasRule {
    /// Provider tag to match, compared case-insensitively
    pub pattern: String,
    /// Canonical genre key the tag resolves to
    pub target: String,
}

/// Ordered, validated list of alias rules
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    /// Rules in priority order; patterns stored lowercased
    rules: Vec<AliasRule>,
}

impl AliasTable {
    /// Build a table from rules, validating each one.
    ///
    /// A malformed rule (empty pattern or target) is a configuration error
    /// and fails construction; it is never skipped silently.
    pub fn new(rules: Vec<AliasRule>) -> Result<Self> {
        let mut validated = Vec::with_capacity(rules.len());
        for (index, rule) in rules.into_iter().enumerate() {
            if rule.pattern.trim().is_empty() {
                return Err(CatalogError::InvalidAliasRule {
                    index,
                    reason: "empty pattern".to_string(),
                });
            }
            if rule.target.trim().is_empty() {
                return Err(CatalogError::InvalidAliasRule {
                    index,
                    reason: format!("empty target for pattern '{}'", rule.pattern),
                });
            }
            validated.push(AliasRule {
                pattern: rule.pattern.to_lowercase(),
                target: rule.target,
            });
        }
        Ok(Self { rules: validated })
    }

    /// An empty table; every lookup misses
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolve a raw tag by exact case-insensitive match, first rule wins
    pub fn resolve(&self, raw: &str) -> Option<&str> {
        let folded = raw.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.pattern == folded)
            .map(|rule| rule.target.as_str())
    }

    /// Rules in priority order
    pub fn rules(&self) -> &[AliasRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(pattern: &str, target: &str) -> AliasRule {
        AliasRule {
            pattern: pattern.to_string(),
            target: target.to_string(),
        }
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let table = AliasTable::new(vec![rule("Latin Pop", "Pop")]).unwrap();

        assert_eq!(table.resolve("latin pop"), Some("Pop"));
        assert_eq!(table.resolve("LATIN POP"), Some("Pop"));
        assert_eq!(table.resolve("Latin Pop"), Some("Pop"));
    }

    #[test]
    fn test_first_rule_wins() {
        let table = AliasTable::new(vec![
            rule("trap", "Hip-Hop"),
            rule("trap", "Electronic"),
        ])
        .unwrap();

        assert_eq!(table.resolve("trap"), Some("Hip-Hop"));
    }

    #[test]
    fn test_miss_returns_none() {
        let table = AliasTable::new(vec![rule("grime", "Hip-Hop")]).unwrap();
        assert_eq!(table.resolve("zydeco"), None);
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let result = AliasTable::new(vec![rule("  ", "Pop")]);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidAliasRule { index: 0, .. })
        ));
    }

    #[test]
    fn test_empty_target_rejected() {
        let result = AliasTable::new(vec![rule("synthpop", "")]);
        assert!(result.is_err());
    }
}
