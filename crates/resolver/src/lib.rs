//! Genre normalization and recommendation resolution.
//!
//! This crate turns a listener's ranked raw genre labels into per-genre
//! movie lists:
//! - `normalize` maps one free-text tag onto a canonical catalog key
//! - `Resolver` runs normalization and source lookups over a whole ranked
//!   list, with first-wins label dedup and a configured fallback genre
//! - `MovieSource` is the seam to the movie data: the static catalog ships
//!   in-process, a remote discovery service would implement the same trait
//!
//! ## Architecture
//! Resolution is a pure read: catalog and alias table are immutable shared
//! config, and `resolve` degrades every miss to an "unmatched" record
//! instead of an error. The only failure point is resolver construction.
//!
//! ## Example Usage
//! ```ignore
//! use resolver::{CatalogSource, Resolver, ResolverConfig};
//! use catalog::{builtin_catalog, default_aliases};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(builtin_catalog());
//! let resolver = Resolver::new(
//!     CatalogSource::new(catalog.clone()),
//!     catalog,
//!     default_aliases(),
//!     ResolverConfig::default(),
//! )?;
//!
//! let set = resolver.resolve(&listener_genres);
//! for group in set.groups() {
//!     println!("{}: {} picks", group.label, group.entries.len());
//! }
//! ```

pub mod normalize;
pub mod resolve;
pub mod traits;

// Re-export main types
pub use normalize::normalize;
pub use resolve::{RecommendationGroup, RecommendationSet, Resolver, ResolverConfig};
pub use traits::{CatalogSource, MovieSource};
