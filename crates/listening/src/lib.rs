//! # Listening Crate
//!
//! Pure listener-signal algorithms: everything between raw provider data and
//! a mood reading.
//!
//! ## Components
//!
//! ### Feature Aggregator
//! Reduces per-track audio descriptors (each possibly absent) into one
//! averaged descriptor, with a documented neutral default and a degraded
//! flag when no usable data exists.
//!
//! ### Mood Classifier
//! Maps six audio signals onto fifteen mood scores via fixed affine
//! formulas and picks the dominant mood deterministically.
//!
//! ### Genre Ranking
//! Flattens per-artist genre tags into a frequency-ranked list.
//!
//! ## Example Usage
//!
//! ```ignore
//! use listening::{aggregate, classify_descriptor, rank_genres, AudioDescriptor};
//!
//! let records = vec![
//!     Some(AudioDescriptor::new(0.2, 0.8, 0.9, 0.05, 0.7, 150.0, 0.1)),
//!     None, // track without analysis
//! ];
//!
//! let summary = aggregate(&records);
//! let reading = classify_descriptor(&summary.descriptor);
//! println!("dominant mood: {}", reading.dominant.display_name());
//!
//! let top = rank_genres(["pop", "rock", "pop"].into_iter(), 5);
//! ```
//!
//! Every function here is synchronous, deterministic, and safe to call
//! concurrently with different inputs; nothing holds shared mutable state.

// Public modules
pub mod aggregate;
pub mod classify;
pub mod genres;
pub mod types;

// Re-export commonly used items
pub use aggregate::{aggregate, default_descriptor};
pub use classify::{classify, classify_descriptor};
pub use genres::rank_genres;
pub use types::{
    AudioDescriptor,
    FeatureSummary,
    Mood,
    MoodReading,
    MoodScore,
    MoodVector,
    DEFAULT_TEMPO,
};
