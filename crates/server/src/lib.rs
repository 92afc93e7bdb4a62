//! Server crate for the MoodFlix engine.
//!
//! This crate contains the session orchestrator that wires the external
//! collaborator traits (streaming-provider lookups) to the core pipeline:
//! feature aggregation, mood classification, genre ranking, and
//! recommendation resolution.

pub mod collaborators;
pub mod orchestrator;

pub use collaborators::{FeatureSource, GenreSource, StaticSource};
pub use orchestrator::{
    AudioSummary, ListenerSession, SessionConfig, SessionOrchestrator,
};
