//! Core types for listener audio signals and mood readings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tempo substituted when a producer supplies a non-positive or non-finite
/// value, in beats per minute
pub const DEFAULT_TEMPO: f64 = 120.0;

// =============================================================================
// Audio Descriptor
// =============================================================================

/// Numeric summary of a track's (or an average's) sonic character.
///
/// All fields except `tempo` live in [0,1]; `tempo` is beats per minute.
/// Producers must go through [`AudioDescriptor::new`] (or call
/// [`clamped`](AudioDescriptor::clamped) after deserializing) so consumers
/// can rely on the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioDescriptor {
    pub acousticness: f64,
    pub danceability: f64,
    pub energy: f64,
    pub speechiness: f64,
    pub valence: f64,
    /// Beats per minute; strictly positive
    pub tempo: f64,
    /// Likelihood the track has no vocals
    #[serde(default)]
    pub instrumentalness: f64,
}

impl AudioDescriptor {
    /// Construct a descriptor, clamping every field into its valid domain.
    pub fn new(
        acousticness: f64,
        danceability: f64,
        energy: f64,
        speechiness: f64,
        valence: f64,
        tempo: f64,
        instrumentalness: f64,
    ) -> Self {
        Self {
            acousticness,
            danceability,
            energy,
            speechiness,
            valence,
            tempo,
            instrumentalness,
        }
        .clamped()
    }

    /// Return a copy with every field forced into its valid domain.
    ///
    /// Bounded fields clamp to [0,1] (NaN collapses to 0); a non-positive or
    /// non-finite tempo is replaced by [`DEFAULT_TEMPO`] rather than
    /// rejected, keeping downstream consumers total.
    pub fn clamped(self) -> Self {
        Self {
            acousticness: unit(self.acousticness),
            danceability: unit(self.danceability),
            energy: unit(self.energy),
            speechiness: unit(self.speechiness),
            valence: unit(self.valence),
            tempo: if self.tempo.is_finite() && self.tempo > 0.0 {
                self.tempo
            } else {
                DEFAULT_TEMPO
            },
            instrumentalness: unit(self.instrumentalness),
        }
    }
}

/// Clamp into [0,1]; NaN has no nearest boundary, so it collapses to 0
fn unit(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

// =============================================================================
// Moods
// =============================================================================

/// The closed set of moods a listener profile can map to.
///
/// Variant order is canonical: it is the argmax tie-break order for
/// [`MoodVector::dominant`] and the display order for score listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Energetic,
    Calm,
    Tense,
    Romantic,
    Nostalgic,
    Confident,
    Melancholic,
    Euphoric,
    Bored,
    Aggressive,
    Dreamy,
    Mysterious,
    Playful,
}

impl Mood {
    /// Number of moods
    pub const COUNT: usize = 15;

    /// Every mood in canonical order
    pub const ALL: [Mood; Mood::COUNT] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Energetic,
        Mood::Calm,
        Mood::Tense,
        Mood::Romantic,
        Mood::Nostalgic,
        Mood::Confident,
        Mood::Melancholic,
        Mood::Euphoric,
        Mood::Bored,
        Mood::Aggressive,
        Mood::Dreamy,
        Mood::Mysterious,
        Mood::Playful,
    ];

    /// Lowercase identifier, e.g. "melancholic"
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Energetic => "energetic",
            Mood::Calm => "calm",
            Mood::Tense => "tense",
            Mood::Romantic => "romantic",
            Mood::Nostalgic => "nostalgic",
            Mood::Confident => "confident",
            Mood::Melancholic => "melancholic",
            Mood::Euphoric => "euphoric",
            Mood::Bored => "bored",
            Mood::Aggressive => "aggressive",
            Mood::Dreamy => "dreamy",
            Mood::Mysterious => "mysterious",
            Mood::Playful => "playful",
        }
    }

    /// Title-cased display name, e.g. "Melancholic"
    pub fn display_name(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Energetic => "Energetic",
            Mood::Calm => "Calm",
            Mood::Tense => "Tense",
            Mood::Romantic => "Romantic",
            Mood::Nostalgic => "Nostalgic",
            Mood::Confident => "Confident",
            Mood::Melancholic => "Melancholic",
            Mood::Euphoric => "Euphoric",
            Mood::Bored => "Bored",
            Mood::Aggressive => "Aggressive",
            Mood::Dreamy => "Dreamy",
            Mood::Mysterious => "Mysterious",
            Mood::Playful => "Playful",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Mood Vector
// =============================================================================

/// Scores for every mood, each in [0,100].
///
/// Every key is always present; scores are computed independently and do not
/// sum to any constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodVector {
    scores: [f64; Mood::COUNT],
}

impl MoodVector {
    pub(crate) fn from_scores(scores: [f64; Mood::COUNT]) -> Self {
        Self { scores }
    }

    /// Score for one mood
    pub fn get(&self, mood: Mood) -> f64 {
        self.scores[mood as usize]
    }

    /// The single highest-scoring mood.
    ///
    /// Ties break to the mood that appears first in [`Mood::ALL`]; strict
    /// `>` comparison keeps the result deterministic.
    pub fn dominant(&self) -> Mood {
        let mut best = Mood::ALL[0];
        for mood in Mood::ALL {
            if self.get(mood) > self.get(best) {
                best = mood;
            }
        }
        best
    }

    /// (mood, score) pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Mood, f64)> + '_ {
        Mood::ALL.into_iter().map(|mood| (mood, self.get(mood)))
    }

    /// Serializable score list in canonical order
    pub fn to_scores(&self) -> Vec<MoodScore> {
        self.iter()
            .map(|(mood, score)| MoodScore {
                mood,
                name: mood.display_name().to_string(),
                score,
            })
            .collect()
    }
}

/// One mood's score in hand-off form for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodScore {
    /// Mood identifier
    pub mood: Mood,
    /// Display name
    pub name: String,
    /// Score in [0,100]
    pub score: f64,
}

/// Result of classifying one descriptor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodReading {
    pub scores: MoodVector,
    pub dominant: Mood,
}

// =============================================================================
// Feature Summary
// =============================================================================

/// Output of the feature aggregator: an averaged descriptor plus provenance.
///
/// `degraded` is true when no usable per-track data existed and the
/// documented default descriptor was substituted; callers surface it so the
/// display layer can distinguish a confident mood from a guessed one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureSummary {
    pub descriptor: AudioDescriptor,
    pub degraded: bool,
    /// Number of tracks that actually contributed to the average
    pub sampled_tracks: usize,
}
