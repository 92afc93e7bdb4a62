//! Mood classification from aggregate audio descriptors.
//!
//! Each of the fifteen moods is a fixed affine combination of the six input
//! signals; per-mood weights sum to 1.0 over the terms that mood uses. Tempo
//! is normalized against 200 BPM before weighting so it lands on the same
//! scale as the bounded fields. The weights are part of the contract, not
//! tunable parameters.

use crate::types::{AudioDescriptor, Mood, MoodReading, MoodVector};

/// Tempo normalization base, BPM
const TEMPO_SCALE: f64 = 200.0;

/// Classify six audio signals into a mood vector and dominant mood.
///
/// Total for all real inputs: bounded fields clamp to [0,1], a negative or
/// non-finite tempo clamps to 0, and every output score clamps to [0,100].
/// Ties on the maximum break to the first mood in [`Mood::ALL`].
pub fn classify(
    acousticness: f64,
    danceability: f64,
    energy: f64,
    speechiness: f64,
    valence: f64,
    tempo: f64,
) -> MoodReading {
    let a = unit(acousticness);
    let d = unit(danceability);
    let e = unit(energy);
    let s = unit(speechiness);
    let v = unit(valence);
    let t = if tempo.is_finite() { tempo.max(0.0) } else { 0.0 } / TEMPO_SCALE;

    let mut scores = [0.0f64; Mood::COUNT];
    for mood in Mood::ALL {
        let raw = match mood {
            Mood::Happy => v * 0.4 + e * 0.3 + d * 0.3,
            Mood::Sad => (1.0 - v) * 0.4 + (1.0 - e) * 0.3 + a * 0.2,
            Mood::Energetic => e * 0.4 + t * 0.3 + d * 0.3,
            Mood::Calm => (1.0 - e) * 0.4 + a * 0.3 + (1.0 - s) * 0.2,
            Mood::Tense => (1.0 - d) * 0.3 + (1.0 - v) * 0.3 + e * 0.3,
            Mood::Romantic => v * 0.4 + (1.0 - e) * 0.3 + (1.0 - d) * 0.2,
            Mood::Nostalgic => a * 0.5 + (1.0 - e) * 0.3 + v * 0.2,
            Mood::Confident => e * 0.4 + v * 0.3 + d * 0.3,
            Mood::Melancholic => a * 0.3 + (1.0 - v) * 0.4 + (1.0 - e) * 0.3,
            Mood::Euphoric => e * 0.35 + v * 0.35 + d * 0.3,
            Mood::Bored => (1.0 - e) * 0.4 + (1.0 - v) * 0.3 + (1.0 - d) * 0.3,
            Mood::Aggressive => e * 0.4 + s * 0.3 + (1.0 - a) * 0.3,
            Mood::Dreamy => a * 0.4 + (1.0 - e) * 0.3 + (1.0 - d) * 0.3,
            Mood::Mysterious => a * 0.4 + (1.0 - s) * 0.3 + (1.0 - v) * 0.2,
            Mood::Playful => d * 0.4 + v * 0.3 + e * 0.3,
        };
        scores[mood as usize] = (raw * 100.0).clamp(0.0, 100.0);
    }

    let scores = MoodVector::from_scores(scores);
    MoodReading {
        dominant: scores.dominant(),
        scores,
    }
}

/// Classify an already-aggregated descriptor.
///
/// Instrumentalness is carried for display but does not participate in any
/// mood formula.
pub fn classify_descriptor(descriptor: &AudioDescriptor) -> MoodReading {
    classify(
        descriptor.acousticness,
        descriptor.danceability,
        descriptor.energy,
        descriptor.speechiness,
        descriptor.valence,
        descriptor.tempo,
    )
}

fn unit(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}
