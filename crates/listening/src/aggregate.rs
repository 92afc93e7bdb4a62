//! Feature aggregation: many per-track descriptors into one average.
//!
//! The feature lookup upstream is unreliable: individual tracks may have no
//! analysis (local files), and whole batches can fail on missing permission
//! scopes. Every such gap is represented as `None` in the input; this module
//! absorbs all of them and never fails.

use crate::types::{AudioDescriptor, FeatureSummary, DEFAULT_TEMPO};
use tracing::debug;

/// The descriptor substituted when no usable track data exists.
///
/// Values sit at the neutral midpoint of each field (speechiness and
/// instrumentalness at their typical resting level), so a degraded session
/// still classifies to a sensible, unexciting mood.
pub fn default_descriptor() -> AudioDescriptor {
    AudioDescriptor {
        acousticness: 0.5,
        danceability: 0.5,
        energy: 0.5,
        speechiness: 0.1,
        valence: 0.5,
        tempo: DEFAULT_TEMPO,
        instrumentalness: 0.1,
    }
}

/// Average the present records field-by-field.
///
/// ## Algorithm
/// 1. Sum every field over the `Some` records only
/// 2. Divide by the count of present records
/// 3. Zero present records (empty input, all-`None`, or a failed batch the
///    caller mapped to an empty slice): return [`default_descriptor`] with
///    `degraded = true`
///
/// Deterministic, no side effects, never panics.
pub fn aggregate(records: &[Option<AudioDescriptor>]) -> FeatureSummary {
    let mut sum = [0.0f64; 7];
    let mut sampled = 0usize;

    for descriptor in records.iter().flatten() {
        let d = descriptor.clamped();
        sum[0] += d.acousticness;
        sum[1] += d.danceability;
        sum[2] += d.energy;
        sum[3] += d.speechiness;
        sum[4] += d.valence;
        sum[5] += d.tempo;
        sum[6] += d.instrumentalness;
        sampled += 1;
    }

    if sampled == 0 {
        debug!(
            total_records = records.len(),
            "no usable audio features, falling back to default descriptor"
        );
        return FeatureSummary {
            descriptor: default_descriptor(),
            degraded: true,
            sampled_tracks: 0,
        };
    }

    let n = sampled as f64;
    let descriptor = AudioDescriptor::new(
        sum[0] / n,
        sum[1] / n,
        sum[2] / n,
        sum[3] / n,
        sum[4] / n,
        sum[5] / n,
        sum[6] / n,
    );

    FeatureSummary {
        descriptor,
        degraded: false,
        sampled_tracks: sampled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(energy: f64, valence: f64, tempo: f64) -> AudioDescriptor {
        AudioDescriptor::new(0.3, 0.6, energy, 0.05, valence, tempo, 0.2)
    }

    #[test]
    fn test_empty_input_degrades_to_default() {
        let summary = aggregate(&[]);

        assert!(summary.degraded);
        assert_eq!(summary.sampled_tracks, 0);
        assert_eq!(summary.descriptor, default_descriptor());
    }

    #[test]
    fn test_all_none_degrades_to_default() {
        let summary = aggregate(&[None, None, None]);

        assert!(summary.degraded);
        assert_eq!(summary.descriptor, default_descriptor());
    }

    #[test]
    fn test_single_present_record_passes_through() {
        let d = descriptor(0.8, 0.7, 140.0);
        let summary = aggregate(&[None, None, Some(d)]);

        assert!(!summary.degraded);
        assert_eq!(summary.sampled_tracks, 1);
        // Average of one element is that element
        assert_eq!(summary.descriptor, d);
    }

    #[test]
    fn test_mean_over_present_records() {
        let a = descriptor(0.2, 0.4, 100.0);
        let b = descriptor(0.8, 0.6, 140.0);
        let summary = aggregate(&[Some(a), None, Some(b)]);

        assert!(!summary.degraded);
        assert_eq!(summary.sampled_tracks, 2);
        assert!((summary.descriptor.energy - 0.5).abs() < 1e-12);
        assert!((summary.descriptor.valence - 0.5).abs() < 1e-12);
        assert!((summary.descriptor.tempo - 120.0).abs() < 1e-12);
    }

    #[test]
    fn test_unclamped_inputs_are_normalized_first() {
        // A record that bypassed the clamping constructor still cannot push
        // the average out of domain
        let rogue = AudioDescriptor {
            acousticness: 4.0,
            danceability: 0.5,
            energy: 0.5,
            speechiness: 0.1,
            valence: 0.5,
            tempo: -10.0,
            instrumentalness: 0.1,
        };
        let summary = aggregate(&[Some(rogue)]);

        assert_eq!(summary.descriptor.acousticness, 1.0);
        assert_eq!(summary.descriptor.tempo, DEFAULT_TEMPO);
    }

    #[test]
    fn test_deterministic() {
        let records = vec![Some(descriptor(0.5, 0.5, 120.0)), None, Some(descriptor(0.9, 0.1, 90.0))];
        assert_eq!(aggregate(&records), aggregate(&records));
    }
}
