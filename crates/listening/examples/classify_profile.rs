use listening::{aggregate, classify_descriptor, AudioDescriptor};

fn main() {
    // A short upbeat listening history; the second track has no analysis
    let records = vec![
        Some(AudioDescriptor::new(0.15, 0.82, 0.88, 0.06, 0.74, 152.0, 0.02)),
        None,
        Some(AudioDescriptor::new(0.22, 0.75, 0.80, 0.04, 0.68, 128.0, 0.10)),
        Some(AudioDescriptor::new(0.10, 0.90, 0.93, 0.08, 0.81, 160.0, 0.01)),
    ];

    let summary = aggregate(&records);
    println!(
        "Averaged {} of {} tracks (degraded: {})\n",
        summary.sampled_tracks,
        records.len(),
        summary.degraded
    );

    let reading = classify_descriptor(&summary.descriptor);
    for (mood, score) in reading.scores.iter() {
        println!("{:12} {:5.1}", mood.display_name(), score);
    }

    println!("\nDominant mood: {}", reading.dominant.display_name());
}
