use anyhow::{anyhow, Context, Result};
use catalog::{builtin_catalog, default_aliases, AliasTable, MovieCatalog};
use clap::{Parser, Subcommand};
use colored::Colorize;
use listening::{classify, AudioDescriptor};
use resolver::{CatalogSource, Resolver, ResolverConfig};
use serde::Deserialize;
use server::{ListenerSession, SessionConfig, SessionOrchestrator, StaticSource};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// MoodFlix - Mood-based movie recommendations from listening stats
#[derive(Parser)]
#[command(name = "moodflix")]
#[command(about = "Map listening statistics to a mood and movie picks", long_about = None)]
struct Cli {
    /// Path to a catalog JSON file (defaults to the built-in catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a listening snapshot through the full pipeline
    Analyze {
        /// Path to a listening snapshot JSON file
        #[arg(long)]
        snapshot: PathBuf,

        /// Entries to keep per genre
        #[arg(long, default_value = "5")]
        max_per_genre: usize,

        /// Print the full session as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Classify a single audio descriptor given on the command line
    Classify {
        #[arg(long, default_value = "0.5")]
        acousticness: f64,

        #[arg(long, default_value = "0.5")]
        danceability: f64,

        #[arg(long, default_value = "0.5")]
        energy: f64,

        #[arg(long, default_value = "0.1")]
        speechiness: f64,

        #[arg(long, default_value = "0.5")]
        valence: f64,

        /// Tempo in BPM
        #[arg(long, default_value = "120")]
        tempo: f64,
    },

    /// Browse catalog genres or search for movies by title
    Catalog {
        /// Show the entries of one genre
        #[arg(long)]
        genre: Option<String>,

        /// Search all genres for a title (case-insensitive substring match)
        #[arg(long)]
        title: Option<String>,
    },

    /// Run benchmark sessions over random listening histories
    Benchmark {
        /// Number of sessions to build
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Load catalog and aliases (built-in unless a file was given)
    let start = Instant::now();
    let (catalog, aliases) = match &cli.catalog {
        Some(path) => {
            println!("Loading catalog from {}...", path.display());
            catalog::load_catalog(path).context("Failed to load catalog file")?
        }
        None => (builtin_catalog(), default_aliases()),
    };
    println!(
        "{} {} genres, {} entries ({:?})",
        "✓".green(),
        catalog.genre_count(),
        catalog.entry_count(),
        start.elapsed()
    );
    let catalog = Arc::new(catalog);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Analyze {
            snapshot,
            max_per_genre,
            json,
        } => handle_analyze(catalog, aliases, snapshot, max_per_genre, json).await?,
        Commands::Classify {
            acousticness,
            danceability,
            energy,
            speechiness,
            valence,
            tempo,
        } => handle_classify(acousticness, danceability, energy, speechiness, valence, tempo),
        Commands::Catalog { genre, title } => handle_catalog(catalog, genre, title)?,
        Commands::Benchmark { requests } => {
            handle_benchmark(catalog, aliases, requests).await?
        }
    }

    Ok(())
}

// ============================================================================
// Snapshot input
// ============================================================================

/// Offline stand-in for the streaming provider: everything one session needs
#[derive(Debug, Deserialize)]
struct ListeningSnapshot {
    /// Genre tags per top artist, most-played artist first
    artist_genres: Vec<Vec<String>>,
    /// Per-track audio features; `null` where no analysis exists
    tracks: Vec<Option<AudioDescriptor>>,
}

impl ListeningSnapshot {
    fn load(path: &PathBuf) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
        let snapshot: ListeningSnapshot =
            serde_json::from_str(&raw).context("Snapshot is not valid JSON")?;
        Ok(snapshot)
    }

    /// Clamp deserialized descriptors back into their valid domains
    fn normalized_tracks(&self) -> Vec<Option<AudioDescriptor>> {
        self.tracks
            .iter()
            .copied()
            .map(|t| t.map(AudioDescriptor::clamped))
            .collect()
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Handle the 'analyze' command
async fn handle_analyze(
    catalog: Arc<MovieCatalog>,
    aliases: AliasTable,
    snapshot_path: PathBuf,
    max_per_genre: usize,
    json: bool,
) -> Result<()> {
    let snapshot = ListeningSnapshot::load(&snapshot_path)?;

    let resolver = Arc::new(Resolver::new(
        CatalogSource::new(catalog.clone()),
        catalog,
        aliases,
        ResolverConfig {
            max_per_genre,
            ..ResolverConfig::default()
        },
    )?);

    let source = Arc::new(StaticSource::new(
        snapshot.artist_genres.clone(),
        snapshot.normalized_tracks(),
    ));

    let orchestrator = SessionOrchestrator::new(
        source.clone(),
        source,
        resolver,
        SessionConfig::default(),
    );
    let session = orchestrator.build_session().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
    } else {
        print_session(&session);
    }
    Ok(())
}

/// Handle the 'classify' command
fn handle_classify(
    acousticness: f64,
    danceability: f64,
    energy: f64,
    speechiness: f64,
    valence: f64,
    tempo: f64,
) {
    let reading = classify(acousticness, danceability, energy, speechiness, valence, tempo);

    println!("{}", "Mood scores:".bold().blue());
    for (mood, score) in reading.scores.iter() {
        let bar = "#".repeat((score / 5.0).round() as usize);
        let line = format!("{:12} {:5.1}  {}", mood.display_name(), score, bar);
        if mood == reading.dominant {
            println!("{}", line.green().bold());
        } else {
            println!("{}", line);
        }
    }
    println!(
        "\nDominant mood: {}",
        reading.dominant.display_name().green().bold()
    );
}

/// Handle the 'catalog' command
fn handle_catalog(
    catalog: Arc<MovieCatalog>,
    genre: Option<String>,
    title: Option<String>,
) -> Result<()> {
    if let Some(genre) = genre {
        let entries = catalog.entries_for(&genre);
        if entries.is_empty() {
            return Err(anyhow!("No catalog genre matches '{}'", genre));
        }
        let display = catalog.canonical_key(&genre).unwrap_or(genre.as_str());
        println!("{}", format!("{} ({} entries):", display, entries.len()).bold().blue());
        for entry in entries {
            print_entry(entry);
        }
        return Ok(());
    }

    if let Some(title) = title {
        let needle = title.to_lowercase();
        let mut matches = Vec::new();
        for genre in catalog.genres() {
            for entry in catalog.entries_for(genre) {
                let folded = entry.title.to_lowercase();
                if folded == needle {
                    matches.push((0usize, genre, entry));
                } else if folded.contains(&needle) {
                    matches.push((1usize, genre, entry));
                }
            }
        }
        // Exact matches first, then substring hits
        matches.sort_by_key(|(exactness, _, _)| *exactness);

        println!("{}", format!("Search results for '{}':", title).bold().blue());
        for (_, genre, entry) in matches.iter().take(20) {
            println!(
                "{} [{}] - {}",
                entry.title,
                genre,
                entry.short_desc
            );
        }
        return Ok(());
    }

    // No filter: list every genre with its entry count
    println!("{}", "Catalog genres:".bold().blue());
    for genre in catalog.genres() {
        println!(
            "{}{:12} {} entries",
            "• ".green(),
            genre,
            catalog.entries_for(genre).len()
        );
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    catalog: Arc<MovieCatalog>,
    aliases: AliasTable,
    requests: usize,
) -> Result<()> {
    if requests == 0 {
        return Err(anyhow!("requests must be at least 1"));
    }

    let resolver = Arc::new(Resolver::new(
        CatalogSource::new(catalog.clone()),
        catalog,
        aliases,
        ResolverConfig::default(),
    )?);

    // Random listening histories, one per request
    let mut handles = vec![];
    for _ in 0..requests {
        let resolver = resolver.clone();
        let source = Arc::new(StaticSource::new(
            vec![vec!["pop".to_string()], vec!["rock".to_string()]],
            (0..10)
                .map(|_| {
                    Some(AudioDescriptor::new(
                        rand::random::<f64>(),
                        rand::random::<f64>(),
                        rand::random::<f64>(),
                        rand::random::<f64>(),
                        rand::random::<f64>(),
                        60.0 + rand::random::<f64>() * 140.0,
                        rand::random::<f64>(),
                    ))
                })
                .collect(),
        ));
        let handle = tokio::spawn(async move {
            let orchestrator = SessionOrchestrator::new(
                source.clone(),
                source,
                resolver,
                SessionConfig::default(),
            );
            let start = Instant::now();
            orchestrator.build_session().await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }

    let total_time: std::time::Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];

    println!("Benchmark results:");
    println!("Sessions: {}", requests);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);

    Ok(())
}

// ============================================================================
// Output formatting
// ============================================================================

/// Format and print a full session
fn print_session(session: &ListenerSession) {
    if session.degraded {
        println!(
            "{}",
            "Audio features were unavailable; mood computed from defaults."
                .yellow()
                .bold()
        );
    }

    println!(
        "{} {}",
        "Dominant mood:".bold().blue(),
        session.mood_name.green().bold()
    );

    println!("\n{}", "Audio profile:".bold().blue());
    println!("{}Energy: {}", "• ".green(), session.audio_summary.energy);
    println!("{}Valence: {}", "• ".green(), session.audio_summary.valence);
    println!("{}Danceability: {}", "• ".green(), session.audio_summary.danceability);
    println!("{}Acousticness: {}", "• ".green(), session.audio_summary.acousticness);
    println!("{}Tempo: {}", "• ".green(), session.audio_summary.tempo);

    println!("\n{}", "Top mood scores:".bold().blue());
    let mut scores = session.mood_scores.clone();
    scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    for score in scores.iter().take(5) {
        println!("  {:12} {:5.1}", score.name, score.score);
    }

    println!("\n{}", "Top genres:".bold().blue());
    println!("  {}", session.top_genres.join(", "));

    if session.recommendations.used_fallback {
        println!(
            "\n{}",
            "No genre matched the catalog; showing fallback picks.".yellow()
        );
    }
    for group in session.recommendations.groups() {
        println!(
            "\n{}",
            format!("Movies for '{}' ({}):", group.label, group.genre).bold().blue()
        );
        for (i, entry) in group.entries.iter().enumerate() {
            println!(
                "{}. {} ({})",
                (i + 1).to_string().green(),
                entry.title,
                entry.year.map(|y| y.to_string()).unwrap_or("????".to_string()),
            );
            println!("   {}", entry.short_desc);
        }
    }
}

fn print_entry(entry: &catalog::RecommendationEntry) {
    println!(
        "{} ({}) - {}",
        entry.title.bold(),
        entry.year.map(|y| y.to_string()).unwrap_or("????".to_string()),
        entry.short_desc
    );
    if let Some(director) = &entry.director {
        println!("   Director: {}", director);
    }
    if !entry.cast.is_empty() {
        println!("   Cast: {}", entry.cast.join(", "));
    }
    if let Some(awards) = &entry.awards {
        println!("   {}", awards);
    }
}
