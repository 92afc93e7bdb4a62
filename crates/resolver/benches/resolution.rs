//! Benchmarks for genre resolution
//!
//! Run with: cargo bench --package resolver

use catalog::{builtin_catalog, default_aliases};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resolver::{normalize, CatalogSource, Resolver, ResolverConfig};
use std::sync::Arc;

fn build_resolver() -> Resolver<CatalogSource> {
    let catalog = Arc::new(builtin_catalog());
    Resolver::new(
        CatalogSource::new(catalog.clone()),
        catalog,
        default_aliases(),
        ResolverConfig::default(),
    )
    .expect("default config is valid")
}

fn bench_normalize(c: &mut Criterion) {
    let catalog = builtin_catalog();
    let aliases = default_aliases();

    c.bench_function("normalize_alias_hit", |b| {
        b.iter(|| normalize(black_box("alternative hip hop"), &aliases, &catalog))
    });

    c.bench_function("normalize_substring_hit", |b| {
        b.iter(|| normalize(black_box("classic rock"), &aliases, &catalog))
    });

    c.bench_function("normalize_miss", |b| {
        b.iter(|| normalize(black_box("Nonexistent Genre XYZ"), &aliases, &catalog))
    });
}

fn bench_resolve(c: &mut Criterion) {
    let resolver = build_resolver();
    let genres: Vec<String> = [
        "alternative hip hop",
        "pop",
        "classic rock",
        "latin pop",
        "bebop",
        "shoegaze",
        "Nonexistent Genre XYZ",
    ]
    .iter()
    .map(|g| g.to_string())
    .collect();

    c.bench_function("resolve_listener_genres", |b| {
        b.iter(|| {
            let set = resolver.resolve(black_box(&genres));
            black_box(set)
        })
    });
}

criterion_group!(benches, bench_normalize, bench_resolve);
criterion_main!(benches);
