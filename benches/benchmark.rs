// Benchmarks for index build and query over synthetic restaurant tables
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dishx_core::{Dataset, Restaurant};
use dishx_recommend::{
    recommend_filtered, recommend_similar, FilterQuery, RecommenderConfig, RecommenderContext,
};
use rand::prelude::*;

const CATEGORIES: &[&str] = &["Thai", "Japanese", "Italian", "Cafe", "Street Food", "Seafood"];
const CUISINES: &[&str] = &["Isaan", "Northern", "Noodles", "Sushi", "Pizza", "Bakery", "Grill"];
const PRICES: &[&str] = &["$", "$$", "$$$", "$$$$"];
const PROVINCES: &[&str] = &["Bangkok", "Chiang Mai", "Phuket", "Khon Kaen"];

fn generate_dataset(size: usize) -> Dataset {
    let mut rng = rand::rng();
    let records = (0..size)
        .map(|i| {
            Restaurant::new(
                format!("Shop {}", i),
                *CATEGORIES.choose(&mut rng).unwrap(),
                *CUISINES.choose(&mut rng).unwrap(),
                *PRICES.choose(&mut rng).unwrap(),
            )
            .with_street(format!("Road {}, {}", i, PROVINCES.choose(&mut rng).unwrap()))
            .with_url("-")
        })
        .collect();
    Dataset::from_records(records).unwrap()
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [100, 1000, 5000].iter() {
        let dataset = generate_dataset(*size);
        group.bench_with_input(BenchmarkId::new("context", size), &dataset, |b, dataset| {
            b.iter(|| {
                RecommenderContext::build(black_box(dataset.clone()), RecommenderConfig::default())
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn benchmark_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    for size in [100, 1000, 5000].iter() {
        let ctx = RecommenderContext::build(generate_dataset(*size), RecommenderConfig::default())
            .unwrap();
        let name = format!("Shop {}", size / 2);

        group.bench_with_input(BenchmarkId::new("similar", size), &ctx, |b, ctx| {
            b.iter(|| recommend_similar(ctx, black_box(&name), 3));
        });

        let query = FilterQuery::new("Bangkok", "Thai", "$");
        group.bench_with_input(BenchmarkId::new("filtered", size), &ctx, |b, ctx| {
            b.iter(|| recommend_filtered(ctx, black_box(&query), 5));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_queries);
criterion_main!(benches);
