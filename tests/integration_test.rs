// Integration tests for dishx
use dishx_core::{Dataset, Error, Restaurant};
use dishx_recommend::{
    entries, matching_rows, recommend_filtered, recommend_similar, recommend_similar_to_row,
    ContextCache, FilterQuery, Recommendation, RecommenderConfig, RecommenderContext,
};
use std::path::PathBuf;

const SHOPS_CSV: &str = "\
name,category,cuisine,price_level,street,url,rating
Somtam Corner,Thai,Isaan,$,\"Ladprao Rd, Bangkok\",-,4.5
Green Curry House,Thai,Isaan,$,\"Silom Rd, Bangkok\",https://example.com/shop,4.2
Khao Soi Lamduan,Thai,Northern,$,\"Faham, Chiang Mai\",,4.7
Pizza Nonna,Italian,Pizza,$$,\"Nimman, Chiang Mai\",https://example.com/nonna,3.9
Sushi Zen,Japanese,Sushi,$$$,\"Thonglor, Bangkok\", ,4.8
Boat Noodle Somtam,Thai,Noodles,$,\"Victory Monument, Bangkok\",-,4.0
";

fn write_csv(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("Lineman_Shops_Final_Clean.csv");
    std::fs::write(&path, contents).unwrap();
    path
}

fn load() -> RecommenderContext {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, SHOPS_CSV);
    RecommenderContext::load(&path, RecommenderConfig::default()).unwrap()
}

fn names(results: &[Recommendation]) -> Vec<String> {
    entries(results).map(|e| e.name.clone()).collect()
}

#[test]
fn test_similar_prefers_identical_features() {
    let ctx = load();
    let results = recommend_similar(&ctx, "Somtam", 1);
    assert_eq!(names(&results), vec!["Green Curry House"]);
    assert_eq!(results[0].entry().unwrap().url, "https://example.com/shop");
}

#[test]
fn test_similar_default_top_n() {
    let ctx = load();
    let results = recommend_similar(&ctx, "green curry", dishx_recommend::DEFAULT_SIMILAR_TOP_N);
    assert_eq!(results.len(), 3);
    assert!(!names(&results).contains(&"Green Curry House".to_string()));
    assert_eq!(names(&results)[0], "Somtam Corner");
}

#[test]
fn test_similar_with_ambiguous_name_uses_first_row() {
    let ctx = load();
    // Both "Somtam Corner" and "Boat Noodle Somtam" match
    assert_eq!(matching_rows(&ctx, "somtam"), vec![0, 5]);
    assert_eq!(
        recommend_similar(&ctx, "somtam", 3),
        recommend_similar_to_row(&ctx, 0, 3).unwrap()
    );
}

#[test]
fn test_similar_never_exceeds_corpus() {
    let ctx = load();
    let results = recommend_similar(&ctx, "Pizza", 50);
    assert_eq!(results.len(), ctx.dataset().len() - 1);
    assert!(!names(&results).contains(&"Pizza Nonna".to_string()));
}

#[test]
fn test_similar_not_found() {
    let ctx = load();
    let results = recommend_similar(&ctx, "Burger King", 3);
    assert_eq!(results, vec![Recommendation::NoSimilarFound]);
    assert!(results[0].is_sentinel());
}

#[test]
fn test_filter_conjunction_in_table_order() {
    let ctx = load();
    let results = recommend_filtered(&ctx, &FilterQuery::new("Bangkok", "thai", "$"), 5);
    assert_eq!(
        names(&results),
        vec!["Somtam Corner", "Green Curry House", "Boat Noodle Somtam"]
    );
}

#[test]
fn test_filter_no_match_sentinel() {
    let ctx = load();
    let results = recommend_filtered(&ctx, &FilterQuery::new("Bangkok", "Thai", "$$"), 5);
    assert_eq!(results, vec![Recommendation::NoMatch]);
}

#[test]
fn test_urls_are_always_usable() {
    let ctx = load();
    let results = recommend_filtered(&ctx, &FilterQuery::new("", "", "$"), 10);
    for entry in entries(&results) {
        assert!(entry.url.starts_with("https://"), "{} -> {}", entry.name, entry.url);
    }

    let somtam = entries(&results).find(|e| e.name == "Somtam Corner").unwrap();
    assert!(somtam.url.starts_with("https://www.google.com/search?q="));
    assert!(somtam.url.contains("Somtam"));

    // Whitespace-only URL also falls back
    let sushi = recommend_filtered(&ctx, &FilterQuery::new("Thonglor", "Japanese", "$$$"), 1);
    assert!(sushi[0].entry().unwrap().url.contains("Sushi"));
}

#[test]
fn test_selector_options() {
    let ctx = load();
    let ds = ctx.dataset();
    assert_eq!(ds.categories(), vec!["Thai", "Italian", "Japanese"]);
    assert_eq!(ds.price_levels(), vec!["$", "$$", "$$$"]);
    assert_eq!(ds.streets().len(), 6);
}

#[test]
fn test_combined_features_match_fields() {
    let ctx = load();
    for (row, record) in ctx.dataset().iter() {
        let expected = format!("{} {} {}", record.category, record.cuisine, record.price_level);
        assert_eq!(record.combined_features(), expected);
        assert_eq!(ctx.dataset().combined_features()[row], expected);
    }
}

#[test]
fn test_missing_column_fails_startup() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "name,category,cuisine,street,url\nA,Thai,Isaan,Bangkok,-\n");
    let err = RecommenderContext::load(&path, RecommenderConfig::default()).unwrap_err();
    assert!(matches!(err, Error::MissingColumn { ref column, .. } if column == "price_level"));
}

#[test]
fn test_cache_loads_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, SHOPS_CSV);
    let cache = ContextCache::new();
    let config = RecommenderConfig::default();

    let a = cache.get_or_load(&path, &config).unwrap();
    // Rewriting the file does not affect the memoized context
    std::fs::write(&path, "name,category,cuisine,price_level,street,url\nX,Thai,Isaan,$,Bangkok,-\n").unwrap();
    let b = cache.get_or_load(&path, &config).unwrap();
    assert_eq!(b.dataset().len(), 6);
    assert!(std::sync::Arc::ptr_eq(&a, &b));

    cache.clear();
    let c = cache.get_or_load(&path, &config).unwrap();
    assert_eq!(c.dataset().len(), 1);
}

#[test]
fn test_in_memory_context() {
    let dataset = Dataset::from_records(vec![
        Restaurant::new("Somtam Corner", "Thai", "Isaan", "$"),
        Restaurant::new("Green Curry House", "Thai", "Isaan", "$"),
    ])
    .unwrap();
    let ctx = RecommenderContext::build(dataset, RecommenderConfig::default()).unwrap();
    assert_eq!(names(&recommend_similar(&ctx, "green", 3)), vec!["Somtam Corner"]);
}
