use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::Rng;

use lectern::chunk::Chunk;
use lectern::hybrid::HybridRanker;
use lectern::keyword::{KeywordExtractor, KeywordScorer};
use lectern::search::{MatchType, SearchResult};
use lectern::vector::cosine_similarity;

fn random_vector(dimension: usize) -> Vec<f32> {
    let mut rng = rand::rng();
    (0..dimension).map(|_| rng.random_range(-1.0..1.0)).collect()
}

fn bench_cosine_similarity(c: &mut Criterion) {
    let a = random_vector(768);
    let b = random_vector(768);

    c.bench_function("cosine_similarity_768", |bencher| {
        bencher.iter(|| cosine_similarity(black_box(&a), black_box(&b)).unwrap())
    });
}

fn bench_keyword_scoring(c: &mut Criterion) {
    let extractor = KeywordExtractor::new();
    let scorer = KeywordScorer::new();
    let keywords = extractor.extract("binary search tree rotations balance factor");
    let text = "A binary search tree keeps its keys in sorted order, so lookup, \
                insertion, and deletion can skip half of the remaining tree at \
                every step. Self-balancing variants perform rotations to bound \
                the height, trading a constant factor on update for logarithmic \
                worst-case search."
        .repeat(4);

    c.bench_function("keyword_score_paragraph", |bencher| {
        bencher.iter(|| scorer.score(black_box(&text), black_box(&keywords)))
    });
}

fn bench_hybrid_merge(c: &mut Criterion) {
    let ranker = HybridRanker::default();

    let make_results = |prefix: &str, count: usize| -> Vec<SearchResult> {
        (0..count)
            .map(|i| {
                let chunk = Chunk::new(
                    format!("{prefix}-{i}"),
                    "doc",
                    "user",
                    "chunk text",
                    vec![0.0],
                );
                SearchResult::from_chunk(&chunk, 1.0 / (i + 1) as f32, MatchType::Semantic)
            })
            .collect()
    };

    // Half of the keyword results collide with semantic ids, exercising
    // both insert and merge arms.
    let mut keyword = make_results("sem", 100);
    keyword.extend(make_results("kw", 100));

    c.bench_function("hybrid_merge_200_candidates", |bencher| {
        bencher.iter(|| {
            ranker.merge(
                black_box(make_results("sem", 200)),
                black_box(keyword.clone()),
                Some(0.01),
                20,
            )
        })
    });
}

criterion_group!(
    benches,
    bench_cosine_similarity,
    bench_keyword_scoring,
    bench_hybrid_merge
);
criterion_main!(benches);
