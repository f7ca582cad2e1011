use criterion::{criterion_group, criterion_main, Criterion};
use jyotish_core::RetrievalConfig;
use jyotish_index::{ContextTags, KnowledgeRetriever};
use std::hint::black_box;

fn bench_query_seeded(c: &mut Criterion) {
    let retriever = KnowledgeRetriever::new(&RetrievalConfig::default());

    c.bench_function("retriever_query_seeded", |b| {
        b.iter(|| retriever.query(black_box("aries leader career"), 3));
    });
}

fn bench_prompt_context(c: &mut Criterion) {
    let retriever = KnowledgeRetriever::new(&RetrievalConfig::default());
    for i in 0..256 {
        retriever.add_context(
            "bench",
            &format!("User asked: will saturn transit {} change my career", i),
            ContextTags::default(),
        );
    }

    c.bench_function("retriever_prompt_context_256_user_docs", |b| {
        b.iter(|| retriever.build_prompt_context(black_box("saturn career change"), None));
    });
}

criterion_group!(benches, bench_query_seeded, bench_prompt_context);
criterion_main!(benches);
