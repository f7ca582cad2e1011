mod common;

use jyotish_core::{RetrievalConfig, ZodiacSign};
use jyotish_index::{seed_documents, Category, ContextTags, KnowledgeRetriever};

#[test]
fn test_every_sign_finds_its_own_traits_first() {
    let retriever = common::retriever();
    for sign in ZodiacSign::ALL {
        let query = sign.name().to_lowercase();
        let hits = retriever.query(&query, 1);
        assert_eq!(hits[0].document.sign, Some(sign), "{}", sign);
        assert_eq!(hits[0].document.category, Category::Zodiac);
    }
}

#[test]
fn test_scores_positive_and_descending() {
    let retriever = common::retriever();
    for query in [
        "saturn career discipline",
        "love venus",
        "moon emotions home",
        "7th house",
    ] {
        let hits = retriever.query(query, 50);
        assert!(hits.iter().all(|h| h.score > 0.0), "{}", query);
        assert!(
            hits.windows(2).all(|w| w[0].score >= w[1].score),
            "{}",
            query
        );
    }
}

#[test]
fn test_query_is_case_insensitive() {
    let retriever = common::retriever();
    let lower: Vec<_> = retriever
        .query("jupiter wisdom", 5)
        .iter()
        .map(|h| h.document.id.clone())
        .collect();
    let upper: Vec<_> = retriever
        .query("JUPITER Wisdom", 5)
        .iter()
        .map(|h| h.document.id.clone())
        .collect();
    assert_eq!(lower, upper);
}

#[test]
fn test_blank_query_matches_nothing() {
    let retriever = common::retriever();
    assert!(retriever.query("", 3).is_empty());
    assert!(retriever.query("   ", 3).is_empty());
    assert_eq!(retriever.build_prompt_context("", None), "");
}

#[test]
fn test_context_block_lists_at_most_max_results() {
    let retriever = common::retriever();
    let context = retriever.build_prompt_context("aries leader career", None);
    let header = "\nRELEVANT ASTROLOGY KNOWLEDGE (from vector database):\n";
    let footer = "\n\nUse this knowledge to provide accurate, contextual responses.\n";
    assert!(context.starts_with(header));
    assert!(context[header.len()..].starts_with("[zodiac] Aries"));
    assert!(context.ends_with(footer));
    // one entry after the header, two more separated by blank lines
    assert_eq!(context.matches("\n[").count(), 3);
    assert_eq!(context.matches("\n\n[").count(), 2);
}

#[test]
fn test_user_context_buffer_is_bounded() {
    let config = RetrievalConfig {
        user_context_capacity: 5,
        ..RetrievalConfig::default()
    };
    let retriever = KnowledgeRetriever::new(&config);
    for i in 0..20 {
        retriever.add_context("u1", &format!("wombat note {}", i), ContextTags::default());
    }

    let stats = retriever.stats();
    assert_eq!(stats.seeded_documents, seed_documents().len());
    assert_eq!(stats.user_context_documents, 5);

    let texts: Vec<String> = retriever
        .query("wombat", 50)
        .iter()
        .map(|h| h.document.text.clone())
        .collect();
    let expected: Vec<String> = (15..20).map(|i| format!("wombat note {}", i)).collect();
    assert_eq!(texts, expected);
}
