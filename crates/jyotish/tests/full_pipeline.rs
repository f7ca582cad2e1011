mod common;

use chrono::{TimeZone, Utc};
use common::{sample_user, ScriptedProvider};
use jyotish_chart::{resolve_chart, ChartSynthesizer};
use jyotish_core::HistoryConfig;
use jyotish_guide::{ChatService, GuidanceSource};
use jyotish_history::{ChatHistory, Role};
use jyotish_index::Category;
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_profile_to_chart_guidance_and_chat() {
    let temp = TempDir::new().unwrap();
    let user = sample_user();

    // Chart
    let resolved = resolve_chart(None, &ChartSynthesizer::new(), &user).await;
    assert!(resolved.is_synthesized());

    // Guidance from the provider, then a chat turn
    let provider = ScriptedProvider::new(vec![
        Ok("🌍 Steady energy today, Asha.".to_string()),
        Ok("Saturn asks for patience with your career ✨".to_string()),
    ]);
    let requests = Arc::clone(&provider.requests);
    let orchestrator = Arc::new(common::orchestrator(Some(Box::new(provider))));

    let now = Utc.with_ymd_and_hms(2026, 10, 19, 6, 0, 0).unwrap();
    let guidance = orchestrator
        .daily_guidance_at(user.zodiac_sign, Some(&user.name), now)
        .await;
    assert_eq!(guidance.source, GuidanceSource::Ai);
    assert_eq!(guidance.message, "🌍 Steady energy today, Asha.");

    let history = Arc::new(ChatHistory::new(&temp.path().join("history.db")).unwrap());
    let service = ChatService::new(
        Arc::clone(&orchestrator),
        Arc::clone(&history),
        HistoryConfig::default(),
    );
    let reply = service
        .send(&user, "How will Saturn affect my career this year?")
        .await
        .unwrap();
    assert_eq!(reply.provider, "scripted");
    assert!(reply.rag_enabled);

    // Both provider calls happened, the chat one with the stored question
    {
        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].messages[0].content.contains("who is a Taurus"));
        assert_eq!(requests[1].messages.len(), 1);
        assert_eq!(requests[1].messages[0].role, Role::User);
        assert!(requests[1].system_prompt.contains("- Zodiac Sign: Taurus"));
    }

    // History holds the exchange
    let turns = history.recent("asha-1990", 10).unwrap();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[1].content, reply.content);

    // The question is now retrievable as user context
    let hits = orchestrator.retriever().query("saturn affect", 10);
    let remembered = hits
        .iter()
        .find(|h| h.document.category == Category::UserContext)
        .unwrap();
    assert_eq!(
        remembered.document.text,
        "User asked: How will Saturn affect my career this year?"
    );
    assert!(remembered.document.id.starts_with("user_asha-1990_"));
}

#[tokio::test]
async fn test_follow_up_sees_remembered_question() {
    let provider = ScriptedProvider::new(vec![
        Ok("First answer".to_string()),
        Ok("Second answer".to_string()),
    ]);
    let requests = Arc::clone(&provider.requests);
    let service = ChatService::new(
        Arc::new(common::orchestrator(Some(Box::new(provider)))),
        Arc::new(ChatHistory::open_in_memory().unwrap()),
        HistoryConfig::default(),
    );
    let user = sample_user();

    service
        .send(&user, "Tell me about quasarblossom rituals")
        .await
        .unwrap();
    service
        .send(&user, "More on quasarblossom please")
        .await
        .unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests[1].messages.len(), 3);
    let remembered = "[user_context] User asked: Tell me about quasarblossom rituals";
    assert!(requests[1].system_prompt.contains(remembered));
}
