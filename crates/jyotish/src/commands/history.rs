use crate::app::App;
use chrono::{DateTime, SecondsFormat, Utc};
use jyotish_history::HistoryPage;

const ANONYMOUS: &str = "anonymous";

pub fn run(
    user: Option<&str>,
    limit: Option<usize>,
    before: Option<DateTime<Utc>>,
    clear: bool,
) -> anyhow::Result<()> {
    let owner = user.unwrap_or(ANONYMOUS);
    let service = App::load()?.chat_service()?;

    if clear {
        let removed = service.clear(owner)?;
        println!("✓ Cleared {} messages for {}", removed, owner);
        return Ok(());
    }

    let page = service.history(owner, limit, before)?;
    println!("{}", render_page(owner, &page));
    Ok(())
}

fn render_page(owner: &str, page: &HistoryPage) -> String {
    if page.messages.is_empty() {
        return format!("No chat history for {}", owner);
    }

    let count = page.messages.len();
    let mut lines = vec![
        format!("Chat history for {} ({} messages)", owner, count),
        "======================".to_string(),
    ];
    for turn in &page.messages {
        lines.push(format!(
            "  {} | {:>9}: {}",
            turn.timestamp.format("%Y-%m-%d %H:%M"),
            turn.role,
            turn.content
        ));
    }
    if let Some(oldest) = page.messages.first().filter(|_| page.has_more) {
        let cursor = oldest
            .timestamp
            .to_rfc3339_opts(SecondsFormat::Micros, true);
        lines.push(format!("\nOlder messages: --before {}", cursor));
    }
    lines.join("\n")
}
