use crate::app::App;
use jyotish_index::ScoredDocument;

pub fn run(query: &str, limit: usize) -> anyhow::Result<()> {
    let retriever = App::load()?.retriever();
    let hits = retriever.query(query, limit);
    println!("{}", render_hits(query, &hits));
    Ok(())
}

fn render_hits(query: &str, hits: &[ScoredDocument]) -> String {
    if hits.is_empty() {
        return format!("No knowledge matches \"{}\"", query);
    }
    hits.iter()
        .enumerate()
        .map(|(i, hit)| {
            format!(
                "{}. [{}] {} (score {:.1})\n   {}",
                i + 1,
                hit.document.category.label(),
                hit.document.id,
                hit.score,
                hit.document.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
