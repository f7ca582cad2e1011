use crate::app::App;
use crate::cli::ProfileArgs;
use jyotish_guide::Guidance;

pub async fn run(profile: &ProfileArgs) -> anyhow::Result<()> {
    let user = profile.to_user()?;
    let orchestrator = App::load()?.orchestrator();
    let guidance = orchestrator
        .daily_guidance(user.zodiac_sign, Some(&user.name))
        .await;
    println!("{}", render(&guidance));
    Ok(())
}

fn render(guidance: &Guidance) -> String {
    let mut out = format!(
        "{} · {} ({})\n\n{}",
        guidance.zodiac_sign,
        guidance.generated_at.format("%Y-%m-%d"),
        guidance.provider,
        guidance.message
    );
    if let Some(notice) = &guidance.notice {
        out.push_str(&format!("\n\nNote: {}", notice));
    }
    out
}
