use crate::cli::ProfileArgs;
use jyotish_chart::{resolve_chart, ChartSynthesizer, ResolvedChart};
use jyotish_core::UserContext;

pub async fn run(profile: &ProfileArgs) -> anyhow::Result<()> {
    let user = profile.to_user()?;
    // No external ephemeris is wired into the CLI, so this always synthesizes
    let resolved = resolve_chart(None, &ChartSynthesizer::new(), &user).await;
    let report = chart_report(&user, &resolved)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn chart_report(user: &UserContext, chart: &ResolvedChart) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::json!({
        "user": serde_json::to_value(user)?,
        "zodiacProfile": serde_json::to_value(user.zodiac_sign.profile())?,
        "kundli": serde_json::to_value(chart)?,
    }))
}
