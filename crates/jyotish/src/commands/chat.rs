use crate::app::App;
use crate::cli::ProfileArgs;

pub async fn run(profile: &ProfileArgs, message: &str) -> anyhow::Result<()> {
    let user = profile.to_user()?;
    let service = App::load()?.chat_service()?;
    let reply = service.send(&user, message).await?;

    println!("{}", reply.content);
    tracing::debug!(provider = %reply.provider, rag = reply.rag_enabled, "chat reply");
    Ok(())
}
