mod app;
mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => commands::init::run(force),
        Commands::Version => commands::version::run(),
        Commands::Zodiac { sign, dob } => commands::zodiac::run(sign, dob),
        Commands::Chart { profile } => commands::chart::run(&profile).await,
        Commands::Guidance { profile } => commands::guidance::run(&profile).await,
        Commands::Chat { profile, message } => commands::chat::run(&profile, &message).await,
        Commands::History {
            user,
            limit,
            before,
            clear,
        } => commands::history::run(user.as_deref(), limit, before, clear),
        Commands::Search { query, limit } => commands::search::run(&query, limit),
        Commands::Horoscope { sign, date } => commands::horoscope::run(sign, date),
        Commands::Panchang { date } => commands::panchang::run(date),
    }
}
