use jyotish_core::{Config, Paths};
use std::path::Path;

pub fn run(force: bool) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let config_path = paths.config_file();

    if write_default_config(&config_path, force)? {
        println!("✓ Wrote default config to {}", config_path.display());
        println!("\nSet GROQ_API_KEY (free at console.groq.com) to enable AI guidance and chat.");
    } else {
        println!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }
    Ok(())
}

/// Returns whether a file was written
fn write_default_config(path: &Path, force: bool) -> anyhow::Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    Config::new().save(path)?;
    Ok(true)
}
