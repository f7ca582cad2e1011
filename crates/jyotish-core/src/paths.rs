//! Path resolution for config and data files

use std::path::PathBuf;

/// Resolves the data directory (`~/.jyotish`, or `$JYOTISH_HOME`)
#[derive(Debug, Clone)]
pub struct Paths {
    pub home: PathBuf,
}

impl Paths {
    pub fn new() -> std::io::Result<Self> {
        if let Some(home) = std::env::var_os("JYOTISH_HOME").filter(|h| !h.is_empty()) {
            return Ok(Self::with_home(home));
        }

        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;
        Ok(Self::with_home(home.join(".jyotish")))
    }

    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.join("jyotish.json")
    }

    /// SQLite database holding chat history
    pub fn history_db(&self) -> PathBuf {
        self.home.join("history.db")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_with_home() {
        let paths = Paths::with_home("/tmp/jy");
        assert!(paths.config_file().ends_with("jy/jyotish.json"));
        assert!(paths.history_db().ends_with("jy/history.db"));
    }

    #[test]
    #[serial]
    fn test_env_override() {
        std::env::set_var("JYOTISH_HOME", "/tmp/jyotish-test-home");
        let paths = Paths::new().unwrap();
        std::env::remove_var("JYOTISH_HOME");
        assert_eq!(paths.home, PathBuf::from("/tmp/jyotish-test-home"));
    }

    #[test]
    #[serial]
    fn test_default_home() {
        std::env::remove_var("JYOTISH_HOME");
        let paths = Paths::new().unwrap();
        assert!(paths.home.ends_with(".jyotish"));
    }
}
