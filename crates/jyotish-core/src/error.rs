//! Profile validation errors

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Name is required")]
    EmptyName,

    #[error("Invalid time of birth '{0}': expected HH:MM (24h)")]
    InvalidTimeOfBirth(String),

    #[error("Unknown zodiac sign '{0}'")]
    UnknownSign(String),
}
