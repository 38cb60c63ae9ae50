//! Error types for session construction and configuration.
//!
//! Ticking a session never fails; everything here surfaces while a session
//! is being set up or its settings are being loaded.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;

/// The elements a session holds exactly one of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingletonKind {
    Player,
    Home,
    Waypoint,
}

impl fmt::Display for SingletonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SingletonKind::Player => "player",
            SingletonKind::Home => "home",
            SingletonKind::Waypoint => "waypoint",
        };
        f.write_str(name)
    }
}

/// Top-level error type for the game.
#[derive(Debug, Error)]
pub enum GameError {
    /// Arena dimensions must be positive and finite.
    #[error("Invalid arena size {width}x{height}")]
    InvalidArena {
        /// Requested width.
        width: f32,
        /// Requested height.
        height: f32,
    },

    /// A second player, home or waypoint was registered.
    #[error("Session already has a {0}")]
    DuplicateSingleton(SingletonKind),

    /// A session was built without a player, home or waypoint.
    #[error("Session is missing a {0}")]
    MissingSingleton(SingletonKind),

    /// Some other setting is out of range.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// Settings file could not be read.
    #[error("Failed to read settings file '{}': {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Settings file is not valid JSON for [`crate::Settings`].
    #[error("Failed to parse settings file '{}': {source}", path.display())]
    Config {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_problem() {
        let err = GameError::InvalidArena {
            width: 0.0,
            height: 600.0,
        };
        assert_eq!(err.to_string(), "Invalid arena size 0x600");

        let err = GameError::DuplicateSingleton(SingletonKind::Home);
        assert_eq!(err.to_string(), "Session already has a home");
    }
}
