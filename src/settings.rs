//! Session settings
//!
//! Loaded from an optional JSON file; every field falls back to the
//! reference session (800x600, level 1).

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    /// Arena width in arena units
    pub width: f32,
    /// Arena height in arena units
    pub height: f32,
    /// Difficulty level (recorded only, spawning ignores it for now)
    pub level: u32,

    // === Timing ===
    /// Length of one tick in milliseconds
    pub tick_ms: u64,
    /// Delay before the first enemy appears
    pub spawn_delay_ms: u64,
    /// Delay between subsequent enemies
    pub spawn_interval_ms: u64,

    // === Entities ===
    /// Player travel per tick
    pub player_speed: f32,
    /// Side length of the home square
    pub home_size: f32,
    /// Optional cap on live enemies (None = unbounded)
    pub max_enemies: Option<usize>,

    // === Determinism ===
    /// RNG seed for spawn choices and enemy setup
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            level: 1,

            tick_ms: DEFAULT_TICK_MS,
            spawn_delay_ms: FIRST_SPAWN_DELAY_MS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,

            player_speed: PLAYER_SPEED,
            home_size: HOME_SIZE,
            max_enemies: None,

            seed: 0,
        }
    }
}

impl Settings {
    /// Settings for an arena of the given size, everything else default
    pub fn with_arena(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Check the invariants a session relies on
    pub fn validate(&self) -> Result<()> {
        let dimension_ok = |d: f32| d.is_finite() && d > 0.0;
        if !dimension_ok(self.width) || !dimension_ok(self.height) {
            return Err(GameError::InvalidArena {
                width: self.width,
                height: self.height,
            });
        }
        if self.tick_ms == 0 {
            return Err(GameError::InvalidSettings("tick_ms must be at least 1".into()));
        }
        if !(self.player_speed.is_finite() && self.player_speed > 0.0) {
            return Err(GameError::InvalidSettings(format!(
                "player_speed must be positive, got {}",
                self.player_speed
            )));
        }
        if !(self.home_size.is_finite() && self.home_size > 0.0) {
            return Err(GameError::InvalidSettings(format!(
                "home_size must be positive, got {}",
                self.home_size
            )));
        }
        Ok(())
    }

    /// Where home sits: inset from the right wall, vertically centered
    pub fn home_position(&self) -> Vec2 {
        Vec2::new(self.width - HOME_INSET, (self.height / 2.0).floor())
    }

    /// Where the player starts: near the left wall, vertically centered
    pub fn player_start(&self) -> Vec2 {
        Vec2::new(PLAYER_START_X, (self.height / 2.0).floor())
    }

    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str, path: &Path) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json).map_err(|source| GameError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json, path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
