//! Turtle Adventure - guide the turtle home while dodging enemies
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, spawning, session state)
//! - `renderer`: Draw-command seam plus a character-grid renderer
//! - `settings`: Session configuration
//! - `error`: Construction-time failures

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{GameError, Result};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Default wall-clock length of one tick (milliseconds)
    pub const DEFAULT_TICK_MS: u64 = 30;

    /// Reference arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_START_X: f32 = 50.0;
    /// Player marker extent used for rendering only
    pub const PLAYER_SIZE: f32 = 16.0;

    /// Home sits this far in from the right wall, vertically centered
    pub const HOME_INSET: f32 = 100.0;
    pub const HOME_SIZE: f32 = 20.0;

    /// Waypoint cross half-extent
    pub const WAYPOINT_MARKER: f32 = 10.0;

    /// Every spawned enemy appears here with this size
    pub const SPAWN_POINT: Vec2 = Vec2::new(100.0, 100.0);
    pub const ENEMY_SIZE: f32 = 20.0;

    /// Spawn schedule (milliseconds)
    pub const FIRST_SPAWN_DELAY_MS: u64 = 100;
    pub const SPAWN_INTERVAL_MS: u64 = 500;

    /// Random walkers draw an integer speed from this inclusive range
    pub const RANDOM_WALK_SPEED_MIN: u32 = 1;
    pub const RANDOM_WALK_SPEED_MAX: u32 = 5;

    pub const CHASER_SPEED: f32 = 3.0;
    pub const FENCER_SPEED: f32 = 2.0;
    pub const BLOCKER_SPEED: f32 = 7.0;

    /// Half-width of the square patrolled by fencers and blockers
    pub const PATROL_HALF_WIDTH: f32 = 60.0;

    /// Demo enemies drift by this much every tick
    pub const DEMO_STEP: Vec2 = Vec2::new(1.0, 2.0);
}

/// Heading (radians) from `from` toward `to`.
///
/// Coincident points yield 0, which is as good a direction as any.
#[inline]
pub fn heading(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    delta.y.atan2(delta.x)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Move `dist` units from `pos` straight toward `target`
#[inline]
pub fn step_toward(pos: Vec2, target: Vec2, dist: f32) -> Vec2 {
    pos + polar_to_cartesian(dist, heading(pos, target))
}
