//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Ticks are driven from outside, one call per interval
//! - Seeded RNG only
//! - Stable iteration order (waypoint, home, player, enemies by spawn order)
//! - Drawing goes through the `Renderer` seam, never directly

pub mod collision;
pub mod enemy;
pub mod entity;
pub mod geom;
pub mod patrol;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{box_hits_point, enemy_hits_player, player_at_home};
pub use enemy::{Behavior, Enemy, EnemyKind, RandomWalk};
pub use entity::{Color, ElementId, Home, Lifecycle, Player, Signal, Waypoint, WorldView};
pub use geom::{Arena, CenteredBox};
pub use patrol::{Leg, PATROL_STARTS, Patrol, PatrolCycle};
pub use spawner::{RosterEntry, Spawner, SpawnerState, default_roster};
pub use state::{Element, GameState, Outcome, SessionBuilder, SessionSummary};
pub use tick::{TickInput, tick};
