//! Collision detection between the player and everything else
//!
//! Two tests with deliberately different edge rules:
//! - an enemy hits the player only when the player's position is strictly
//!   inside the enemy's square
//! - the player is home as soon as its position touches home's square

use glam::Vec2;

use super::enemy::Enemy;
use super::entity::Home;
use super::geom::CenteredBox;

/// Open-box test: player strictly inside a square of side `size` at `center`
#[inline]
pub fn box_hits_point(center: Vec2, size: f32, player: Vec2) -> bool {
    CenteredBox::new(center, size).contains_open(player)
}

/// True iff `enemy` overlaps the player
pub fn enemy_hits_player(enemy: &Enemy, player: Vec2) -> bool {
    box_hits_point(enemy.pos, enemy.size, player)
}

/// True iff the player stands in (or on the edge of) home
pub fn player_at_home(home: &Home, player: Vec2) -> bool {
    home.contains(player)
}
