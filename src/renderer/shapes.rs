//! Draw commands for each element kind

use crate::consts::{PLAYER_SIZE, WAYPOINT_MARKER};
use crate::sim::enemy::{Enemy, EnemyKind};
use crate::sim::entity::{Color, Home, Player, Signal, Waypoint};
use crate::sim::geom::Arena;

use super::{BANNER_FONT, Banner, DrawCommand, Shape};

/// RGBA for a named color
pub fn rgba(color: Color) -> [f32; 4] {
    match color {
        Color::Red => [1.0, 0.0, 0.0, 1.0],
        Color::Green => [0.0, 0.5, 0.0, 1.0],
        Color::Blue => [0.0, 0.0, 1.0, 1.0],
        Color::Yellow => [1.0, 1.0, 0.0, 1.0],
        Color::Brown => [0.65, 0.16, 0.16, 1.0],
    }
}

/// Green cross at the target; nothing while inactive
pub fn waypoint(wp: &Waypoint) -> Option<DrawCommand> {
    wp.is_active().then(|| DrawCommand {
        id: wp.id,
        shape: Shape::Cross,
        center: wp.target,
        half_extent: WAYPOINT_MARKER,
        color: Color::Green,
    })
}

/// Brown outline around the goal zone
pub fn home(home: &Home) -> DrawCommand {
    DrawCommand {
        id: home.id,
        shape: Shape::Rect { filled: false },
        center: home.pos,
        half_extent: home.bounds().half_extent(),
        color: Color::Brown,
    }
}

pub fn player(player: &Player) -> DrawCommand {
    DrawCommand {
        id: player.id,
        shape: Shape::Turtle {
            heading: player.heading,
        },
        center: player.pos,
        half_extent: PLAYER_SIZE / 2.0,
        color: Color::Green,
    }
}

/// Walkers are round, everything else is a filled square
pub fn enemy(enemy: &Enemy) -> DrawCommand {
    let shape = match enemy.kind() {
        EnemyKind::RandomWalk | EnemyKind::Demo => Shape::Oval,
        EnemyKind::Chasing | EnemyKind::Fencing | EnemyKind::Blocker => Shape::Rect { filled: true },
    };
    DrawCommand {
        id: enemy.id,
        shape,
        center: enemy.pos,
        half_extent: enemy.bounds().half_extent(),
        color: enemy.color,
    }
}

/// "You Win" in green or "You Lose" in red, centered in the arena
pub fn banner(signal: Signal, arena: &Arena) -> Banner {
    let (text, color) = match signal {
        Signal::Win => ("You Win", Color::Green),
        Signal::Lose => ("You Lose", Color::Red),
    };
    Banner {
        text,
        color,
        center: arena.center(),
        font: BANNER_FONT,
    }
}
