//! Enemy kinds and their movement
//!
//! Each kind carries its own movement state inside [`Behavior`]; `update`
//! dispatches with a single match so adding a kind forces every site to
//! handle it. All kinds finish their update with the same hit test.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision;
use super::entity::{Color, ElementId, Lifecycle, Signal, WorldView};
use super::geom::CenteredBox;
use super::patrol::{PATROL_STARTS, Patrol, PatrolCycle};
use crate::consts::*;
use crate::step_toward;

/// Enemy kind tag, used by the spawn roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    RandomWalk,
    Chasing,
    Fencing,
    Blocker,
    Demo,
}

impl EnemyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyKind::RandomWalk => "random-walk",
            EnemyKind::Chasing => "chasing",
            EnemyKind::Fencing => "fencing",
            EnemyKind::Blocker => "blocker",
            EnemyKind::Demo => "demo",
        }
    }
}

/// Two independent bouncing axes sharing one speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RandomWalk {
    pub speed: f32,
    /// Per-axis sign of travel, each component is +1 or -1
    pub dir: Vec2,
}

impl RandomWalk {
    pub fn new(speed: f32) -> Self {
        // Starts heading right and down
        Self {
            speed,
            dir: Vec2::ONE,
        }
    }

    /// Move one tick, reversing an axis once it leaves `[0, limit]`
    pub fn step(&mut self, pos: Vec2, limit: Vec2) -> Vec2 {
        let next = pos + self.dir * self.speed;
        self.dir.x = bounce(self.dir.x, next.x, limit.x);
        self.dir.y = bounce(self.dir.y, next.y, limit.y);
        next
    }
}

fn bounce(dir: f32, coord: f32, limit: f32) -> f32 {
    if dir > 0.0 && coord > limit {
        -1.0
    } else if dir < 0.0 && coord < 0.0 {
        1.0
    } else {
        dir
    }
}

/// Kind-specific movement state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Behavior {
    RandomWalk(RandomWalk),
    /// Pure pursuit of the player's current position
    Chasing { speed: f32 },
    /// Perimeter patrol around home
    Fencing(Patrol),
    /// Shuttle patrol around where the player stood at construction
    Blocker(Patrol),
    /// Fixed drift, no bouncing
    Demo { step: Vec2 },
}

/// An enemy entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: ElementId,
    pub pos: Vec2,
    pub size: f32,
    pub color: Color,
    pub behavior: Behavior,
    pub lifecycle: Lifecycle,
}

impl Enemy {
    /// Construct an enemy of `kind` at `pos`.
    ///
    /// Blockers capture the player's position here and never re-center.
    pub fn new<R: Rng>(
        id: ElementId,
        kind: EnemyKind,
        color: Color,
        pos: Vec2,
        size: f32,
        view: &WorldView,
        rng: &mut R,
    ) -> Self {
        let behavior = match kind {
            EnemyKind::RandomWalk => {
                let speed = rng.random_range(RANDOM_WALK_SPEED_MIN..=RANDOM_WALK_SPEED_MAX);
                Behavior::RandomWalk(RandomWalk::new(speed as f32))
            }
            EnemyKind::Chasing => Behavior::Chasing {
                speed: CHASER_SPEED,
            },
            EnemyKind::Fencing => Behavior::Fencing(Patrol::new(
                view.home,
                PATROL_HALF_WIDTH,
                FENCER_SPEED,
                PatrolCycle::Perimeter,
            )),
            EnemyKind::Blocker => Behavior::Blocker(Patrol::new(
                view.player,
                PATROL_HALF_WIDTH,
                BLOCKER_SPEED,
                PatrolCycle::Shuttle,
            )),
            EnemyKind::Demo => Behavior::Demo { step: DEMO_STEP },
        };

        Self {
            id,
            pos,
            size,
            color,
            behavior,
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    pub fn kind(&self) -> EnemyKind {
        match self.behavior {
            Behavior::RandomWalk(_) => EnemyKind::RandomWalk,
            Behavior::Chasing { .. } => EnemyKind::Chasing,
            Behavior::Fencing(_) => EnemyKind::Fencing,
            Behavior::Blocker(_) => EnemyKind::Blocker,
            Behavior::Demo { .. } => EnemyKind::Demo,
        }
    }

    /// Creation hook: patrolling kinds pick one of the four start edges
    /// at random and move onto it. Other kinds stay where they were put.
    pub fn create<R: Rng>(&mut self, rng: &mut R) {
        if !self.lifecycle.create() {
            return;
        }
        if let Behavior::Fencing(patrol) | Behavior::Blocker(patrol) = &mut self.behavior {
            let start = rng.random_range(0..PATROL_STARTS.len());
            self.pos = patrol.place(start);
        }
    }

    pub fn delete(&mut self) {
        self.lifecycle.destroy();
    }

    /// The enemy's hit box
    pub fn bounds(&self) -> CenteredBox {
        CenteredBox::new(self.pos, self.size)
    }

    /// Strict overlap test against the player's position
    pub fn hits_player(&self, player: Vec2) -> bool {
        collision::enemy_hits_player(self, player)
    }

    /// Move one tick, then test for contact with the player
    pub fn update(&mut self, view: &WorldView) -> Option<Signal> {
        self.pos = match &mut self.behavior {
            Behavior::RandomWalk(walk) => {
                walk.step(self.pos, Vec2::new(view.arena.width, view.arena.height))
            }
            Behavior::Chasing { speed } => step_toward(self.pos, view.player, *speed),
            Behavior::Fencing(patrol) | Behavior::Blocker(patrol) => patrol.step(self.pos),
            Behavior::Demo { step } => self.pos + *step,
        };

        self.hits_player(view.player).then_some(Signal::Lose)
    }
}
