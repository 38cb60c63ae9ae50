//! Shared element types: lifecycle, the player, home and the waypoint
//!
//! Elements never hold references to each other. Anything an element needs
//! to know about the rest of the session arrives through a [`WorldView`]
//! or as an explicit argument to `update`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision;
use super::geom::{Arena, CenteredBox};
use crate::step_toward;

/// Element identifier, unique within a session
pub type ElementId = u32;

/// Lifecycle of any simulated element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Lifecycle {
    /// Constructed but `create` has not run
    #[default]
    Uninitialized,
    /// Participating in ticks
    Active,
    /// Removed; never updated or drawn again
    Destroyed,
}

impl Lifecycle {
    /// Run the creation transition. Returns false if already created.
    pub fn create(&mut self) -> bool {
        if *self == Lifecycle::Uninitialized {
            *self = Lifecycle::Active;
            true
        } else {
            false
        }
    }

    /// Run the deletion transition. Returns false if already destroyed.
    pub fn destroy(&mut self) -> bool {
        if *self == Lifecycle::Destroyed {
            false
        } else {
            *self = Lifecycle::Destroyed;
            true
        }
    }

    pub fn is_active(self) -> bool {
        self == Lifecycle::Active
    }
}

/// Terminal signal raised by an element during its update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    /// Player reached home
    Win,
    /// An enemy overlaps the player
    Lose,
}

/// Named colors; the renderer maps them to actual pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Brown,
}

/// Read-only snapshot of the session handed to enemies each tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldView {
    pub player: Vec2,
    pub home: Vec2,
    pub arena: Arena,
}

/// The player's movement target
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: ElementId,
    pub target: Vec2,
    active: bool,
    pub lifecycle: Lifecycle,
}

impl Waypoint {
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Set a new target and start moving toward it. Coordinates are not
    /// checked against the arena.
    pub fn activate(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x, y);
        self.active = true;
        log::debug!("Waypoint set to ({x}, {y})");
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// The goal zone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Home {
    pub id: ElementId,
    pub pos: Vec2,
    pub size: f32,
    pub lifecycle: Lifecycle,
}

impl Home {
    pub fn new(id: ElementId, pos: Vec2, size: f32) -> Self {
        Self {
            id,
            pos,
            size,
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    pub fn bounds(&self) -> CenteredBox {
        CenteredBox::new(self.pos, self.size)
    }

    /// Boundary-inclusive containment
    pub fn contains(&self, point: Vec2) -> bool {
        self.bounds().contains_closed(point)
    }
}

/// The player-controlled turtle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: ElementId,
    pub pos: Vec2,
    /// Travel per tick
    pub speed: f32,
    /// Current heading in radians, kept for rendering
    pub heading: f32,
    pub lifecycle: Lifecycle,
}

impl Player {
    pub fn new(id: ElementId, pos: Vec2, speed: f32) -> Self {
        Self {
            id,
            pos,
            speed,
            heading: 0.0,
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    /// Advance one tick.
    ///
    /// The home check uses the position at the start of the tick. Movement
    /// only happens while the waypoint is active; the waypoint is switched
    /// off when the target was within `speed` before the step or the
    /// remaining distance drops below `speed` after it.
    pub fn update(&mut self, home: &Home, waypoint: &mut Waypoint) -> Option<Signal> {
        let signal = collision::player_at_home(home, self.pos).then_some(Signal::Win);

        if waypoint.is_active() && self.pos == waypoint.target {
            // Already there; stepping would only walk away
            waypoint.deactivate();
        } else if waypoint.is_active() {
            let before = self.pos.distance(waypoint.target);
            self.heading = crate::heading(self.pos, waypoint.target);
            self.pos = step_toward(self.pos, waypoint.target, self.speed);
            // f32 can round `speed - before` back up to `speed` for tiny gaps
            if before <= self.speed || self.pos.distance(waypoint.target) < self.speed {
                waypoint.deactivate();
                log::debug!("Waypoint reached at {}", self.pos);
            }
        }

        signal
    }
}
