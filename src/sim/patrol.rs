//! Square patrols around a fixed anchor
//!
//! Fencers and blockers walk the edges of a square of half-width
//! `half_width` centered on their anchor. Which leg follows which is an
//! explicit table per [`PatrolCycle`]; the two tables differ on purpose.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Direction of the current patrol leg (screen coordinates, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Leg {
    Up,
    Right,
    Down,
    Left,
}

impl Leg {
    /// Unit step for this leg
    pub fn direction(self) -> Vec2 {
        match self {
            Leg::Up => Vec2::new(0.0, -1.0),
            Leg::Right => Vec2::new(1.0, 0.0),
            Leg::Down => Vec2::new(0.0, 1.0),
            Leg::Left => Vec2::new(-1.0, 0.0),
        }
    }
}

/// Leg transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatrolCycle {
    /// Full loop around the square: up -> right -> down -> left -> up
    Perimeter,
    /// Back and forth along one edge: up <-> down, right <-> left
    Shuttle,
}

impl PatrolCycle {
    /// Leg that follows `leg` once its boundary is reached
    pub fn next(self, leg: Leg) -> Leg {
        match (self, leg) {
            (PatrolCycle::Perimeter, Leg::Up) => Leg::Right,
            (PatrolCycle::Perimeter, Leg::Right) => Leg::Down,
            (PatrolCycle::Perimeter, Leg::Down) => Leg::Left,
            (PatrolCycle::Perimeter, Leg::Left) => Leg::Up,
            (PatrolCycle::Shuttle, Leg::Up) => Leg::Down,
            (PatrolCycle::Shuttle, Leg::Right) => Leg::Left,
            (PatrolCycle::Shuttle, Leg::Down) => Leg::Up,
            (PatrolCycle::Shuttle, Leg::Left) => Leg::Right,
        }
    }
}

/// Canonical starting points, as offsets in half-widths from the anchor,
/// paired with the leg walked first
pub const PATROL_STARTS: [(Vec2, Leg); 4] = [
    (Vec2::new(0.0, 1.0), Leg::Left),
    (Vec2::new(1.0, 0.0), Leg::Down),
    (Vec2::new(0.0, -1.0), Leg::Right),
    (Vec2::new(-1.0, 0.0), Leg::Up),
];

/// Movement state of a patrolling enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patrol {
    pub anchor: Vec2,
    pub half_width: f32,
    pub speed: f32,
    pub leg: Leg,
    pub cycle: PatrolCycle,
}

impl Patrol {
    /// A patrol that has not picked its start yet (walks `Left` until placed)
    pub fn new(anchor: Vec2, half_width: f32, speed: f32, cycle: PatrolCycle) -> Self {
        Self {
            anchor,
            half_width,
            speed,
            leg: Leg::Left,
            cycle,
        }
    }

    /// Pick canonical start `index` (0..4, wrapped) and return its position
    pub fn place(&mut self, index: usize) -> Vec2 {
        let (offset, leg) = PATROL_STARTS[index % PATROL_STARTS.len()];
        self.leg = leg;
        self.anchor + offset * self.half_width
    }

    /// Top-left and bottom-right corners of the patrolled square
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let half = Vec2::splat(self.half_width);
        (self.anchor - half, self.anchor + half)
    }

    /// Advance one tick from `pos` and return the new position.
    ///
    /// Reaching or crossing the boundary of the current leg snaps the
    /// position onto the boundary and switches to the next leg.
    pub fn step(&mut self, pos: Vec2) -> Vec2 {
        let (min, max) = self.bounds();
        let mut next = pos + self.leg.direction() * self.speed;

        let reached = match self.leg {
            Leg::Up => next.y <= min.y,
            Leg::Right => next.x >= max.x,
            Leg::Down => next.y >= max.y,
            Leg::Left => next.x <= min.x,
        };

        if reached {
            match self.leg {
                Leg::Up => next.y = min.y,
                Leg::Right => next.x = max.x,
                Leg::Down => next.y = max.y,
                Leg::Left => next.x = min.x,
            }
            let from = self.leg;
            self.leg = self.cycle.next(from);
            log::debug!("Patrol leg {:?} -> {:?} at {}", from, self.leg, next);
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perimeter_table_is_a_four_cycle() {
        let mut leg = Leg::Up;
        let mut seen = vec![leg];
        for _ in 0..3 {
            leg = PatrolCycle::Perimeter.next(leg);
            seen.push(leg);
        }
        assert_eq!(seen, vec![Leg::Up, Leg::Right, Leg::Down, Leg::Left]);
        assert_eq!(PatrolCycle::Perimeter.next(leg), Leg::Up);
    }

    #[test]
    fn test_shuttle_table_reverses() {
        for leg in [Leg::Up, Leg::Right, Leg::Down, Leg::Left] {
            let back = PatrolCycle::Shuttle.next(leg);
            assert_eq!(back.direction(), -leg.direction());
            assert_eq!(PatrolCycle::Shuttle.next(back), leg);
        }
    }

    #[test]
    fn test_place_uses_canonical_starts() {
        let mut patrol = Patrol::new(Vec2::new(700.0, 300.0), 60.0, 2.0, PatrolCycle::Perimeter);
        assert_eq!(patrol.place(0), Vec2::new(700.0, 360.0));
        assert_eq!(patrol.leg, Leg::Left);
        assert_eq!(patrol.place(1), Vec2::new(760.0, 300.0));
        assert_eq!(patrol.leg, Leg::Down);
        assert_eq!(patrol.place(2), Vec2::new(700.0, 240.0));
        assert_eq!(patrol.leg, Leg::Right);
        assert_eq!(patrol.place(3), Vec2::new(640.0, 300.0));
        assert_eq!(patrol.leg, Leg::Up);
    }

    #[test]
    fn test_step_snaps_to_corner_and_turns() {
        let mut patrol = Patrol::new(Vec2::ZERO, 60.0, 7.0, PatrolCycle::Perimeter);
        patrol.leg = Leg::Left;
        let pos = patrol.step(Vec2::new(-55.0, 60.0));
        assert_eq!(pos, Vec2::new(-60.0, 60.0));
        assert_eq!(patrol.leg, Leg::Up);
    }

    #[test]
    fn test_shuttle_oscillates_on_one_edge() {
        let mut patrol = Patrol::new(Vec2::new(200.0, 200.0), 60.0, 7.0, PatrolCycle::Shuttle);
        let mut pos = patrol.place(3);
        for _ in 0..200 {
            pos = patrol.step(pos);
            assert_eq!(pos.x, 140.0);
            assert!((140.0..=260.0).contains(&pos.y));
        }
    }
}
