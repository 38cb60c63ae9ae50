//! Timed enemy spawning
//!
//! The spawner holds the time of its next firing and is polled once per
//! tick. A due firing picks one roster entry uniformly at random, then
//! schedules the next firing a fixed interval later. Nothing here runs
//! on its own; stopping the session simply stops the polling, and a
//! stopped spawner ignores polls.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::enemy::EnemyKind;
use super::entity::Color;

/// One spawnable (kind, color) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub kind: EnemyKind,
    pub color: Color,
}

/// The roster every session starts with
pub fn default_roster() -> Vec<RosterEntry> {
    vec![
        RosterEntry {
            kind: EnemyKind::RandomWalk,
            color: Color::Red,
        },
        RosterEntry {
            kind: EnemyKind::Chasing,
            color: Color::Green,
        },
        RosterEntry {
            kind: EnemyKind::Fencing,
            color: Color::Blue,
        },
        RosterEntry {
            kind: EnemyKind::Blocker,
            color: Color::Yellow,
        },
    ]
}

/// Scheduler state
///
/// Firing is instantaneous inside [`Spawner::poll`]: a due poll fires and
/// reschedules in one step, so the only other state is `Stopped`, the
/// cancellation reached through [`Spawner::stop`]. `fired` counts firings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnerState {
    /// Waiting for `next_fire_ms`
    Scheduled,
    /// Session ended; polls are no-ops
    Stopped,
}

/// Periodic enemy generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    pub state: SpawnerState,
    /// Session clock value at which the next firing is due
    pub next_fire_ms: u64,
    pub interval_ms: u64,
    pub roster: Vec<RosterEntry>,
    /// Optional cap on live enemies; a capped firing spawns nothing
    pub max_enemies: Option<usize>,
    /// Recorded for reporting; does not change timing or mix
    pub level: u32,
    /// Number of firings so far (including capped ones)
    pub fired: u64,
}

impl Spawner {
    pub fn new(level: u32, first_delay_ms: u64, interval_ms: u64) -> Self {
        Self {
            state: SpawnerState::Scheduled,
            next_fire_ms: first_delay_ms,
            interval_ms,
            roster: default_roster(),
            max_enemies: None,
            level,
            fired: 0,
        }
    }

    /// Register another spawnable kind
    pub fn add_enemy_factory(&mut self, kind: EnemyKind, color: Color) {
        self.roster.push(RosterEntry { kind, color });
    }

    /// Fire if due at `now_ms`. Returns the entry to instantiate, if any.
    ///
    /// At most one firing happens per poll, and the next firing is always
    /// scheduled relative to `now_ms`.
    pub fn poll<R: Rng>(&mut self, now_ms: u64, live_enemies: usize, rng: &mut R) -> Option<RosterEntry> {
        if self.state == SpawnerState::Stopped || now_ms < self.next_fire_ms {
            return None;
        }

        self.fired += 1;

        let capped = self.max_enemies.is_some_and(|cap| live_enemies >= cap);
        let pick = if capped || self.roster.is_empty() {
            None
        } else {
            Some(self.roster[rng.random_range(0..self.roster.len())])
        };

        self.next_fire_ms = now_ms.saturating_add(self.interval_ms);
        pick
    }

    pub fn stop(&mut self) {
        self.state = SpawnerState::Stopped;
    }

    pub fn is_stopped(&self) -> bool {
        self.state == SpawnerState::Stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::HashSet;

    #[test]
    fn test_first_fire_after_initial_delay() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut spawner = Spawner::new(1, 100, 500);
        assert!(spawner.poll(0, 0, &mut rng).is_none());
        assert!(spawner.poll(99, 0, &mut rng).is_none());
        assert!(spawner.poll(100, 0, &mut rng).is_some());
        assert_eq!(spawner.next_fire_ms, 600);
        assert_eq!(spawner.state, SpawnerState::Scheduled);
    }

    #[test]
    fn test_reschedules_from_firing_time() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut spawner = Spawner::new(1, 100, 500);
        // Polled late: the next firing counts from when it actually fired
        assert!(spawner.poll(130, 0, &mut rng).is_some());
        assert_eq!(spawner.next_fire_ms, 630);
        assert!(spawner.poll(629, 1, &mut rng).is_none());
        assert!(spawner.poll(630, 1, &mut rng).is_some());
        assert_eq!(spawner.fired, 2);
    }

    #[test]
    fn test_one_fire_per_poll() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut spawner = Spawner::new(1, 100, 500);
        assert!(spawner.poll(10_000, 0, &mut rng).is_some());
        assert!(spawner.poll(10_000, 1, &mut rng).is_none());
    }

    #[test]
    fn test_stopped_spawner_is_inert() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut spawner = Spawner::new(1, 100, 500);
        spawner.stop();
        assert!(spawner.poll(100, 0, &mut rng).is_none());
        assert!(spawner.poll(5_000, 0, &mut rng).is_none());
        assert_eq!(spawner.fired, 0);
        assert!(spawner.is_stopped());
    }

    #[test]
    fn test_cap_skips_but_keeps_schedule() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut spawner = Spawner::new(1, 100, 500);
        spawner.max_enemies = Some(2);
        assert!(spawner.poll(100, 2, &mut rng).is_none());
        assert_eq!(spawner.next_fire_ms, 600);
        assert!(spawner.poll(600, 1, &mut rng).is_some());
    }

    #[test]
    fn test_huge_interval_saturates() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut spawner = Spawner::new(1, 100, u64::MAX);
        assert!(spawner.poll(100, 0, &mut rng).is_some());
        assert_eq!(spawner.next_fire_ms, u64::MAX);
        assert!(spawner.poll(1_000_000, 1, &mut rng).is_none());
    }

    #[test]
    fn test_picks_cover_whole_roster() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut spawner = Spawner::new(1, 0, 1);
        let mut kinds = HashSet::new();
        for now in 0..200 {
            if let Some(entry) = spawner.poll(now, 0, &mut rng) {
                kinds.insert(entry.kind);
            }
        }
        assert_eq!(kinds.len(), 4);
        assert!(!kinds.contains(&EnemyKind::Demo));
    }

    #[test]
    fn test_empty_roster_spawns_nothing() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut spawner = Spawner::new(1, 0, 10);
        spawner.roster.clear();
        assert!(spawner.poll(0, 0, &mut rng).is_none());
        spawner.add_enemy_factory(EnemyKind::Demo, Color::Red);
        let entry = spawner.poll(10, 0, &mut rng).unwrap();
        assert_eq!(entry.kind, EnemyKind::Demo);
    }
}
