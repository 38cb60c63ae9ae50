//! Session state and construction
//!
//! A session owns exactly one waypoint, home and player plus any number of
//! enemies. Singletons are fixed at build time; enemies can be added at any
//! point and are never removed while the session runs.

use std::collections::BTreeMap;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::{Enemy, EnemyKind};
use super::entity::{Color, ElementId, Home, Player, Signal, Waypoint, WorldView};
use super::geom::Arena;
use super::spawner::{RosterEntry, Spawner};
use crate::consts::{ENEMY_SIZE, SPAWN_POINT};
use crate::error::{GameError, Result, SingletonKind};
use crate::renderer::Renderer;
use crate::settings::Settings;

/// How the session ended, if it has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

/// Anything that can be registered with a session
#[derive(Debug, Clone)]
pub enum Element {
    Waypoint(Waypoint),
    Home(Home),
    Player(Player),
    Enemy(Enemy),
}

impl Element {
    fn set_id(&mut self, id: ElementId) {
        match self {
            Element::Waypoint(w) => w.id = id,
            Element::Home(h) => h.id = id,
            Element::Player(p) => p.id = id,
            Element::Enemy(e) => e.id = id,
        }
    }

    fn singleton(&self) -> Option<SingletonKind> {
        match self {
            Element::Waypoint(_) => Some(SingletonKind::Waypoint),
            Element::Home(_) => Some(SingletonKind::Home),
            Element::Player(_) => Some(SingletonKind::Player),
            Element::Enemy(_) => None,
        }
    }
}

/// Assembles a session, rejecting duplicate or missing singletons
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    settings: Settings,
    waypoint: Option<Waypoint>,
    home: Option<Home>,
    player: Option<Player>,
    enemies: Vec<Enemy>,
    roster: Option<Vec<RosterEntry>>,
}

impl SessionBuilder {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            waypoint: None,
            home: None,
            player: None,
            enemies: Vec::new(),
            roster: None,
        }
    }

    /// Register an element. A second waypoint, home or player is an error.
    pub fn add(mut self, element: Element) -> Result<Self> {
        match element {
            Element::Waypoint(w) => put(&mut self.waypoint, w, SingletonKind::Waypoint)?,
            Element::Home(h) => put(&mut self.home, h, SingletonKind::Home)?,
            Element::Player(p) => put(&mut self.player, p, SingletonKind::Player)?,
            Element::Enemy(e) => self.enemies.push(e),
        }
        Ok(self)
    }

    /// Inactive waypoint, home inset from the right wall, player near the left wall
    pub fn with_default_layout(self) -> Result<Self> {
        let home = Home::new(0, self.settings.home_position(), self.settings.home_size);
        let player = Player::new(0, self.settings.player_start(), self.settings.player_speed);
        self.add(Element::Waypoint(Waypoint::new(0)))?
            .add(Element::Home(home))?
            .add(Element::Player(player))
    }

    /// Replace the spawn roster (defaults to the four standard kinds)
    pub fn with_roster(mut self, roster: Vec<RosterEntry>) -> Self {
        self.roster = Some(roster);
        self
    }

    /// Validate and create every element
    pub fn build(self) -> Result<GameState> {
        self.settings.validate()?;
        let waypoint = self
            .waypoint
            .ok_or(GameError::MissingSingleton(SingletonKind::Waypoint))?;
        let home = self.home.ok_or(GameError::MissingSingleton(SingletonKind::Home))?;
        let player = self
            .player
            .ok_or(GameError::MissingSingleton(SingletonKind::Player))?;

        let settings = self.settings;
        let mut spawner = Spawner::new(
            settings.level,
            settings.spawn_delay_ms,
            settings.spawn_interval_ms,
        );
        spawner.max_enemies = settings.max_enemies;
        if let Some(roster) = self.roster {
            spawner.roster = roster;
        }

        let mut state = GameState {
            arena: Arena::new(settings.width, settings.height),
            level: settings.level,
            seed: settings.seed,
            tick_ms: settings.tick_ms,
            rng: Pcg32::seed_from_u64(settings.seed),
            clock_ms: 0,
            time_ticks: 0,
            outcome: Outcome::InProgress,
            stopped: false,
            waypoint,
            home,
            player,
            enemies: Vec::new(),
            spawner,
            banner_pending: None,
            next_id: 1,
        };

        state.waypoint.id = state.next_entity_id();
        state.waypoint.lifecycle.create();
        state.home.id = state.next_entity_id();
        state.home.lifecycle.create();
        state.player.id = state.next_entity_id();
        state.player.lifecycle.create();
        for enemy in self.enemies {
            state.add_element(Element::Enemy(enemy))?;
        }

        log::info!(
            "Session started: arena {}x{}, level {}, seed {}",
            state.arena.width,
            state.arena.height,
            state.level,
            state.seed
        );
        Ok(state)
    }
}

fn put<T>(slot: &mut Option<T>, value: T, kind: SingletonKind) -> Result<()> {
    if slot.is_some() {
        return Err(GameError::DuplicateSingleton(kind));
    }
    *slot = Some(value);
    Ok(())
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub arena: Arena,
    /// Difficulty level (reported, not yet used by spawning)
    pub level: u32,
    pub seed: u64,
    pub tick_ms: u64,
    pub(crate) rng: Pcg32,
    /// Session clock, advanced by `tick_ms` every tick
    pub clock_ms: u64,
    pub time_ticks: u64,
    pub outcome: Outcome,
    stopped: bool,
    pub waypoint: Waypoint,
    pub home: Home,
    pub player: Player,
    /// Spawned enemies in spawn order
    pub enemies: Vec<Enemy>,
    pub spawner: Spawner,
    /// Outcome whose banner has not been drawn yet
    pub(crate) banner_pending: Option<Signal>,
    next_id: ElementId,
}

impl GameState {
    /// Reference layout for the given settings
    pub fn new(settings: Settings) -> Result<Self> {
        SessionBuilder::new(settings).with_default_layout()?.build()
    }

    /// Allocate a new element ID
    pub fn next_entity_id(&mut self) -> ElementId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// What enemies get to see this tick
    pub fn view(&self) -> WorldView {
        WorldView {
            player: self.player.pos,
            home: self.home.pos,
            arena: self.arena,
        }
    }

    /// Register an enemy and run its creation hook. Singletons can only be
    /// registered through [`SessionBuilder`].
    pub fn add_element(&mut self, mut element: Element) -> Result<ElementId> {
        if let Some(kind) = element.singleton() {
            return Err(GameError::DuplicateSingleton(kind));
        }
        let id = self.next_entity_id();
        element.set_id(id);
        if let Element::Enemy(mut enemy) = element {
            enemy.create(&mut self.rng);
            self.enemies.push(enemy);
        }
        Ok(id)
    }

    /// Instantiate `kind` at the spawn point and register it
    pub fn spawn_enemy(&mut self, kind: EnemyKind, color: Color) -> ElementId {
        let view = self.view();
        let id = self.next_entity_id();
        let mut enemy = Enemy::new(id, kind, color, SPAWN_POINT, ENEMY_SIZE, &view, &mut self.rng);
        enemy.create(&mut self.rng);
        log::info!(
            "Spawned {} enemy #{} at {} ({} total)",
            kind.as_str(),
            id,
            enemy.pos,
            self.enemies.len() + 1
        );
        self.enemies.push(enemy);
        id
    }

    /// Add a kind to the spawn roster
    pub fn add_enemy_factory(&mut self, kind: EnemyKind, color: Color) {
        self.spawner.add_enemy_factory(kind, color);
    }

    /// Primary click at arena coordinates
    pub fn click(&mut self, x: f32, y: f32) {
        if self.is_running() {
            self.waypoint.activate(x, y);
        }
    }

    /// True while ticks still do work
    pub fn is_running(&self) -> bool {
        !self.stopped && self.outcome == Outcome::InProgress
    }

    /// Record a win. Ignored once the session is decided or stopped.
    pub fn game_over_win(&mut self) -> bool {
        self.finish(Signal::Win)
    }

    /// Record a loss. Ignored once the session is decided or stopped.
    pub fn game_over_lose(&mut self) -> bool {
        self.finish(Signal::Lose)
    }

    pub(crate) fn finish(&mut self, signal: Signal) -> bool {
        if !self.is_running() {
            return false;
        }
        self.outcome = match signal {
            Signal::Win => Outcome::Won,
            Signal::Lose => Outcome::Lost,
        };
        self.banner_pending = Some(signal);
        self.stop();
        log::info!(
            "Game over: {:?} after {} ticks with {} enemies",
            self.outcome,
            self.time_ticks,
            self.enemies.len()
        );
        true
    }

    /// Halt ticking and spawning; safe to call repeatedly
    pub fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            self.spawner.stop();
            log::info!("Session stopped at {} ms", self.clock_ms);
        }
    }

    /// Tear the session down: every element's delete hook runs and the
    /// renderer drops what it drew
    pub fn shutdown(&mut self, renderer: &mut dyn Renderer) {
        self.stop();
        if self.waypoint.lifecycle.destroy() {
            renderer.remove(self.waypoint.id);
        }
        if self.home.lifecycle.destroy() {
            renderer.remove(self.home.id);
        }
        if self.player.lifecycle.destroy() {
            renderer.remove(self.player.id);
        }
        for enemy in &mut self.enemies {
            if enemy.lifecycle.is_active() {
                enemy.delete();
                renderer.remove(enemy.id);
            }
        }
    }

    /// Snapshot for reporting
    pub fn summary(&self) -> SessionSummary {
        let mut enemies_by_kind = BTreeMap::new();
        for enemy in &self.enemies {
            *enemies_by_kind.entry(enemy.kind().as_str()).or_insert(0) += 1;
        }
        SessionSummary {
            outcome: self.outcome,
            level: self.level,
            seed: self.seed,
            ticks: self.time_ticks,
            elapsed_ms: self.clock_ms,
            player: self.player.pos,
            enemies: self.enemies.len(),
            enemies_by_kind,
        }
    }
}

/// Serializable end-of-run report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub outcome: Outcome,
    pub level: u32,
    pub seed: u64,
    pub ticks: u64,
    pub elapsed_ms: u64,
    pub player: Vec2,
    pub enemies: usize,
    pub enemies_by_kind: BTreeMap<&'static str, usize>,
}
