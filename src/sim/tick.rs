//! One step of the game loop
//!
//! The loop is driven from outside: whoever owns the timer calls [`tick`]
//! once per interval. A tick polls the spawner, then updates and draws
//! every element in a fixed order (waypoint, home, player, enemies by
//! spawn order). Once the outcome is decided nothing else is updated, and
//! a stopped session ignores ticks entirely.

use super::entity::Signal;
use super::state::GameState;
use crate::renderer::{Renderer, shapes};

/// Input gathered since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Primary click position in arena coordinates
    pub click: Option<(f32, f32)>,
    /// Stop the session
    pub stop: bool,
}

/// Advance the session by one tick
pub fn tick(state: &mut GameState, input: &TickInput, renderer: &mut dyn Renderer) {
    if input.stop {
        state.stop();
    }
    if !state.is_running() {
        // An outcome recorded between ticks still gets its banner, once
        if let Some(signal) = state.banner_pending.take() {
            renderer.banner(&shapes::banner(signal, &state.arena));
            renderer.present();
        }
        return;
    }

    if let Some((x, y)) = input.click {
        state.click(x, y);
    }

    state.time_ticks += 1;
    state.clock_ms += state.tick_ms;

    // Newly spawned enemies take part in this same tick
    let live = state.enemies.len();
    if let Some(entry) = state.spawner.poll(state.clock_ms, live, &mut state.rng) {
        state.spawn_enemy(entry.kind, entry.color);
    }

    // Waypoint and home have nothing to update
    match shapes::waypoint(&state.waypoint) {
        Some(cmd) => renderer.draw(&cmd),
        None => renderer.hide(state.waypoint.id),
    }
    renderer.draw(&shapes::home(&state.home));

    if let Some(signal) = state.player.update(&state.home, &mut state.waypoint) {
        state.finish(signal);
    }
    renderer.draw(&shapes::player(&state.player));

    let view = state.view();
    let mut updating = state.is_running();
    let mut contact: Option<Signal> = None;
    for enemy in state.enemies.iter_mut().filter(|e| e.lifecycle.is_active()) {
        if updating {
            contact = enemy.update(&view);
            if contact.is_some() {
                log::debug!("Enemy #{} ({}) caught the player", enemy.id, enemy.kind().as_str());
                updating = false;
            }
        }
        renderer.draw(&shapes::enemy(enemy));
    }
    if let Some(signal) = contact {
        state.finish(signal);
    }

    if let Some(signal) = state.banner_pending.take() {
        renderer.banner(&shapes::banner(signal, &state.arena));
    }
    renderer.present();
}
