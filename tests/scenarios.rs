//! End-to-end sessions driven through the public tick loop

use glam::Vec2;

use turtle_adventure::Settings;
use turtle_adventure::consts::SPAWN_POINT;
use turtle_adventure::renderer::{FrameRecorder, NullRenderer, RenderEvent, Shape};
use turtle_adventure::sim::{Color, EnemyKind, GameState, Outcome, TickInput, tick};

/// Reference arena with spawning disabled
fn quiet_session() -> GameState {
    GameState::new(Settings {
        max_enemies: Some(0),
        ..Settings::with_arena(800.0, 600.0)
    })
    .unwrap()
}

fn click(x: f32, y: f32) -> TickInput {
    TickInput {
        click: Some((x, y)),
        ..Default::default()
    }
}

#[test]
fn walk_to_waypoint_then_home() {
    let mut state = quiet_session();
    assert_eq!(state.home.pos, Vec2::new(700.0, 300.0));
    assert_eq!(state.player.pos, Vec2::new(50.0, 300.0));

    tick(&mut state, &click(400.0, 300.0), &mut NullRenderer);
    assert!(state.waypoint.is_active());
    assert_eq!(state.waypoint.target, Vec2::new(400.0, 300.0));

    // ceil(350 / 5) = 70 ticks to arrive
    for _ in 1..69 {
        tick(&mut state, &TickInput::default(), &mut NullRenderer);
    }
    assert!(state.waypoint.is_active());
    tick(&mut state, &TickInput::default(), &mut NullRenderer);
    assert!(!state.waypoint.is_active());
    assert!((state.player.pos.x - 400.0).abs() < 1e-3);
    assert!((state.player.pos.y - 300.0).abs() < 1e-3);

    tick(&mut state, &click(700.0, 300.0), &mut NullRenderer);
    for _ in 0..100 {
        if state.outcome != Outcome::InProgress {
            break;
        }
        tick(&mut state, &TickInput::default(), &mut NullRenderer);
    }
    assert_eq!(state.outcome, Outcome::Won);
    assert!(state.home.contains(state.player.pos));
}

#[test]
fn chaser_closes_in_vertically() {
    let mut state = quiet_session();
    state.player.pos = Vec2::new(100.0, 160.0);
    state.spawn_enemy(EnemyKind::Chasing, Color::Green);
    assert_eq!(state.enemies[0].pos, SPAWN_POINT);

    tick(&mut state, &TickInput::default(), &mut NullRenderer);

    let enemy = &state.enemies[0];
    assert!((enemy.pos.x - 100.0).abs() < 1e-4);
    assert!((enemy.pos.y - 103.0).abs() < 1e-4);
    assert!((enemy.pos.distance(state.player.pos) - 57.0).abs() < 1e-4);
    assert_eq!(state.outcome, Outcome::InProgress);
}

#[test]
fn idle_player_is_eventually_caught() {
    let mut state = quiet_session();
    state.spawn_enemy(EnemyKind::Chasing, Color::Green);
    let mut rec = FrameRecorder::new();
    for _ in 0..200 {
        tick(&mut state, &TickInput::default(), &mut rec);
    }
    assert_eq!(state.outcome, Outcome::Lost);
    let banners = rec.banners();
    assert_eq!(banners.len(), 1);
    assert_eq!(banners[0].text, "You Lose");
    assert_eq!(banners[0].color, Color::Red);
    assert_eq!(banners[0].center, Vec2::new(400.0, 300.0));
}

#[test]
fn spawner_feeds_default_roster() {
    let mut state = GameState::new(Settings {
        seed: 11,
        ..Settings::default()
    })
    .unwrap();
    // Keep the player out of reach of everything
    state.player.pos = Vec2::new(-10_000.0, -10_000.0);
    for _ in 0..400 {
        tick(&mut state, &TickInput::default(), &mut NullRenderer);
    }
    assert_eq!(state.outcome, Outcome::InProgress);
    // 30 ms ticks: first spawn on tick 4, then every 17 ticks (510 ms)
    assert_eq!(state.enemies.len(), 24);
    assert!(state.enemies.iter().all(|e| e.kind() != EnemyKind::Demo));
    for enemy in &state.enemies {
        assert!(enemy.pos.is_finite());
        let expected = match enemy.kind() {
            EnemyKind::RandomWalk => Color::Red,
            EnemyKind::Chasing => Color::Green,
            EnemyKind::Fencing => Color::Blue,
            EnemyKind::Blocker => Color::Yellow,
            EnemyKind::Demo => unreachable!(),
        };
        assert_eq!(enemy.color, expected);
    }
}

#[test]
fn enemy_cap_limits_growth() {
    let mut state = GameState::new(Settings {
        max_enemies: Some(3),
        ..Settings::default()
    })
    .unwrap();
    state.player.pos = Vec2::new(-10_000.0, -10_000.0);
    for _ in 0..400 {
        tick(&mut state, &TickInput::default(), &mut NullRenderer);
    }
    assert_eq!(state.enemies.len(), 3);
}

#[test]
fn same_seed_same_session() {
    let run = || {
        let mut state = GameState::new(Settings {
            seed: 1234,
            ..Settings::default()
        })
        .unwrap();
        tick(&mut state, &click(700.0, 300.0), &mut NullRenderer);
        for _ in 0..300 {
            tick(&mut state, &TickInput::default(), &mut NullRenderer);
        }
        state.summary()
    };
    assert_eq!(run(), run());
}

#[test]
fn every_element_drawn_each_tick() {
    let mut state = quiet_session();
    state.spawn_enemy(EnemyKind::RandomWalk, Color::Red);
    state.spawn_enemy(EnemyKind::Fencing, Color::Blue);
    let mut rec = FrameRecorder::new();
    tick(&mut state, &click(300.0, 300.0), &mut rec);

    let frame = rec.last_frame();
    let shapes: Vec<Shape> = frame.iter().map(|c| c.shape).collect();
    assert_eq!(frame.len(), 5);
    assert_eq!(shapes[0], Shape::Cross);
    assert_eq!(shapes[1], Shape::Rect { filled: false });
    assert!(matches!(shapes[2], Shape::Turtle { .. }));
    assert_eq!(shapes[3], Shape::Oval);
    assert_eq!(shapes[4], Shape::Rect { filled: true });
    assert_eq!(rec.events.last(), Some(&RenderEvent::Present));
}

#[test]
fn level_is_recorded_but_inert() {
    let spawn_count = |level| {
        let mut state = GameState::new(Settings {
            level,
            seed: 5,
            ..Settings::default()
        })
        .unwrap();
        state.player.pos = Vec2::new(-10_000.0, -10_000.0);
        for _ in 0..200 {
            tick(&mut state, &TickInput::default(), &mut NullRenderer);
        }
        (state.level, state.enemies.len())
    };
    let (l1, n1) = spawn_count(1);
    let (l5, n5) = spawn_count(5);
    assert_eq!((l1, l5), (1, 5));
    assert_eq!(n1, n5);
}
