//! Integration tests for the game rules through the facade crate

use snake_tui::core::{Advance, GameState, Pulse, TickClock, BADGES};
use snake_tui::types::{
    Direction, GameAction, GameConfig, GameEvent, GameOverCause, Phase, Position, INITIAL_SPEED_MS,
    SPEED_STEP_MS,
};

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

/// Put the food directly in front of the head and eat it.
fn feed(state: &mut GameState) {
    let head = state.snake().head().unwrap();
    let dir = state.pending_direction().unwrap_or(state.direction());
    let next = head.step(dir, state.grid().cell_size());
    assert!(state.set_food(next), "food cell {:?} should be free", next);
    assert_eq!(state.advance(), Advance::Ate);
}

/// Snake in the top row heading right, long enough run ahead for many meals.
fn runway() -> GameState {
    let segments = [p(40, 0), p(20, 0), p(0, 0)];
    let mut state = GameState::with_snake(GameConfig::default(), 5, segments, Direction::Right);
    state.start();
    state
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(GameConfig::default(), 12345);
    assert_eq!(state.phase(), Phase::Ready);
    assert_eq!(state.advance(), Advance::Idle);

    assert!(state.start());
    assert_eq!(state.phase(), Phase::Running);
    assert_eq!(state.snake().len(), 3);
    assert_eq!(state.snake().head(), Some(p(300, 300)));
    assert_eq!(state.direction(), Direction::Right);
    assert_eq!(state.score(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.speed_ms(), INITIAL_SPEED_MS);
    assert!(state.food().is_some());
    assert!(state.achievements().is_empty());
}

#[test]
fn test_eating_grows_snake_and_keeps_tail() {
    let mut state = GameState::new(GameConfig::default(), 1);
    state.start();
    let before: Vec<_> = state.snake().segments().collect();

    assert!(state.set_food(p(320, 300)));
    assert_eq!(state.advance(), Advance::Ate);

    let after: Vec<_> = state.snake().segments().collect();
    assert_eq!(after.len(), 4);
    assert_eq!(after[0], p(320, 300));
    assert_eq!(&after[1..], &before[..]);
    assert_eq!(state.score(), 1);
    assert_ne!(state.food(), Some(p(320, 300)));
}

#[test]
fn test_plain_move_keeps_length() {
    let mut state = GameState::new(GameConfig::default(), 1);
    state.start();
    assert!(state.set_food(p(0, 0)));
    assert_eq!(state.advance(), Advance::Moved);
    let segments: Vec<_> = state.snake().segments().collect();
    assert_eq!(segments, vec![p(320, 300), p(300, 300), p(280, 300)]);
}

#[test]
fn test_level_up_at_threshold_speeds_up() {
    let mut state = runway();
    for _ in 0..4 {
        feed(&mut state);
    }
    assert_eq!(state.level(), 1);
    assert_eq!(state.speed_ms(), INITIAL_SPEED_MS);

    feed(&mut state);
    assert_eq!(state.score(), 5);
    assert_eq!(state.level(), 2);
    assert_eq!(state.speed_ms(), INITIAL_SPEED_MS - SPEED_STEP_MS);

    let events: Vec<_> = state.drain_events().collect();
    assert!(events.contains(&GameEvent::LevelUp {
        level: 2,
        speed_ms: INITIAL_SPEED_MS - SPEED_STEP_MS
    }));
    assert!(events.contains(&GameEvent::BadgeUnlocked { badge: BADGES[0] }));
    assert_eq!(state.achievements().as_slice(), &BADGES[..1]);
}

#[test]
fn test_right_wall_ends_game_without_moving() {
    let segments = [p(580, 300), p(560, 300), p(540, 300)];
    let mut state = GameState::with_snake(GameConfig::default(), 1, segments, Direction::Right);
    state.start();

    assert_eq!(state.advance(), Advance::GameOver(GameOverCause::Wall));
    assert_eq!(state.phase(), Phase::GameOver);
    let after: Vec<_> = state.snake().segments().collect();
    assert_eq!(after, segments.to_vec());

    // Terminal until an explicit reset.
    assert_eq!(state.advance(), Advance::Idle);
    assert!(!state.request_direction_change(Direction::Up));
}

#[test]
fn test_self_collision_with_fourth_segment() {
    // Head came from the right; turning down runs into index 3.
    let segments = [p(100, 100), p(120, 100), p(120, 120), p(100, 120), p(80, 120)];
    let mut state = GameState::with_snake(GameConfig::default(), 1, segments, Direction::Left);
    state.start();
    assert!(state.request_direction_change(Direction::Down));
    assert_eq!(
        state.advance(),
        Advance::GameOver(GameOverCause::SelfCollision)
    );
    assert_eq!(state.snake().len(), 5);
}

#[test]
fn test_reversal_is_ignored() {
    let mut state = GameState::new(GameConfig::default(), 1);
    state.start();
    assert!(state.set_food(p(0, 0)));
    assert!(!state.request_direction_change(Direction::Left));
    state.advance();
    assert_eq!(state.direction(), Direction::Right);
    assert_eq!(state.snake().head(), Some(p(320, 300)));
}

#[test]
fn test_one_turn_per_tick() {
    let mut state = GameState::new(GameConfig::default(), 1);
    state.start();
    assert!(state.set_food(p(0, 0)));
    // Up then Down in the same frame: only the last request applies.
    assert!(state.request_direction_change(Direction::Up));
    assert!(state.request_direction_change(Direction::Down));
    state.advance();
    assert_eq!(state.direction(), Direction::Down);
    assert_eq!(state.snake().head(), Some(p(300, 320)));
}

#[test]
fn test_pause_buffers_direction_and_freezes() {
    let mut state = GameState::new(GameConfig::default(), 1);
    state.start();
    assert!(state.set_food(p(0, 0)));
    assert!(state.apply_action(GameAction::TogglePause));
    assert_eq!(state.phase(), Phase::Paused);

    assert!(state.request_direction_change(Direction::Up));
    assert_eq!(state.advance(), Advance::Idle);
    assert_eq!(state.snake().head(), Some(p(300, 300)));

    assert!(state.apply_action(GameAction::TogglePause));
    assert_eq!(state.advance(), Advance::Moved);
    assert_eq!(state.snake().head(), Some(p(300, 280)));
}

#[test]
fn test_restart_keeps_high_score_only() {
    let mut state = runway();
    for _ in 0..6 {
        feed(&mut state);
    }
    state.request_direction_change(Direction::Up);
    assert!(state.advance() == Advance::GameOver(GameOverCause::Wall));
    assert_eq!(state.high_score(), 6);

    assert!(state.apply_action(GameAction::Restart));
    assert_eq!(state.phase(), Phase::Running);
    assert_eq!(state.score(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.high_score(), 6);
    assert!(state.achievements().is_empty());
    assert_eq!(state.speed_ms(), INITIAL_SPEED_MS);
}

#[test]
fn test_initial_speed_applies_on_next_start() {
    let mut state = GameState::new(GameConfig::default(), 1);
    state.start();
    assert_eq!(state.set_initial_speed(150), 150);
    assert_eq!(state.speed_ms(), INITIAL_SPEED_MS);

    state.restart();
    assert_eq!(state.speed_ms(), 150);
}

#[test]
fn test_clock_drives_ticks_at_speed() {
    let mut state = GameState::new(GameConfig::default(), 9);
    state.start();
    assert!(state.set_food(p(0, 0)));
    let mut clock = TickClock::new(state.config().substeps);

    let mut ticks = 0;
    // 1200 ms at 120 ms per move, fed in 10 ms slices.
    for _ in 0..120 {
        if let Some(Pulse::Tick) = clock.update(10, state.speed_ms()) {
            state.advance();
            ticks += 1;
        }
    }
    assert_eq!(ticks, 10);
    assert_eq!(state.snake().head(), Some(p(500, 300)));
}

#[test]
fn test_same_seed_same_food() {
    let a = GameState::new(GameConfig::default(), 777);
    let b = GameState::new(GameConfig::default(), 777);
    assert_eq!(a.food(), b.food());
    assert_eq!(a.snapshot(), b.snapshot());
}
