//! Screen state machine tying the game, the clock and the views together.
//!
//! Pure apart from the `tracing` events it emits: [`App::handle_key`] routes a
//! key press, [`App::update`] advances time and [`App::render_into`] draws the
//! current screen. The binary owns the terminal and the real clock.

use std::hash::{Hash, Hasher};

use crossterm::event::KeyEvent;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::core::{GameSnapshot, GameState, Pulse, TickClock};
use crate::input::{handle_key_event, handle_menu_key, should_quit, MenuInput};
use crate::term::menu_view::{achievements_visible_rows, max_scroll};
use crate::term::{theme, FrameBuffer, GameScene, GameView, MenuView, Panel, Rgb, Toasts, Viewport};
use crate::types::{
    GameAction, GameConfig, GameEvent, GameOverCause, SPEED_SLIDER_MAX_MS, SPEED_SLIDER_MIN_MS,
    SPEED_SLIDER_STEP_MS,
};

pub const MAIN_MENU_ITEMS: [&str; 4] = ["START GAME", "ACHIEVEMENTS", "SETTINGS", "EXIT"];
pub const PAUSE_MENU_ITEMS: [&str; 5] = ["RESUME", "ACHIEVEMENTS", "SETTINGS", "MAIN MENU", "EXIT"];
pub const GAME_OVER_ITEMS: [&str; 3] = ["PLAY AGAIN", "ACHIEVEMENTS", "MAIN MENU"];

/// Redraw interval for screens without animation.
pub const STATIC_FRAME_MS: u32 = 250;

/// Screen a sub-screen returns to on Back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnTo {
    Menu,
    Paused,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Menu { selected: usize },
    Playing,
    Paused { selected: usize },
    GameOver { selected: usize },
    Achievements { scroll: usize, back: ReturnTo },
    Settings { back: ReturnTo },
}

pub struct App {
    game: GameState,
    clock: TickClock,
    toasts: Toasts,
    screen: Screen,
    snap: GameSnapshot,
    game_view: GameView,
    menu_view: MenuView,
    /// Achievements rows visible at the last render, for scroll clamping.
    visible_badges: usize,
    quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let game_config = GameConfig::default().with_initial_speed(config.initial_speed_ms);
        let game = GameState::new(game_config, config.seed_or_clock());
        let snap = game.snapshot();
        Self {
            clock: TickClock::new(game_config.substeps),
            game_view: GameView::new(&game_config),
            menu_view: MenuView::new(),
            game,
            toasts: Toasts::new(),
            screen: Screen::Menu { selected: 0 },
            snap,
            visible_badges: crate::core::BADGES.len(),
            quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the screen animates between input events.
    pub fn is_animating(&self) -> bool {
        self.screen == Screen::Playing
    }

    /// Milliseconds until the next scheduled update.
    pub fn timeout_ms(&self) -> u32 {
        if self.is_animating() {
            self.clock.time_until_next_ms(self.game.speed_ms())
        } else {
            STATIC_FRAME_MS
        }
    }

    /// Hash of everything visible; unchanged fingerprints need no redraw.
    pub fn fingerprint(&self) -> u64 {
        let mut h = std::collections::hash_map::DefaultHasher::new();
        self.screen.hash(&mut h);
        self.game.fingerprint().hash(&mut h);
        self.game.config().initial_speed_ms.hash(&mut h);
        self.toasts.hash(&mut h);
        h.finish()
    }

    /// Route one key press to the active screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if should_quit(key) {
            info!("quit requested");
            self.quit = true;
            return;
        }

        match self.screen {
            Screen::Playing => {
                if let Some(action) = handle_key_event(key) {
                    self.on_game_action(action);
                }
            }
            Screen::Menu { selected } => {
                if let Some(input) = handle_menu_key(key) {
                    self.on_main_menu(selected, input);
                }
            }
            Screen::Paused { selected } => {
                if let Some(input) = handle_menu_key(key) {
                    self.on_pause_menu(selected, input);
                }
            }
            Screen::GameOver { selected } => {
                if let Some(input) = handle_menu_key(key) {
                    self.on_game_over_menu(selected, input);
                }
            }
            Screen::Achievements { scroll, back } => {
                if let Some(input) = handle_menu_key(key) {
                    self.on_achievements(scroll, back, input);
                }
            }
            Screen::Settings { back } => {
                if let Some(input) = handle_menu_key(key) {
                    self.on_settings(back, input);
                }
            }
        }
    }

    /// Advance time by `elapsed_ms`. Only the game screen moves.
    pub fn update(&mut self, elapsed_ms: u32) {
        if self.screen != Screen::Playing {
            return;
        }
        self.toasts.update(elapsed_ms);
        if let Some(Pulse::Tick) = self.clock.update(elapsed_ms, self.game.speed_ms()) {
            self.game.advance();
            self.drain_events();
        }
    }

    pub fn render_into(&mut self, viewport: Viewport, fb: &mut FrameBuffer) {
        match self.screen {
            Screen::Menu { selected } => {
                self.menu_view.render_main_into(
                    &MAIN_MENU_ITEMS,
                    selected,
                    self.game.high_score(),
                    viewport,
                    fb,
                );
            }
            Screen::Achievements { scroll, .. } => {
                self.visible_badges = achievements_visible_rows(viewport);
                self.menu_view.render_achievements_into(
                    self.game.achievements().as_slice(),
                    scroll,
                    viewport,
                    fb,
                );
            }
            Screen::Settings { .. } => {
                self.menu_view
                    .render_settings_into(self.game.config().initial_speed_ms, viewport, fb);
            }
            Screen::Playing | Screen::Paused { .. } | Screen::GameOver { .. } => {
                self.game.snapshot_into(&mut self.snap);
                let overlay = self.overlay_panel();
                let scene = GameScene {
                    snap: &self.snap,
                    toasts: &self.toasts,
                    frame: self.clock.frame(),
                    overlay: overlay.as_ref(),
                };
                self.game_view.render_into(&scene, viewport, fb);
            }
        }
    }

    fn on_game_action(&mut self, action: GameAction) {
        match action {
            GameAction::Turn(dir) => {
                self.game.request_direction_change(dir);
            }
            GameAction::TogglePause => {
                if self.game.pause() {
                    self.set_screen(Screen::Paused { selected: 0 });
                }
            }
            GameAction::Restart => self.start_game(),
        }
    }

    fn on_main_menu(&mut self, selected: usize, input: MenuInput) {
        match input {
            MenuInput::Up | MenuInput::Down => {
                let selected = step_selection(selected, MAIN_MENU_ITEMS.len(), input);
                self.screen = Screen::Menu { selected };
            }
            MenuInput::Select => match selected {
                0 => self.start_game(),
                1 => self.open_achievements(ReturnTo::Menu),
                2 => self.set_screen(Screen::Settings {
                    back: ReturnTo::Menu,
                }),
                _ => self.quit = true,
            },
            MenuInput::Back => self.quit = true,
            MenuInput::Left | MenuInput::Right => {}
        }
    }

    fn on_pause_menu(&mut self, selected: usize, input: MenuInput) {
        match input {
            MenuInput::Up | MenuInput::Down => {
                let selected = step_selection(selected, PAUSE_MENU_ITEMS.len(), input);
                self.screen = Screen::Paused { selected };
            }
            MenuInput::Back => self.resume_game(),
            MenuInput::Select => match selected {
                0 => self.resume_game(),
                1 => self.open_achievements(ReturnTo::Paused),
                2 => self.set_screen(Screen::Settings {
                    back: ReturnTo::Paused,
                }),
                3 => self.main_menu(),
                _ => self.quit = true,
            },
            MenuInput::Left | MenuInput::Right => {}
        }
    }

    fn on_game_over_menu(&mut self, selected: usize, input: MenuInput) {
        match input {
            MenuInput::Up | MenuInput::Down => {
                let selected = step_selection(selected, GAME_OVER_ITEMS.len(), input);
                self.screen = Screen::GameOver { selected };
            }
            MenuInput::Select => match selected {
                0 => self.start_game(),
                1 => self.open_achievements(ReturnTo::GameOver),
                _ => self.main_menu(),
            },
            MenuInput::Back => self.main_menu(),
            MenuInput::Left | MenuInput::Right => {}
        }
    }

    fn on_achievements(&mut self, scroll: usize, back: ReturnTo, input: MenuInput) {
        match input {
            MenuInput::Up => {
                self.screen = Screen::Achievements {
                    scroll: scroll.saturating_sub(1),
                    back,
                };
            }
            MenuInput::Down => {
                let scroll = (scroll + 1).min(max_scroll(self.visible_badges));
                self.screen = Screen::Achievements { scroll, back };
            }
            MenuInput::Select | MenuInput::Back => self.go_back(back),
            MenuInput::Left | MenuInput::Right => {}
        }
    }

    fn on_settings(&mut self, back: ReturnTo, input: MenuInput) {
        let current = self.game.config().initial_speed_ms;
        match input {
            MenuInput::Left => {
                let ms = current
                    .saturating_sub(SPEED_SLIDER_STEP_MS)
                    .max(SPEED_SLIDER_MIN_MS);
                self.set_initial_speed(ms);
            }
            MenuInput::Right => {
                let ms = (current + SPEED_SLIDER_STEP_MS).min(SPEED_SLIDER_MAX_MS);
                self.set_initial_speed(ms);
            }
            MenuInput::Select | MenuInput::Back => self.go_back(back),
            MenuInput::Up | MenuInput::Down => {}
        }
    }

    fn set_initial_speed(&mut self, ms: u32) {
        let applied = self.game.set_initial_speed(ms);
        debug!(initial_speed_ms = applied, "initial speed changed");
    }

    fn open_achievements(&mut self, back: ReturnTo) {
        self.set_screen(Screen::Achievements { scroll: 0, back });
    }

    fn go_back(&mut self, back: ReturnTo) {
        let screen = match back {
            ReturnTo::Menu => Screen::Menu { selected: 0 },
            ReturnTo::Paused => Screen::Paused { selected: 0 },
            ReturnTo::GameOver => Screen::GameOver { selected: 0 },
        };
        self.set_screen(screen);
    }

    fn start_game(&mut self) {
        self.game.reset();
        self.game.start();
        self.clock.restart();
        self.toasts.clear();
        self.set_screen(Screen::Playing);
    }

    fn resume_game(&mut self) {
        if self.game.resume() {
            self.clock.reset_delay();
            self.set_screen(Screen::Playing);
        }
    }

    /// Abandon the session. The high score survives.
    fn main_menu(&mut self) {
        self.game.reset();
        self.toasts.clear();
        self.set_screen(Screen::Menu { selected: 0 });
    }

    fn drain_events(&mut self) {
        let mut over = false;
        for event in self.game.drain_events() {
            self.toasts.on_event(&event);
            over |= matches!(event, GameEvent::GameOver { .. });
        }
        if over {
            self.set_screen(Screen::GameOver { selected: 0 });
        }
    }

    fn set_screen(&mut self, screen: Screen) {
        debug!(from = ?self.screen, to = ?screen, "screen change");
        self.screen = screen;
    }

    fn overlay_panel(&self) -> Option<Panel> {
        match self.screen {
            Screen::Paused { selected } => Some(
                Panel::new("PAUSED", theme::BLUE)
                    .line(
                        format!("Score {}   Level {}", self.game.score(), self.game.level()),
                        theme::TEXT,
                    )
                    .items(&PAUSE_MENU_ITEMS, selected),
            ),
            Screen::GameOver { selected } => Some(self.game_over_panel(selected)),
            _ => None,
        }
    }

    fn game_over_panel(&self, selected: usize) -> Panel {
        let game = &self.game;
        let cause = match game.game_over_cause() {
            Some(GameOverCause::Wall) => "You hit the wall",
            Some(GameOverCause::SelfCollision) => "You ran into yourself",
            Some(GameOverCause::BoardFull) => "The board is full!",
            None => "",
        };
        let (badge_text, badge_color) = match game.achievements().latest() {
            Some(b) => (format!("Highest badge: ★ {}", b.name), Rgb::from_hex(b.color)),
            None => ("Highest badge: none yet".to_string(), theme::MUTED),
        };
        Panel::new("GAME OVER", theme::RED)
            .line(cause, theme::MUTED)
            .line(format!("Score: {}", game.score()), theme::TEXT)
            .line(format!("Level reached: {}", game.level()), theme::AMBER)
            .line(badge_text, badge_color)
            .line(format!("High score: {}", game.high_score()), theme::GREEN)
            .items(&GAME_OVER_ITEMS, selected)
    }
}

fn step_selection(selected: usize, len: usize, input: MenuInput) -> usize {
    match input {
        MenuInput::Up => (selected + len - 1) % len,
        MenuInput::Down => (selected + 1) % len,
        _ => selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps() {
        assert_eq!(step_selection(0, 4, MenuInput::Up), 3);
        assert_eq!(step_selection(3, 4, MenuInput::Down), 0);
        assert_eq!(step_selection(1, 4, MenuInput::Select), 1);
    }
}
