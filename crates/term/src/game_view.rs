//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::badges::BADGE_COUNT;
use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::panel::Panel;
use crate::theme;
use crate::toast::{BadgeNotice, LevelBanner, Toasts};
use crate::types::{GameConfig, Position};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Everything drawn on the game screen besides the board itself.
#[derive(Debug, Clone, Copy)]
pub struct GameScene<'a> {
    pub snap: &'a GameSnapshot,
    pub toasts: &'a Toasts,
    /// Clock frame counter; animates the food.
    pub frame: u32,
    /// Pause menu or game-over dialog.
    pub overlay: Option<&'a Panel>,
}

const SIDE_PANEL_W: u16 = 22;
const BADGE_GROW_MS: u32 = 300;
const FOOD_PULSE: [u8; 6] = [70, 85, 100, 100, 85, 70];

/// Terminal renderer for the Snake board and HUD.
#[derive(Debug, Clone)]
pub struct GameView {
    columns: u16,
    rows: u16,
    cell_size: i32,
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl GameView {
    pub fn new(config: &GameConfig) -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            columns: config.columns().max(0) as u16,
            rows: config.rows().max(0) as u16,
            cell_size: config.cell_size.max(1),
            cell_w: 2,
            cell_h: 1,
        }
    }

    /// Board size including its border, in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            self.columns * self.cell_w + 2,
            self.rows * self.cell_h + 2,
        )
    }

    /// Render one game frame into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, scene: &GameScene<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: theme::text(theme::TEXT),
        });

        let (frame_w, frame_h) = self.frame_size();
        if viewport.width < frame_w || viewport.height < frame_h {
            draw_too_small(fb, viewport, frame_w, frame_h);
            return;
        }

        let with_panel = viewport.width >= frame_w + 2 + SIDE_PANEL_W;
        let total_w = if with_panel {
            frame_w + 2 + SIDE_PANEL_W
        } else {
            frame_w
        };
        let start_x = (viewport.width - total_w) / 2;
        let start_y = (viewport.height - frame_h) / 2;

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            theme::on_board(theme::GRID_DOT),
        );
        fb.draw_border(
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::new(theme::BORDER, theme::BACKGROUND),
        );

        for row in 0..self.rows {
            for col in 0..self.columns {
                self.fill_cell(fb, start_x, start_y, col, row, '·', theme::on_board(theme::GRID_DOT));
            }
        }

        let snap = scene.snap;
        if let Some(food) = snap.food {
            if let Some((col, row)) = self.cell_of(food) {
                let pct = FOOD_PULSE[(scene.frame as usize) % FOOD_PULSE.len()];
                let color = if pct == 100 {
                    theme::FOOD_GLOW
                } else {
                    theme::FOOD.scaled(pct)
                };
                self.fill_cell(fb, start_x, start_y, col, row, '●', theme::on_board(color).bold());
            }
        }

        let len = snap.snake.len();
        for (i, &pos) in snap.snake.iter().enumerate().rev() {
            let Some((col, row)) = self.cell_of(pos) else {
                continue;
            };
            let style = if i == 0 {
                CellStyle::new(theme::SNAKE_HEAD, theme::SNAKE_HEAD).bold()
            } else {
                let color = body_color(i, len);
                CellStyle::new(color, color)
            };
            self.fill_cell(fb, start_x, start_y, col, row, '█', style);
        }

        if with_panel {
            draw_side_panel(fb, snap, start_x + frame_w + 2, start_y);
        }

        let board_x = start_x + 1;
        let board_w = frame_w - 2;
        if let Some(banner) = scene.toasts.level_banner() {
            draw_level_banner(fb, banner, board_x, board_w, start_y + 2);
        }
        if let Some(notice) = scene.toasts.badge_notice() {
            draw_badge_notice(fb, notice, board_x, board_w, start_y + frame_h - 6);
        }
        if let Some(panel) = scene.overlay {
            panel.draw(fb, start_x + frame_w / 2, start_y + frame_h / 2);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &GameScene<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    fn cell_of(&self, pos: Position) -> Option<(u16, u16)> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let col = pos.x / self.cell_size;
        let row = pos.y / self.cell_size;
        if col >= self.columns as i32 || row >= self.rows as i32 {
            return None;
        }
        Some((col as u16, row as u16))
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        col: u16,
        row: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}

/// Body segments dim towards the tail, never below 40%.
fn body_color(index: usize, len: usize) -> Rgb {
    let fade = (index * 50 / len.max(1)) as u8;
    theme::SNAKE_BODY.scaled(100u8.saturating_sub(fade).max(40))
}

fn draw_too_small(fb: &mut FrameBuffer, viewport: Viewport, need_w: u16, need_h: u16) {
    let mid = viewport.height / 2;
    fb.put_str_centered(
        0,
        viewport.width,
        mid.saturating_sub(1),
        "Terminal too small",
        theme::text(theme::RED).bold(),
    );
    let need = format!("need {need_w}x{need_h}, have {}x{}", viewport.width, viewport.height);
    fb.put_str_centered(0, viewport.width, mid, &need, theme::text(theme::MUTED));
}

fn draw_side_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, start_y: u16) {
    let label = theme::text(theme::MUTED).bold();
    let value = theme::text(theme::TEXT);

    let mut y = start_y;
    let stat = |fb: &mut FrameBuffer, y: &mut u16, name: &str, v: u32, color: Rgb| {
        fb.put_str(x, *y, name, label);
        fb.put_u32(x, *y + 1, v, theme::text(color).bold());
        *y += 3;
    };
    stat(fb, &mut y, "SCORE", snap.score, theme::TEXT);
    stat(fb, &mut y, "LEVEL", snap.level, theme::AMBER);
    stat(fb, &mut y, "BEST", snap.high_score, theme::GREEN);

    fb.put_str(x, y, "SPEED", label);
    let end = fb.put_u32(x, y + 1, snap.speed_ms, value);
    fb.put_str(end, y + 1, " ms", theme::text(theme::MUTED));
    y += 3;

    fb.put_str(x, y, "BADGE", label);
    match snap.latest_badge() {
        Some(badge) => {
            let style = theme::text(Rgb::from_hex(badge.color)).bold();
            fb.put_char(x, y + 1, '★', style);
            fb.put_str(x + 2, y + 1, badge.name, style);
        }
        None => {
            fb.put_str(x, y + 1, "-", value);
        }
    }
    let count = format!("{}/{}", snap.badges.len(), BADGE_COUNT);
    fb.put_str(x, y + 2, &count, theme::text(theme::MUTED));
    y += 4;

    let hint = theme::text(theme::MUTED);
    for line in ["←↑↓→ move", "Esc   pause", "R     restart", "Q     quit"] {
        fb.put_str(x, y, line, hint);
        y += 1;
    }
}

fn draw_level_banner(fb: &mut FrameBuffer, banner: &LevelBanner, x: u16, w: u16, y: u16) {
    let text = format!("LEVEL {}!", banner.level);
    let box_w = text.chars().count() as u16 + 6;
    let bx = x + w.saturating_sub(box_w) / 2;
    let style = CellStyle::new(theme::BACKGROUND, theme::AMBER).bold();
    fb.fill_rect(bx, y, box_w, 3, ' ', style);
    fb.put_str_centered(bx, box_w, y + 1, &text, style);
}

fn draw_badge_notice(fb: &mut FrameBuffer, notice: &BadgeNotice, x: u16, w: u16, y: u16) {
    let badge = notice.badge;
    let text = format!(
        "CONGRATS! You have achieved {} badge for level {}!",
        badge.name, badge.level
    );
    let full_w = (text.chars().count() as u16 + 4).min(w);
    // Grow in from the center over the first few hundred milliseconds.
    let grown = notice.shown_ms.min(BADGE_GROW_MS);
    let card_w = ((full_w as u32 * grown) / BADGE_GROW_MS).max(2) as u16;
    let cx = x + w.saturating_sub(card_w) / 2;

    let accent = Rgb::from_hex(badge.color);
    fb.fill_rect(cx, y, card_w, 4, ' ', theme::text(theme::TEXT));
    fb.draw_border(cx, y, card_w, 4, theme::text(accent));
    if grown < BADGE_GROW_MS {
        return;
    }
    fb.put_str_centered(cx, card_w, y + 1, &text, theme::text(theme::TEXT).bold());
    let title = format!("★ {} ★", badge.name);
    fb.put_str_centered(cx, card_w, y + 2, &title, theme::text(accent).bold());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::types::GameEvent;

    fn scene<'a>(snap: &'a GameSnapshot, toasts: &'a Toasts) -> GameScene<'a> {
        GameScene {
            snap,
            toasts,
            frame: 0,
            overlay: None,
        }
    }

    #[test]
    fn frame_size_matches_grid() {
        let view = GameView::default();
        assert_eq!(view.frame_size(), (62, 32));
    }

    #[test]
    fn snake_and_food_are_drawn_on_the_board() {
        let mut game = GameState::new(GameConfig::default(), 7);
        game.start();
        let snap = game.snapshot();
        let toasts = Toasts::new();
        let view = GameView::default();
        let fb = view.render(&scene(&snap, &toasts), Viewport::new(62, 32));

        // Head at (300, 300) -> cell (15, 15) -> terminal (1 + 30, 1 + 15).
        let head = fb.get(31, 16).unwrap();
        assert_eq!(head.ch, '█');
        assert_eq!(head.style.fg, theme::SNAKE_HEAD);

        let food = snap.food.unwrap();
        let (col, row) = view.cell_of(food).unwrap();
        assert_eq!(fb.get(1 + col * 2, 1 + row).unwrap().ch, '●');
    }

    #[test]
    fn body_fades_towards_the_tail() {
        assert_eq!(body_color(1, 10), theme::SNAKE_BODY.scaled(95));
        assert_eq!(body_color(1, 2), theme::SNAKE_BODY.scaled(75));
        assert_eq!(body_color(99, 100), theme::SNAKE_BODY.scaled(51));
    }

    #[test]
    fn side_panel_shows_hud_when_wide_enough() {
        let game = GameState::new(GameConfig::default(), 1);
        let snap = game.snapshot();
        let toasts = Toasts::new();
        let fb = GameView::default().render(&scene(&snap, &toasts), Viewport::new(100, 34));
        let text = fb.text();
        assert!(text.contains("SCORE"));
        assert!(text.contains("LEVEL"));
        assert!(text.contains("BEST"));
        assert!(text.contains("120 ms"));
    }

    #[test]
    fn small_viewport_shows_message() {
        let snap = GameSnapshot::default();
        let toasts = Toasts::new();
        let fb = GameView::default().render(&scene(&snap, &toasts), Viewport::new(40, 10));
        assert!(fb.text().contains("Terminal too small"));
    }

    #[test]
    fn toasts_and_overlay_are_drawn() {
        let snap = GameSnapshot::default();
        let mut toasts = Toasts::new();
        toasts.on_event(&GameEvent::LevelUp {
            level: 2,
            speed_ms: 105,
        });
        toasts.on_event(&GameEvent::BadgeUnlocked {
            badge: crate::core::BADGES[0],
        });
        toasts.update(BADGE_GROW_MS);
        let panel = Panel::new("PAUSED", theme::BLUE).items(&["RESUME"], 0);
        let scene = GameScene {
            snap: &snap,
            toasts: &toasts,
            frame: 0,
            overlay: Some(&panel),
        };
        let text = GameView::default().render(&scene, Viewport::new(62, 32)).text();
        assert!(text.contains("LEVEL 2!"));
        assert!(text.contains("CONGRATS! You have achieved Bronze badge for level 2!"));
        assert!(text.contains("PAUSED"));
        assert!(text.contains("▸ RESUME ◂"));
    }
}
