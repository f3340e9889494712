//! Full-screen menus: main menu, achievements list and settings.
//!
//! Pure like [`crate::game_view`]; callers own the selection state.

use crate::core::BADGES;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;
use crate::theme;
use crate::types::{Badge, SPEED_SLIDER_MAX_MS, SPEED_SLIDER_MIN_MS};

const TITLE: [&str; 5] = [
    "███ █  █  ██  █  █ ███",
    "█   ██ █ █  █ █ █  █  ",
    "███ █ ██ ████ ██   ██ ",
    "  █ █  █ █  █ █ █  █  ",
    "███ █  █ █  █ █  █ ███",
];

const SLIDER_W: u16 = 33;
const ACHIEVEMENTS_TOP: u16 = 4;

#[derive(Debug, Clone, Copy, Default)]
pub struct MenuView;

impl MenuView {
    pub fn new() -> Self {
        Self
    }

    pub fn render_main_into(
        &self,
        items: &[&str],
        selected: usize,
        high_score: u32,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        begin(fb, viewport);
        let w = viewport.width;
        let content_h = TITLE.len() as u16 + 4 + items.len() as u16 * 2;
        let mut y = viewport.height.saturating_sub(content_h) / 2;

        for line in TITLE {
            fb.put_str_centered(0, w, y, line, theme::text(theme::GREEN).bold());
            y += 1;
        }
        y += 1;
        let best = format!("High Score: {high_score}");
        fb.put_str_centered(0, w, y, &best, theme::text(theme::AMBER));
        y += 2;

        let accents = [theme::GREEN, theme::PURPLE, theme::BLUE, theme::RED];
        for (i, item) in items.iter().enumerate() {
            let accent = accents[i % accents.len()];
            if i == selected {
                let label = format!("  {item}  ");
                let style = CellStyle::new(theme::TEXT, accent).bold();
                fb.put_str_centered(0, w, y, &label, style);
            } else {
                fb.put_str_centered(0, w, y, item, theme::text(accent));
            }
            y += 2;
        }

        footer(fb, viewport, "↑↓ select   Enter confirm   Q quit");
    }

    /// `unlocked` holds the badges earned this session; `scroll` is the first
    /// catalog row shown when the list does not fit.
    pub fn render_achievements_into(
        &self,
        unlocked: &[Badge],
        scroll: usize,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        begin(fb, viewport);
        let w = viewport.width;
        fb.put_str_centered(0, w, 1, "ACHIEVEMENTS", theme::text(theme::PURPLE).bold());
        let count = format!("{}/{} unlocked", unlocked.len(), BADGES.len());
        fb.put_str_centered(0, w, 2, &count, theme::text(theme::MUTED));

        let row_w = 46.min(w);
        let x = w.saturating_sub(row_w) / 2;
        let top = ACHIEVEMENTS_TOP;
        let visible = achievements_visible_rows(viewport);
        let first = max_scroll(visible).min(scroll);

        for (row, badge) in BADGES.iter().skip(first).take(visible).enumerate() {
            let y = top + row as u16 * 2;
            let achieved = unlocked.iter().any(|b| b.level == badge.level);
            draw_badge_row(fb, badge, achieved, x, y, row_w);
        }

        if first > 0 {
            fb.put_str_centered(0, w, top - 1, "▲", theme::text(theme::MUTED));
        }
        if first + visible < BADGES.len() {
            let y = viewport.height.saturating_sub(2);
            fb.put_str_centered(0, w, y, "▼", theme::text(theme::MUTED));
        }

        footer(fb, viewport, "↑↓ scroll   Esc back");
    }

    pub fn render_settings_into(&self, speed_ms: u32, viewport: Viewport, fb: &mut FrameBuffer) {
        begin(fb, viewport);
        let w = viewport.width;
        let mut y = viewport.height.saturating_sub(9) / 2;

        fb.put_str_centered(0, w, y, "SETTINGS", theme::text(theme::BLUE).bold());
        y += 3;
        fb.put_str_centered(0, w, y, "Initial speed", theme::text(theme::TEXT));
        y += 2;

        let total = SLIDER_W + 12;
        let x = w.saturating_sub(total) / 2;
        let after = fb.put_str(x, y, "Fast ", theme::text(theme::GREEN));
        let knob = slider_knob(speed_ms);
        for i in 0..SLIDER_W {
            let (ch, style) = if i == knob {
                ('●', theme::text(theme::AMBER).bold())
            } else if i < knob {
                ('━', theme::text(theme::BLUE))
            } else {
                ('─', theme::text(theme::LOCKED_FG))
            };
            fb.put_char(after + i, y, ch, style);
        }
        fb.put_str(after + SLIDER_W, y, " Slow", theme::text(theme::RED));
        y += 2;

        let value = format!("{speed_ms} ms per move");
        fb.put_str_centered(0, w, y, &value, theme::text(theme::AMBER));

        footer(fb, viewport, "←→ adjust   Enter/Esc back");
    }
}

/// Slider knob column for `speed_ms` within `0..SLIDER_W`.
fn slider_knob(speed_ms: u32) -> u16 {
    let span = SPEED_SLIDER_MAX_MS - SPEED_SLIDER_MIN_MS;
    let offset = speed_ms.clamp(SPEED_SLIDER_MIN_MS, SPEED_SLIDER_MAX_MS) - SPEED_SLIDER_MIN_MS;
    ((offset * (SLIDER_W as u32 - 1) + span / 2) / span) as u16
}

/// Badge rows that fit on the achievements screen.
pub fn achievements_visible_rows(viewport: Viewport) -> usize {
    (viewport.height.saturating_sub(ACHIEVEMENTS_TOP + 2) / 2) as usize
}

/// Largest useful scroll offset when `visible` rows fit on screen.
pub fn max_scroll(visible: usize) -> usize {
    BADGES.len().saturating_sub(visible)
}

fn begin(fb: &mut FrameBuffer, viewport: Viewport) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(Cell {
        ch: ' ',
        style: theme::text(theme::TEXT),
    });
}

fn footer(fb: &mut FrameBuffer, viewport: Viewport, hint: &str) {
    let y = viewport.height.saturating_sub(1);
    fb.put_str_centered(0, viewport.width, y, hint, theme::text(theme::MUTED));
}

fn draw_badge_row(fb: &mut FrameBuffer, badge: &Badge, achieved: bool, x: u16, y: u16, w: u16) {
    let (accent, bg) = if achieved {
        (Rgb::from_hex(badge.color), theme::BACKGROUND)
    } else {
        (theme::LOCKED_FG, theme::LOCKED_BG)
    };
    fb.fill_rect(x, y, w, 1, ' ', CellStyle::new(theme::TEXT, bg));

    let name_style = CellStyle::new(accent, bg).bold();
    fb.put_char(x + 1, y, '★', name_style);
    fb.put_str(x + 3, y, badge.name, name_style);

    let req = format!("Reach Level {}", badge.level);
    let req_fg = if achieved { theme::MUTED } else { theme::LOCKED_FG };
    fb.put_str(x + 15, y, &req, CellStyle::new(req_fg, bg));

    let (status, status_fg) = if achieved {
        ("✓ ACHIEVED", theme::GREEN)
    } else {
        ("LOCKED", theme::LOCKED_FG)
    };
    let sx = (x + w).saturating_sub(status.chars().count() as u16 + 1);
    fb.put_str(sx, y, status, CellStyle::new(status_fg, bg).bold());
}
