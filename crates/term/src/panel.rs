//! Boxed dialog with a title, info lines and a selectable item list.
//!
//! Used for the pause menu and the game-over dialog drawn over the board.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLine {
    pub text: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub title: String,
    pub accent: Rgb,
    pub lines: Vec<PanelLine>,
    pub items: Vec<String>,
    pub selected: usize,
}

const PADDING_X: u16 = 3;

impl Panel {
    pub fn new(title: impl Into<String>, accent: Rgb) -> Self {
        Self {
            title: title.into(),
            accent,
            lines: Vec::new(),
            items: Vec::new(),
            selected: 0,
        }
    }

    pub fn line(mut self, text: impl Into<String>, color: Rgb) -> Self {
        self.lines.push(PanelLine {
            text: text.into(),
            color,
        });
        self
    }

    pub fn items<S: AsRef<str>>(mut self, items: &[S], selected: usize) -> Self {
        self.items = items.iter().map(|s| s.as_ref().to_string()).collect();
        self.selected = selected;
        self
    }

    /// Outer size including the border.
    pub fn size(&self) -> (u16, u16) {
        let widest = std::iter::once(self.title.chars().count())
            .chain(self.lines.iter().map(|l| l.text.chars().count()))
            .chain(self.items.iter().map(|i| i.chars().count() + 4))
            .max()
            .unwrap_or(0) as u16;
        let w = widest + 2 * PADDING_X + 2;
        // border + blank + title + blank + lines + blank + items + blank + border
        let mut h = 2 + 3 + self.lines.len() as u16;
        if !self.items.is_empty() {
            h += 1 + self.items.len() as u16;
        }
        (w, h + 1)
    }

    /// Draw centered on (`cx`, `cy`).
    pub fn draw(&self, fb: &mut FrameBuffer, cx: u16, cy: u16) {
        let (w, h) = self.size();
        let x = cx.saturating_sub(w / 2);
        let y = cy.saturating_sub(h / 2);

        let body = CellStyle::new(theme::TEXT, theme::BACKGROUND);
        fb.fill_rect(x, y, w, h, ' ', body);
        fb.draw_border(x, y, w, h, CellStyle::new(self.accent, theme::BACKGROUND));

        let inner_x = x + 1;
        let inner_w = w.saturating_sub(2);
        let mut row = y + 2;
        fb.put_str_centered(inner_x, inner_w, row, &self.title, theme::text(self.accent).bold());
        row += 2;

        for line in &self.lines {
            fb.put_str_centered(inner_x, inner_w, row, &line.text, theme::text(line.color));
            row += 1;
        }

        if self.items.is_empty() {
            return;
        }
        row += 1;
        for (i, item) in self.items.iter().enumerate() {
            if i == self.selected {
                let label = format!("▸ {item} ◂");
                let style = CellStyle::new(theme::BACKGROUND, self.accent).bold();
                fb.put_str_centered(inner_x, inner_w, row, &label, style);
            } else {
                fb.put_str_centered(inner_x, inner_w, row, item, theme::text(theme::TEXT));
            }
            row += 1;
        }
    }
}
