//! Terminal Snake runner (default binary).
//!
//! Uses crossterm for input and a framebuffer-based diffing renderer.
//! Configuration comes from `SNAKE_*` environment variables and flags; see
//! `snake_tui::config`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use snake_tui::app::App;
use snake_tui::config::AppConfig;
use snake_tui::logging;
use snake_tui::term::{FrameBuffer, RenderThrottle, TerminalRenderer, Viewport};

const STATIC_REDRAW_MS: u64 = 500;

fn main() -> Result<()> {
    let mut config = AppConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();
    config.apply_args(&args)?;
    logging::init(&config)?;
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    let result = term.enter("Snake Game").and_then(|_| run(&mut term, &config));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut app = App::new(config);
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let started = Instant::now();
    let mut last = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, app.fingerprint(), !app.is_animating()) {
            app.render_into(Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        let timeout = Duration::from_millis(app.timeout_ms() as u64);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                    if app.should_quit() {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last).as_millis() as u32;
        last = now;
        app.update(elapsed);
    }
}
