//! Tick clock - drives logical ticks and the visual sub-steps between them
//!
//! The clock lives outside [`GameState`](crate::GameState): the runner feeds it
//! elapsed time and calls `advance()` only when it reports [`Pulse::Tick`].
//! Each logical tick is split into `substeps` frames of `speed / substeps` ms;
//! every `substeps`-th frame is the tick itself, the rest are render-only.

/// What a fired frame means for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pulse {
    /// Redraw only (animation sub-step)
    Frame,
    /// Advance the game by one cell, then redraw
    Tick,
}

#[derive(Debug, Clone)]
pub struct TickClock {
    substeps: u32,
    elapsed_ms: u32,
    frame: u32,
}

impl TickClock {
    pub fn new(substeps: u32) -> Self {
        Self {
            substeps: substeps.max(1),
            elapsed_ms: 0,
            frame: 0,
        }
    }

    pub fn substeps(&self) -> u32 {
        self.substeps
    }

    /// Frames fired since the last [`restart`](Self::restart); drives animations.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Interval between frames at the given tick speed
    pub fn frame_interval_ms(&self, speed_ms: u32) -> u32 {
        (speed_ms / self.substeps).max(1)
    }

    /// Time left before the next frame fires
    pub fn time_until_next_ms(&self, speed_ms: u32) -> u32 {
        self.frame_interval_ms(speed_ms)
            .saturating_sub(self.elapsed_ms)
    }

    /// Accumulate `elapsed_ms` and fire at most one frame.
    ///
    /// Overdue time is dropped rather than replayed, so a stalled loop never
    /// triggers a burst of ticks.
    pub fn update(&mut self, elapsed_ms: u32, speed_ms: u32) -> Option<Pulse> {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms < self.frame_interval_ms(speed_ms) {
            return None;
        }

        self.elapsed_ms = 0;
        self.frame = self.frame.wrapping_add(1);
        if self.frame % self.substeps == 0 {
            Some(Pulse::Tick)
        } else {
            Some(Pulse::Frame)
        }
    }

    /// Discard the partial countdown (used on resume).
    pub fn reset_delay(&mut self) {
        self.elapsed_ms = 0;
    }

    /// Fresh clock for a new session.
    pub fn restart(&mut self) {
        self.elapsed_ms = 0;
        self.frame = 0;
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(crate::types::SMOOTH_SUBSTEPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_third_frame_is_a_tick() {
        let mut clock = TickClock::new(3);
        let speed = 120;
        let pulses: Vec<_> = (0..6).map(|_| clock.update(40, speed)).collect();
        assert_eq!(
            pulses,
            vec![
                Some(Pulse::Frame),
                Some(Pulse::Frame),
                Some(Pulse::Tick),
                Some(Pulse::Frame),
                Some(Pulse::Frame),
                Some(Pulse::Tick),
            ]
        );
    }

    #[test]
    fn test_waits_for_frame_interval() {
        let mut clock = TickClock::new(3);
        assert_eq!(clock.update(39, 120), None);
        assert_eq!(clock.time_until_next_ms(120), 1);
        assert_eq!(clock.update(1, 120), Some(Pulse::Frame));
    }

    #[test]
    fn test_backlog_is_dropped() {
        let mut clock = TickClock::new(3);
        assert_eq!(clock.update(10_000, 120), Some(Pulse::Frame));
        assert_eq!(clock.update(0, 120), None);
    }

    #[test]
    fn test_reset_delay_keeps_frame_phase() {
        let mut clock = TickClock::new(3);
        clock.update(40, 120);
        clock.update(30, 120);
        clock.reset_delay();
        assert_eq!(clock.time_until_next_ms(120), 40);
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn test_restart() {
        let mut clock = TickClock::new(3);
        clock.update(40, 120);
        clock.restart();
        assert_eq!(clock.frame(), 0);
    }

    #[test]
    fn test_single_substep_ticks_every_frame() {
        let mut clock = TickClock::new(0);
        assert_eq!(clock.substeps(), 1);
        assert_eq!(clock.update(120, 120), Some(Pulse::Tick));
    }

    #[test]
    fn test_tick_rate_follows_speed() {
        let mut clock = TickClock::new(3);
        let mut ms = 0;
        let mut ticks = 0;
        while ticks < 2 {
            ms += 1;
            if clock.update(1, 45) == Some(Pulse::Tick) {
                ticks += 1;
            }
        }
        assert_eq!(ms, 90);
    }
}
