//! Progression module - level and speed formulas
//!
//! Both values are derived, never accumulated:
//! - `level = score / level_threshold + 1`
//! - `speed = max(min_speed, initial_speed - (level - 1) * step)`

use crate::types::GameConfig;

/// Level reached at `score`. A zero threshold is treated as 1.
pub fn level_for_score(score: u32, level_threshold: u32) -> u32 {
    score / level_threshold.max(1) + 1
}

/// Tick interval in milliseconds for `level`.
pub fn speed_for_level(level: u32, initial_ms: u32, min_ms: u32, step_ms: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(step_ms);
    initial_ms.saturating_sub(reduction).max(min_ms)
}

/// [`speed_for_level`] with the session's boundary values.
pub fn speed_for(config: &GameConfig, level: u32) -> u32 {
    speed_for_level(
        level,
        config.initial_speed_ms,
        config.min_speed_ms,
        config.speed_step_ms,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{INITIAL_SPEED_MS, LEVEL_THRESHOLD, MIN_SPEED_MS, SPEED_STEP_MS};

    #[test]
    fn test_level_for_score() {
        assert_eq!(level_for_score(0, LEVEL_THRESHOLD), 1);
        assert_eq!(level_for_score(4, LEVEL_THRESHOLD), 1);
        assert_eq!(level_for_score(5, LEVEL_THRESHOLD), 2);
        assert_eq!(level_for_score(9, LEVEL_THRESHOLD), 2);
        assert_eq!(level_for_score(10, LEVEL_THRESHOLD), 3);
        assert_eq!(level_for_score(99, LEVEL_THRESHOLD), 20);
    }

    #[test]
    fn test_level_zero_threshold() {
        assert_eq!(level_for_score(3, 0), 4);
    }

    #[test]
    fn test_speed_table() {
        let speed = |l| speed_for_level(l, INITIAL_SPEED_MS, MIN_SPEED_MS, SPEED_STEP_MS);
        assert_eq!(speed(1), 120);
        assert_eq!(speed(2), 105);
        assert_eq!(speed(3), 90);
        assert_eq!(speed(6), 45);
        assert_eq!(speed(7), 40);
        assert_eq!(speed(50), 40);
    }

    #[test]
    fn test_speed_monotonic_and_floored() {
        let cfg = GameConfig::default();
        let mut prev = speed_for(&cfg, 1);
        for level in 2..200 {
            let s = speed_for(&cfg, level);
            assert!(s <= prev);
            assert!(s >= cfg.min_speed_ms);
            prev = s;
        }
    }

    #[test]
    fn test_speed_follows_slider_value() {
        let cfg = GameConfig::default().with_initial_speed(160);
        assert_eq!(speed_for(&cfg, 1), 160);
        assert_eq!(speed_for(&cfg, 2), 145);
    }
}
