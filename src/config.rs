//! Runtime configuration: environment variables first, command-line flags on top.
//!
//! | Variable              | Flag      | Default |
//! |-----------------------|-----------|---------|
//! | `SNAKE_INITIAL_SPEED` | `--speed` | 120     |
//! | `SNAKE_SEED`          | `--seed`  | clock   |
//! | `SNAKE_LOG_PATH`      | `--log`   | off     |
//! | `SNAKE_LOG`           |           | `info`  |
//!
//! Malformed environment values fall back to the default; malformed flags are
//! errors.

use anyhow::{anyhow, Result};

use crate::types::{INITIAL_SPEED_MS, SPEED_SLIDER_MAX_MS, SPEED_SLIDER_MIN_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Starting tick interval, clamped to the settings slider range.
    pub initial_speed_ms: u32,
    /// Food placement seed; `None` seeds from the clock.
    pub seed: Option<u32>,
    /// Log file; logging is disabled when unset since the terminal is in use.
    pub log_path: Option<String>,
    /// `EnvFilter` directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_speed_ms: INITIAL_SPEED_MS,
            seed: None,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let initial_speed_ms = lookup("SNAKE_INITIAL_SPEED")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(clamp_speed)
            .unwrap_or(defaults.initial_speed_ms);

        let seed = lookup("SNAKE_SEED").and_then(|s| s.trim().parse::<u32>().ok());

        let log_path = lookup("SNAKE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_filter = lookup("SNAKE_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            initial_speed_ms,
            seed,
            log_path,
            log_filter,
        }
    }

    /// Apply `--speed <ms>`, `--seed <n>` and `--log <path>` flags.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--speed" | "--seed" | "--log" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for {}", flag))?;
                    match flag {
                        "--speed" => {
                            let ms = v
                                .parse::<u32>()
                                .map_err(|_| anyhow!("invalid --speed value: {}", v))?;
                            self.initial_speed_ms = clamp_speed(ms);
                        }
                        "--seed" => {
                            let seed = v
                                .parse::<u32>()
                                .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                            self.seed = Some(seed);
                        }
                        _ => self.log_path = Some(v.clone()),
                    }
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(())
    }

    /// The configured seed, or one derived from the wall clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

fn clamp_speed(ms: u32) -> u32 {
    ms.clamp(SPEED_SLIDER_MIN_MS, SPEED_SLIDER_MAX_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_env() {
        let cfg = AppConfig::from_lookup(|_| None);
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.initial_speed_ms, 120);
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn env_values_are_read_and_clamped() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("SNAKE_INITIAL_SPEED", "500"),
            ("SNAKE_SEED", "42"),
            ("SNAKE_LOG_PATH", " /tmp/snake.log "),
            ("SNAKE_LOG", "snake_core=debug"),
        ]));
        assert_eq!(cfg.initial_speed_ms, SPEED_SLIDER_MAX_MS);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/snake.log"));
        assert_eq!(cfg.log_filter, "snake_core=debug");
    }

    #[test]
    fn bad_env_values_fall_back() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("SNAKE_INITIAL_SPEED", "fast"),
            ("SNAKE_SEED", "-1"),
            ("SNAKE_LOG_PATH", "   "),
        ]));
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn args_override_env() {
        let mut cfg = AppConfig::from_lookup(lookup(&[("SNAKE_SEED", "1")]));
        cfg.apply_args(&args(&["--speed", "85", "--seed", "9", "--log", "out.log"]))
            .unwrap();
        assert_eq!(cfg.initial_speed_ms, 85);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.seed_or_clock(), 9);
        assert_eq!(cfg.log_path.as_deref(), Some("out.log"));
    }

    #[test]
    fn bad_args_are_errors() {
        let mut cfg = AppConfig::default();
        let err = cfg.apply_args(&args(&["--speed", "x"])).unwrap_err();
        assert!(err.to_string().contains("--speed"));
        assert!(cfg.apply_args(&args(&["--seed"])).is_err());
        assert!(cfg.apply_args(&args(&["--turbo"])).is_err());
    }
}
