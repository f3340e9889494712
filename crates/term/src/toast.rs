//! Timed on-screen notifications: the level-up banner and badge unlock card.
//!
//! Durations are cosmetic. Feed every [`GameEvent`] through [`Toasts::on_event`]
//! and age them with [`Toasts::update`] once per loop iteration.

use crate::core::notice_duration_ms;
use crate::types::{Badge, GameEvent, LEVEL_UP_BANNER_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelBanner {
    pub level: u32,
    pub remaining_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BadgeNotice {
    pub badge: Badge,
    pub remaining_ms: u32,
    /// Time shown so far; drives the grow-in animation.
    pub shown_ms: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Toasts {
    level: Option<LevelBanner>,
    badge: Option<BadgeNotice>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_event(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::LevelUp { level, .. } => {
                self.level = Some(LevelBanner {
                    level,
                    remaining_ms: LEVEL_UP_BANNER_MS,
                });
            }
            GameEvent::BadgeUnlocked { badge } => {
                // A newer badge replaces the one on screen.
                self.badge = Some(BadgeNotice {
                    badge,
                    remaining_ms: notice_duration_ms(&badge),
                    shown_ms: 0,
                });
            }
            GameEvent::FoodEaten { .. } | GameEvent::GameOver { .. } => {}
        }
    }

    /// Age notifications; expired ones are dropped.
    pub fn update(&mut self, elapsed_ms: u32) {
        if let Some(banner) = &mut self.level {
            banner.remaining_ms = banner.remaining_ms.saturating_sub(elapsed_ms);
            if banner.remaining_ms == 0 {
                self.level = None;
            }
        }
        if let Some(notice) = &mut self.badge {
            notice.remaining_ms = notice.remaining_ms.saturating_sub(elapsed_ms);
            notice.shown_ms = notice.shown_ms.saturating_add(elapsed_ms);
            if notice.remaining_ms == 0 {
                self.badge = None;
            }
        }
    }

    pub fn level_banner(&self) -> Option<&LevelBanner> {
        self.level.as_ref()
    }

    pub fn badge_notice(&self) -> Option<&BadgeNotice> {
        self.badge.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.level.is_none() && self.badge.is_none()
    }

    pub fn clear(&mut self) {
        self.level = None;
        self.badge = None;
    }
}
