//! Badges module - level milestone catalog and per-session achievements
//!
//! The catalog is static and ordered by level. Achievements are append-only
//! within a session and hold each badge at most once.

use arrayvec::ArrayVec;

use crate::types::{Badge, BADGE_NOTICE_BASE_MS, BADGE_NOTICE_PRIORITY_MS};

/// Number of badges in the catalog
pub const BADGE_COUNT: usize = 10;

/// Badge catalog, ascending by level.
pub const BADGES: [Badge; BADGE_COUNT] = [
    Badge { level: 2, name: "Bronze", color: 0xCD7F32, symbol: "🥉" },
    Badge { level: 4, name: "Silver", color: 0xC0C0C0, symbol: "🥈" },
    Badge { level: 6, name: "Gold", color: 0xFFD700, symbol: "🥇" },
    Badge { level: 8, name: "Platinum", color: 0xE5E4E2, symbol: "💎" },
    Badge { level: 10, name: "Diamond", color: 0xB9F2FF, symbol: "💠" },
    Badge { level: 12, name: "Master", color: 0x9C27B0, symbol: "🏆" },
    Badge { level: 14, name: "Legendary", color: 0xFF5722, symbol: "🔥" },
    Badge { level: 16, name: "Mythic", color: 0x673AB7, symbol: "⚡" },
    Badge { level: 18, name: "Eternal", color: 0x3F51B5, symbol: "🌟" },
    Badge { level: 20, name: "Divine", color: 0xF44336, symbol: "👑" },
];

/// How long the unlock notification stays up: higher badges linger longer.
pub fn notice_duration_ms(badge: &Badge) -> u32 {
    let priority = badge.level / 2;
    BADGE_NOTICE_BASE_MS + priority * BADGE_NOTICE_PRIORITY_MS
}

/// Badges unlocked in the current session, in unlock (= ascending level) order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Achievements {
    unlocked: ArrayVec<Badge, BADGE_COUNT>,
}

impl Achievements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unlock every catalog badge with `badge.level <= level` not yet held.
    ///
    /// Returns the newly unlocked badges in ascending level order.
    pub fn unlock_through(&mut self, level: u32) -> ArrayVec<Badge, BADGE_COUNT> {
        let mut fresh = ArrayVec::new();
        for badge in BADGES.iter().take_while(|b| b.level <= level) {
            if self.contains_level(badge.level) {
                continue;
            }
            // Capacity equals the catalog size and each badge is pushed once.
            self.unlocked.push(*badge);
            fresh.push(*badge);
        }
        fresh
    }

    pub fn contains_level(&self, level: u32) -> bool {
        self.unlocked.iter().any(|b| b.level == level)
    }

    /// Most recently unlocked badge
    pub fn latest(&self) -> Option<&Badge> {
        self.unlocked.last()
    }

    pub fn as_slice(&self) -> &[Badge] {
        &self.unlocked
    }

    pub fn len(&self) -> usize {
        self.unlocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unlocked.is_empty()
    }

    pub fn clear(&mut self) {
        self.unlocked.clear();
    }
}
