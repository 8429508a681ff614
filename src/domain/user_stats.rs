// Header gamification stats
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub level: u32,
    pub xp: u32,
    pub max_xp: u32,
    pub achievements: u32,
    pub streak: u32,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            level: 12,
            xp: 2450,
            max_xp: 3000,
            achievements: 8,
            streak: 15,
        }
    }
}

impl UserStats {
    /// Add `gain` XP, capped at `max_xp`. Returns true if xp changed.
    pub fn award_xp(&mut self, gain: u32) -> bool {
        let next = self.xp.saturating_add(gain).min(self.max_xp);
        let changed = next != self.xp;
        self.xp = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_xp_caps_at_max() {
        let mut stats = UserStats::default();
        assert!(stats.award_xp(9));
        assert_eq!(stats.xp, 2459);

        assert!(stats.award_xp(10_000));
        assert_eq!(stats.xp, 3000);

        assert!(!stats.award_xp(5));
        assert_eq!(stats.xp, 3000);
    }

    #[test]
    fn test_award_zero_is_unchanged() {
        let mut stats = UserStats::default();
        assert!(!stats.award_xp(0));
        assert_eq!(stats, UserStats::default());
    }
}
