//! Experience and level progression rules.
//!
//! A character levels up when their experience reaches `level * 100`.
//! Level-ups are single-step: one completion raises the level by at most
//! one, even when the award crosses several thresholds.

use serde::Serialize;

/// Experience needed per level when computing the next threshold.
pub const XP_PER_LEVEL: i32 = 100;

/// Level assigned to new characters.
pub const STARTING_LEVEL: i32 = 1;

/// Result of applying a mission reward to a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub level: i32,
    pub experience: i32,
    pub leveled_up: bool,
}

/// Experience required to advance from `level` to `level + 1`.
pub fn xp_threshold(level: i32) -> i32 {
    level.saturating_mul(XP_PER_LEVEL)
}

/// Add `xp_reward` to the character's experience and apply at most one
/// level-up.
///
/// Negative rewards are treated as zero; the database forbids them anyway.
pub fn apply_reward(level: i32, experience: i32, xp_reward: i32) -> Progress {
    let experience = experience.saturating_add(xp_reward.max(0));
    let leveled_up = experience >= xp_threshold(level);
    let level = if leveled_up { level.saturating_add(1) } else { level };
    Progress {
        level,
        experience,
        leveled_up,
    }
}
