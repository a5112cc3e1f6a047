use std::collections::HashMap;

use crate::bones::BoneKind;
use crate::client::{GameClient, SkillSnapshot};
use crate::error::CalcError;
use crate::prayer::xp_table::{self, MAX_PRAYER_LEVEL, MAX_PRAYER_XP, MIN_PRAYER_LEVEL};
use crate::prayer::PrayerPlan;

/// Digits-only reading of a panel field. "1,234 xp" parses as 1234; text
/// with no digits at all parses as zero.
pub fn parse_field(text: &str) -> i64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Default goal for a freshly read level: the next level, or the 200M XP
/// cap once the level sits at 99 or above.
pub fn default_goal(current_level: i32) -> (i32, i64) {
    if current_level >= 99 {
        return (MAX_PRAYER_LEVEL, MAX_PRAYER_XP);
    }
    let next = (current_level + 1).min(MAX_PRAYER_LEVEL);
    (next, xp_table::xp_for_level(next).unwrap_or(MAX_PRAYER_XP))
}

/// Shared state behind the goal and resource planning surfaces.
///
/// Level and XP fields stay coherent: editing one side of a pair re-derives
/// the other from the XP table. Clamping applies to typed input only; the
/// engine keeps its strict validation.
#[derive(Debug, Clone)]
pub struct PlannerSession {
    pub current_level: i32,
    pub current_xp: i64,
    pub target_level: i32,
    pub target_xp: i64,
    pub use_sunfire_wine: bool,
    pub use_zealot_robes: bool,
    last_scanned_shards: i64,
    debug_shard_override: Option<i64>,
}

impl Default for PlannerSession {
    fn default() -> Self {
        PlannerSession {
            current_level: 1,
            current_xp: 0,
            target_level: 2,
            target_xp: 0,
            use_sunfire_wine: false,
            use_zealot_robes: false,
            last_scanned_shards: 0,
            debug_shard_override: None,
        }
    }
}

impl PlannerSession {
    pub fn set_current_level(&mut self, level: i64) {
        let level = clamp_level(level);
        self.current_level = level;
        self.current_xp = xp_table::xp_for_level(level).unwrap_or(0);
    }

    pub fn set_current_xp(&mut self, xp: i64) {
        let xp = clamp_xp(xp);
        self.current_xp = xp;
        self.current_level = xp_table::level_for_xp(xp);
    }

    /// A target level past 126 only makes sense as a 200M XP goal, which
    /// the XP field expresses; reject it unless that field is already maxed.
    pub fn set_target_level(&mut self, level: i64) -> Result<(), CalcError> {
        if level > MAX_PRAYER_LEVEL as i64 && self.target_xp < MAX_PRAYER_XP {
            return Err(CalcError::InvalidInput(format!(
                "invalid target prayer level: {}",
                level
            )));
        }
        let level = clamp_level(level);
        self.target_level = level;
        self.target_xp = xp_table::xp_for_level(level).unwrap_or(MAX_PRAYER_XP);
        Ok(())
    }

    pub fn set_target_xp(&mut self, xp: i64) {
        let xp = clamp_xp(xp);
        self.target_xp = xp;
        self.target_level = xp_table::level_for_xp(xp);
    }

    /// Apply a client reading. Absent or out-of-bounds readings leave every
    /// field untouched; the return value reports whether anything changed.
    pub fn refresh_from_snapshot(&mut self, snapshot: Option<SkillSnapshot>) -> bool {
        let snapshot = match snapshot {
            Some(snapshot) => snapshot,
            None => return false,
        };
        if snapshot.xp < 0 || snapshot.xp > MAX_PRAYER_XP {
            return false;
        }
        if snapshot.level < MIN_PRAYER_LEVEL || snapshot.level > MAX_PRAYER_LEVEL {
            return false;
        }
        self.apply_reading(snapshot.xp);
        true
    }

    /// Pull a fresh skill reading straight from the client.
    pub fn refresh_from_client(&mut self, client: &dyn GameClient) -> bool {
        self.refresh_from_snapshot(client.skill_snapshot())
    }

    /// Apply a hiscore XP figure. Hiscores report -1 for unranked skills,
    /// so the reading is clamped rather than rejected.
    pub fn apply_hiscore_xp(&mut self, xp: i64) {
        self.apply_reading(clamp_xp(xp));
    }

    /// Remember the latest inventory scan total for the panels to reuse.
    pub fn record_scan(&mut self, total_shards: i64) {
        self.last_scanned_shards = total_shards;
    }

    pub fn set_debug_shard_override(&mut self, shards: Option<i64>) {
        self.debug_shard_override = shards;
    }

    /// The shard total planning should run with: the debug override when it
    /// holds a positive value, else the last recorded scan.
    pub fn effective_shards(&self) -> i64 {
        match self.debug_shard_override {
            Some(shards) if shards > 0 => shards,
            _ => self.last_scanned_shards,
        }
    }

    /// Plan for goal mode: how much is missing to reach the session target.
    pub fn goal_plan(&self, bones: HashMap<BoneKind, i64>) -> PrayerPlan {
        PrayerPlan {
            current_xp: self.current_xp,
            current_level: self.current_level,
            target_level: self.target_level,
            target_xp: self.target_xp,
            use_sunfire_wine: self.use_sunfire_wine,
            use_zealot_robes: self.use_zealot_robes,
            available_bones: bones,
        }
    }

    /// Plan for resource mode. The goal fields are pinned to the current
    /// level so validation never trips over a stale target.
    pub fn resource_plan(&self, bones: HashMap<BoneKind, i64>) -> PrayerPlan {
        PrayerPlan {
            target_level: self.current_level,
            target_xp: 0,
            ..self.goal_plan(bones)
        }
    }

    fn apply_reading(&mut self, xp: i64) {
        self.current_xp = xp;
        self.current_level = xp_table::level_for_xp(xp);
        let (target_level, target_xp) = default_goal(self.current_level);
        self.target_level = target_level;
        self.target_xp = target_xp;
    }
}

fn clamp_level(level: i64) -> i32 {
    level.clamp(MIN_PRAYER_LEVEL as i64, MAX_PRAYER_LEVEL as i64) as i32
}

fn clamp_xp(xp: i64) -> i64 {
    xp.clamp(0, MAX_PRAYER_XP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prayer::calculate_from_resources;
    use crate::testdata::fixtures::FakeClient;

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field("1,234 xp"), 1234);
        assert_eq!(parse_field("  500  "), 500);
        assert_eq!(parse_field(""), 0);
        assert_eq!(parse_field("abc"), 0);
    }

    #[test]
    fn test_set_current_level_derives_xp() {
        let mut session = PlannerSession::default();

        session.set_current_level(50);
        assert_eq!(session.current_level, 50);
        assert_eq!(session.current_xp, 101_333);

        session.set_current_level(200);
        assert_eq!(session.current_level, 126);
        assert_eq!(session.current_xp, 200_000_000);

        session.set_current_level(0);
        assert_eq!(session.current_level, 1);
        assert_eq!(session.current_xp, 0);
    }

    #[test]
    fn test_set_current_xp_derives_level() {
        let mut session = PlannerSession::default();

        session.set_current_xp(101_333);
        assert_eq!(session.current_level, 50);

        session.set_current_xp(-5);
        assert_eq!(session.current_xp, 0);
        assert_eq!(session.current_level, 1);

        session.set_current_xp(300_000_000);
        assert_eq!(session.current_xp, 200_000_000);
        assert_eq!(session.current_level, 126);
    }

    #[test]
    fn test_target_level_above_cap_needs_maxed_xp_field() {
        let mut session = PlannerSession::default();

        let err = session.set_target_level(127).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput(_)));
        assert_eq!(session.target_level, 2);
        assert_eq!(session.target_xp, 0);

        session.set_target_xp(200_000_000);
        session.set_target_level(127).unwrap();
        assert_eq!(session.target_level, 126);
        assert_eq!(session.target_xp, 200_000_000);
    }

    #[test]
    fn test_set_target_level_derives_xp() {
        let mut session = PlannerSession::default();

        session.set_target_level(99).unwrap();
        assert_eq!(session.target_xp, 13_034_431);
    }

    #[test]
    fn test_default_goal() {
        assert_eq!(default_goal(50), (51, 111_945));
        assert_eq!(default_goal(98), (99, 13_034_431));
        assert_eq!(default_goal(99), (126, 200_000_000));
        assert_eq!(default_goal(126), (126, 200_000_000));
    }

    #[test]
    fn test_refresh_rejects_missing_or_invalid_readings() {
        let mut session = PlannerSession::default();
        session.set_current_level(40);
        let before_xp = session.current_xp;

        assert!(!session.refresh_from_snapshot(None));
        assert!(!session.refresh_from_snapshot(Some(SkillSnapshot { level: 0, xp: 100 })));
        assert!(!session.refresh_from_snapshot(Some(SkillSnapshot { level: 1, xp: -1 })));
        assert!(!session.refresh_from_snapshot(Some(SkillSnapshot {
            level: 126,
            xp: 200_000_001,
        })));
        assert_eq!(session.current_level, 40);
        assert_eq!(session.current_xp, before_xp);
    }

    #[test]
    fn test_refresh_applies_reading_and_default_goal() {
        let mut session = PlannerSession::default();

        let applied = session.refresh_from_snapshot(Some(SkillSnapshot {
            level: 49,
            xp: 101_333,
        }));

        assert!(applied);
        // The level is re-derived from XP, not taken from the snapshot.
        assert_eq!(session.current_level, 50);
        assert_eq!(session.current_xp, 101_333);
        assert_eq!(session.target_level, 51);
        assert_eq!(session.target_xp, 111_945);
    }

    #[test]
    fn test_refresh_from_client() {
        let mut session = PlannerSession::default();
        let live = FakeClient {
            skill: Some(SkillSnapshot { level: 70, xp: 737_627 }),
            inventory: None,
        };
        let logged_out = FakeClient {
            skill: None,
            inventory: None,
        };

        assert!(session.refresh_from_client(&live));
        assert_eq!(session.current_level, 70);
        assert!(!session.refresh_from_client(&logged_out));
        assert_eq!(session.current_level, 70);
    }

    #[test]
    fn test_apply_hiscore_xp_clamps_unranked() {
        let mut session = PlannerSession::default();

        session.apply_hiscore_xp(-1);
        assert_eq!(session.current_xp, 0);
        assert_eq!(session.current_level, 1);
        assert_eq!(session.target_level, 2);
        assert_eq!(session.target_xp, 83);
    }

    #[test]
    fn test_effective_shards_prefers_positive_override() {
        let mut session = PlannerSession::default();
        assert_eq!(session.effective_shards(), 0);

        session.record_scan(3000);
        assert_eq!(session.effective_shards(), 3000);

        session.set_debug_shard_override(Some(5000));
        assert_eq!(session.effective_shards(), 5000);

        session.set_debug_shard_override(Some(0));
        assert_eq!(session.effective_shards(), 3000);

        session.set_debug_shard_override(None);
        assert_eq!(session.effective_shards(), 3000);
    }

    #[test]
    fn test_resource_plan_ignores_stale_target() {
        let mut session = PlannerSession::default();
        session.set_current_level(50);
        // Target is still the default level 2, below the new current level.

        let plan = session.resource_plan(HashMap::new());
        assert_eq!(plan.target_level, 50);
        assert_eq!(plan.target_xp, 0);
        assert!(calculate_from_resources(&plan).is_ok());
    }
}
