use std::collections::HashMap;

use crate::bones::BoneKind;
use crate::client::{GameClient, ItemStack, SkillSnapshot};
use crate::prayer::xp_table;
use crate::prayer::PrayerPlan;

pub fn item(id: i32, quantity: i32) -> ItemStack {
    ItemStack { id, quantity }
}

pub fn bone_map(entries: &[(BoneKind, i64)]) -> HashMap<BoneKind, i64> {
    entries.iter().copied().collect()
}

/// XP threshold of a level, for building plans at exact level boundaries.
pub fn xp_at(level: i32) -> i64 {
    xp_table::xp_for_level(level).unwrap()
}

/// A plan sitting exactly at the given XP with a level goal and no bones.
pub fn plan_at(current_xp: i64, target_level: i32) -> PrayerPlan {
    PrayerPlan {
        current_xp,
        current_level: xp_table::level_for_xp(current_xp),
        target_level,
        ..PrayerPlan::default()
    }
}

/// Canned client for session and scanner tests.
pub struct FakeClient {
    pub skill: Option<SkillSnapshot>,
    pub inventory: Option<Vec<ItemStack>>,
}

impl GameClient for FakeClient {
    fn skill_snapshot(&self) -> Option<SkillSnapshot> {
        self.skill
    }

    fn inventory_snapshot(&self) -> Option<Vec<ItemStack>> {
        self.inventory.clone()
    }
}
