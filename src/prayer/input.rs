use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::bones::BoneKind;
use crate::error::CalcError;
use crate::inventory;

pub const REGULAR_WINE_XP_PER_SHARD: f64 = 5.0;
pub const SUNFIRE_WINE_XP_PER_SHARD: f64 = 6.0;
pub const ZEALOT_ROBES_MULTIPLIER: f64 = 1.05;

/// Input snapshot for one calculation, built fresh per request from the
/// planner session and the scanned inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrayerPlan {
    pub current_xp: i64,
    pub current_level: i32,
    pub target_level: i32,
    /// 0 means unset; the target level decides the goal instead.
    pub target_xp: i64,
    pub use_sunfire_wine: bool,
    pub use_zealot_robes: bool,
    pub available_bones: HashMap<BoneKind, i64>,
}

impl Default for PrayerPlan {
    fn default() -> Self {
        Self {
            current_xp: 0,
            current_level: 1,
            target_level: 2,
            target_xp: 0,
            use_sunfire_wine: false,
            use_zealot_robes: false,
            available_bones: HashMap::new(),
        }
    }
}

impl PrayerPlan {
    /// XP granted per shard under the current toggles.
    pub fn xp_per_shard(&self) -> f64 {
        let base = if self.use_sunfire_wine {
            SUNFIRE_WINE_XP_PER_SHARD
        } else {
            REGULAR_WINE_XP_PER_SHARD
        };
        if self.use_zealot_robes {
            base * ZEALOT_ROBES_MULTIPLIER
        } else {
            base
        }
    }

    /// Shard yield of the available bones, checked against overflow.
    pub fn total_available_shards(&self) -> Result<i64, CalcError> {
        inventory::total_shards(&self.available_bones)
    }
}
