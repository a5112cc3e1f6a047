use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::bones::BoneKind;

/// Output of one engine call. Plain values only; panels consume it and
/// throw it away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    pub required_shards: i64,
    /// Level the available pool could reach, independent of the goal.
    pub achievable_level: i32,
    pub total_available_shards: i64,
    pub bone_breakdown: HashMap<BoneKind, i64>,
    pub remaining_xp: i64,
    pub total_xp_gain: i64,
    pub has_enough_resources: bool,
    /// Rounded rate for display; exact rate math stays in the engine.
    pub xp_per_shard: i32,
    pub goal_already_achieved: bool,
    pub wines_needed: i64,
}

impl CalculationResult {
    pub fn shard_shortage(&self) -> i64 {
        (self.required_shards - self.total_available_shards).max(0)
    }

    pub fn excess_shards(&self) -> i64 {
        (self.total_available_shards - self.required_shards).max(0)
    }

    /// A result is displayable when it carries an achievable level and at
    /// least one shard figure.
    pub fn is_valid(&self) -> bool {
        self.achievable_level > 0 && (self.required_shards > 0 || self.total_available_shards > 0)
    }
}
