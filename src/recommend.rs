use serde::{Deserialize, Serialize};

use crate::bones::{self, BoneKind};

/// One row of the "which bones close the gap" table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoneRecommendation {
    pub kind: BoneKind,
    pub display_name: String,
    pub shards_per_bone: i64,
    pub quantity_needed: i64,
}

/// Per-kind bone counts that would cover a shard shortfall, best yield
/// first. A non-positive shortfall still lists every kind at quantity zero.
pub fn bone_recommendations(shortfall_shards: i64) -> Vec<BoneRecommendation> {
    let mut rows: Vec<BoneRecommendation> = bones::consolidated_kinds()
        .into_iter()
        .map(|kind| {
            let shards_per_bone = kind.shard_value();
            let quantity_needed = if shortfall_shards > 0 {
                // Signed div_ceil is unstable; shortfall and shard values
                // are positive here, so the unsigned round-trip is lossless.
                (shortfall_shards as u64).div_ceil(shards_per_bone as u64) as i64
            } else {
                0
            };
            BoneRecommendation {
                kind,
                display_name: kind.display_name(),
                shards_per_bone,
                quantity_needed,
            }
        })
        .collect();

    // Stable sort keeps equal-yield kinds in listing order.
    rows.sort_by(|a, b| b.shards_per_bone.cmp(&a.shards_per_bone));
    rows
}
