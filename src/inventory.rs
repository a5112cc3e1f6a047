use std::collections::HashMap;

use crate::bones::{self, BoneKind};
use crate::client::{GameClient, ItemStack};
use crate::error::CalcError;

/// Collapse raw container slots into per-kind bone counts.
///
/// Noted and unnoted stacks of the same bone land on one key, and every
/// unblessed kind is counted as its blessed form.
pub fn aggregate(items: &[ItemStack]) -> HashMap<BoneKind, i64> {
    let mut bones = HashMap::new();
    for item in items {
        // Empty slots carry id -1.
        if item.id <= 0 {
            continue;
        }
        if let Some(kind) = bones::kind_for_item(item.id) {
            let kind = bones::consolidate(kind);
            *bones.entry(kind).or_insert(0) += item.quantity as i64;
        }
    }
    bones
}

/// Total shard yield of a bone map.
pub fn total_shards(bones: &HashMap<BoneKind, i64>) -> Result<i64, CalcError> {
    let mut total: i64 = 0;
    for (kind, quantity) in bones {
        let shards = quantity
            .checked_mul(kind.shard_value())
            .ok_or(CalcError::Overflow)?;
        total = total.checked_add(shards).ok_or(CalcError::Overflow)?;
    }
    Ok(total)
}

/// Read and aggregate the live inventory, if the client has one to show.
pub fn scan_inventory(client: &dyn GameClient) -> Option<HashMap<BoneKind, i64>> {
    client.inventory_snapshot().map(|items| aggregate(&items))
}
