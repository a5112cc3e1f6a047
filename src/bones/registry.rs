use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use strum::IntoEnumIterator;

use super::BoneKind;

lazy_static! {
    static ref ITEM_TO_KIND: HashMap<i32, BoneKind> = build_item_lookup();
    static ref CONSOLIDATION: HashMap<BoneKind, BoneKind> = build_consolidation();
}

fn build_item_lookup() -> HashMap<i32, BoneKind> {
    let mut map = HashMap::new();
    for kind in BoneKind::iter() {
        // Kinds without an inventory form carry a non-positive id and are
        // never lookup keys.
        let base_id = kind.base_item_id();
        if base_id <= 0 {
            continue;
        }
        map.insert(base_id, kind);
        // The noted form sits one id above the base item. Blessed items do
        // not note, and sun-kissed bones' would-be noted id (29381) is the
        // shard item itself.
        if !kind.is_blessed() && kind != BoneKind::SunKissedBones {
            map.insert(base_id + 1, kind);
        }
    }
    map
}

fn build_consolidation() -> HashMap<BoneKind, BoneKind> {
    use BoneKind::*;

    let mut map = HashMap::new();
    map.insert(Bones, BlessedBones);
    map.insert(BatBones, BlessedBatBones);
    map.insert(BigBones, BlessedBigBones);
    map.insert(BabydragonBones, BlessedBabydragonBones);
    map.insert(DragonBones, BlessedDragonBones);
    map.insert(WyvernBones, BlessedWyvernBones);
    map.insert(DrakeBones, BlessedDrakeBones);
    map.insert(FayrgBones, BlessedFayrgBones);
    map.insert(LavaDragonBones, BlessedLavaDragonBones);
    map.insert(RaurgBones, BlessedRaurgBones);
    map.insert(DagannothBones, BlessedDagannothBones);
    map.insert(OurgBones, BlessedOurgBones);
    map.insert(SuperiorDragonBones, BlessedSuperiorDragonBones);
    map.insert(BabywyrmBones, BlessedBabywyrmBones);
    map.insert(WyrmlingBones, BlessedBabywyrmBones);
    map.insert(WyrmBones, BlessedWyrmBones);
    map.insert(HydraBones, BlessedHydraBones);
    map.insert(ZogreBones, BlessedZogreBones);
    // Statuette variations collapse onto the base statuette.
    map.insert(BlessedBoneStatuette1, BlessedBoneStatuette0);
    map.insert(BlessedBoneStatuette2, BlessedBoneStatuette0);
    map.insert(BlessedBoneStatuette3, BlessedBoneStatuette0);
    map.insert(BlessedBoneStatuette4, BlessedBoneStatuette0);
    map
}

/// Bone kind for a host item id, covering base and noted forms.
pub fn kind_for_item(item_id: i32) -> Option<BoneKind> {
    ITEM_TO_KIND.get(&item_id).copied()
}

pub fn is_bone_item(item_id: i32) -> bool {
    ITEM_TO_KIND.contains_key(&item_id)
}

/// Canonical kind used for aggregation and display. Kinds without an entry
/// in the consolidation map stand for themselves.
pub fn consolidate(kind: BoneKind) -> BoneKind {
    CONSOLIDATION.get(&kind).copied().unwrap_or(kind)
}

/// Canonical kinds in declaration order, the shard item itself excluded.
/// This is the listing behind recommendations and reference tables.
pub fn consolidated_kinds() -> Vec<BoneKind> {
    let mut seen = HashSet::new();
    let mut kinds = Vec::new();
    for kind in BoneKind::iter() {
        if kind == BoneKind::BlessedBoneShards {
            continue;
        }
        let canonical = consolidate(kind);
        if seen.insert(canonical) {
            kinds.push(canonical);
        }
    }
    kinds
}
