use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

/// Every bone that can be converted into blessed bone shards, plus the
/// shard item itself and the statuette variations handed out at the altar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BoneKind {
    BlessedBoneShards,
    BlessedBoneStatuette0,
    BlessedBoneStatuette1,
    BlessedBoneStatuette2,
    BlessedBoneStatuette3,
    BlessedBoneStatuette4,
    SuperiorDragonBones,
    OurgBones,
    DagannothBones,
    HydraBones,
    RaurgBones,
    LavaDragonBones,
    DrakeBones,
    FayrgBones,
    DragonBones,
    WyvernBones,
    SunKissedBones,
    WyrmBones,
    BabydragonBones,
    BabywyrmBones,
    // Same drop as babywyrm bones under a second in-game name.
    WyrmlingBones,
    ZogreBones,
    BigBones,
    BatBones,
    Bones,
    BlessedBones,
    BlessedBatBones,
    BlessedBigBones,
    BlessedBabydragonBones,
    BlessedDragonBones,
    BlessedWyvernBones,
    BlessedDrakeBones,
    BlessedFayrgBones,
    BlessedLavaDragonBones,
    BlessedRaurgBones,
    BlessedDagannothBones,
    BlessedOurgBones,
    BlessedSuperiorDragonBones,
    BlessedBabywyrmBones,
    BlessedWyrmBones,
    BlessedHydraBones,
    BlessedZogreBones,
}

impl BoneKind {
    /// Blessed bone shards yielded by one unit of this kind.
    pub fn shard_value(self) -> i64 {
        match self {
            BoneKind::BlessedBoneShards => 1,
            BoneKind::BlessedBoneStatuette0 => 125,
            BoneKind::BlessedBoneStatuette1 => 125,
            BoneKind::BlessedBoneStatuette2 => 125,
            BoneKind::BlessedBoneStatuette3 => 125,
            BoneKind::BlessedBoneStatuette4 => 125,
            BoneKind::SuperiorDragonBones => 121,
            BoneKind::OurgBones => 115,
            BoneKind::DagannothBones => 100,
            BoneKind::HydraBones => 93,
            BoneKind::RaurgBones => 77,
            BoneKind::LavaDragonBones => 68,
            BoneKind::DrakeBones => 67,
            BoneKind::FayrgBones => 67,
            BoneKind::DragonBones => 58,
            BoneKind::WyvernBones => 58,
            BoneKind::SunKissedBones => 45,
            BoneKind::WyrmBones => 42,
            BoneKind::BabydragonBones => 24,
            BoneKind::BabywyrmBones => 21,
            BoneKind::WyrmlingBones => 21,
            BoneKind::ZogreBones => 18,
            BoneKind::BigBones => 12,
            BoneKind::BatBones => 5,
            BoneKind::Bones => 4,
            BoneKind::BlessedBones => 4,
            BoneKind::BlessedBatBones => 5,
            BoneKind::BlessedBigBones => 12,
            BoneKind::BlessedBabydragonBones => 24,
            BoneKind::BlessedDragonBones => 58,
            BoneKind::BlessedWyvernBones => 58,
            BoneKind::BlessedDrakeBones => 67,
            BoneKind::BlessedFayrgBones => 67,
            BoneKind::BlessedLavaDragonBones => 68,
            BoneKind::BlessedRaurgBones => 77,
            BoneKind::BlessedDagannothBones => 100,
            BoneKind::BlessedOurgBones => 115,
            BoneKind::BlessedSuperiorDragonBones => 121,
            BoneKind::BlessedBabywyrmBones => 21,
            BoneKind::BlessedWyrmBones => 42,
            BoneKind::BlessedHydraBones => 93,
            BoneKind::BlessedZogreBones => 18,
        }
    }

    /// Host item id of this kind's own inventory form.
    pub fn base_item_id(self) -> i32 {
        match self {
            BoneKind::BlessedBoneShards => 29381,
            BoneKind::BlessedBoneStatuette0 => 29338,
            BoneKind::BlessedBoneStatuette1 => 29339,
            BoneKind::BlessedBoneStatuette2 => 29340,
            BoneKind::BlessedBoneStatuette3 => 29342,
            BoneKind::BlessedBoneStatuette4 => 29343,
            BoneKind::SuperiorDragonBones => 22124,
            BoneKind::OurgBones => 4834,
            BoneKind::DagannothBones => 6729,
            BoneKind::HydraBones => 22786,
            BoneKind::RaurgBones => 4832,
            BoneKind::LavaDragonBones => 11943,
            BoneKind::DrakeBones => 22783,
            BoneKind::FayrgBones => 4830,
            BoneKind::DragonBones => 536,
            BoneKind::WyvernBones => 6812,
            BoneKind::SunKissedBones => 29380,
            BoneKind::WyrmBones => 22780,
            BoneKind::BabydragonBones => 534,
            BoneKind::BabywyrmBones => 28899,
            BoneKind::WyrmlingBones => 28899,
            BoneKind::ZogreBones => 4812,
            BoneKind::BigBones => 532,
            BoneKind::BatBones => 530,
            BoneKind::Bones => 526,
            BoneKind::BlessedBones => 29344,
            BoneKind::BlessedBatBones => 29346,
            BoneKind::BlessedBigBones => 29348,
            BoneKind::BlessedBabydragonBones => 29352,
            BoneKind::BlessedDragonBones => 29356,
            BoneKind::BlessedWyvernBones => 29360,
            BoneKind::BlessedDrakeBones => 29366,
            BoneKind::BlessedFayrgBones => 29370,
            BoneKind::BlessedLavaDragonBones => 29358,
            BoneKind::BlessedRaurgBones => 29372,
            BoneKind::BlessedDagannothBones => 29376,
            BoneKind::BlessedOurgBones => 29374,
            BoneKind::BlessedSuperiorDragonBones => 29362,
            BoneKind::BlessedBabywyrmBones => 29354,
            BoneKind::BlessedWyrmBones => 29364,
            BoneKind::BlessedHydraBones => 29368,
            BoneKind::BlessedZogreBones => 29350,
        }
    }

    /// Whether this is a blessed variant (including the shards and
    /// statuettes). Blessed items have no noted inventory form.
    pub fn is_blessed(self) -> bool {
        self.as_ref().starts_with("BLESSED_")
    }

    /// Label shown in panels. Blessed and unblessed variants of a bone
    /// share the same label.
    pub fn display_name(self) -> String {
        match self {
            BoneKind::BlessedBoneShards => "Bone Shards".to_string(),
            BoneKind::SunKissedBones => "Sun-kissed Bones".to_string(),
            BoneKind::BlessedBoneStatuette0
            | BoneKind::BlessedBoneStatuette1
            | BoneKind::BlessedBoneStatuette2
            | BoneKind::BlessedBoneStatuette3
            | BoneKind::BlessedBoneStatuette4 => "Blessed Bone Statuette".to_string(),
            _ => {
                let spaced = self.as_ref().to_lowercase().replace('_', " ");
                let stripped = spaced.strip_prefix("blessed ").unwrap_or(&spaced);
                title_case(stripped)
            }
        }
    }
}

impl std::str::FromStr for BoneKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_plain::from_str(s).map_err(|_| ())
    }
}

fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
