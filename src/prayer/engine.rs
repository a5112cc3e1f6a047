use crate::error::CalcError;
use crate::prayer::input::PrayerPlan;
use crate::prayer::result::CalculationResult;
use crate::prayer::xp_table::{self, MAX_PRAYER_LEVEL, MAX_PRAYER_XP, MIN_PRAYER_LEVEL};

/// One blessed wine consumes this many shards.
pub const SHARDS_PER_WINE: i64 = 400;

/// Goal mode: how much is still missing to reach the target.
///
/// The target XP field wins over the target level when set. The achievable
/// level is recomputed from the available pool on the side, so the panel
/// can show what the current inventory covers regardless of the goal.
pub fn calculate_for_target(plan: &PrayerPlan) -> Result<CalculationResult, CalcError> {
    validate(plan)?;

    let rate = plan.xp_per_shard();

    // 1. Resolve the goal XP.
    let target_xp = if plan.target_xp > 0 {
        plan.target_xp
    } else {
        xp_table::xp_for_level(plan.target_level)?
    };
    let required_xp = target_xp - plan.current_xp;

    let goal_already_achieved = if plan.target_xp > 0 {
        plan.current_xp >= plan.target_xp
    } else {
        plan.current_level >= plan.target_level
    };

    // 2. Shards for the goal. Ceiling, so the goal is never under-reported.
    let required_shards = if goal_already_achieved {
        0
    } else {
        required_shards_for_xp(required_xp, rate)
    };

    // 3. What the inventory on hand could reach.
    let total_available_shards = plan.total_available_shards()?;
    let achievable_level = achievable_level_from_xp(plan.current_xp, total_available_shards, rate);

    Ok(CalculationResult {
        required_shards,
        achievable_level,
        total_available_shards,
        bone_breakdown: plan.available_bones.clone(),
        remaining_xp: if goal_already_achieved { 0 } else { required_xp },
        total_xp_gain: if goal_already_achieved { 0 } else { required_xp },
        has_enough_resources: total_available_shards >= required_shards,
        xp_per_shard: rate.round() as i32,
        goal_already_achieved,
        wines_needed: wines_needed(required_shards),
    })
}

/// Resource mode: how far the bones on hand can go from the current XP.
pub fn calculate_from_resources(plan: &PrayerPlan) -> Result<CalculationResult, CalcError> {
    validate(plan)?;

    let rate = plan.xp_per_shard();
    let total_available_shards = plan.total_available_shards()?;

    let achievable_level = achievable_level_from_xp(plan.current_xp, total_available_shards, rate);

    // Displayed gain is the raw product; the table only decides the level.
    let total_xp_gain = xp_gain_from_shards(total_available_shards, rate)?;

    // Shortfall to the next level when the pool cannot level up at all.
    // Level 126 has no next level to fall short of.
    let mut remaining_xp = 0;
    if achievable_level == plan.current_level && plan.current_level < MAX_PRAYER_LEVEL {
        let next_level_xp = xp_table::xp_for_level(plan.current_level + 1)?;
        let available_xp = total_available_shards as f64 * rate;
        remaining_xp = ((next_level_xp - plan.current_xp) as f64 - available_xp).max(0.0) as i64;
    }

    Ok(CalculationResult {
        required_shards: 0,
        achievable_level,
        total_available_shards,
        bone_breakdown: plan.available_bones.clone(),
        remaining_xp,
        total_xp_gain,
        has_enough_resources: true,
        xp_per_shard: rate.round() as i32,
        goal_already_achieved: false,
        wines_needed: wines_needed(total_available_shards),
    })
}

/// Shards needed to cover an XP amount at the given rate, rounded up.
pub fn required_shards_for_xp(required_xp: i64, rate: f64) -> i64 {
    if required_xp <= 0 {
        return 0;
    }
    (required_xp as f64 / rate).ceil() as i64
}

/// Level reachable by fully spending a shard pool on top of the current XP.
/// The gained XP is floored before the lookup; fractional XP does not exist.
pub fn achievable_level_from_xp(current_xp: i64, available_shards: i64, rate: f64) -> i32 {
    if available_shards <= 0 {
        return xp_table::level_for_xp(current_xp);
    }
    let total_xp = current_xp as f64 + (available_shards as f64 * rate).floor();
    if total_xp >= MAX_PRAYER_XP as f64 {
        return MAX_PRAYER_LEVEL;
    }
    xp_table::level_for_xp(total_xp as i64)
}

/// XP a shard pool grants at the given rate, rounded half-up for display.
pub fn xp_gain_from_shards(shards: i64, rate: f64) -> Result<i64, CalcError> {
    if shards <= 0 {
        return Ok(0);
    }
    let gain = (shards as f64 * rate).round();
    if gain >= i64::MAX as f64 {
        return Err(CalcError::Overflow);
    }
    Ok(gain as i64)
}

/// Shards missing to reach the level after the one the XP sits in. Zero at
/// the level cap.
pub fn shards_for_next_level(current_xp: i64, rate: f64) -> Result<i64, CalcError> {
    let current_level = xp_table::level_for_xp(current_xp);
    if current_level >= MAX_PRAYER_LEVEL {
        return Ok(0);
    }
    let next_level_xp = xp_table::xp_for_level(current_level + 1)?;
    Ok(required_shards_for_xp(next_level_xp - current_xp, rate))
}

/// Wines that a shard count fills, rounded up.
pub fn wines_needed(total_shards: i64) -> i64 {
    if total_shards <= 0 {
        return 0;
    }
    // Signed div_ceil is unstable; both operands are positive here, so the
    // unsigned round-trip is lossless.
    (total_shards as u64).div_ceil(SHARDS_PER_WINE as u64) as i64
}

fn validate(plan: &PrayerPlan) -> Result<(), CalcError> {
    if plan.current_level < MIN_PRAYER_LEVEL || plan.current_level > MAX_PRAYER_LEVEL {
        return Err(CalcError::InvalidInput(format!(
            "invalid current prayer level: {}",
            plan.current_level
        )));
    }

    if plan.target_xp <= 0 {
        if plan.target_level < MIN_PRAYER_LEVEL || plan.target_level > MAX_PRAYER_LEVEL {
            return Err(CalcError::InvalidInput(format!(
                "invalid target prayer level: {}",
                plan.target_level
            )));
        }
        if plan.target_level < plan.current_level {
            return Err(CalcError::InvalidInput(
                "target level cannot be lower than current level".to_string(),
            ));
        }
    } else {
        // An explicit target XP may sit past the level cap, so only the
        // lower level bound applies here.
        if plan.target_level < MIN_PRAYER_LEVEL {
            return Err(CalcError::InvalidInput(format!(
                "invalid target prayer level: {}",
                plan.target_level
            )));
        }
        if plan.target_xp < plan.current_xp {
            return Err(CalcError::InvalidInput(
                "target XP cannot be lower than current XP".to_string(),
            ));
        }
        if plan.target_xp > MAX_PRAYER_XP {
            return Err(CalcError::InvalidInput(
                "target XP exceeds the maximum prayer XP".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bones::BoneKind;
    use crate::testdata::fixtures;

    #[test]
    fn test_level_one_to_two_needs_seventeen_shards() {
        let plan = PrayerPlan::default();
        let result = calculate_for_target(&plan).unwrap();

        assert_eq!(result.required_shards, 17);
        assert_eq!(result.remaining_xp, 83);
        assert_eq!(result.total_xp_gain, 83);
        assert_eq!(result.xp_per_shard, 5);
        assert_eq!(result.wines_needed, 1);
        assert!(!result.goal_already_achieved);
        assert!(!result.has_enough_resources);
    }

    #[test]
    fn test_required_shards_use_ceiling() {
        let plan = PrayerPlan {
            target_xp: 101,
            ..PrayerPlan::default()
        };
        let result = calculate_for_target(&plan).unwrap();

        assert_eq!(result.required_shards, 21);
        assert_eq!(result.remaining_xp, 101);
    }

    #[test]
    fn test_target_xp_wins_over_target_level() {
        let plan = PrayerPlan {
            target_level: 2,
            target_xp: 1000,
            ..PrayerPlan::default()
        };
        let result = calculate_for_target(&plan).unwrap();

        assert_eq!(result.required_shards, 200);
    }

    #[test]
    fn test_goal_achieved_at_same_level() {
        let plan = fixtures::plan_at(fixtures::xp_at(50), 50);
        let result = calculate_for_target(&plan).unwrap();

        assert!(result.goal_already_achieved);
        assert_eq!(result.required_shards, 0);
        assert_eq!(result.remaining_xp, 0);
        assert_eq!(result.total_xp_gain, 0);
        assert_eq!(result.wines_needed, 0);
        assert_eq!(result.achievable_level, 50);
    }

    #[test]
    fn test_goal_achieved_by_exact_target_xp() {
        let plan = PrayerPlan {
            current_xp: 1000,
            current_level: 9,
            target_xp: 1000,
            ..PrayerPlan::default()
        };
        let result = calculate_for_target(&plan).unwrap();

        assert!(result.goal_already_achieved);
        assert_eq!(result.required_shards, 0);
    }

    #[test]
    fn test_goal_mode_reports_pool_coverage() {
        // 15 blessed bones cover 60 shards of the 17 needed for level 2.
        let plan = PrayerPlan {
            available_bones: fixtures::bone_map(&[(BoneKind::BlessedBones, 15)]),
            ..PrayerPlan::default()
        };
        let result = calculate_for_target(&plan).unwrap();

        assert_eq!(result.total_available_shards, 60);
        assert!(result.has_enough_resources);
        assert_eq!(result.excess_shards(), 43);
        assert_eq!(result.bone_breakdown.len(), 1);
    }

    #[test]
    fn test_target_below_current_level_is_rejected() {
        let plan = fixtures::plan_at(fixtures::xp_at(50), 49);
        let err = calculate_for_target(&plan).unwrap_err();

        assert!(matches!(err, CalcError::InvalidInput(_)));
        assert!(err.to_string().contains("lower than current level"));
    }

    #[test]
    fn test_invalid_current_level_is_rejected() {
        let plan = PrayerPlan {
            current_level: 0,
            ..PrayerPlan::default()
        };
        assert!(matches!(
            calculate_for_target(&plan),
            Err(CalcError::InvalidInput(_))
        ));

        let plan = PrayerPlan {
            current_level: 127,
            ..PrayerPlan::default()
        };
        assert!(matches!(
            calculate_from_resources(&plan),
            Err(CalcError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_target_xp_above_cap_is_rejected() {
        let plan = PrayerPlan {
            target_xp: 200_000_001,
            ..PrayerPlan::default()
        };
        assert!(matches!(
            calculate_for_target(&plan),
            Err(CalcError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_sunfire_zealot_pool_floors_before_lookup() {
        // 8 statuettes are 1000 shards; at 6.3 XP per shard that is 6300 XP,
        // which lands inside level 23's bracket (6291..7028).
        let plan = PrayerPlan {
            use_sunfire_wine: true,
            use_zealot_robes: true,
            available_bones: fixtures::bone_map(&[(BoneKind::BlessedBoneStatuette0, 8)]),
            ..PrayerPlan::default()
        };
        let result = calculate_from_resources(&plan).unwrap();

        assert_eq!(result.total_available_shards, 1000);
        assert_eq!(result.total_xp_gain, 6300);
        assert_eq!(result.achievable_level, 23);
        assert_eq!(result.xp_per_shard, 6);
        assert_eq!(result.wines_needed, 3);
        assert!(!result.goal_already_achieved);
    }

    #[test]
    fn test_resource_mode_shortfall_to_next_level() {
        // One blessed bone is 4 shards, 20 XP at the regular rate; 63 XP
        // short of level 2.
        let plan = PrayerPlan {
            available_bones: fixtures::bone_map(&[(BoneKind::BlessedBones, 1)]),
            ..PrayerPlan::default()
        };
        let result = calculate_from_resources(&plan).unwrap();

        assert_eq!(result.achievable_level, 1);
        assert_eq!(result.total_xp_gain, 20);
        assert_eq!(result.remaining_xp, 63);
        assert_eq!(result.wines_needed, 1);
    }

    #[test]
    fn test_resource_mode_at_level_cap() {
        let plan = PrayerPlan {
            current_xp: 200_000_000,
            current_level: 126,
            target_level: 126,
            available_bones: fixtures::bone_map(&[(BoneKind::BlessedBones, 3)]),
            ..PrayerPlan::default()
        };
        let result = calculate_from_resources(&plan).unwrap();

        assert_eq!(result.achievable_level, 126);
        assert_eq!(result.remaining_xp, 0);
    }

    #[test]
    fn test_overflow_is_reported_not_wrapped() {
        let plan = PrayerPlan {
            available_bones: fixtures::bone_map(&[(
                BoneKind::BlessedBoneStatuette0,
                i64::MAX / 100,
            )]),
            ..PrayerPlan::default()
        };
        assert_eq!(
            calculate_from_resources(&plan).unwrap_err(),
            CalcError::Overflow
        );
        assert_eq!(
            calculate_for_target(&plan).unwrap_err(),
            CalcError::Overflow
        );
    }

    #[test]
    fn test_wines_needed_is_a_ceiling() {
        assert_eq!(wines_needed(0), 0);
        assert_eq!(wines_needed(400), 1);
        assert_eq!(wines_needed(800), 2);
        assert_eq!(wines_needed(801), 3);
    }

    #[test]
    fn test_required_shards_for_xp_handles_non_positive_xp() {
        assert_eq!(required_shards_for_xp(0, 5.0), 0);
        assert_eq!(required_shards_for_xp(-50, 5.0), 0);
        assert_eq!(required_shards_for_xp(1, 5.0), 1);
    }

    #[test]
    fn test_shards_for_next_level() {
        assert_eq!(shards_for_next_level(0, 5.0), Ok(17));
        assert_eq!(shards_for_next_level(82, 5.0), Ok(1));
        assert_eq!(shards_for_next_level(200_000_000, 5.0), Ok(0));
    }

    #[test]
    fn test_achievable_level_with_empty_pool_is_current() {
        assert_eq!(achievable_level_from_xp(fixtures::xp_at(40), 0, 5.0), 40);
        assert_eq!(achievable_level_from_xp(0, -5, 5.0), 1);
    }

    #[test]
    fn test_achievable_level_caps_at_max() {
        assert_eq!(achievable_level_from_xp(0, i64::MAX / 8, 6.3), 126);
    }
}
