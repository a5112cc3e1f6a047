use crate::error::CalcError;

pub const MIN_PRAYER_LEVEL: i32 = 1;
pub const MAX_PRAYER_LEVEL: i32 = 126;
pub const MAX_PRAYER_XP: i64 = 200_000_000;

// Cumulative XP thresholds for levels 1-126. The final entry is the game's
// XP cap, reached well past the natural level curve.
#[rustfmt::skip]
const XP_TABLE: [i64; 126] = [
    0, 83, 174, 276, 388, 512, 650,
    801, 969, 1154, 1358, 1584, 1833, 2107,
    2411, 2746, 3115, 3523, 3973, 4470, 5018,
    5624, 6291, 7028, 7842, 8740, 9730, 10824,
    12031, 13363, 14833, 16456, 18247, 20224, 22406,
    24815, 27473, 30408, 33648, 37224, 41171, 45529,
    50339, 55649, 61512, 67983, 75127, 83014, 91721,
    101333, 111945, 123660, 136594, 150872, 166636, 184040,
    203254, 224466, 247886, 273742, 302288, 333804, 368599,
    407015, 449428, 496254, 547953, 605032, 668051, 737627,
    814445, 899257, 992895, 1096278, 1210421, 1336443, 1475581,
    1629200, 1798808, 1986068, 2192818, 2421087, 2673114, 2951373,
    3258594, 3597792, 3972294, 4385776, 4842295, 5346332, 5902831,
    6517253, 7195629, 7944614, 8771558, 9684577, 10692629, 11805606,
    13034431, 14391160, 15889109, 17542976, 19368992, 21385073, 23611006,
    26068632, 28782069, 31777943, 35085654, 38737661, 42769801, 47221641,
    52136869, 57563718, 63555443, 70170840, 77474828, 85539082, 94442737,
    104273167, 115126838, 127110260, 140341028, 154948977, 171077457, 200000000,
];

/// Cumulative XP required for a prayer level.
pub fn xp_for_level(level: i32) -> Result<i64, CalcError> {
    if !(MIN_PRAYER_LEVEL..=MAX_PRAYER_LEVEL).contains(&level) {
        return Err(CalcError::LevelOutOfRange(level));
    }
    Ok(XP_TABLE[(level - 1) as usize])
}

/// Highest level whose threshold the given XP meets. Negative XP clamps to
/// level 1 rather than erroring, matching how raw client readings behave.
pub fn level_for_xp(xp: i64) -> i32 {
    if xp < 0 {
        return MIN_PRAYER_LEVEL;
    }
    for level in (MIN_PRAYER_LEVEL..=MAX_PRAYER_LEVEL).rev() {
        if xp >= XP_TABLE[(level - 1) as usize] {
            return level;
        }
    }
    MIN_PRAYER_LEVEL
}

/// XP between two levels; negative when `to_level` is below `from_level`.
pub fn xp_difference(from_level: i32, to_level: i32) -> Result<i64, CalcError> {
    Ok(xp_for_level(to_level)? - xp_for_level(from_level)?)
}
