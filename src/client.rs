use serde::{Deserialize, Serialize};

/// Container id of the player's backpack inventory.
pub const INVENTORY_CONTAINER_ID: i32 = 93;

/// One slot of an item container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub id: i32,
    pub quantity: i32,
}

/// A skill reading taken from the client at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSnapshot {
    pub level: i32,
    pub xp: i64,
}

/// Read access to the live game client.
///
/// `None` means the data is not available right now (logged out, still
/// loading). Callers must not substitute defaults for a missing reading.
pub trait GameClient {
    fn skill_snapshot(&self) -> Option<SkillSnapshot>;
    fn inventory_snapshot(&self) -> Option<Vec<ItemStack>>;
}
